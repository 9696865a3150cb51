// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces and the event dispatcher.
//!
//! The bar consumes three collaborators, all owned by the host:
//!
//! - [`IndexDataSource`]: supplies the index count and per-index label
//!   strings, and optionally receives selection notifications.
//! - [`SectionList`]: the paired list view, exposing its content bounds and
//!   accepting scroll-to-section requests.
//! - [`BarRenderer`]: the painting pipeline, told when the layout changes
//!   and when the transient background should show or hide.
//!
//! Touch input is the fourth collaboration, but it needs no trait: the
//! host's gesture layer calls [`IndexBar::touch_began`] and friends
//! directly, synchronously, once per event, in delivery order.
//!
//! [`IndexBar::touch_began`]: crate::IndexBar::touch_began

use alloc::string::String;

use kurbo::Rect;

use handrail_layout::SlotLayout;

use crate::bar::{IndexBar, IndexBarEvent};
use crate::chrome::BarChrome;
use crate::style::IndexBarStyle;

/// Supplies the labels shown in the index bar.
pub trait IndexDataSource {
    /// Number of indexes to display.
    fn number_of_indexes(&self) -> usize;

    /// The string to display at `index`.
    ///
    /// `index` is in `0..number_of_indexes()`.
    fn string_for_index(&self, index: usize) -> String;

    /// Notifies that the user scrubbed to `index`. Optional; the default
    /// does nothing.
    fn did_select_index(&mut self, _index: usize) {}
}

/// The paired, scrollable list view.
pub trait SectionList {
    /// The list's current content bounds, in the shared coordinate space.
    fn content_bounds(&self) -> Rect;

    /// Scrolls the list so `section` is visible.
    fn scroll_to_section(&mut self, section: usize);
}

/// The painting collaborator.
pub trait BarRenderer {
    /// The slot layout was replaced; repaint from `layout` and `style`.
    fn layout_changed(&mut self, layout: &SlotLayout, style: &IndexBarStyle);

    /// Show or hide the transient background strip.
    fn set_background_visible(&mut self, visible: bool);
}

/// Applies an event sequence to the collaborators.
///
/// Events are applied in order, once each. Hosts with bespoke routing can
/// match on [`IndexBarEvent`] themselves instead; this helper is the plain
/// wiring most of them want.
///
/// ## Minimal example
///
/// ```rust
/// use handrail_widget::{
///     BarRenderer, IndexBar, IndexBarStyle, IndexDataSource, SectionList, SlotLayout,
///     UniformLineHeight, dispatch,
/// };
/// use kurbo::{Point, Rect};
///
/// struct Contacts;
///
/// impl IndexDataSource for Contacts {
///     fn number_of_indexes(&self) -> usize {
///         4
///     }
///     fn string_for_index(&self, index: usize) -> String {
///         char::from(b'A' + index as u8).to_string()
///     }
/// }
///
/// struct List(Vec<usize>);
///
/// impl SectionList for List {
///     fn content_bounds(&self) -> Rect {
///         Rect::new(0.0, 0.0, 320.0, 480.0)
///     }
///     fn scroll_to_section(&mut self, section: usize) {
///         self.0.push(section);
///     }
/// }
///
/// struct Painter;
///
/// impl BarRenderer for Painter {
///     fn layout_changed(&mut self, _layout: &SlotLayout, _style: &IndexBarStyle) {}
///     fn set_background_visible(&mut self, _visible: bool) {}
/// }
///
/// let mut contacts = Contacts;
/// let mut list = List(Vec::new());
/// let mut painter = Painter;
///
/// let mut bar = IndexBar::new(IndexBarStyle::default());
/// bar.sync_bounds(&list);
/// let events = bar.reload(&contacts, &UniformLineHeight::default());
/// dispatch(&bar, &events, &mut contacts, &mut list, &mut painter);
///
/// let events = bar.touch_began(Point::new(300.0, 0.0));
/// dispatch(&bar, &events, &mut contacts, &mut list, &mut painter);
/// assert_eq!(list.0, [0]);
/// ```
pub fn dispatch<C: BarChrome>(
    bar: &IndexBar<C>,
    events: &[IndexBarEvent],
    source: &mut dyn IndexDataSource,
    list: &mut dyn SectionList,
    renderer: &mut dyn BarRenderer,
) {
    for event in events {
        match *event {
            IndexBarEvent::SelectionChanged(section) => source.did_select_index(section),
            IndexBarEvent::ScrollToSection(section) => list.scroll_to_section(section),
            IndexBarEvent::BackgroundShown => renderer.set_background_visible(true),
            IndexBarEvent::BackgroundHidden => renderer.set_background_visible(false),
            IndexBarEvent::LayoutChanged => renderer.layout_changed(bar.layout(), bar.style()),
        }
    }
}
