// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The index bar controller: cached layout, touch state, and event
//! production.

use alloc::rc::Rc;

use kurbo::{Point, Rect, RoundedRect};
use smallvec::SmallVec;

use handrail_layout::{LayoutParams, MeasuredLabels, SlotLayout, compute_layout};

use crate::chrome::{BarChrome, DefaultChrome};
use crate::collab::{IndexDataSource, SectionList};
use crate::metrics::LabelMetrics;
use crate::style::IndexBarStyle;

/// An outward effect produced by a controller operation.
///
/// The controller never calls its collaborators directly; operations return
/// the effects they caused and the host applies them, either by hand or via
/// [`dispatch`](crate::collab::dispatch). This keeps delivery order explicit
/// and exactly-once per input event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IndexBarEvent {
    /// The scrubbed-to section changed. Fired once per distinct section,
    /// not once per pixel of movement.
    SelectionChanged(usize),
    /// The paired list should scroll to this section.
    ScrollToSection(usize),
    /// The transient background strip should become visible.
    BackgroundShown,
    /// The transient background strip should be hidden.
    BackgroundHidden,
    /// The cached slot layout was replaced; renderers should repaint.
    LayoutChanged,
}

/// Event sequence returned by controller operations.
///
/// Inline capacity covers the largest sequence a single operation emits.
pub type Events = SmallVec<[IndexBarEvent; 4]>;

/// Transient state of an in-flight scrub gesture.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
struct TouchState {
    active: bool,
    last_section: Option<usize>,
}

/// The index bar controller.
///
/// Owns the style, the measured label strip, the cached [`SlotLayout`], and
/// the in-flight touch state. Collaborators (data source, paired list,
/// renderer, measurement) stay outside; operations take the ones they need
/// and return [`Events`] for the host to apply.
///
/// The cached layout is replaced wholesale (a single reference swap) on
/// every reload, resize, or style change, so an observer between two
/// operations only ever sees one fully formed layout.
///
/// ## Minimal example
///
/// ```rust
/// use handrail_widget::{
///     IndexBar, IndexBarEvent, IndexBarStyle, IndexDataSource, UniformLineHeight,
/// };
/// use kurbo::{Point, Rect};
///
/// struct Contacts;
///
/// impl IndexDataSource for Contacts {
///     fn number_of_indexes(&self) -> usize {
///         26
///     }
///     fn string_for_index(&self, index: usize) -> String {
///         char::from(b'A' + index as u8).to_string()
///     }
/// }
///
/// let mut bar = IndexBar::new(IndexBarStyle::default());
/// bar.set_bounds(Rect::new(0.0, 0.0, 320.0, 480.0));
/// bar.reload(&Contacts, &UniformLineHeight::default());
///
/// let events = bar.touch_began(Point::new(300.0, 0.0));
/// assert!(events.contains(&IndexBarEvent::ScrollToSection(0)));
/// ```
#[derive(Clone, Debug)]
pub struct IndexBar<C: BarChrome = DefaultChrome> {
    style: IndexBarStyle,
    chrome: C,
    content_bounds: Rect,
    entries: MeasuredLabels,
    marker_height: f64,
    layout: Rc<SlotLayout>,
    touch: TouchState,
}

impl IndexBar<DefaultChrome> {
    /// Creates an index bar with the stock chrome geometry.
    ///
    /// The bar starts with empty bounds and an empty layout; hosts call
    /// [`IndexBar::set_bounds`] and [`IndexBar::reload`] before routing
    /// touches to it.
    #[must_use]
    pub fn new(style: IndexBarStyle) -> Self {
        Self::with_chrome(style, DefaultChrome)
    }
}

impl<C: BarChrome> IndexBar<C> {
    /// Creates an index bar with a custom [`BarChrome`] policy.
    #[must_use]
    pub fn with_chrome(style: IndexBarStyle, chrome: C) -> Self {
        Self {
            style,
            chrome,
            content_bounds: Rect::ZERO,
            entries: MeasuredLabels::new(),
            marker_height: 0.0,
            layout: Rc::new(SlotLayout::empty()),
            touch: TouchState::default(),
        }
    }

    /// The current style.
    #[must_use]
    #[inline]
    pub fn style(&self) -> &IndexBarStyle {
        &self.style
    }

    /// The chrome geometry policy.
    #[must_use]
    #[inline]
    pub fn chrome(&self) -> &C {
        &self.chrome
    }

    /// The paired list's content bounds as last recorded.
    #[must_use]
    #[inline]
    pub fn content_bounds(&self) -> Rect {
        self.content_bounds
    }

    /// The cached slot layout.
    #[must_use]
    #[inline]
    pub fn layout(&self) -> &SlotLayout {
        &self.layout
    }

    /// A shared handle to the cached layout.
    ///
    /// Renderers that keep the layout across frames hold this handle; it
    /// stays valid (and unchanged) after the bar swaps in a newer layout.
    #[must_use]
    pub fn layout_handle(&self) -> Rc<SlotLayout> {
        Rc::clone(&self.layout)
    }

    /// Returns `true` while a scrub gesture is in flight.
    #[must_use]
    #[inline]
    pub fn is_scrubbing(&self) -> bool {
        self.touch.active
    }

    /// The section most recently scrubbed to, while a gesture is in flight.
    #[must_use]
    #[inline]
    pub fn last_section(&self) -> Option<usize> {
        self.touch.last_section
    }

    /// Reloads label data from the data source and recomputes the layout.
    ///
    /// Pulls the index count and per-index strings, measures each label and
    /// the truncation marker with `metrics`, and swaps in a freshly computed
    /// layout. A source reporting zero indexes (or one that is simply not
    /// wired up yet, represented by returning zero) yields an empty layout;
    /// that is not an error, touch handling just becomes a no-op.
    pub fn reload<D, M>(&mut self, source: &D, metrics: &M) -> Events
    where
        D: IndexDataSource + ?Sized,
        M: LabelMetrics + ?Sized,
    {
        let count = source.number_of_indexes();
        let mut entries = MeasuredLabels::with_capacity(count);
        for index in 0..count {
            let text = source.string_for_index(index);
            let height = metrics.label_height(&text, &self.style.text_font);
            entries.push(text, height);
        }
        self.entries = entries;
        self.marker_height = metrics.label_height(&self.style.truncation_text, &self.style.text_font);
        self.relayout()
    }

    /// Records new content bounds for the paired list and recomputes the
    /// layout from the cached labels.
    ///
    /// This is the resize path; no data source round trip happens. Setting
    /// unchanged bounds is a no-op and returns no events.
    pub fn set_bounds(&mut self, bounds: Rect) -> Events {
        if self.content_bounds == bounds {
            return Events::new();
        }
        self.content_bounds = bounds;
        self.relayout()
    }

    /// Reads the paired list's current content bounds and applies them.
    pub fn sync_bounds<L>(&mut self, list: &L) -> Events
    where
        L: SectionList + ?Sized,
    {
        self.set_bounds(list.content_bounds())
    }

    /// Replaces the style wholesale, re-measuring labels and recomputing the
    /// layout.
    pub fn set_style<M>(&mut self, style: IndexBarStyle, metrics: &M) -> Events
    where
        M: LabelMetrics + ?Sized,
    {
        self.style = style;
        let font = self.style.text_font.clone();
        self.entries
            .remeasure(|text| metrics.label_height(text, &font));
        self.marker_height = metrics.label_height(&self.style.truncation_text, &font);
        self.relayout()
    }

    /// Starts a scrub gesture at `point`.
    ///
    /// Maps the point's vertical coordinate through the cached layout,
    /// records the section, and emits selection, scroll, and (unless the
    /// background is always on) background-show effects. A no-op before the
    /// first successful reload: with an empty layout nothing is emitted and
    /// no gesture starts.
    pub fn touch_began(&mut self, point: Point) -> Events {
        let mut events = Events::new();
        let Some(section) = self.layout.section_at_y(point.y) else {
            return events;
        };
        self.touch = TouchState {
            active: true,
            last_section: Some(section),
        };
        if !self.style.always_show_bar_background {
            events.push(IndexBarEvent::BackgroundShown);
        }
        events.push(IndexBarEvent::SelectionChanged(section));
        events.push(IndexBarEvent::ScrollToSection(section));
        events
    }

    /// Continues an in-flight scrub gesture at `point`.
    ///
    /// Ignored while no gesture is active. Emits selection and scroll
    /// effects only when the mapped section differs from the last one, so a
    /// finger resting on a label produces one notification, not one per
    /// pixel.
    pub fn touch_moved(&mut self, point: Point) -> Events {
        let mut events = Events::new();
        if !self.touch.active {
            return events;
        }
        let Some(section) = self.layout.section_at_y(point.y) else {
            return events;
        };
        if self.touch.last_section == Some(section) {
            return events;
        }
        self.touch.last_section = Some(section);
        events.push(IndexBarEvent::SelectionChanged(section));
        events.push(IndexBarEvent::ScrollToSection(section));
        events
    }

    /// Ends the scrub gesture.
    ///
    /// Emits a background-hide effect unless the background is always on.
    pub fn touch_ended(&mut self) -> Events {
        self.finish_touch()
    }

    /// Cancels the scrub gesture; identical to [`IndexBar::touch_ended`].
    pub fn touch_cancelled(&mut self) -> Events {
        self.finish_touch()
    }

    /// Returns `true` if `point` falls inside the bar's hit frame.
    ///
    /// The hit frame is `bar_width` wide, typically wider than the visible
    /// background strip.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> bool {
        self.frame_rect().contains(point)
    }

    /// The bar's frame in the paired list's coordinate space.
    #[must_use]
    pub fn frame_rect(&self) -> Rect {
        self.chrome.frame_rect(self.content_bounds, &self.style)
    }

    /// The text area the layout is computed for.
    #[must_use]
    pub fn text_area_rect(&self) -> Rect {
        self.chrome.text_area_rect(self.frame_rect(), &self.style)
    }

    /// The background strip's rect.
    #[must_use]
    pub fn background_rect(&self) -> Rect {
        self.chrome.background_rect(self.text_area_rect(), &self.style)
    }

    /// The background strip as a rounded rect.
    #[must_use]
    pub fn background_shape(&self) -> RoundedRect {
        self.chrome.background_shape(self.text_area_rect(), &self.style)
    }

    fn finish_touch(&mut self) -> Events {
        let mut events = Events::new();
        if !self.touch.active {
            return events;
        }
        self.touch = TouchState::default();
        if !self.style.always_show_bar_background {
            events.push(IndexBarEvent::BackgroundHidden);
        }
        events
    }

    fn relayout(&mut self) -> Events {
        let params = LayoutParams {
            spacing: self.style.text_spacing,
            marker_height: self.marker_height,
            truncation_text: self.style.truncation_text.clone().into_owned(),
            alignment: self.style.vertical_alignment,
        };
        self.layout = Rc::new(compute_layout(&self.entries, self.text_area_rect(), &params));
        let mut events = Events::new();
        events.push(IndexBarEvent::LayoutChanged);
        events
    }
}
