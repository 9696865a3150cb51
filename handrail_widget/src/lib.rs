// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=handrail_widget --heading-base-level=0

//! Handrail Widget: the section index bar controller.
//!
//! This crate turns the pure geometry of [`handrail_layout`] into a usable
//! widget: it owns the style configuration, the cached slot layout, and the
//! in-flight touch state, and it converts reloads, resizes, and touch events
//! into outward effects for the host to apply.
//!
//! ## Data flow
//!
//! 1. The host calls [`IndexBar::reload`]. The bar pulls the index count and
//!    label strings from the [`IndexDataSource`], measures them through
//!    [`LabelMetrics`], runs the layout engine over the current text area,
//!    and swaps the cached [`SlotLayout`] wholesale.
//! 2. Touch events arrive as direct calls ([`IndexBar::touch_began`] /
//!    [`IndexBar::touch_moved`] / [`IndexBar::touch_ended`] /
//!    [`IndexBar::touch_cancelled`]). The bar maps the vertical coordinate
//!    through the cached layout and returns [`Events`] (selection changes,
//!    scroll requests, background visibility), debounced to one notification
//!    per distinct section.
//! 3. The host applies the events, typically via [`dispatch`], which routes
//!    them to the [`IndexDataSource`], [`SectionList`], and [`BarRenderer`]
//!    collaborators.
//!
//! Everything runs synchronously on the host's event loop; there are no
//! threads and no failure paths. An absent or empty data source just means
//! an empty layout, and touches against an empty layout are no-ops.
//!
//! ## Chrome geometry
//!
//! Where the bar sits relative to the paired list is a policy, not a
//! constant: [`BarChrome`] derives the frame, text area, and background
//! rects from the list's content bounds and the style, with
//! [`DefaultChrome`] providing the conventional trailing-edge column.
//! Hosts override individual methods for unusual placements.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bar;
mod chrome;
mod collab;
mod metrics;
mod style;

pub use bar::{Events, IndexBar, IndexBarEvent};
pub use chrome::{BarChrome, DefaultChrome};
pub use collab::{BarRenderer, IndexDataSource, SectionList, dispatch};
pub use metrics::{LabelMetrics, UniformLineHeight};
pub use style::{FontSpec, IndexBarStyle};

// The layout vocabulary travels with the widget API: renderers consume
// `SlotLayout` and styles name `VerticalAlignment`.
pub use handrail_layout::{LayoutSlot, SlotKind, SlotLayout, VerticalAlignment};
