// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=handrail_layout --heading-base-level=0

//! Handrail Layout: label layout and hit mapping for section index bars.
//!
//! This crate is the geometry core of a section index bar (the "fast
//! scroller" strip of letters along the edge of a contacts-style list). It
//! answers three questions, deterministically and without knowing anything
//! about widgets or renderers:
//!
//! - which labels to show and which to collapse into truncation markers when
//!   vertical space runs out,
//! - where each rendered slot sits vertically, and
//! - which section a touch's vertical coordinate maps back to, including
//!   while a drag is in flight.
//!
//! The core concepts are:
//!
//! - [`LabelModel`]: a trait describing a dense strip of measured labels,
//!   with [`MeasuredLabels`] as the Vec-backed implementation hosts feed
//!   measurements into.
//! - [`compute_layout`]: a pure function that turns a label strip, a target
//!   rect, and [`LayoutParams`] into a [`SlotLayout`].
//! - [`SlotLayout`]: the computed, immutable slot sequence. It owns the
//!   inverse mapping ([`SlotLayout::slot_at_y`] /
//!   [`SlotLayout::section_at_y`]) because hit testing is only meaningful
//!   against one specific computed layout.
//!
//! Hosts are responsible for measuring label text, deciding when to
//! recompute (data reload, resize, style change), and replacing the old
//! layout wholesale with the new one. Label counts are expected to be small
//! (tens, not thousands), so every recomputation is a full rebuild; there is
//! no incremental patching to get subtly out of sync.
//!
//! ## Minimal example
//!
//! ```rust
//! use handrail_layout::{LayoutParams, MeasuredLabels, compute_layout};
//! use kurbo::Rect;
//!
//! let mut labels = MeasuredLabels::new();
//! for ch in 'A'..='F' {
//!     labels.push(ch.to_string(), 12.0);
//! }
//!
//! // Plenty of room: every label gets its own slot.
//! let layout = compute_layout(
//!     &labels,
//!     Rect::new(0.0, 0.0, 20.0, 200.0),
//!     &LayoutParams::default(),
//! );
//! assert_eq!(layout.len(), 6);
//!
//! // A touch above the strip clamps to the first section, one below it to
//! // the last.
//! assert_eq!(layout.section_at_y(-50.0), Some(0));
//! assert_eq!(layout.section_at_y(500.0), Some(5));
//! ```
//!
//! When the rect is too short for the strip's natural height, evenly
//! sampled labels are kept (always including the first and last, so edge
//! sections stay reachable) and truncation markers stand in for the gaps.
//! Each marker maps back to the nearest preceding visible section.
//!
//! All coordinates live in a caller-chosen space (typically logical pixels)
//! and are expected to be finite. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod layout;
mod model;
mod slot;

pub use layout::{LayoutParams, SlotLayout, compute_layout};
pub use model::{LabelModel, MeasuredLabel, MeasuredLabels};
pub use slot::{LayoutSlot, SlotKind, VerticalAlignment};
