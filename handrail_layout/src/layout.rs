// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout computation and the inverse mapping from touch position to slot.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use kurbo::Rect;

use crate::model::LabelModel;
use crate::slot::{LayoutSlot, SlotKind, VerticalAlignment};

/// Spacing, marker, and alignment parameters for layout computation.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParams {
    /// Vertical gap between consecutive slot boxes.
    pub spacing: f64,
    /// Render height of a truncation marker slot.
    pub marker_height: f64,
    /// Text stamped on truncation marker slots.
    pub truncation_text: String,
    /// How leftover vertical slack is distributed.
    pub alignment: VerticalAlignment,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            spacing: 2.0,
            marker_height: 7.0,
            truncation_text: String::from("\u{2022}"),
            alignment: VerticalAlignment::default(),
        }
    }
}

/// A computed slot sequence plus the rect it was computed for.
///
/// Layouts are immutable once computed and are replaced wholesale by hosts
/// whenever data, bounds, or style change; there is no incremental patching.
/// The inverse mapping from a touch's vertical coordinate back to a slot
/// lives here because it is only meaningful against one specific computed
/// sequence.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlotLayout {
    rect: Rect,
    slots: Vec<LayoutSlot>,
}

impl SlotLayout {
    /// An empty layout over a zero rect.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The rect this layout was computed for.
    #[must_use]
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The slots in display order, top to bottom.
    #[must_use]
    #[inline]
    pub fn slots(&self) -> &[LayoutSlot] {
        &self.slots
    }

    /// Number of slots.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the layout has no slots.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Maps a vertical coordinate to the nearest slot index.
    ///
    /// The boundary between slots `i` and `i + 1` is the midpoint of their
    /// centers; a coordinate exactly on a boundary belongs to the slot below
    /// it. Coordinates above the first boundary map to the first slot and
    /// coordinates below the last boundary map to the last slot, so any
    /// finite `y` resolves to a slot. Returns `None` only when the layout is
    /// empty.
    #[must_use]
    pub fn slot_at_y(&self, y: f64) -> Option<usize> {
        if self.slots.is_empty() {
            return None;
        }
        let mut lo = 0;
        let mut hi = self.slots.len() - 1;
        while lo < hi {
            let mid = (lo + hi) / 2;
            let boundary = (self.slots[mid].center_y + self.slots[mid + 1].center_y) * 0.5;
            if y < boundary {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        Some(lo)
    }

    /// Maps a vertical coordinate to a section index.
    ///
    /// For truncation marker slots this is the nearest preceding visible
    /// section. Returns `None` only when the layout is empty.
    #[must_use]
    pub fn section_at_y(&self, y: f64) -> Option<usize> {
        self.slot_at_y(y).map(|i| self.slots[i].section)
    }
}

/// Planned row before vertical placement: what goes in the slot and how
/// tall its box is.
struct Row {
    kind: SlotKind,
    section: usize,
    extent: f64,
}

/// Floors a non-negative value to `usize`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "values are small non-negative row counts and label indices"
)]
fn floor_to_usize(value: f64) -> usize {
    value.floor().max(0.0) as usize
}

/// Computes the slot layout for a measured label strip inside `rect`.
///
/// When the strip's natural height fits, every label gets its own slot and
/// leftover slack is distributed per `params.alignment`. When it does not,
/// evenly sampled labels are kept (always including the first and the last,
/// so edge sections stay reachable) and truncation markers fill the gaps.
/// A rect too small for even a single row degenerates to one marker slot
/// mapping to the last section; the result is never empty while the model
/// has labels.
#[must_use]
pub fn compute_layout<M: LabelModel + ?Sized>(
    model: &M,
    rect: Rect,
    params: &LayoutParams,
) -> SlotLayout {
    let len = model.len();
    if len == 0 {
        return SlotLayout {
            rect,
            slots: Vec::new(),
        };
    }

    let avail = rect.height().max(0.0);
    let spacing = params.spacing.max(0.0);
    let marker_height = params.marker_height.max(0.0);

    let mut total = 0.0;
    for i in 0..len {
        total += model.height(i).max(0.0);
    }
    let natural = total + spacing * (len - 1) as f64;

    let rows = if natural <= avail {
        let mut rows = Vec::with_capacity(len);
        for section in 0..len {
            rows.push(Row {
                kind: SlotKind::Label,
                section,
                extent: model.height(section).max(0.0),
            });
        }
        rows
    } else {
        let mean = total / len as f64;
        let per_row = mean + spacing;
        let max_slots = if per_row > 0.0 {
            floor_to_usize(avail / per_row)
        } else {
            len
        };

        if max_slots <= 1 {
            // Not even one full row fits. Collapse to a single marker that
            // still reaches the end of the list.
            let slot = LayoutSlot {
                kind: SlotKind::Truncated,
                section: len - 1,
                center_y: (rect.y0 + rect.y1) * 0.5,
                text: params.truncation_text.clone(),
            };
            return SlotLayout {
                rect,
                slots: alloc::vec![slot],
            };
        }

        // Keep roughly every other row for real labels so each gap can carry
        // a marker; with only two rows of budget the markers are dropped and
        // the edge labels win.
        let keep = ((max_slots + 1) / 2).max(2);
        let with_markers = max_slots >= 3;
        let step = (len - 1) as f64 / (keep - 1) as f64;

        let mut rows = Vec::with_capacity(2 * keep - 1);
        let mut prev = 0;
        for j in 0..keep {
            let section = if j + 1 == keep {
                len - 1
            } else {
                // Round half up; step >= 1 keeps successive picks distinct.
                floor_to_usize(j as f64 * step + 0.5)
            };
            if j > 0 && with_markers && section - prev > 1 {
                rows.push(Row {
                    kind: SlotKind::Truncated,
                    section: prev,
                    extent: marker_height,
                });
            }
            rows.push(Row {
                kind: SlotKind::Label,
                section,
                extent: model.height(section).max(0.0),
            });
            prev = section;
        }
        rows
    };

    let content: f64 =
        rows.iter().map(|row| row.extent).sum::<f64>() + spacing * (rows.len() - 1) as f64;
    let slack = (avail - content).max(0.0);
    let mut cursor = rect.y0
        + match params.alignment {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::Center => slack * 0.5,
            VerticalAlignment::Bottom => slack,
        };

    let mut slots = Vec::with_capacity(rows.len());
    for row in rows {
        let text = match row.kind {
            SlotKind::Label => String::from(model.text(row.section)),
            SlotKind::Truncated => params.truncation_text.clone(),
        };
        slots.push(LayoutSlot {
            kind: row.kind,
            section: row.section,
            center_y: cursor + row.extent * 0.5,
            text,
        });
        cursor += row.extent + spacing;
    }

    SlotLayout { rect, slots }
}
