// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label model abstraction consumed by layout computation.

use alloc::string::String;
use alloc::vec::Vec;

/// A dense strip of measured labels indexed `0..len`.
///
/// The layout engine only needs three things from its input: how many labels
/// there are, how tall each one renders, and what text each one carries. The
/// position of a label in the strip *is* its section index.
///
/// Heights are expected to be finite and positive; the engine clamps
/// negative values to zero rather than failing.
pub trait LabelModel {
    /// Number of labels in the strip.
    fn len(&self) -> usize;

    /// Returns `true` if the strip has no labels.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Measured render height of the label at `index`.
    ///
    /// `index` is in `0..len()`.
    fn height(&self, index: usize) -> f64;

    /// Text of the label at `index`.
    ///
    /// `index` is in `0..len()`.
    fn text(&self, index: usize) -> &str;
}

/// A single measured label.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredLabel {
    /// The label text.
    pub text: String,
    /// Measured render height for this text.
    pub height: f64,
}

/// Vec-backed [`LabelModel`] holding label texts alongside their measured
/// heights.
///
/// Hosts typically rebuild this wholesale whenever the underlying data
/// changes, and re-measure in place (via [`MeasuredLabels::remeasure`]) when
/// only the font changes.
///
/// ## Minimal example
///
/// ```rust
/// use handrail_layout::{LabelModel, MeasuredLabels};
///
/// let mut labels = MeasuredLabels::new();
/// labels.push("A", 12.0);
/// labels.push("B", 12.0);
///
/// assert_eq!(labels.len(), 2);
/// assert_eq!(labels.text(1), "B");
/// assert_eq!(labels.height(0), 12.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasuredLabels {
    labels: Vec<MeasuredLabel>,
}

impl MeasuredLabels {
    /// Creates an empty label strip.
    #[must_use]
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Creates an empty label strip with room for `capacity` labels.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
        }
    }

    /// Appends a measured label to the end of the strip.
    pub fn push(&mut self, text: impl Into<String>, height: f64) {
        self.labels.push(MeasuredLabel {
            text: text.into(),
            height,
        });
    }

    /// Removes all labels.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Re-measures every label in place.
    ///
    /// Useful when the font changes but the texts do not: the strip keeps
    /// its order and contents while heights are refreshed.
    pub fn remeasure(&mut self, mut measure: impl FnMut(&str) -> f64) {
        for label in &mut self.labels {
            label.height = measure(&label.text);
        }
    }

    /// Returns the labels in display order.
    #[must_use]
    pub fn labels(&self) -> &[MeasuredLabel] {
        &self.labels
    }
}

impl LabelModel for MeasuredLabels {
    fn len(&self) -> usize {
        self.labels.len()
    }

    fn height(&self, index: usize) -> f64 {
        self.labels[index].height
    }

    fn text(&self, index: usize) -> &str {
        &self.labels[index].text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strip() {
        let labels = MeasuredLabels::new();
        assert!(labels.is_empty());
        assert_eq!(labels.len(), 0);
    }

    #[test]
    fn push_preserves_order() {
        let mut labels = MeasuredLabels::new();
        labels.push("A", 10.0);
        labels.push("B", 11.0);
        labels.push("C", 12.0);

        assert_eq!(labels.len(), 3);
        assert_eq!(labels.text(0), "A");
        assert_eq!(labels.text(2), "C");
        assert_eq!(labels.height(1), 11.0);
    }

    #[test]
    fn remeasure_updates_heights_only() {
        let mut labels = MeasuredLabels::new();
        labels.push("A", 10.0);
        labels.push("Bb", 10.0);

        labels.remeasure(|text| text.len() as f64 * 4.0);

        assert_eq!(labels.height(0), 4.0);
        assert_eq!(labels.height(1), 8.0);
        assert_eq!(labels.text(0), "A");
        assert_eq!(labels.text(1), "Bb");
    }

    #[test]
    fn clear_empties_the_strip() {
        let mut labels = MeasuredLabels::new();
        labels.push("A", 10.0);
        labels.clear();
        assert!(labels.is_empty());
    }
}
