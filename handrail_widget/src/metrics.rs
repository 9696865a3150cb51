// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label measurement collaborator.

use crate::style::FontSpec;

/// Measures the render height of label text.
///
/// Text measurement belongs to the host's text stack, not to this crate; the
/// bar only needs one number per label. Implementations should return a
/// finite, positive height for any text they are given.
pub trait LabelMetrics {
    /// Render height of `text` when drawn with `font`.
    fn label_height(&self, text: &str, font: &FontSpec) -> f64;
}

/// Uniform line-height measurement: every label is `size * factor` tall.
///
/// Index bar labels are short (usually a single character), so a uniform
/// line height is a faithful stand-in for real font metrics in hosts that do
/// not need per-glyph precision.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UniformLineHeight {
    factor: f64,
}

impl UniformLineHeight {
    /// Creates a measurement with the given line-height factor.
    #[must_use]
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// The line-height factor.
    #[must_use]
    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for UniformLineHeight {
    fn default() -> Self {
        Self { factor: 1.25 }
    }
}

impl LabelMetrics for UniformLineHeight {
    fn label_height(&self, _text: &str, font: &FontSpec) -> f64 {
        font.size * self.factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_height_ignores_text() {
        let metrics = UniformLineHeight::new(1.5);
        let font = FontSpec {
            family: "Helvetica".into(),
            size: 10.0,
        };
        assert_eq!(metrics.label_height("A", &font), 15.0);
        assert_eq!(metrics.label_height("WWW", &font), 15.0);
    }
}
