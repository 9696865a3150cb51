// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual and geometry configuration for the index bar.
//!
//! Styling is a plain value struct applied at construction (or replaced
//! wholesale later); there is no runtime style propagation mechanism. Every
//! parameter is independent of the others, with one documented caller
//! contract: [`IndexBarStyle::bar_width`] should be at least
//! [`IndexBarStyle::bar_background_width`].

use alloc::borrow::Cow;

use handrail_layout::VerticalAlignment;
use kurbo::Vec2;
use peniko::Color;

/// A font described by family name and point size.
///
/// The widget never loads or shapes fonts itself; this value is handed to
/// the measurement and rendering collaborators, which resolve it against
/// whatever text stack the host uses.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Font family name, resolved by the host's text stack.
    pub family: Cow<'static, str>,
    /// Point size.
    pub size: f64,
}

impl Default for FontSpec {
    /// The platform-conventional index bar font: a small bold face.
    fn default() -> Self {
        Self {
            family: Cow::Borrowed("Helvetica-Bold"),
            size: 11.0,
        }
    }
}

/// Appearance and geometry parameters for the index bar.
///
/// Defaults follow the platform convention for contacts-style list indexes.
/// The struct is cheap to clone and compare; hosts that change style at
/// runtime replace it wholesale and let the bar recompute its layout.
#[derive(Clone, Debug, PartialEq)]
pub struct IndexBarStyle {
    /// Width of the touch hit area.
    ///
    /// Must be greater than or equal to `bar_background_width`; this is a
    /// caller contract, not validated at runtime. A violation only causes
    /// the visible background to overhang the hit area.
    pub bar_width: f64,
    /// Width of the background strip behind the labels.
    pub bar_background_width: f64,
    /// Offset applied to the background strip's position.
    pub bar_background_offset: Vec2,
    /// Fill color of the background strip.
    pub bar_background_color: Color,
    /// Corner radius of the background strip.
    pub bar_background_corner_radius: f64,
    /// If `true`, the background strip is always visible. If `false`, it is
    /// only shown while a touch is scrubbing the bar.
    pub always_show_bar_background: bool,
    /// Inset of the bar's frame from the paired list's trailing edge.
    pub edge_offset: Vec2,
    /// Font used for label text.
    pub text_font: FontSpec,
    /// Label text color.
    pub text_color: Color,
    /// Label text shadow color.
    pub text_shadow_color: Color,
    /// Label text shadow offset.
    pub text_shadow_offset: Vec2,
    /// Offset applied to the text drawing position.
    pub text_offset: Vec2,
    /// Vertical gap between consecutive labels.
    pub text_spacing: f64,
    /// Text stamped on truncation marker slots.
    pub truncation_text: Cow<'static, str>,
    /// Where leftover vertical space goes when labels do not fill the bar.
    pub vertical_alignment: VerticalAlignment,
}

impl Default for IndexBarStyle {
    fn default() -> Self {
        Self {
            bar_width: 44.0,
            bar_background_width: 16.0,
            bar_background_offset: Vec2::ZERO,
            bar_background_color: Color::from_rgba8(0, 0, 0, 64),
            bar_background_corner_radius: 8.0,
            always_show_bar_background: false,
            edge_offset: Vec2::ZERO,
            text_font: FontSpec::default(),
            text_color: Color::from_rgba8(102, 102, 102, 255),
            text_shadow_color: Color::TRANSPARENT,
            text_shadow_offset: Vec2::ZERO,
            text_offset: Vec2::ZERO,
            text_spacing: 2.0,
            truncation_text: Cow::Borrowed("\u{2022}"),
            vertical_alignment: VerticalAlignment::Center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_honor_the_documented_width_contract() {
        let style = IndexBarStyle::default();
        assert!(style.bar_width >= style.bar_background_width);
    }

    #[test]
    fn default_marker_is_a_bullet() {
        let style = IndexBarStyle::default();
        assert_eq!(style.truncation_text.as_ref(), "\u{2022}");
    }
}
