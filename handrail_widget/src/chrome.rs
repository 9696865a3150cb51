// Copyright 2026 the Handrail Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome geometry policy: where the bar, its text area, and its background
//! strip sit relative to the paired list.

use kurbo::{Rect, RoundedRect};

use crate::style::IndexBarStyle;

/// Derives the bar's frame, text area, and background geometry from the
/// paired list's content bounds and the current style.
///
/// All methods have default implementations matching the conventional
/// contacts-style placement; hosts with unusual chrome (leading-edge bars,
/// floating bars) override the ones they need. All rects share the paired
/// list's coordinate space.
pub trait BarChrome {
    /// The bar's frame: a `bar_width`-wide column pinned to the trailing
    /// edge of the content bounds, shifted by `edge_offset`. This is the
    /// touch hit area.
    fn frame_rect(&self, content_bounds: Rect, style: &IndexBarStyle) -> Rect {
        let frame = Rect::new(
            content_bounds.x1 - style.bar_width,
            content_bounds.y0,
            content_bounds.x1,
            content_bounds.y1,
        );
        frame + style.edge_offset
    }

    /// The area label text is laid out in: the frame shifted by
    /// `text_offset`.
    fn text_area_rect(&self, frame: Rect, style: &IndexBarStyle) -> Rect {
        frame + style.text_offset
    }

    /// The background strip: the text area narrowed to
    /// `bar_background_width` around its horizontal center, shifted by
    /// `bar_background_offset`.
    fn background_rect(&self, text_area: Rect, style: &IndexBarStyle) -> Rect {
        let center_x = (text_area.x0 + text_area.x1) * 0.5;
        let half = style.bar_background_width * 0.5;
        let background = Rect::new(center_x - half, text_area.y0, center_x + half, text_area.y1);
        background + style.bar_background_offset
    }

    /// The background strip as a rounded rect, using
    /// `bar_background_corner_radius`.
    fn background_shape(&self, text_area: Rect, style: &IndexBarStyle) -> RoundedRect {
        self.background_rect(text_area, style)
            .to_rounded_rect(style.bar_background_corner_radius)
    }
}

/// The stock chrome geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultChrome;

impl BarChrome for DefaultChrome {}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Vec2};

    use super::{BarChrome, DefaultChrome};
    use crate::style::IndexBarStyle;

    #[test]
    fn frame_hugs_the_trailing_edge() {
        let style = IndexBarStyle::default();
        let bounds = Rect::new(0.0, 0.0, 320.0, 480.0);
        let frame = DefaultChrome.frame_rect(bounds, &style);

        assert_eq!(frame, Rect::new(276.0, 0.0, 320.0, 480.0));
    }

    #[test]
    fn edge_offset_shifts_the_frame() {
        let style = IndexBarStyle {
            edge_offset: Vec2::new(-6.0, 10.0),
            ..IndexBarStyle::default()
        };
        let bounds = Rect::new(0.0, 0.0, 320.0, 480.0);
        let frame = DefaultChrome.frame_rect(bounds, &style);

        assert_eq!(frame, Rect::new(270.0, 10.0, 314.0, 490.0));
    }

    #[test]
    fn background_is_centered_in_the_text_area() {
        let style = IndexBarStyle::default();
        let bounds = Rect::new(0.0, 0.0, 320.0, 480.0);
        let frame = DefaultChrome.frame_rect(bounds, &style);
        let text_area = DefaultChrome.text_area_rect(frame, &style);
        let background = DefaultChrome.background_rect(text_area, &style);

        assert_eq!(background.width(), style.bar_background_width);
        assert_eq!(
            (background.x0 - text_area.x0, text_area.x1 - background.x1),
            (14.0, 14.0)
        );
        assert_eq!((background.y0, background.y1), (text_area.y0, text_area.y1));
    }

    #[test]
    fn background_shape_carries_the_corner_radius() {
        let style = IndexBarStyle::default();
        let bounds = Rect::new(0.0, 0.0, 320.0, 480.0);
        let text_area = DefaultChrome.text_area_rect(DefaultChrome.frame_rect(bounds, &style), &style);
        let shape = DefaultChrome.background_shape(text_area, &style);

        assert_eq!(shape.radii().top_left, style.bar_background_corner_radius);
    }
}
