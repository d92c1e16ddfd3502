//! Thumb rendering logic

use egui::{pos2, Color32, Rect, Shape};

use crate::state::ThumbAppearance;

/// Builds the shape for a thumb occupying `frame`.
///
/// Images are stretched to the square frame; the fallback is a filled circle
/// inscribed in it.
pub fn thumb_shape(frame: Rect, appearance: ThumbAppearance) -> Shape {
    match appearance {
        ThumbAppearance::Image(texture_id) => Shape::image(
            texture_id,
            frame,
            Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
            Color32::WHITE,
        ),
        ThumbAppearance::Circle(tint) => {
            Shape::circle_filled(frame.center(), frame.width().min(frame.height()) / 2.0, tint)
        }
    }
}

/// Paints a thumb with the given painter.
pub fn paint_thumb(painter: &egui::Painter, frame: Rect, appearance: ThumbAppearance) {
    painter.add(thumb_shape(frame, appearance));
}
