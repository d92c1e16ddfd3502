//! Track rendering logic
//!
//! Paints the full track in the out-of-interval color and overlays the
//! selected segment between the two thumb centers in the in-interval color.
//! Rendering reads an immutable snapshot and never touches control state.

use egui::{Color32, CornerRadius, Rect, Shape};

/// Everything the track renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSnapshot {
    /// Track rect in the coordinate space the shapes are emitted in
    pub rect: Rect,
    /// Fraction of half the track height used as corner radius, `[0, 1]`
    pub roundness: f32,
    pub in_interval_color: Color32,
    pub out_interval_color: Color32,
    /// X of the lower thumb center, same space as `rect`
    pub lower_x: f32,
    /// X of the upper thumb center, same space as `rect`
    pub upper_x: f32,
}

impl TrackSnapshot {
    /// Corner radius of the rounded track outline.
    pub fn corner_radius(&self) -> f32 {
        self.rect.height() * self.roundness / 2.0
    }

    /// Returns a copy translated by `offset`.
    pub fn translate(&self, offset: egui::Vec2) -> Self {
        Self {
            rect: self.rect.translate(offset),
            lower_x: self.lower_x + offset.x,
            upper_x: self.upper_x + offset.x,
            ..*self
        }
    }
}

/// Builds the shapes for the track: the full rounded bar, then the highlighted
/// segment (if it has any width).
///
/// The segment is intersected with the track and keeps the outline's rounding
/// on any end where it reaches into a rounded corner.
///
/// # Arguments
/// * `snapshot` - Track geometry, colors and thumb positions
pub fn track_shapes(snapshot: &TrackSnapshot) -> Vec<Shape> {
    let rect = snapshot.rect;
    let radius = snapshot.corner_radius();

    let mut shapes = vec![Shape::rect_filled(rect, radius, snapshot.out_interval_color)];

    let left = snapshot.lower_x.max(rect.left());
    let right = snapshot.upper_x.min(rect.right());
    if right > left {
        let segment = Rect::from_min_max(egui::pos2(left, rect.top()), egui::pos2(right, rect.bottom()));
        let left_radius = inherited_radius(left - rect.left(), radius);
        let right_radius = inherited_radius(rect.right() - right, radius);
        let corners = CornerRadius {
            nw: to_corner(left_radius),
            sw: to_corner(left_radius),
            ne: to_corner(right_radius),
            se: to_corner(right_radius),
        };
        shapes.push(Shape::rect_filled(segment, corners, snapshot.in_interval_color));
    }

    shapes
}

/// Paints the track with the given painter.
pub fn paint_track(painter: &egui::Painter, snapshot: &TrackSnapshot) {
    painter.extend(track_shapes(snapshot));
}

/// Radius a segment edge keeps when it sits `inset` points inside a track end
/// rounded by `radius`.
fn inherited_radius(inset: f32, radius: f32) -> f32 {
    (radius - inset).clamp(0.0, radius)
}

fn to_corner(radius: f32) -> u8 {
    radius.round().clamp(0.0, u8::MAX as f32) as u8
}
