//! Layout of the track and thumb rectangles.
//!
//! All rectangles are in control-local coordinates: the origin is the
//! control's top-left corner.

use egui::{pos2, vec2, Rect};

use super::value_mapping::{position_for_value, MappingGeometry};

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderFrames {
    /// Track bar, inset vertically by a third of the control height
    pub track: Rect,
    pub lower_thumb: Rect,
    pub upper_thumb: Rect,
}

impl SliderFrames {
    /// X coordinate of the lower thumb center.
    pub fn lower_center_x(&self) -> f32 {
        self.lower_thumb.center().x
    }

    /// X coordinate of the upper thumb center.
    pub fn upper_center_x(&self) -> f32 {
        self.upper_thumb.center().x
    }

    /// Linear interpolation between two layouts, `t` in `[0, 1]`.
    pub fn lerp(&self, target: &SliderFrames, t: f32) -> SliderFrames {
        let t = t.clamp(0.0, 1.0);
        SliderFrames {
            track: target.track,
            lower_thumb: lerp_rect(self.lower_thumb, target.lower_thumb, t),
            upper_thumb: lerp_rect(self.upper_thumb, target.upper_thumb, t),
        }
    }
}

fn lerp_rect(from: Rect, to: Rect, t: f32) -> Rect {
    Rect::from_min_max(
        pos2(
            from.min.x + (to.min.x - from.min.x) * t,
            from.min.y + (to.min.y - from.min.y) * t,
        ),
        pos2(
            from.max.x + (to.max.x - from.max.x) * t,
            from.max.y + (to.max.y - from.max.y) * t,
        ),
    )
}

/// Computes the track rect for a control of the given size.
pub fn track_rect(width: f32, height: f32) -> Rect {
    Rect::from_min_size(pos2(0.0, 0.0), vec2(width, height)).shrink2(vec2(0.0, height / 3.0))
}

/// Computes a thumb square centered on `center_x`.
pub fn thumb_rect(center_x: f32, diameter: f32) -> Rect {
    Rect::from_min_size(pos2(center_x - diameter / 2.0, 0.0), vec2(diameter, diameter))
}

/// Computes the frames for the track and both thumbs.
///
/// Returns `None` when the control has no usable size yet (zero rect, or a
/// width that does not exceed one thumb diameter).
///
/// # Arguments
/// * `geometry` - Control size and range bounds
/// * `lower_value` - Value of the lower thumb
/// * `upper_value` - Value of the upper thumb
pub fn compute_frames(
    geometry: &MappingGeometry,
    lower_value: f32,
    upper_value: f32,
) -> Option<SliderFrames> {
    if geometry.width <= 0.0 || geometry.height <= 0.0 || !geometry.has_usable_span() {
        return None;
    }

    let diameter = geometry.thumb_diameter();
    Some(SliderFrames {
        track: track_rect(geometry.width, geometry.height),
        lower_thumb: thumb_rect(position_for_value(lower_value, geometry), diameter),
        upper_thumb: thumb_rect(position_for_value(upper_value, geometry), diameter),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_for_day_range() {
        let g = MappingGeometry::new(300.0, 24.0, 0.0, 1439.0);
        let frames = compute_frames(&g, 0.0, 1439.0).unwrap();

        assert_eq!(frames.track, Rect::from_min_max(pos2(0.0, 8.0), pos2(300.0, 16.0)));
        assert_eq!(frames.lower_thumb, Rect::from_min_max(pos2(0.0, 0.0), pos2(24.0, 24.0)));
        assert_eq!(frames.upper_thumb, Rect::from_min_max(pos2(276.0, 0.0), pos2(300.0, 24.0)));
        assert_eq!(frames.lower_center_x(), 12.0);
        assert_eq!(frames.upper_center_x(), 288.0);
    }

    #[test]
    fn test_zero_size_is_skipped() {
        let g = MappingGeometry::new(0.0, 0.0, 0.0, 100.0);
        assert!(compute_frames(&g, 0.0, 100.0).is_none());
    }

    #[test]
    fn test_width_not_exceeding_thumb_is_skipped() {
        let g = MappingGeometry::new(20.0, 24.0, 0.0, 100.0);
        assert!(compute_frames(&g, 0.0, 100.0).is_none());
    }

    #[test]
    fn test_lerp_moves_thumbs_only() {
        let g = MappingGeometry::new(124.0, 24.0, 0.0, 100.0);
        let from = compute_frames(&g, 0.0, 100.0).unwrap();
        let to = compute_frames(&g, 50.0, 50.0).unwrap();

        let half = from.lerp(&to, 0.5);
        assert_eq!(half.lower_center_x(), 37.0);
        assert_eq!(half.upper_center_x(), 87.0);
        assert_eq!(half.track, to.track);
        assert_eq!(from.lerp(&to, 2.0), to);
    }
}
