//! Linear thumb transitions for animated `set_value` calls.
//!
//! A transition is fire-and-forget: it starts on the first `advance` after it
//! was requested and a newer request replaces it.

use crate::domain::SliderFrames;

/// Default transition duration in seconds.
pub const DEFAULT_ANIMATION_DURATION: f32 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    from: SliderFrames,
    to: SliderFrames,
    duration: f32,
    /// Host time of the first `advance`, in seconds
    started_at: Option<f64>,
    progress: f32,
}

impl Transition {
    pub fn new(from: SliderFrames, to: SliderFrames, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            started_at: None,
            progress: 0.0,
        }
    }

    pub fn target(&self) -> &SliderFrames {
        &self.to
    }

    /// Fraction of the transition completed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_finished(&self) -> bool {
        self.progress >= 1.0
    }

    /// Moves the transition to host time `now` (seconds).
    pub fn advance(&mut self, now: f64) {
        let started_at = *self.started_at.get_or_insert(now);
        self.progress = if self.duration <= 0.0 {
            1.0
        } else {
            (((now - started_at) as f32) / self.duration).clamp(0.0, 1.0)
        };
    }

    /// Frames to display at the current progress.
    pub fn current(&self) -> SliderFrames {
        self.from.lerp(&self.to, self.progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{compute_frames, MappingGeometry};

    fn frames(lower: f32, upper: f32) -> SliderFrames {
        let g = MappingGeometry::new(124.0, 24.0, 0.0, 100.0);
        compute_frames(&g, lower, upper).unwrap()
    }

    #[test]
    fn test_linear_progress() {
        let mut transition = Transition::new(frames(0.0, 100.0), frames(50.0, 50.0), 0.3);
        assert_eq!(transition.current(), frames(0.0, 100.0));

        transition.advance(10.0);
        assert_eq!(transition.progress(), 0.0);

        transition.advance(10.15);
        assert!((transition.progress() - 0.5).abs() < 1e-3);
        assert!((transition.current().lower_center_x() - 37.0).abs() < 0.1);

        transition.advance(11.0);
        assert!(transition.is_finished());
        assert_eq!(transition.current(), frames(50.0, 50.0));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let mut transition = Transition::new(frames(0.0, 100.0), frames(10.0, 20.0), 0.0);
        transition.advance(3.0);
        assert!(transition.is_finished());
        assert_eq!(transition.target(), &frames(10.0, 20.0));
    }
}
