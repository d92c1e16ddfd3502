//! The range slider control.
//!
//! `RangeSlider` owns the four values, both thumbs, the drag session, the
//! style and any in-flight transition. Every mutation ends in a layout pass
//! that repositions the thumbs and raises the redraw flag; drag-driven value
//! changes additionally notify listeners synchronously.
//!
//! All coordinates are control-local: the origin is the control's top-left
//! corner, x grows to the right.

use egui::{Pos2, Rect, Vec2};

use crate::domain::{compute_frames, position_for_value, MappingGeometry, SliderFrames};
use crate::error::{ensure_finite, SliderError};
use crate::rendering::TrackSnapshot;
use crate::state::{
    InteractionState, RangeValues, Thumb, ThumbKind, TrackingState, Transition,
};
use crate::style::SliderStyle;

type ValueChangedListener = Box<dyn FnMut(f32, f32)>;

/// Dual-thumb range selection control.
pub struct RangeSlider {
    values: RangeValues,
    style: SliderStyle,
    lower_thumb: Thumb,
    upper_thumb: Thumb,
    interaction: InteractionState,
    /// Control size given by the last `layout` call
    size: Vec2,
    /// Frames from the last effective layout pass
    frames: Option<SliderFrames>,
    transition: Option<Transition>,
    /// Set by `set_value(.., animate: true)`, consumed by the next layout pass
    animate_next_layout: bool,
    needs_redraw: bool,
    layout_passes: u64,
    listeners: Vec<ValueChangedListener>,
}

impl std::fmt::Debug for RangeSlider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeSlider")
            .field("values", &self.values)
            .field("tracking", &self.interaction.state())
            .field("size", &self.size)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Default for RangeSlider {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl RangeSlider {
    /// Creates a slider over `[minimum_value, maximum_value]` with the full
    /// range selected and the default style.
    pub fn new(minimum_value: f32, maximum_value: f32) -> Self {
        Self::with_style(RangeValues::full(minimum_value, maximum_value), SliderStyle::default())
    }

    pub fn with_style(values: RangeValues, style: SliderStyle) -> Self {
        let mut lower_thumb = Thumb::new(ThumbKind::Lower, style.thumb_tint_color);
        let mut upper_thumb = Thumb::new(ThumbKind::Upper, style.thumb_tint_color);
        lower_thumb.set_images(style.lower_images());
        upper_thumb.set_images(style.upper_images());

        Self {
            values,
            style,
            lower_thumb,
            upper_thumb,
            interaction: InteractionState::new(),
            size: Vec2::ZERO,
            frames: None,
            transition: None,
            animate_next_layout: false,
            needs_redraw: true,
            layout_passes: 0,
            listeners: Vec::new(),
        }
    }

    // ===== Value Queries =====

    pub fn values(&self) -> RangeValues {
        self.values
    }

    pub fn minimum_value(&self) -> f32 {
        self.values.minimum_value
    }

    pub fn maximum_value(&self) -> f32 {
        self.values.maximum_value
    }

    pub fn lower_value(&self) -> f32 {
        self.values.lower_value
    }

    pub fn upper_value(&self) -> f32 {
        self.values.upper_value
    }

    // ===== Value Mutations =====

    /// Sets the range minimum and re-lays out. No clamping of the interval.
    pub fn set_minimum_value(&mut self, value: f32) -> Result<(), SliderError> {
        self.ensure_not_dragging()?;
        self.values.minimum_value = ensure_finite("minimum_value", value)?;
        self.warn_if_degenerate();
        self.update_layer_frames();
        Ok(())
    }

    /// Sets the range maximum and re-lays out. No clamping of the interval.
    pub fn set_maximum_value(&mut self, value: f32) -> Result<(), SliderError> {
        self.ensure_not_dragging()?;
        self.values.maximum_value = ensure_finite("maximum_value", value)?;
        self.warn_if_degenerate();
        self.update_layer_frames();
        Ok(())
    }

    /// Sets both bounds at once, rejecting `min > max`.
    pub fn set_bounds(&mut self, minimum_value: f32, maximum_value: f32) -> Result<(), SliderError> {
        self.ensure_not_dragging()?;
        let min = ensure_finite("minimum_value", minimum_value)?;
        let max = ensure_finite("maximum_value", maximum_value)?;
        if min > max {
            return Err(SliderError::InvalidBounds { min, max });
        }
        self.values.minimum_value = min;
        self.values.maximum_value = max;
        self.warn_if_degenerate();
        self.update_layer_frames();
        Ok(())
    }

    /// Sets the lower value as given and re-lays out.
    ///
    /// The value is stored unclamped; the thumb is still drawn on the track
    /// because the mapping clamps positions.
    pub fn set_lower_value(&mut self, value: f32) -> Result<(), SliderError> {
        self.values.lower_value = ensure_finite("lower_value", value)?;
        self.update_layer_frames();
        Ok(())
    }

    /// Sets the upper value as given and re-lays out. See [`Self::set_lower_value`].
    pub fn set_upper_value(&mut self, value: f32) -> Result<(), SliderError> {
        self.values.upper_value = ensure_finite("upper_value", value)?;
        self.update_layer_frames();
        Ok(())
    }

    /// Sets both interval ends, each clamped to `[min, max]`, with a single
    /// layout pass.
    ///
    /// Passing `lower > upper` is a caller error and is not corrected. With
    /// `animate`, thumbs move linearly from where they are displayed to their
    /// new positions over the style's animation duration; a later call
    /// replaces a running transition.
    pub fn set_value(&mut self, lower: f32, upper: f32, animate: bool) -> Result<(), SliderError> {
        let lower = ensure_finite("lower_value", lower)?;
        let upper = ensure_finite("upper_value", upper)?;
        if lower > upper {
            tracing::warn!(lower, upper, "set_value called with lower > upper");
        }
        self.values.assign_clamped(lower, upper);
        self.animate_next_layout = animate;
        self.update_layer_frames();
        Ok(())
    }

    /// Replaces bounds and interval together with a single layout pass.
    ///
    /// Values are clamped to the new bounds. With `animate`, the transition
    /// starts from the frames displayed before the call.
    pub(crate) fn reconfigure(
        &mut self,
        minimum_value: f32,
        maximum_value: f32,
        lower: f32,
        upper: f32,
        animate: bool,
    ) -> Result<(), SliderError> {
        self.ensure_not_dragging()?;
        let min = ensure_finite("minimum_value", minimum_value)?;
        let max = ensure_finite("maximum_value", maximum_value)?;
        let lower = ensure_finite("lower_value", lower)?;
        let upper = ensure_finite("upper_value", upper)?;
        if min > max {
            return Err(SliderError::InvalidBounds { min, max });
        }
        self.values.minimum_value = min;
        self.values.maximum_value = max;
        self.values.assign_clamped(lower, upper);
        self.warn_if_degenerate();
        self.animate_next_layout = animate;
        self.update_layer_frames();
        Ok(())
    }

    // ===== Style =====

    pub fn style(&self) -> &SliderStyle {
        &self.style
    }

    /// Replaces the style. Thumb visuals are re-resolved and a redraw is
    /// requested.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
        self.lower_thumb.set_tint(self.style.thumb_tint_color);
        self.upper_thumb.set_tint(self.style.thumb_tint_color);
        self.lower_thumb.set_images(self.style.lower_images());
        self.upper_thumb.set_images(self.style.upper_images());
        self.needs_redraw = true;
    }

    pub fn set_in_interval_track_color(&mut self, color: egui::Color32) {
        self.style.in_interval_track_color = color;
        self.needs_redraw = true;
    }

    pub fn set_out_interval_track_color(&mut self, color: egui::Color32) {
        self.style.out_interval_track_color = color;
        self.needs_redraw = true;
    }

    pub fn set_roundness(&mut self, roundness: f32) {
        self.style.set_roundness(roundness);
        self.needs_redraw = true;
    }

    // ===== Thumbs =====

    pub fn thumb(&self, kind: ThumbKind) -> &Thumb {
        match kind {
            ThumbKind::Lower => &self.lower_thumb,
            ThumbKind::Upper => &self.upper_thumb,
        }
    }

    fn thumb_mut(&mut self, kind: ThumbKind) -> &mut Thumb {
        match kind {
            ThumbKind::Lower => &mut self.lower_thumb,
            ThumbKind::Upper => &mut self.upper_thumb,
        }
    }

    // ===== Layout =====

    fn geometry(&self) -> MappingGeometry {
        self.values.geometry(self.size.x, self.size.y)
    }

    /// Maps a value to the x of a thumb center for the current size.
    pub fn position_for_value(&self, value: f32) -> f32 {
        position_for_value(value, &self.geometry())
    }

    /// Gives the control its size, running a layout pass if the size changed
    /// or no frames exist yet.
    ///
    /// Returns true if the frames fit the current size. A size with no usable
    /// span skips the pass and returns false; frames from an earlier size are
    /// kept but are stale until a usable size arrives.
    pub fn layout(&mut self, size: Vec2) -> bool {
        if size != self.size || self.frames.is_none() {
            self.size = size;
            self.update_layer_frames();
        }
        self.frames.is_some() && self.has_usable_size()
    }

    /// Repositions the track and thumbs from the current values and requests
    /// a track redraw.
    ///
    /// Does nothing while the control has no usable size (zero rect, or not
    /// wider than one thumb). Never emits value-changed notifications.
    pub fn update_layer_frames(&mut self) -> bool {
        let animate = std::mem::take(&mut self.animate_next_layout);

        let Some(target) = compute_frames(&self.geometry(), self.values.lower_value, self.values.upper_value)
        else {
            return false;
        };

        let displayed = self.displayed_frames();
        let running = self.transition.take();
        self.transition = if animate {
            displayed.filter(|from| *from != target).map(|from| {
                tracing::debug!(duration = self.style.animation_duration, "starting thumb transition");
                Transition::new(from, target, self.style.animation_duration)
            })
        } else {
            // A pass that lands on the same target keeps the transition running.
            running.filter(|transition| *transition.target() == target)
        };

        self.lower_thumb.set_frame(target.lower_thumb);
        self.upper_thumb.set_frame(target.upper_thumb);
        self.frames = Some(target);
        self.needs_redraw = true;
        self.layout_passes += 1;
        true
    }

    /// Frames from the last effective layout pass (transition targets).
    pub fn frames(&self) -> Option<SliderFrames> {
        self.frames
    }

    /// Frames to draw now, interpolated while a transition runs.
    pub fn displayed_frames(&self) -> Option<SliderFrames> {
        match &self.transition {
            Some(transition) => Some(transition.current()),
            None => self.frames,
        }
    }

    /// Number of effective layout passes so far.
    pub fn layout_passes(&self) -> u64 {
        self.layout_passes
    }

    // ===== Animation & Redraw =====

    /// Steps a running transition to host time `now` (seconds).
    ///
    /// Returns true while more frames are needed.
    pub fn advance(&mut self, now: f64) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };
        transition.advance(now);
        self.needs_redraw = true;
        if transition.is_finished() {
            tracing::debug!("thumb transition finished");
            self.transition = None;
            false
        } else {
            true
        }
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Returns and clears the redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Snapshot for the track renderer, control-local. `None` before the
    /// first effective layout pass.
    pub fn track_snapshot(&self) -> Option<TrackSnapshot> {
        let frames = self.displayed_frames()?;
        Some(TrackSnapshot {
            rect: frames.track,
            roundness: self.style.roundness(),
            in_interval_color: self.style.in_interval_track_color,
            out_interval_color: self.style.out_interval_track_color,
            lower_x: frames.lower_center_x(),
            upper_x: frames.upper_center_x(),
        })
    }

    // ===== Notifications =====

    /// Registers a listener called with `(lower, upper)` after every
    /// drag-driven value change.
    pub fn on_value_changed<F>(&mut self, listener: F)
    where
        F: FnMut(f32, f32) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn notify_value_changed(&mut self) {
        let (lower, upper) = (self.values.lower_value, self.values.upper_value);
        for listener in &mut self.listeners {
            listener(lower, upper);
        }
    }

    // ===== Pointer Tracking =====

    pub fn tracking_state(&self) -> TrackingState {
        self.interaction.state()
    }

    /// Handles pointer-down at `location`.
    ///
    /// Captures the lower thumb if its frame contains the location, else the
    /// upper thumb. Returns false (and changes nothing) when neither does.
    pub fn begin_tracking(&mut self, location: Pos2) -> bool {
        let captured = if self.lower_thumb.hit_test(location) {
            ThumbKind::Lower
        } else if self.upper_thumb.hit_test(location) {
            ThumbKind::Upper
        } else {
            tracing::trace!(x = location.x, y = location.y, "pointer down outside thumbs");
            return false;
        };

        self.interaction.capture(captured, location);
        self.thumb_mut(captured).set_highlighted(true);
        self.needs_redraw = true;
        tracing::debug!(thumb = ?captured, x = location.x, "tracking started");
        true
    }

    /// Handles pointer movement to `location` during a drag.
    ///
    /// Moves the captured value by the pixel delta since the previous
    /// location, clamps it so the thumbs never cross or leave the bounds, and
    /// notifies listeners. Returns false when no thumb is captured.
    pub fn continue_tracking(&mut self, location: Pos2) -> bool {
        let Some(captured) = self.interaction.captured() else {
            return false;
        };

        let geometry = self.geometry();
        let delta_x = self.interaction.advance_to(location);
        let value = self.values.drag(captured, delta_x, &geometry);
        tracing::trace!(thumb = ?captured, delta_x, value, "tracking");

        self.update_layer_frames();
        self.notify_value_changed();
        true
    }

    /// Handles pointer release. Both highlight flags are cleared.
    pub fn end_tracking(&mut self) {
        if self.interaction.is_dragging() {
            tracing::debug!(
                lower = self.values.lower_value,
                upper = self.values.upper_value,
                "tracking ended"
            );
        }
        self.interaction.release();
        self.lower_thumb.set_highlighted(false);
        self.upper_thumb.set_highlighted(false);
        self.needs_redraw = true;
    }

    /// Handles a cancelled gesture; same as a release.
    pub fn cancel_tracking(&mut self) {
        self.end_tracking();
    }

    // ===== Helpers =====

    fn ensure_not_dragging(&self) -> Result<(), SliderError> {
        if self.interaction.is_dragging() {
            Err(SliderError::BoundsLockedDuringDrag)
        } else {
            Ok(())
        }
    }

    fn warn_if_degenerate(&self) {
        if self.values.maximum_value <= self.values.minimum_value {
            tracing::warn!(
                min = self.values.minimum_value,
                max = self.values.maximum_value,
                "degenerate range, thumbs pinned to the left edge"
            );
        }
    }

    fn has_usable_size(&self) -> bool {
        let geometry = self.geometry();
        geometry.width > 0.0 && geometry.height > 0.0 && geometry.has_usable_span()
    }

    /// Rect of the whole control in local coordinates.
    pub fn local_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn day_slider() -> RangeSlider {
        let mut slider = RangeSlider::new(0.0, 1439.0);
        slider.layout(vec2(300.0, 24.0));
        slider
    }

    #[test]
    fn test_day_scenario_positions() {
        let slider = day_slider();
        assert_eq!(slider.position_for_value(0.0), 12.0);
        assert_eq!(slider.position_for_value(1439.0), 288.0);

        let frames = slider.frames().unwrap();
        assert_eq!(frames.lower_center_x(), 12.0);
        assert_eq!(frames.upper_center_x(), 288.0);
    }

    #[test]
    fn test_drag_lower_by_ten_pixels() {
        let mut slider = day_slider();
        assert!(slider.begin_tracking(pos2(12.0, 12.0)));
        assert_eq!(slider.tracking_state(), TrackingState::DraggingLower);
        assert!(slider.thumb(ThumbKind::Lower).is_highlighted());

        assert!(slider.continue_tracking(pos2(22.0, 12.0)));
        assert!((slider.lower_value() - 52.137).abs() < 0.01);
        assert_eq!(slider.upper_value(), 1439.0);

        slider.end_tracking();
        assert_eq!(slider.tracking_state(), TrackingState::Idle);
        assert!(!slider.thumb(ThumbKind::Lower).is_highlighted());
    }

    #[test]
    fn test_pointer_down_outside_thumbs_is_rejected() {
        let mut slider = day_slider();
        slider.take_redraw_request();

        assert!(!slider.begin_tracking(pos2(150.0, 12.0)));
        assert_eq!(slider.tracking_state(), TrackingState::Idle);
        assert!(!slider.take_redraw_request());
        assert!(!slider.continue_tracking(pos2(160.0, 12.0)));
    }

    #[test]
    fn test_overlap_captures_lower() {
        let mut slider = day_slider();
        slider.set_value(700.0, 710.0, false).unwrap();

        let lower = slider.thumb(ThumbKind::Lower).frame();
        let upper = slider.thumb(ThumbKind::Upper).frame();
        let overlap = lower.intersect(upper);
        assert!(overlap.is_positive());

        assert!(slider.begin_tracking(overlap.center()));
        assert_eq!(slider.tracking_state(), TrackingState::DraggingLower);
        assert!(!slider.thumb(ThumbKind::Upper).is_highlighted());
    }

    #[test]
    fn test_thumbs_never_cross() {
        let mut slider = day_slider();
        slider.set_value(600.0, 900.0, false).unwrap();

        let lower_center = slider.thumb(ThumbKind::Lower).frame().center();
        assert!(slider.begin_tracking(lower_center));
        slider.continue_tracking(lower_center + vec2(250.0, 0.0));
        assert_eq!(slider.lower_value(), 900.0);
        slider.end_tracking();

        slider.set_value(600.0, 900.0, false).unwrap();
        let upper_center = slider.thumb(ThumbKind::Upper).frame().center();
        assert!(slider.begin_tracking(upper_center));
        assert_eq!(slider.tracking_state(), TrackingState::DraggingUpper);
        slider.continue_tracking(upper_center - vec2(500.0, 0.0));
        assert_eq!(slider.upper_value(), 600.0);
        assert!(slider.values().is_ordered());
    }

    #[test]
    fn test_notifications_on_every_move() {
        let mut slider = day_slider();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        slider.on_value_changed(move |lower, upper| sink.borrow_mut().push((lower, upper)));

        slider.set_value(0.0, 1439.0, false).unwrap();
        slider.set_lower_value(10.0).unwrap();
        assert!(seen.borrow().is_empty());

        slider.set_lower_value(0.0).unwrap();
        slider.begin_tracking(pos2(12.0, 12.0));
        slider.continue_tracking(pos2(12.1, 12.0));
        slider.continue_tracking(pos2(12.1, 12.0));
        slider.continue_tracking(pos2(-50.0, 12.0));
        slider.end_tracking();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 3);
        assert!(seen[0].0 > 0.0);
        assert_eq!(seen[2], (0.0, 1439.0));
    }

    #[test]
    fn test_set_value_single_layout_pass() {
        let mut slider = day_slider();
        let before = slider.layout_passes();

        slider.set_value(600.0, 900.0, false).unwrap();
        assert_eq!(slider.layout_passes(), before + 1);
        assert!(!slider.is_animating());

        let frames = slider.frames().unwrap();
        assert_eq!(frames.lower_center_x(), slider.position_for_value(600.0));
        assert_eq!(frames.upper_center_x(), slider.position_for_value(900.0));
        assert_eq!(slider.displayed_frames(), Some(frames));
    }

    #[test]
    fn test_set_value_clamps_but_does_not_swap() {
        let mut slider = day_slider();
        slider.set_value(-20.0, 2000.0, false).unwrap();
        assert_eq!((slider.lower_value(), slider.upper_value()), (0.0, 1439.0));

        slider.set_value(900.0, 600.0, false).unwrap();
        assert_eq!((slider.lower_value(), slider.upper_value()), (900.0, 600.0));
    }

    #[test]
    fn test_direct_assignment_is_not_clamped() {
        let mut slider = day_slider();
        slider.set_upper_value(5000.0).unwrap();
        assert_eq!(slider.upper_value(), 5000.0);
        assert_eq!(slider.frames().unwrap().upper_center_x(), 288.0);

        assert!(slider.set_lower_value(f32::NAN).is_err());
        assert_eq!(slider.lower_value(), 0.0);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut slider = day_slider();
        slider.set_value(300.0, 1000.0, false).unwrap();

        slider.update_layer_frames();
        let first = slider.frames();
        slider.update_layer_frames();
        assert_eq!(slider.frames(), first);
    }

    #[test]
    fn test_zero_size_layout_is_noop() {
        let mut slider = RangeSlider::new(0.0, 100.0);
        assert!(!slider.layout(Vec2::ZERO));
        assert!(!slider.layout(vec2(20.0, 24.0)));
        assert_eq!(slider.layout_passes(), 0);
        assert!(slider.frames().is_none());
        assert!(slider.track_snapshot().is_none());
        assert!(!slider.begin_tracking(pos2(0.0, 0.0)));
    }

    #[test]
    fn test_degenerate_range_pins_thumbs() {
        let mut slider = RangeSlider::new(5.0, 5.0);
        slider.layout(vec2(300.0, 24.0));
        let frames = slider.frames().unwrap();
        assert_eq!(frames.lower_center_x(), 12.0);
        assert_eq!(frames.upper_center_x(), 12.0);

        assert!(slider.begin_tracking(pos2(12.0, 12.0)));
        slider.continue_tracking(pos2(100.0, 12.0));
        assert_eq!(slider.lower_value(), 5.0);
    }

    #[test]
    fn test_bounds_locked_during_drag() {
        let mut slider = day_slider();
        slider.begin_tracking(pos2(12.0, 12.0));
        assert_eq!(slider.set_maximum_value(100.0), Err(SliderError::BoundsLockedDuringDrag));
        slider.cancel_tracking();
        assert!(slider.set_maximum_value(100.0).is_ok());
        assert_eq!(
            slider.set_bounds(10.0, 1.0),
            Err(SliderError::InvalidBounds { min: 10.0, max: 1.0 })
        );
    }

    #[test]
    fn test_animated_set_value() {
        let mut slider = day_slider();
        slider.set_value(600.0, 900.0, true).unwrap();
        assert!(slider.is_animating());

        let target = slider.frames().unwrap();
        assert_eq!(slider.displayed_frames().unwrap().lower_center_x(), 12.0);

        assert!(slider.advance(1.0));
        assert!(slider.advance(1.15));
        let mid = slider.displayed_frames().unwrap().lower_center_x();
        assert!(mid > 12.0 && mid < target.lower_center_x());

        assert!(!slider.advance(1.4));
        assert!(!slider.is_animating());
        assert_eq!(slider.displayed_frames(), Some(target));
    }

    #[test]
    fn test_animated_set_value_replaces_running_transition() {
        let mut slider = day_slider();
        slider.set_value(600.0, 900.0, true).unwrap();
        slider.advance(1.0);
        slider.advance(1.15);
        let midway = slider.displayed_frames().unwrap();

        slider.set_value(300.0, 1200.0, true).unwrap();
        assert!(slider.is_animating());
        assert_eq!(slider.displayed_frames(), Some(midway));

        let target = slider.frames().unwrap();
        assert!((target.lower_center_x() - slider.position_for_value(300.0)).abs() < 1e-3);
        assert!((target.upper_center_x() - slider.position_for_value(1200.0)).abs() < 1e-3);

        assert!(slider.advance(2.0));
        assert!(!slider.advance(3.0));
        assert_eq!(slider.displayed_frames(), Some(target));
    }

    #[test]
    fn test_layout_pass_with_same_target_keeps_transition() {
        let mut slider = day_slider();
        slider.set_value(600.0, 900.0, true).unwrap();
        slider.advance(1.0);
        slider.advance(1.1);
        let displayed = slider.displayed_frames();

        assert!(slider.update_layer_frames());
        assert!(slider.is_animating());
        assert_eq!(slider.displayed_frames(), displayed);
    }

    #[test]
    fn test_drag_during_transition_snaps_to_target() {
        let mut slider = day_slider();
        slider.set_value(600.0, 900.0, true).unwrap();
        slider.advance(1.0);
        slider.advance(1.1);

        let start = slider.thumb(ThumbKind::Lower).frame().center();
        assert!(slider.begin_tracking(start));
        assert!(slider.continue_tracking(pos2(start.x + 10.0, start.y)));

        assert!(!slider.is_animating());
        assert_eq!(slider.displayed_frames(), slider.frames());
        let lower_x = slider.displayed_frames().unwrap().lower_center_x();
        assert!((lower_x - (start.x + 10.0)).abs() < 1e-3);
    }

    #[test]
    fn test_reconfigure_is_one_pass_from_displayed_frames() {
        let mut slider = RangeSlider::new(0.0, 100.0);
        slider.layout(vec2(300.0, 24.0));
        let before = slider.layout_passes();
        let displayed = slider.displayed_frames().unwrap();

        slider.reconfigure(0.0, 1439.0, 600.0, 900.0, true).unwrap();

        assert_eq!(slider.layout_passes(), before + 1);
        assert!(slider.is_animating());
        assert_eq!(slider.displayed_frames(), Some(displayed));
        assert_eq!(slider.maximum_value(), 1439.0);
        assert_eq!(slider.upper_value(), 900.0);
    }

    #[test]
    fn test_reconfigure_refused_while_dragging() {
        let mut slider = day_slider();
        assert!(slider.begin_tracking(pos2(12.0, 12.0)));
        assert_eq!(
            slider.reconfigure(0.0, 10.0, 0.0, 10.0, false),
            Err(SliderError::BoundsLockedDuringDrag)
        );
        assert_eq!(slider.maximum_value(), 1439.0);
    }

    #[test]
    fn test_layout_below_thumb_width_reports_stale_frames() {
        let mut slider = day_slider();
        let frames = slider.frames();

        assert!(!slider.layout(vec2(20.0, 24.0)));
        assert_eq!(slider.frames(), frames);

        assert!(slider.layout(vec2(300.0, 24.0)));
    }

    #[test]
    fn test_redraw_requests() {
        let mut slider = day_slider();
        assert!(slider.take_redraw_request());
        assert!(!slider.take_redraw_request());

        slider.set_in_interval_track_color(egui::Color32::RED);
        assert!(slider.take_redraw_request());
        slider.set_lower_value(100.0).unwrap();
        assert!(slider.take_redraw_request());
    }
}
