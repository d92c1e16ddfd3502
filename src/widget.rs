//! egui integration for [`RangeSlider`].
//!
//! The widget allocates `available_width x height`, feeds the control its size,
//! translates egui drag responses into begin/continue/end tracking calls in
//! control-local coordinates, and paints the track and thumbs.

use eframe::egui;

use crate::range_slider::RangeSlider;
use crate::rendering::{paint_thumb, paint_track};
use crate::state::ThumbKind;

/// Default control height; thumbs are squares of this side.
pub const DEFAULT_HEIGHT: f32 = 24.0;

/// Widget adapter borrowing a slider for one frame.
///
/// # Examples
/// ```ignore
/// let response = ui.add(RangeSliderWidget::new(&mut slider));
/// if response.changed() {
///     label = format_interval(slider.lower_value(), slider.upper_value());
/// }
/// ```
pub struct RangeSliderWidget<'a> {
    slider: &'a mut RangeSlider,
    height: f32,
    width: Option<f32>,
}

impl<'a> RangeSliderWidget<'a> {
    pub fn new(slider: &'a mut RangeSlider) -> Self {
        Self {
            slider,
            height: DEFAULT_HEIGHT,
            width: None,
        }
    }

    /// Fixed height of the control.
    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Fixed width instead of the available width.
    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}

impl egui::Widget for RangeSliderWidget<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let width = self.width.unwrap_or_else(|| ui.available_width());
        let (rect, mut response) =
            ui.allocate_exact_size(egui::vec2(width, self.height), egui::Sense::click_and_drag());
        let slider = self.slider;
        let laid_out = slider.layout(rect.size());

        let to_local = |pos: egui::Pos2| pos - rect.min.to_vec2();

        if laid_out && response.drag_started() {
            let origin = ui
                .input(|i| i.pointer.press_origin())
                .or_else(|| response.interact_pointer_pos());
            if let Some(origin) = origin {
                slider.begin_tracking(to_local(origin));
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                if slider.continue_tracking(to_local(pos)) {
                    response.mark_changed();
                }
            }
        }
        if response.drag_stopped() {
            slider.end_tracking();
        }

        if slider.advance(ui.input(|i| i.time)) {
            ui.ctx().request_repaint();
        }
        // Changes made outside this frame's input still need a new frame.
        if slider.take_redraw_request() {
            ui.ctx().request_repaint();
        }

        // Stale frames from a wider size would paint outside the rect.
        if laid_out && ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect.expand(1.0));
            if let Some(snapshot) = slider.track_snapshot() {
                paint_track(&painter, &snapshot.translate(rect.min.to_vec2()));
            }
            if let Some(frames) = slider.displayed_frames() {
                let offset = rect.min.to_vec2();
                paint_thumb(
                    &painter,
                    frames.lower_thumb.translate(offset),
                    slider.thumb(ThumbKind::Lower).appearance(),
                );
                paint_thumb(
                    &painter,
                    frames.upper_thumb.translate(offset),
                    slider.thumb(ThumbKind::Upper).appearance(),
                );
            }
        }

        response
    }
}
