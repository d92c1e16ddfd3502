//! Rendering subsystem for drawing the slider
//!
//! This module contains the stateless drawing routines:
//! - Track rendering (full bar plus highlighted interval)
//! - Thumb rendering (image or fallback circle)

pub mod track_renderer;
pub mod thumb_renderer;

pub use track_renderer::{paint_track, track_shapes, TrackSnapshot};
pub use thumb_renderer::{paint_thumb, thumb_shape};
