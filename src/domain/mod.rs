//! Pure geometry for the range slider.
//!
//! This module contains stateless logic that can be tested without a UI:
//! - Value/pixel mapping (value to thumb center, pixel delta to value delta)
//! - Frame layout (track rect and thumb squares)

pub mod value_mapping;
pub mod frames;

pub use value_mapping::{bound_value, position_for_value, value_delta_for_pixels, MappingGeometry};
pub use frames::{compute_frames, SliderFrames};
