//! State management for the range slider.
//!
//! This module contains state-only logic (no painting):
//! - Range values (bounds and selected interval)
//! - Thumbs (highlight flag, resolved appearance, frame)
//! - Interaction state (drag tracking)
//! - Transitions (animated thumb movement)

mod range_values;
mod thumb;
mod interaction;
mod transition;

pub use range_values::RangeValues;
pub use thumb::{Thumb, ThumbAppearance, ThumbImageProvider, ThumbImages, ThumbKind, ThumbVisual};
pub use interaction::{InteractionState, TrackingState};
pub use transition::{Transition, DEFAULT_ANIMATION_DURATION};
