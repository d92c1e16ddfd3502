//! Pointer drag tracking state.
//!
//! This module encapsulates the state of an ongoing drag gesture: which thumb
//! is captured and where the pointer was last seen.

use egui::Pos2;

use super::thumb::ThumbKind;

/// Drag state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    #[default]
    Idle,
    DraggingLower,
    DraggingUpper,
}

impl TrackingState {
    /// Returns the thumb captured by this state, if any.
    pub fn captured(&self) -> Option<ThumbKind> {
        match self {
            TrackingState::Idle => None,
            TrackingState::DraggingLower => Some(ThumbKind::Lower),
            TrackingState::DraggingUpper => Some(ThumbKind::Upper),
        }
    }

    fn dragging(kind: ThumbKind) -> Self {
        match kind {
            ThumbKind::Lower => TrackingState::DraggingLower,
            ThumbKind::Upper => TrackingState::DraggingUpper,
        }
    }
}

/// State related to an ongoing pointer drag.
///
/// Responsibilities:
/// - Tracking which thumb (if any) is captured
/// - Remembering the previous pointer location for incremental deltas
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    state: TrackingState,
    /// Last pointer location in control-local coordinates
    previous_location: Pos2,
}

impl InteractionState {
    /// Creates a new interaction state with no active drag.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Returns true if a thumb is captured.
    pub fn is_dragging(&self) -> bool {
        self.state != TrackingState::Idle
    }

    pub fn captured(&self) -> Option<ThumbKind> {
        self.state.captured()
    }

    pub fn previous_location(&self) -> Pos2 {
        self.previous_location
    }

    // ===== Transitions =====

    /// Starts a drag session capturing `kind` at `location`.
    pub fn capture(&mut self, kind: ThumbKind, location: Pos2) {
        self.state = TrackingState::dragging(kind);
        self.previous_location = location;
    }

    /// Stores `location` and returns the horizontal movement since the
    /// previous one.
    pub fn advance_to(&mut self, location: Pos2) -> f32 {
        let delta_x = location.x - self.previous_location.x;
        self.previous_location = location;
        delta_x
    }

    /// Ends the drag session.
    pub fn release(&mut self) {
        self.state = TrackingState::Idle;
    }
}
