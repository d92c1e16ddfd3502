//! UI panel rendering subsystem
//!
//! - Header panel (theme selector, reset button, roundness control)
//! - Central picker panel (interval label and range slider)
//! - Status bar (values and tracking state)
//! - Panel manager (panel orchestration and layout)

pub mod header;
pub mod picker_panel;
pub mod status_bar;
pub mod panel_manager;
