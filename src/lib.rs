pub mod domain;
pub mod state;
pub mod rendering;
pub mod error;
pub mod style;
pub mod theme;
pub mod config;
pub mod range_slider;
pub mod widget;

// Export the control
pub use range_slider::RangeSlider;
pub use widget::{RangeSliderWidget, DEFAULT_HEIGHT};

// Export geometry
pub use domain::{position_for_value, value_delta_for_pixels, MappingGeometry, SliderFrames};

// Export state types
pub use state::{RangeValues, ThumbAppearance, ThumbImageProvider, ThumbImages, ThumbKind, ThumbVisual, TrackingState};

// Export rendering snapshot
pub use rendering::TrackSnapshot;

// Export configuration and errors
pub use config::SliderConfig;
pub use error::SliderError;
pub use style::{SliderStyle, StyleSettings};

// Export theme support
pub use theme::{Theme, ThemeColors, ThemeManager, hex_to_color32, parse_hex_color, color32_to_hex, adjust_brightness};
