//! Presentation layer for the demo: visual assets that depend on the theme.

pub mod thumb_images;

pub use thumb_images::ThumbTextures;
