//! Thumb image assets for the demo.
//!
//! The "Ring" (resting) and "Dot" (active) images are rasterized at startup
//! and registered as egui textures.

use std::collections::HashMap;

use egui::{Color32, ColorImage, TextureHandle, TextureId, TextureOptions};
use rslider::ThumbImageProvider;

/// Side length of the generated images in pixels.
const IMAGE_SIZE: usize = 48;

/// Named thumb textures.
pub struct ThumbTextures {
    textures: HashMap<String, TextureHandle>,
}

impl ThumbTextures {
    /// Rasterizes the "Ring" and "Dot" images in the given colors and uploads
    /// them.
    pub fn load(ctx: &egui::Context, tint: Color32, ring: Color32) -> Self {
        let mut textures = HashMap::new();
        for (name, image) in [
            ("Ring", ring_image(IMAGE_SIZE, tint, ring)),
            ("Dot", dot_image(IMAGE_SIZE, tint)),
        ] {
            let handle = ctx.load_texture(format!("thumb_{name}"), image, TextureOptions::LINEAR);
            textures.insert(name.to_string(), handle);
        }
        Self { textures }
    }
}

impl ThumbImageProvider for ThumbTextures {
    fn image(&self, name: &str) -> Option<TextureId> {
        self.textures.get(name).map(|handle| handle.id())
    }
}

/// Filled disc of `tint` with an inner disc of `ring` color.
pub fn ring_image(size: usize, tint: Color32, ring: Color32) -> ColorImage {
    rasterize(size, |distance, radius| {
        if distance <= radius * 0.55 {
            Some(ring)
        } else if distance <= radius {
            Some(tint)
        } else {
            None
        }
    })
}

/// Filled disc of `tint`.
pub fn dot_image(size: usize, tint: Color32) -> ColorImage {
    rasterize(size, |distance, radius| (distance <= radius).then_some(tint))
}

/// Samples each pixel center; `shade` receives the distance from the image
/// center and the disc radius.
fn rasterize(size: usize, shade: impl Fn(f32, f32) -> Option<Color32>) -> ColorImage {
    let radius = size as f32 / 2.0;
    let mut rgba = Vec::with_capacity(size * size * 4);
    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - radius;
            let dy = y as f32 + 0.5 - radius;
            let color = shade((dx * dx + dy * dy).sqrt(), radius).unwrap_or(Color32::TRANSPARENT);
            rgba.extend_from_slice(&color.to_srgba_unmultiplied());
        }
    }
    ColorImage::from_rgba_unmultiplied([size, size], &rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(image: &ColorImage, x: usize, y: usize) -> Color32 {
        image.pixels[y * image.size[0] + x]
    }

    #[test]
    fn test_ring_has_hole() {
        let image = ring_image(48, Color32::BLUE, Color32::WHITE);
        assert_eq!(image.size, [48, 48]);
        assert_eq!(pixel(&image, 24, 24), Color32::WHITE);
        assert_eq!(pixel(&image, 24, 2), Color32::BLUE);
        assert_eq!(pixel(&image, 0, 0), Color32::TRANSPARENT);
    }

    #[test]
    fn test_dot_is_filled() {
        let image = dot_image(48, Color32::RED);
        assert_eq!(pixel(&image, 24, 24), Color32::RED);
        assert_eq!(pixel(&image, 47, 47), Color32::TRANSPARENT);
    }
}
