//! Thumb entities and their two-state visual.

use egui::{Color32, Rect, TextureId};

/// Identifies one of the two thumbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbKind {
    Lower,
    Upper,
}

/// Visual variant selected by the highlight flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThumbVisual {
    #[default]
    Resting,
    Active,
}

/// What a thumb looks like once its visual has been resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThumbAppearance {
    Image(TextureId),
    /// Fallback when no image is supplied
    Circle(Color32),
}

/// Images for the resting and active visual of one thumb.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbImages {
    pub resting: Option<TextureId>,
    pub active: Option<TextureId>,
}

impl ThumbImages {
    /// Looks both images up by name. Missing names resolve to `None`, which
    /// selects the circle fallback.
    pub fn from_provider(provider: &dyn ThumbImageProvider, resting: &str, active: &str) -> Self {
        Self {
            resting: provider.image(resting),
            active: provider.image(active),
        }
    }
}

/// Source of thumb images by asset name.
pub trait ThumbImageProvider {
    fn image(&self, name: &str) -> Option<TextureId>;
}

/// One draggable handle.
///
/// The appearance is resolved when the highlight flag or the images change
/// and cached until the next change.
#[derive(Debug, Clone)]
pub struct Thumb {
    kind: ThumbKind,
    highlighted: bool,
    images: ThumbImages,
    tint: Color32,
    appearance: ThumbAppearance,
    /// Frame from the last layout pass, control-local
    frame: Rect,
}

impl Thumb {
    pub fn new(kind: ThumbKind, tint: Color32) -> Self {
        Self {
            kind,
            highlighted: false,
            images: ThumbImages::default(),
            tint,
            appearance: ThumbAppearance::Circle(tint),
            frame: Rect::NOTHING,
        }
    }

    pub fn kind(&self) -> ThumbKind {
        self.kind
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn visual(&self) -> ThumbVisual {
        if self.highlighted {
            ThumbVisual::Active
        } else {
            ThumbVisual::Resting
        }
    }

    pub fn appearance(&self) -> ThumbAppearance {
        self.appearance
    }

    pub fn images(&self) -> ThumbImages {
        self.images
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Returns true if `location` falls inside the current frame.
    pub fn hit_test(&self, location: egui::Pos2) -> bool {
        self.frame.contains(location)
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        if self.highlighted != highlighted {
            self.highlighted = highlighted;
            self.resolve_appearance();
        }
    }

    pub fn set_images(&mut self, images: ThumbImages) {
        self.images = images;
        self.resolve_appearance();
    }

    pub fn set_tint(&mut self, tint: Color32) {
        self.tint = tint;
        self.resolve_appearance();
    }

    pub(crate) fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn resolve_appearance(&mut self) {
        let image = match self.visual() {
            ThumbVisual::Resting => self.images.resting,
            ThumbVisual::Active => self.images.active,
        };
        self.appearance = match image {
            Some(texture) => ThumbAppearance::Image(texture),
            None => ThumbAppearance::Circle(self.tint),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_tinted_circle() {
        let thumb = Thumb::new(ThumbKind::Lower, Color32::BLUE);
        assert_eq!(thumb.visual(), ThumbVisual::Resting);
        assert_eq!(thumb.appearance(), ThumbAppearance::Circle(Color32::BLUE));
    }

    #[test]
    fn test_highlight_swaps_image() {
        let ring = TextureId::User(1);
        let dot = TextureId::User(2);
        let mut thumb = Thumb::new(ThumbKind::Upper, Color32::BLUE);
        thumb.set_images(ThumbImages {
            resting: Some(ring),
            active: Some(dot),
        });
        assert_eq!(thumb.appearance(), ThumbAppearance::Image(ring));

        thumb.set_highlighted(true);
        assert_eq!(thumb.visual(), ThumbVisual::Active);
        assert_eq!(thumb.appearance(), ThumbAppearance::Image(dot));

        thumb.set_highlighted(false);
        assert_eq!(thumb.appearance(), ThumbAppearance::Image(ring));
    }

    #[test]
    fn test_missing_active_image_falls_back() {
        let mut thumb = Thumb::new(ThumbKind::Lower, Color32::RED);
        thumb.set_images(ThumbImages {
            resting: Some(TextureId::User(7)),
            active: None,
        });
        thumb.set_highlighted(true);
        assert_eq!(thumb.appearance(), ThumbAppearance::Circle(Color32::RED));
    }

    struct NamedImages;

    impl ThumbImageProvider for NamedImages {
        fn image(&self, name: &str) -> Option<TextureId> {
            match name {
                "Ring" => Some(TextureId::User(10)),
                "Dot" => Some(TextureId::User(11)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_images_from_provider() {
        let images = ThumbImages::from_provider(&NamedImages, "Ring", "Dot");
        assert_eq!(images.resting, Some(TextureId::User(10)));
        assert_eq!(images.active, Some(TextureId::User(11)));

        let missing = ThumbImages::from_provider(&NamedImages, "Ring", "Star");
        assert_eq!(missing.active, None);
    }

    #[test]
    fn test_hit_test_before_layout() {
        let thumb = Thumb::new(ThumbKind::Lower, Color32::RED);
        assert!(!thumb.hit_test(egui::pos2(0.0, 0.0)));
    }
}
