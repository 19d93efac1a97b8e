use bevy::prelude::*;

use super::TokenGlyph;

/// Axis-aligned drop target in viewport coordinates. The padding margin
/// enlarges the hit test only, making drops forgiving without drawing a
/// bigger zone.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DropZone {
    rect: Rect,
    padding: f32,
}

/// Whether the current drag is hovering the drop zone. Drives the zone
/// highlight.
#[derive(Resource, Debug, Default)]
pub struct DropZoneHover(pub bool);

/// Sent exactly once when a token is dropped into the zone.
#[derive(Event, Debug, Clone, Copy)]
pub struct TokenDeposited {
    pub glyph: TokenGlyph,
}

impl DropZone {
    pub const fn new(rect: Rect, padding: f32) -> Self {
        Self { rect, padding }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let pad = Vec2::splat(self.padding);
        Rect::from_corners(self.rect.min - pad, self.rect.max + pad).contains(point)
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_enlarges_the_hit_region() {
        let zone = DropZone::new(Rect::new(100.0, 100.0, 200.0, 150.0), 50.0);

        assert!(zone.contains(Vec2::new(150.0, 125.0)), "inside the rect");
        assert!(zone.contains(Vec2::new(60.0, 100.0)), "inside the padding");
        assert!(
            !zone.contains(Vec2::new(40.0, 100.0)),
            "outside even the padding"
        );
    }

    #[test]
    fn center_is_the_unpadded_center() {
        let zone = DropZone::new(Rect::new(100.0, 100.0, 200.0, 150.0), 50.0);
        assert_eq!(zone.center(), Vec2::new(150.0, 125.0));
    }
}
