use bevy::prelude::*;
use looma_helpers::token_field::TokenField;

use crate::core::TokenSprite;

/// Render adapter: paints token glyph entities at the simulation's
/// coordinates. The simulation uses top-left-origin viewport pixels; Bevy
/// world space is center-origin with y up.
pub fn sync_token_sprites(
    field: Res<TokenField>,
    windows: Query<&Window>,
    mut sprites: Query<(&TokenSprite, &mut Transform)>,
) {
    let window = windows.single();
    let half = Vec2::new(window.resolution.width(), window.resolution.height()) / 2.0;

    for (sprite, mut transform) in &mut sprites {
        let Some(token) = field.get(sprite.0) else {
            continue;
        };
        let center = token.center();
        transform.translation.x = center.x - half.x;
        transform.translation.y = half.y - center.y;
    }
}

/// Keeps the simulation viewport in sync with the window, clamping tokens
/// back inside after a resize.
pub fn update_field_viewport(windows: Query<&Window>, mut field: ResMut<TokenField>) {
    let window = windows.single();
    let size = Vec2::new(window.resolution.width(), window.resolution.height());
    if field.viewport() != size {
        field.set_viewport(size);
    }
}

/// Screen-space rect centered horizontally at the given height, for
/// pointer hit tests.
pub fn screen_rect_centered(window: &Window, center_y: f32, size: Vec2) -> Rect {
    let center = Vec2::new(window.resolution.width() / 2.0, center_y);
    Rect::from_center_size(center, size)
}

/// World translation for a screen-space point.
pub fn screen_to_world(window: &Window, point: Vec2) -> Vec2 {
    Vec2::new(
        point.x - window.resolution.width() / 2.0,
        window.resolution.height() / 2.0 - point.y,
    )
}
