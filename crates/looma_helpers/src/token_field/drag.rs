use bevy::prelude::*;

use super::{DropZone, DropZoneHover, TokenDeposited, TokenField, TokenId};
use crate::input::{
    just_pressed_screen_position, just_released_screen_position, pressed_screen_position,
};

/// Tracks the in-flight drag gesture and estimates the release velocity
/// from the pointer's movement between frames.
#[derive(Resource, Debug, Default)]
pub struct DragGesture {
    token: Option<TokenId>,
    last_point: Option<Vec2>,
    /// px/s, latest estimate.
    velocity: Vec2,
}

impl DragGesture {
    fn start(&mut self, token: TokenId, point: Vec2) {
        self.token = Some(token);
        self.last_point = Some(point);
        self.velocity = Vec2::ZERO;
    }

    fn sample(&mut self, point: Vec2, dt: f32) {
        if let Some(last) = self.last_point {
            if dt > 0.0 {
                self.velocity = (point - last) / dt;
            }
        }
        self.last_point = Some(point);
    }

    fn finish(&mut self) -> Vec2 {
        let velocity = self.velocity;
        *self = Self::default();
        velocity
    }
}

/// Picks up the token under a fresh press.
pub fn begin_token_drag(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    mut field: ResMut<TokenField>,
    mut gesture: ResMut<DragGesture>,
) {
    let Some(point) = just_pressed_screen_position(&mouse_input, &touch_input, &windows) else {
        return;
    };
    let Some(id) = field.token_at(point) else {
        return;
    };
    if field.begin_drag(id) {
        gesture.start(id, point);
    }
}

/// While the pointer is held, the token follows it exactly; physics is
/// bypassed for the dragged token. Also publishes whether the pointer is
/// hovering the drop zone so the UI can highlight it.
pub fn update_token_drag(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    time: Res<Time>,
    mut field: ResMut<TokenField>,
    mut gesture: ResMut<DragGesture>,
    zone: Option<Res<DropZone>>,
    hover: Option<ResMut<DropZoneHover>>,
) {
    let Some(id) = gesture.token else {
        return;
    };
    let Some(point) = pressed_screen_position(&mouse_input, &touch_input, &windows) else {
        return;
    };

    gesture.sample(point, time.delta_secs());
    field.drag_to(id, point);

    if let (Some(zone), Some(mut hover)) = (zone, hover) {
        hover.0 = zone.contains(point);
    }
}

/// On release: deposit into the drop zone when hit, otherwise flick the
/// token back into the simulation with the estimated release velocity.
pub fn end_token_drag(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    mut field: ResMut<TokenField>,
    mut gesture: ResMut<DragGesture>,
    zone: Option<Res<DropZone>>,
    hover: Option<ResMut<DropZoneHover>>,
    mut deposited: EventWriter<TokenDeposited>,
) {
    let Some(id) = gesture.token else {
        return;
    };
    if !mouse_input.just_released(MouseButton::Left) && !touch_input.any_just_released() {
        return;
    }

    let point = just_released_screen_position(&mouse_input, &touch_input, &windows)
        .or(gesture.last_point)
        .unwrap_or_default();
    let release_velocity = gesture.finish();

    if let Some(mut hover) = hover {
        hover.0 = false;
    }

    let Some(zone) = zone else {
        field.end_drag(id, release_velocity);
        return;
    };

    if let Some(glyph) = field.end_drag_over(id, point, &zone, release_velocity) {
        deposited.send(TokenDeposited { glyph });
    }
}
