use core::time::Duration;

use bevy::prelude::*;

use crate::FONT;

/// Short-lived feedback text that drifts upward and fades out.
#[derive(Component)]
pub struct FloatingText {
    timer: Timer,
    initial_position: Vec2,
}

pub fn spawn_floating_text(
    commands: &mut Commands,
    position: Vec2,
    text: &str,
    color: Srgba,
    asset_server: &Res<AssetServer>,
) {
    commands.spawn((
        Text::new(text),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::Srgba(color)),
        Node {
            position_type: PositionType::Relative,
            left: Val::Px(position.x + 20.0),
            top: Val::Px(position.y),
            ..default()
        },
        FloatingText {
            timer: Timer::new(Duration::from_secs(1), TimerMode::Once),
            initial_position: position,
        },
    ));
}

pub fn animate_floating_text(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut Transform, &mut TextColor, &mut FloatingText)>,
) {
    for (entity, mut transform, mut color, mut floating) in &mut query {
        floating.timer.tick(time.delta());
        let progress = floating.timer.fraction();

        // Drift upwards and fade out
        transform.translation.y = 40.0f32.mul_add(progress, floating.initial_position.y);
        color.0.set_alpha(1.0 - progress);

        if floating.timer.finished() {
            commands.entity(entity).despawn();
        }
    }
}
