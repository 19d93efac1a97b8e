use bevy::prelude::*;
use looma_helpers::emoji::{self, AtlasValidation, MoodAtlas};
use looma_helpers::floating_text;
use looma_helpers::{FONT, WINDOW_HEIGHT, WINDOW_WIDTH};

use crate::core::{LoggedMoment, Screen};
use crate::log::{pressed_back, spawn_wizard_chrome};

const CARD_SIZE: Vec2 = Vec2::new(WINDOW_WIDTH - 60.0, 240.0);

#[derive(Component, Default)]
pub struct ConfirmUi;

/// Celebration card for the moment that was just saved.
pub fn try_spawn_confirm_screen(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    atlas: Option<Res<MoodAtlas>>,
    validation: Option<Res<AtlasValidation>>,
    logged: Option<Res<LoggedMoment>>,
    windows: Query<&Window>,
    existing: Query<&ConfirmUi>,
) {
    if !existing.is_empty() {
        return;
    }
    let Some(logged) = logged else {
        return;
    };
    let window = windows.single();
    let moment = &logged.0;

    commands.spawn((
        Sprite::from_color(moment.color.color().with_alpha(0.35), CARD_SIZE),
        Transform::from_translation(Vec3::new(0.0, WINDOW_HEIGHT / 12.0, -1.0)),
        ConfirmUi,
    ));

    if let (Some(atlas), Some(validation)) = (atlas, validation) {
        if let Some(entity) = emoji::spawn_mood_sprite(
            &mut commands,
            &atlas,
            &validation,
            moment.mood,
            Vec2::new(0.0, WINDOW_HEIGHT / 12.0 + 60.0),
            0.5,
        ) {
            commands.entity(entity).insert(ConfirmUi);
        }
    }

    commands.spawn((
        Text2d::new(moment.text.clone()),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::srgb(0.25, 0.22, 0.28)),
        TextLayout::new_with_justify(JustifyText::Center),
        bevy::text::TextBounds::from(Vec2::new(CARD_SIZE.x - 32.0, 120.0)),
        Transform::from_translation(Vec3::new(0.0, WINDOW_HEIGHT / 12.0 - 30.0, 0.0)),
        ConfirmUi,
    ));
    commands.spawn((
        Text2d::new(format!(
            "{} {}",
            moment.mood.emoji(),
            moment.mood.label()
        )),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.45, 0.42, 0.48)),
        Transform::from_translation(Vec3::new(0.0, -WINDOW_HEIGHT / 6.0, 0.0)),
        ConfirmUi,
    ));
    commands.spawn((
        Text2d::new("tap anywhere to finish"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.55, 0.52, 0.58)),
        Transform::from_translation(Vec3::new(0.0, -WINDOW_HEIGHT / 3.0, 0.0)),
        ConfirmUi,
    ));

    floating_text::spawn_floating_text(
        &mut commands,
        Vec2::new(WINDOW_WIDTH / 2.0 - 70.0, 90.0),
        "moment saved!",
        moment.color.color().to_srgba(),
        &asset_server,
    );

    spawn_wizard_chrome::<ConfirmUi>(&mut commands, &asset_server, window, 3, 4);
}

/// Any tap outside the back arrow wraps up and heads home.
pub fn handle_confirm_tap(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if pressed_back(&mouse_input, &touch_input, &windows) == Some(false) {
        next_screen.set(Screen::Home);
    }
}

pub fn cleanup_confirm_screen(mut commands: Commands, query: Query<Entity, With<ConfirmUi>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<LoggedMoment>();
}
