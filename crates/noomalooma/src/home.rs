use bevy::prelude::*;
use looma_helpers::input::just_pressed_screen_position;
use looma_helpers::palette::PlayColor;
use looma_helpers::token_field::{DragGesture, TokenField, TokenGlyph};
use looma_helpers::{FONT, WINDOW_HEIGHT};
use strum::IntoEnumIterator;

use crate::core::{Screen, TokenSprite};
use crate::render::{screen_rect_centered, screen_to_world};

/// Decorative bouncing letters behind the title.
const LETTER_COUNT: usize = 6;
const LETTER_SIZE: f32 = 72.0;

const LOG_BUTTON_SIZE: Vec2 = Vec2::new(260.0, 56.0);
const WRAPPED_BUTTON_SIZE: Vec2 = Vec2::new(240.0, 40.0);

#[derive(Component)]
pub struct HomeUi;

pub fn try_spawn_home_screen(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    windows: Query<&Window>,
    existing: Query<&HomeUi>,
) {
    if !existing.is_empty() {
        return;
    }
    let window = windows.single();
    let viewport = Vec2::new(window.resolution.width(), window.resolution.height());

    // Decorative letter tokens: no drop zone, drag and flick only
    let field = TokenField::new(
        (0..LETTER_COUNT).map(|_| TokenGlyph::Letter('o')),
        viewport,
        LETTER_SIZE,
    );

    let mut colors = PlayColor::iter().cycle();
    for token in field.tokens() {
        let color = colors.next().map_or(Color::WHITE, PlayColor::color);
        commands.spawn((
            Text2d::new("o"),
            TextFont {
                font: asset_server.load(FONT),
                font_size: LETTER_SIZE,
                ..default()
            },
            TextColor(color),
            Transform::from_translation(Vec3::new(0.0, 0.0, -1.0)),
            TokenSprite(token.id),
            HomeUi,
        ));
    }

    commands.insert_resource(field);
    commands.init_resource::<DragGesture>();

    // Title and tagline
    commands.spawn((
        Text2d::new("noomalooma"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 48.0,
            ..default()
        },
        TextColor(Color::srgb(0.25, 0.22, 0.28)),
        TextLayout::new_with_justify(JustifyText::Center),
        Transform::from_translation(Vec3::new(0.0, WINDOW_HEIGHT / 6.0, 0.0)),
        HomeUi,
    ));
    commands.spawn((
        Text2d::new("tiny moments of play"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::srgb(0.45, 0.42, 0.48)),
        TextLayout::new_with_justify(JustifyText::Center),
        Transform::from_translation(Vec3::new(0.0, WINDOW_HEIGHT / 6.0 - 48.0, 0.0)),
        HomeUi,
    ));

    // Log button
    let log_center_y = log_button_center_y(window);
    commands.spawn((
        Sprite::from_color(PlayColor::Green.color(), LOG_BUTTON_SIZE),
        Transform::from_translation(
            screen_to_world(window, Vec2::new(viewport.x / 2.0, log_center_y)).extend(0.0),
        ),
        HomeUi,
    ));
    commands.spawn((
        Text2d::new("log a play moment"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Transform::from_translation(
            screen_to_world(window, Vec2::new(viewport.x / 2.0, log_center_y)).extend(1.0),
        ),
        HomeUi,
    ));

    // Wrapped button
    let wrapped_center_y = wrapped_button_center_y(window);
    commands.spawn((
        Text2d::new("see your play wrapped"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.45, 0.42, 0.48)),
        Transform::from_translation(
            screen_to_world(window, Vec2::new(viewport.x / 2.0, wrapped_center_y)).extend(0.0),
        ),
        HomeUi,
    ));
}

/// Button taps win over token drags; this runs before the drag pickup.
pub fn handle_home_input(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    let Some(point) = just_pressed_screen_position(&mouse_input, &touch_input, &windows) else {
        return;
    };
    let window = windows.single();

    if screen_rect_centered(window, log_button_center_y(window), LOG_BUTTON_SIZE).contains(point) {
        next_screen.set(Screen::Log);
    } else if screen_rect_centered(window, wrapped_button_center_y(window), WRAPPED_BUTTON_SIZE)
        .contains(point)
    {
        next_screen.set(Screen::Wrapped);
    }
}

pub fn cleanup_home_screen(mut commands: Commands, query: Query<Entity, With<HomeUi>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<TokenField>();
    commands.remove_resource::<DragGesture>();
}

fn log_button_center_y(window: &Window) -> f32 {
    window.resolution.height() / 2.0 + 90.0
}

fn wrapped_button_center_y(window: &Window) -> f32 {
    window.resolution.height() - 70.0
}
