use bevy::prelude::*;
use looma_helpers::input::just_pressed_screen_position;
use looma_helpers::journal::{self, MomentJournal, PlayMoment};
use looma_helpers::palette::PlayColor;
use looma_helpers::FONT;
use strum::IntoEnumIterator;

use crate::core::{ActivePrompts, DraftMoment, LogStep, LoggedMoment};
use crate::log::spawn_wizard_chrome;
use crate::render::screen_to_world;

const SWATCH_SIZE: Vec2 = Vec2::new(72.0, 72.0);
const SWATCH_GAP: f32 = 20.0;
const GRID_COLUMNS: usize = 2;
const GRID_TOP_Y: f32 = 220.0;

#[derive(Component, Default)]
pub struct ColorUi;

pub fn try_spawn_color_screen(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    prompts: Res<ActivePrompts>,
    windows: Query<&Window>,
    existing: Query<&ColorUi>,
) {
    if !existing.is_empty() {
        return;
    }
    let window = windows.single();

    commands.spawn((
        Text2d::new(prompts.color),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::srgb(0.25, 0.22, 0.28)),
        TextLayout::new_with_justify(JustifyText::Center),
        Transform::from_translation(
            screen_to_world(window, Vec2::new(window.resolution.width() / 2.0, 120.0)).extend(0.0),
        ),
        ColorUi,
    ));

    for (index, color) in PlayColor::iter().enumerate() {
        let center = swatch_center(window, index);
        commands.spawn((
            Sprite::from_color(color.color(), SWATCH_SIZE),
            Transform::from_translation(screen_to_world(window, center).extend(0.0)),
            ColorUi,
        ));
        commands.spawn((
            Text2d::new(color.label()),
            TextFont {
                font: asset_server.load(FONT),
                font_size: 14.0,
                ..default()
            },
            TextColor(Color::srgb(0.45, 0.42, 0.48)),
            Transform::from_translation(
                screen_to_world(window, center + Vec2::new(0.0, SWATCH_SIZE.y / 2.0 + 14.0))
                    .extend(0.0),
            ),
            ColorUi,
        ));
    }

    spawn_wizard_chrome::<ColorUi>(&mut commands, &asset_server, window, 2, 4);
}

/// A tapped swatch completes the draft: the moment is stamped, saved to
/// the journal, and handed to the confirmation step.
pub fn handle_color_tap(
    mut commands: Commands,
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    mut draft: ResMut<DraftMoment>,
    mut journal: ResMut<MomentJournal>,
    mut next_step: ResMut<NextState<LogStep>>,
) {
    let Some(point) = just_pressed_screen_position(&mouse_input, &touch_input, &windows) else {
        return;
    };
    let window = windows.single();

    let Some(color) = PlayColor::iter()
        .enumerate()
        .find(|(index, _)| {
            Rect::from_center_size(swatch_center(window, *index), SWATCH_SIZE).contains(point)
        })
        .map(|(_, color)| color)
    else {
        return;
    };
    let Some(mood) = draft.mood else {
        warn!("color picked with no mood on the draft");
        return;
    };

    draft.color = Some(color);
    let timestamp = journal::now_unix_secs();
    let moment = PlayMoment {
        id: format!("{timestamp}-{:04}", fastrand::u16(..10_000)),
        timestamp,
        text: draft.text.trim().to_string(),
        mood,
        color,
        tags: Vec::new(),
    };

    info!("logging play moment: {} / {}", mood.label(), color.label());
    journal.push(moment.clone());
    commands.insert_resource(LoggedMoment(moment));
    next_step.set(LogStep::Confirm);
}

pub fn cleanup_color_screen(mut commands: Commands, query: Query<Entity, With<ColorUi>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

fn swatch_center(window: &Window, index: usize) -> Vec2 {
    let grid_width = GRID_COLUMNS as f32 * SWATCH_SIZE.x + (GRID_COLUMNS as f32 - 1.0) * SWATCH_GAP;
    let left = (window.resolution.width() - grid_width) / 2.0;
    let column = index % GRID_COLUMNS;
    let row = index / GRID_COLUMNS;
    Vec2::new(
        left + SWATCH_SIZE.x / 2.0 + column as f32 * (SWATCH_SIZE.x + SWATCH_GAP),
        GRID_TOP_Y + SWATCH_SIZE.y / 2.0 + row as f32 * (SWATCH_SIZE.y + SWATCH_GAP + 28.0),
    )
}
