use bevy::input::ButtonState;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;
use bevy::text::TextBounds;
use looma_helpers::{FONT, WINDOW_HEIGHT, WINDOW_WIDTH};

use crate::core::{ActivePrompts, DraftMoment, LogStep};
use crate::log::spawn_wizard_chrome;

const MAX_NOTE_LEN: usize = 280;

#[derive(Component, Default)]
pub struct NoteUi;

/// Marker for the text entity echoing the typed note.
#[derive(Component)]
pub struct NoteText;

pub fn try_spawn_note_screen(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    prompts: Res<ActivePrompts>,
    windows: Query<&Window>,
    existing: Query<&NoteUi>,
) {
    if !existing.is_empty() {
        return;
    }
    let window = windows.single();

    commands.spawn((
        Text2d::new(prompts.text),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 26.0,
            ..default()
        },
        TextColor(Color::srgb(0.25, 0.22, 0.28)),
        TextLayout::new_with_justify(JustifyText::Center),
        TextBounds::from(Vec2::new(WINDOW_WIDTH - 48.0, WINDOW_HEIGHT / 3.0)),
        Transform::from_translation(Vec3::new(0.0, WINDOW_HEIGHT / 4.0, 0.0)),
        NoteUi,
    ));

    commands.spawn((
        Text2d::new("_"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::srgb(0.35, 0.32, 0.38)),
        TextLayout::new_with_justify(JustifyText::Center),
        TextBounds::from(Vec2::new(WINDOW_WIDTH - 48.0, WINDOW_HEIGHT / 2.0)),
        Transform::from_translation(Vec3::new(0.0, 0.0, 0.0)),
        NoteText,
        NoteUi,
    ));

    commands.spawn((
        Text2d::new("type your moment, enter to continue"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.55, 0.52, 0.58)),
        TextLayout::new_with_justify(JustifyText::Center),
        Transform::from_translation(Vec3::new(0.0, -WINDOW_HEIGHT / 3.0, 0.0)),
        NoteUi,
    ));

    spawn_wizard_chrome::<NoteUi>(&mut commands, &asset_server, window, 0, 4);
}

/// Plain keyboard capture: printable characters append, backspace trims,
/// enter advances once the note is non-empty.
pub fn handle_note_typing(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut draft: ResMut<DraftMoment>,
    mut note_text: Query<&mut Text2d, With<NoteText>>,
    mut next_step: ResMut<NextState<LogStep>>,
) {
    let mut changed = false;

    for event in keyboard_events.read() {
        if event.state != ButtonState::Pressed {
            continue;
        }
        match &event.logical_key {
            Key::Character(input) => {
                if draft.text.len() < MAX_NOTE_LEN {
                    draft.text.push_str(input);
                    changed = true;
                }
            }
            Key::Space => {
                if draft.text.len() < MAX_NOTE_LEN {
                    draft.text.push(' ');
                    changed = true;
                }
            }
            Key::Backspace => {
                draft.text.pop();
                changed = true;
            }
            Key::Enter => {
                if !draft.text.trim().is_empty() {
                    next_step.set(LogStep::MoodPick);
                }
            }
            _ => {}
        }
    }

    if changed {
        if let Ok(mut text) = note_text.get_single_mut() {
            text.0 = format!("{}_", draft.text);
        }
    }
}

pub fn cleanup_note_screen(mut commands: Commands, query: Query<Entity, With<NoteUi>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}
