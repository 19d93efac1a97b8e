use bevy::prelude::*;
use looma_helpers::input::just_pressed_screen_position;
use looma_helpers::palette::PlayColor;
use looma_helpers::token_field::{DragGesture, DropZone, DropZoneHover, TokenField};
use looma_helpers::{FONT, prompts};

use crate::core::{DraftMoment, LogStep, STEP_COLORS, Screen};
use crate::render::screen_to_world;

pub mod color;
pub mod confirm;
pub mod mood;
pub mod note;

const BACK_BUTTON_SIZE: Vec2 = Vec2::new(48.0, 48.0);
const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 24.0;
const CHROME_Y: f32 = 32.0;

/// Marker for the back arrow and progress dots of the current step.
#[derive(Component, Default)]
pub struct WizardChrome;

/// Picks this run's prompts and resets the wizard to its first step.
pub fn enter_log_wizard(
    mut commands: Commands,
    mut draft: ResMut<DraftMoment>,
    mut next_step: ResMut<NextState<LogStep>>,
) {
    draft.reset();
    let picked = prompts::current_prompts();
    commands.insert_resource(crate::core::ActivePrompts {
        text: picked.text,
        mood: picked.mood,
        color: picked.color,
    });
    next_step.set(LogStep::Note);
}

/// Back arrow and progress dots, spawned with each step's own marker so
/// the step's cleanup takes the chrome with it.
pub fn spawn_wizard_chrome<M: Component + Default>(
    commands: &mut Commands,
    asset_server: &Res<AssetServer>,
    window: &Window,
    step: usize,
    total: usize,
) {
    commands.spawn((
        Text2d::new("<"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::srgb(0.45, 0.42, 0.48)),
        Transform::from_translation(
            screen_to_world(window, Vec2::new(32.0, CHROME_Y)).extend(5.0),
        ),
        WizardChrome,
        M::default(),
    ));

    let width = (total as f32 - 1.0) * DOT_SPACING;
    for index in 0..total {
        let point = Vec2::new(
            window.resolution.width() / 2.0 - width / 2.0 + index as f32 * DOT_SPACING,
            CHROME_Y,
        );
        let color = if index == step {
            STEP_COLORS
                .get(index)
                .copied()
                .unwrap_or(PlayColor::Green)
                .color()
        } else {
            Color::srgb(0.85, 0.83, 0.86)
        };
        commands.spawn((
            Sprite::from_color(color, Vec2::splat(DOT_RADIUS * 2.0)),
            Transform::from_translation(screen_to_world(window, point).extend(5.0)),
            WizardChrome,
            M::default(),
        ));
    }
}

/// True when the press landed on the back arrow.
pub fn pressed_back(
    mouse_input: &Res<ButtonInput<MouseButton>>,
    touch_input: &Res<Touches>,
    windows: &Query<&Window>,
) -> Option<bool> {
    let point = just_pressed_screen_position(mouse_input, touch_input, windows)?;
    Some(Rect::from_center_size(Vec2::new(32.0, CHROME_Y), BACK_BUTTON_SIZE).contains(point))
}

/// One back handler for the whole wizard: steps walk back to the previous
/// step, the first step leaves for home.
pub fn handle_back_button(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    step: Res<State<LogStep>>,
    mut next_step: ResMut<NextState<LogStep>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if pressed_back(&mouse_input, &touch_input, &windows) != Some(true) {
        return;
    }
    match step.get() {
        LogStep::Note => next_screen.set(Screen::Home),
        LogStep::MoodPick => next_step.set(LogStep::Note),
        LogStep::ColorPick => next_step.set(LogStep::MoodPick),
        LogStep::Confirm => next_step.set(LogStep::ColorPick),
    }
}

/// Leaving the wizard entirely: drop per-run resources and rewind the
/// step so the next visit starts clean.
pub fn cleanup_log_wizard(
    mut commands: Commands,
    chrome: Query<Entity, With<WizardChrome>>,
    mut next_step: ResMut<NextState<LogStep>>,
) {
    for entity in &chrome {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<crate::core::ActivePrompts>();
    commands.remove_resource::<TokenField>();
    commands.remove_resource::<DragGesture>();
    commands.remove_resource::<DropZone>();
    commands.remove_resource::<DropZoneHover>();
    next_step.set(LogStep::Note);
}
