use bevy::ecs::schedule::SystemConfigs;
use bevy::prelude::*;
use looma_helpers::emoji::MoodAtlasPlugin;
use looma_helpers::journal::MomentJournal;
use looma_helpers::token_field::{self, TokenDeposited, TokenField};
use looma_helpers::{floating_text, get_default_app};

mod core;
mod home;
mod log;
mod render;
mod wrapped;

use crate::core::{DraftMoment, LogStep, Screen, WrappedPage};

/// Entry point for the app
pub fn run() {
    let mut app = get_default_app(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    app.add_plugins(MoodAtlasPlugin)
        .init_state::<Screen>()
        .init_state::<LogStep>()
        .init_state::<WrappedPage>()
        .init_resource::<DraftMoment>()
        .insert_resource(MomentJournal::load())
        .add_event::<TokenDeposited>()
        .add_systems(Startup, setup_camera)
        .add_systems(Update, floating_text::animate_floating_text);

    // Home: bouncing letters plus the two entry buttons
    app.add_systems(
        Update,
        (
            home::try_spawn_home_screen,
            home::handle_home_input,
            token_field_systems(),
        )
            .chain()
            .run_if(in_state(Screen::Home)),
    )
    .add_systems(OnExit(Screen::Home), home::cleanup_home_screen);

    // Logging wizard
    app.add_systems(OnEnter(Screen::Log), log::enter_log_wizard)
        .add_systems(
            Update,
            (
                log::note::try_spawn_note_screen,
                log::handle_back_button,
                log::note::handle_note_typing,
            )
                .chain()
                .run_if(in_state(Screen::Log).and(in_state(LogStep::Note))),
        )
        .add_systems(
            Update,
            (
                log::mood::try_spawn_mood_screen,
                log::handle_back_button,
                log::mood::update_zone_highlight,
                log::mood::handle_mood_deposited,
                token_field_systems(),
            )
                .chain()
                .run_if(in_state(Screen::Log).and(in_state(LogStep::MoodPick))),
        )
        .add_systems(
            Update,
            (
                log::color::try_spawn_color_screen,
                log::handle_back_button,
                log::color::handle_color_tap,
            )
                .chain()
                .run_if(in_state(Screen::Log).and(in_state(LogStep::ColorPick))),
        )
        .add_systems(
            Update,
            (
                log::confirm::try_spawn_confirm_screen,
                log::handle_back_button,
                log::confirm::handle_confirm_tap,
            )
                .chain()
                .run_if(in_state(Screen::Log).and(in_state(LogStep::Confirm))),
        )
        .add_systems(OnExit(LogStep::Note), log::note::cleanup_note_screen)
        .add_systems(OnExit(LogStep::MoodPick), log::mood::cleanup_mood_screen)
        .add_systems(OnExit(LogStep::ColorPick), log::color::cleanup_color_screen)
        .add_systems(OnExit(LogStep::Confirm), log::confirm::cleanup_confirm_screen)
        .add_systems(
            OnExit(Screen::Log),
            (
                log::note::cleanup_note_screen,
                log::mood::cleanup_mood_screen,
                log::color::cleanup_color_screen,
                log::confirm::cleanup_confirm_screen,
                log::cleanup_log_wizard,
            )
                .chain(),
        );

    // Play Wrapped slideshow
    app.add_systems(OnEnter(Screen::Wrapped), wrapped::enter_wrapped)
        .add_systems(
            Update,
            (wrapped::try_spawn_wrapped_page, wrapped::handle_wrapped_tap)
                .chain()
                .run_if(in_state(Screen::Wrapped)),
        )
        .add_systems(OnExit(WrappedPage::Summary), wrapped::cleanup_wrapped_page)
        .add_systems(
            OnExit(WrappedPage::Personality),
            wrapped::cleanup_wrapped_page,
        )
        .add_systems(OnExit(WrappedPage::Stats), wrapped::cleanup_wrapped_page)
        .add_systems(
            OnExit(WrappedPage::Recommendations),
            wrapped::cleanup_wrapped_page,
        )
        .add_systems(OnExit(WrappedPage::FunFact), wrapped::cleanup_wrapped_page)
        .add_systems(OnExit(WrappedPage::Complete), wrapped::cleanup_wrapped_page)
        .add_systems(OnExit(Screen::Wrapped), wrapped::cleanup_wrapped);

    app.run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// The shared token field pipeline: drag handling, physics, and the render
/// sync, active whenever a field is on screen.
fn token_field_systems() -> SystemConfigs {
    (
        render::update_field_viewport,
        token_field::begin_token_drag,
        token_field::update_token_drag,
        token_field::end_token_drag,
        token_field::tick_token_field,
        render::sync_token_sprites,
    )
        .chain()
        .run_if(resource_exists::<TokenField>)
}
