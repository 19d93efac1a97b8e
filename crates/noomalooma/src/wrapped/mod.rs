use bevy::prelude::*;
use bevy::text::TextBounds;
use looma_helpers::input::just_pressed_screen_position;
use looma_helpers::journal::{self, MomentJournal};
use looma_helpers::palette::PlayColor;
use looma_helpers::{FONT, WINDOW_HEIGHT, WINDOW_WIDTH};

use crate::core::{STEP_COLORS, Screen, WrappedPage};
use crate::render::screen_to_world;

pub mod insights;

use insights::{LocalAnalyzer, WeekAnalyzer, WeekInsights};

const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 24.0;
const BODY_WIDTH: f32 = WINDOW_WIDTH - 48.0;

/// The insights backing the current slideshow run.
#[derive(Resource, Debug)]
pub struct WrappedInsights(pub WeekInsights);

#[derive(Component)]
pub struct WrappedUi;

/// Analyzes the last seven days of the journal once per visit.
pub fn enter_wrapped(mut commands: Commands, journal: Res<MomentJournal>) {
    let now = journal::now_unix_secs();
    let week = journal.last_week(now);
    info!("wrapping up {} moments from the last week", week.len());
    commands.insert_resource(WrappedInsights(LocalAnalyzer.analyze(&week)));
}

/// Spawns the current page's content. Runs every frame and bails once the
/// page is on screen; page changes despawn through the `OnExit` cleanup.
pub fn try_spawn_wrapped_page(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    insights: Option<Res<WrappedInsights>>,
    page: Res<State<WrappedPage>>,
    windows: Query<&Window>,
    existing: Query<&WrappedUi>,
) {
    if !existing.is_empty() {
        return;
    }
    let Some(insights) = insights else {
        return;
    };
    let window = windows.single();
    let insights = &insights.0;

    match page.get() {
        WrappedPage::Summary => {
            spawn_heading(&mut commands, &asset_server, "your week of play");
            spawn_body(&mut commands, &asset_server, &insights.summary, 0.0);
        }
        WrappedPage::Personality => {
            spawn_heading(&mut commands, &asset_server, "your play personality");
            commands.spawn((
                Text2d::new(insights.personality.emoji.clone()),
                TextFont {
                    font: asset_server.load(FONT),
                    font_size: 64.0,
                    ..default()
                },
                Transform::from_translation(Vec3::new(0.0, WINDOW_HEIGHT / 8.0, 0.0)),
                WrappedUi,
            ));
            commands.spawn((
                Text2d::new(insights.personality.title.clone()),
                TextFont {
                    font: asset_server.load(FONT),
                    font_size: 32.0,
                    ..default()
                },
                TextColor(Color::srgb(0.25, 0.22, 0.28)),
                Transform::from_translation(Vec3::new(0.0, 10.0, 0.0)),
                WrappedUi,
            ));
            spawn_body(
                &mut commands,
                &asset_server,
                &insights.personality.description,
                -70.0,
            );
        }
        WrappedPage::Stats => {
            spawn_heading(&mut commands, &asset_server, "your stats");
            let mut lines = vec![format!(
                "{} moments across {} days",
                insights.stats.total_moments, insights.stats.active_days
            )];
            lines.extend(
                insights
                    .patterns
                    .iter()
                    .map(|pattern| format!("{} {}", pattern.emoji, pattern.description)),
            );
            spawn_body(&mut commands, &asset_server, &lines.join("\n\n"), 0.0);
        }
        WrappedPage::Recommendations => {
            spawn_heading(&mut commands, &asset_server, "more play awaits");
            spawn_body(
                &mut commands,
                &asset_server,
                &insights.recommendations.join("\n\n"),
                0.0,
            );
        }
        WrappedPage::FunFact => {
            spawn_heading(&mut commands, &asset_server, "fun fact");
            spawn_body(&mut commands, &asset_server, &insights.fun_fact, 0.0);
        }
        WrappedPage::Complete => {
            spawn_heading(&mut commands, &asset_server, "that's a wrap!");
            spawn_body(
                &mut commands,
                &asset_server,
                "keep collecting those tiny moments of play",
                0.0,
            );
        }
    }

    commands.spawn((
        Text2d::new(if *page.get() == WrappedPage::Complete {
            "tap to head home"
        } else {
            "tap to continue, left edge to go back"
        }),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.55, 0.52, 0.58)),
        Transform::from_translation(Vec3::new(0.0, -WINDOW_HEIGHT / 3.0, 0.0)),
        WrappedUi,
    ));

    spawn_page_dots(&mut commands, window, page.get().index());
}

/// Tap navigation: the left third steps back, anywhere else advances, and
/// the final page returns home.
pub fn handle_wrapped_tap(
    mouse_input: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    page: Res<State<WrappedPage>>,
    mut next_page: ResMut<NextState<WrappedPage>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    let Some(point) = just_pressed_screen_position(&mouse_input, &touch_input, &windows) else {
        return;
    };
    let window = windows.single();
    let current = *page.get();

    if current == WrappedPage::Complete {
        next_screen.set(Screen::Home);
    } else if point.x < window.resolution.width() / 3.0 {
        next_page.set(current.previous());
    } else {
        next_page.set(current.next());
    }
}

pub fn cleanup_wrapped_page(mut commands: Commands, query: Query<Entity, With<WrappedUi>>) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
}

/// Leaving the slideshow: drop the insights and rewind to the first page.
pub fn cleanup_wrapped(
    mut commands: Commands,
    query: Query<Entity, With<WrappedUi>>,
    mut next_page: ResMut<NextState<WrappedPage>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<WrappedInsights>();
    next_page.set(WrappedPage::Summary);
}

fn spawn_heading(commands: &mut Commands, asset_server: &Res<AssetServer>, text: &str) {
    commands.spawn((
        Text2d::new(text),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 34.0,
            ..default()
        },
        TextColor(Color::srgb(0.25, 0.22, 0.28)),
        TextLayout::new_with_justify(JustifyText::Center),
        Transform::from_translation(Vec3::new(0.0, WINDOW_HEIGHT / 4.0, 0.0)),
        WrappedUi,
    ));
}

fn spawn_body(commands: &mut Commands, asset_server: &Res<AssetServer>, text: &str, y: f32) {
    commands.spawn((
        Text2d::new(text),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.35, 0.32, 0.38)),
        TextLayout::new_with_justify(JustifyText::Center),
        TextBounds::from(Vec2::new(BODY_WIDTH, WINDOW_HEIGHT / 2.0)),
        Transform::from_translation(Vec3::new(0.0, y, 0.0)),
        WrappedUi,
    ));
}

fn spawn_page_dots(commands: &mut Commands, window: &Window, active: usize) {
    let total = STEP_COLORS.len();
    let width = (total as f32 - 1.0) * DOT_SPACING;
    for index in 0..total {
        let point = Vec2::new(
            window.resolution.width() / 2.0 - width / 2.0 + index as f32 * DOT_SPACING,
            32.0,
        );
        let color = if index == active {
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
            WrappedUi,
        ));
    }
}
