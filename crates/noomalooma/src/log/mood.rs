use bevy::prelude::*;
use looma_helpers::emoji::{self, AtlasValidation, MoodAtlas};
use looma_helpers::token_field::{
    DragGesture, DropZone, DropZoneHover, TOKEN_SIZE, TokenDeposited, TokenField, TokenGlyph,
};
use looma_helpers::{FONT, WINDOW_WIDTH};
use strum::IntoEnumIterator;

use crate::core::{DraftMoment, LogStep, TokenSprite};
use crate::log::spawn_wizard_chrome;
use crate::render::screen_to_world;

const ZONE_SIZE: Vec2 = Vec2::new(WINDOW_WIDTH - 80.0, 80.0);
const ZONE_CENTER_Y: f32 = 140.0;
/// Forgiving margin around the zone so near misses still count.
const ZONE_PADDING: f32 = 50.0;

#[derive(Component, Default)]
pub struct MoodUi;

/// Marker for the drop zone backdrop, recolored on hover.
#[derive(Component)]
pub struct ZoneBackdrop;

#[derive(Component)]
pub struct ZoneLabel;

/// Spawns the mood picker once the atlas is ready: one bouncing token per
/// mood, plus the drop zone the user drags a token into.
pub fn try_spawn_mood_screen(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    atlas: Option<Res<MoodAtlas>>,
    validation: Option<Res<AtlasValidation>>,
    prompts: Res<crate::core::ActivePrompts>,
    windows: Query<&Window>,
    existing: Query<&MoodUi>,
) {
    if !existing.is_empty() {
        return;
    }
    let (Some(atlas), Some(validation)) = (atlas, validation) else {
        return;
    };
    if !emoji::is_mood_atlas_ready(&validation) {
        return;
    }

    let window = windows.single();
    let viewport = Vec2::new(window.resolution.width(), window.resolution.height());

    let field = TokenField::new(
        emoji::Mood::iter().map(TokenGlyph::Mood),
        viewport,
        TOKEN_SIZE,
    );

    for token in field.tokens() {
        let TokenGlyph::Mood(mood) = token.glyph else {
            continue;
        };
        if let Some(entity) = emoji::spawn_mood_sprite(
            &mut commands,
            &atlas,
            &validation,
            mood,
            Vec2::ZERO,
            TOKEN_SIZE / 128.0,
        ) {
            commands.entity(entity).insert((TokenSprite(token.id), MoodUi));
        }
    }

    let zone_center = Vec2::new(viewport.x / 2.0, ZONE_CENTER_Y);
    let zone = DropZone::new(Rect::from_center_size(zone_center, ZONE_SIZE), ZONE_PADDING);

    commands.spawn((
        Sprite::from_color(Color::srgba(0.85, 0.83, 0.86, 0.4), ZONE_SIZE),
        Transform::from_translation(screen_to_world(window, zone_center).extend(-2.0)),
        ZoneBackdrop,
        MoodUi,
    ));
    commands.spawn((
        Text2d::new("drop zone"),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.55, 0.52, 0.58)),
        Transform::from_translation(screen_to_world(window, zone_center).extend(-1.0)),
        ZoneLabel,
        MoodUi,
    ));
    commands.spawn((
        Text2d::new(prompts.mood),
        TextFont {
            font: asset_server.load(FONT),
            font_size: 22.0,
            ..default()
        },
        TextColor(Color::srgb(0.25, 0.22, 0.28)),
        TextLayout::new_with_justify(JustifyText::Center),
        Transform::from_translation(
            screen_to_world(window, Vec2::new(viewport.x / 2.0, 80.0)).extend(0.0),
        ),
        MoodUi,
    ));

    commands.insert_resource(field);
    commands.init_resource::<DragGesture>();
    commands.insert_resource(zone);
    commands.init_resource::<DropZoneHover>();

    spawn_wizard_chrome::<MoodUi>(&mut commands, &asset_server, window, 1, 4);
}

/// Recolors the zone while a token hovers it.
pub fn update_zone_highlight(
    hover: Option<Res<DropZoneHover>>,
    mut backdrop: Query<&mut Sprite, With<ZoneBackdrop>>,
    mut label: Query<&mut Text2d, With<ZoneLabel>>,
) {
    let Some(hover) = hover else {
        return;
    };
    if !hover.is_changed() {
        return;
    }

    for mut sprite in &mut backdrop {
        sprite.color = if hover.0 {
            Color::srgba(0.64, 0.83, 0.62, 0.5)
        } else {
            Color::srgba(0.85, 0.83, 0.86, 0.4)
        };
    }
    for mut text in &mut label {
        text.0 = if hover.0 { "drop here!" } else { "drop zone" }.to_string();
    }
}

/// A deposited token finalizes the mood choice and advances the wizard.
pub fn handle_mood_deposited(
    mut deposited: EventReader<TokenDeposited>,
    mut draft: ResMut<DraftMoment>,
    mut next_step: ResMut<NextState<LogStep>>,
) {
    for event in deposited.read() {
        if let TokenGlyph::Mood(mood) = event.glyph {
            info!("mood selected: {}", mood.label());
            draft.mood = Some(mood);
            next_step.set(LogStep::ColorPick);
        }
    }
}

pub fn cleanup_mood_screen(
    mut commands: Commands,
    query: Query<Entity, With<MoodUi>>,
    screen: Res<State<crate::core::Screen>>,
) {
    for entity in &query {
        commands.entity(entity).despawn_recursive();
    }
    // The step reset queued when leaving the wizard lands a frame after
    // the home screen spawns its own field; only drop the shared
    // resources while the wizard still owns them.
    if *screen.get() == crate::core::Screen::Log {
        commands.remove_resource::<TokenField>();
        commands.remove_resource::<DragGesture>();
        commands.remove_resource::<DropZone>();
        commands.remove_resource::<DropZoneHover>();
    }
}
