use bevy::prelude::*;
use strum::EnumIter;
use thiserror::Error;

/// The eight moods a play moment can be tagged with. Each mood maps to one
/// cell of the mood atlas, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Mood {
    Happy,
    Silly,
    Peaceful,
    Magical,
    Celebratory,
    Creative,
    Dramatic,
    Adventurous,
}

impl Mood {
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Happy => "\u{1F60A}",       // 😊
            Self::Silly => "\u{1F92A}",       // 🤪
            Self::Peaceful => "\u{1F60C}",    // 😌
            Self::Magical => "\u{2728}",      // ✨
            Self::Celebratory => "\u{1F389}", // 🎉
            Self::Creative => "\u{1F3A8}",    // 🎨
            Self::Dramatic => "\u{1F3AD}",    // 🎭
            Self::Adventurous => "\u{1F3AA}", // 🎪
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Silly => "Silly",
            Self::Peaceful => "Peaceful",
            Self::Magical => "Magical",
            Self::Celebratory => "Celebratory",
            Self::Creative => "Creative",
            Self::Dramatic => "Dramatic",
            Self::Adventurous => "Adventurous",
        }
    }

    pub const fn atlas_index(self) -> usize {
        self as usize
    }
}

pub struct MoodAtlasPlugin;

impl Plugin for MoodAtlasPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AtlasValidation>()
            .add_systems(Startup, setup_mood_atlas)
            .add_systems(Update, validate_mood_atlas);
    }
}

// The atlas is a single row of 128x128 cells, one per Mood variant.
const CELL_SIZE: UVec2 = UVec2::new(128, 128);
const CELL_COUNT: u32 = 8;
const ATLAS_PATH: &str = "MoodAtlas.png";

#[derive(Error, Debug)]
pub enum AtlasError {
    #[error("Failed to load mood atlas texture: {0}")]
    TextureLoad(String),

    #[error("Mood atlas dimensions mismatch - expected {expected:?}, got {actual:?}")]
    DimensionMismatch { expected: UVec2, actual: UVec2 },
}

#[derive(Resource)]
pub struct MoodAtlas {
    texture: Handle<Image>,
    layout: Handle<TextureAtlasLayout>,
}

#[derive(Component)]
pub struct MoodSprite(pub Mood);

#[derive(Resource, Default)]
pub struct AtlasValidation {
    is_loaded: bool,
}

fn setup_mood_atlas(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut texture_atlas_layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    let texture_handle = asset_server.load(ATLAS_PATH);
    let layout = TextureAtlasLayout::from_grid(CELL_SIZE, CELL_COUNT, 1, None, None);
    let layout_handle = texture_atlas_layouts.add(layout);

    commands.insert_resource(MoodAtlas {
        texture: texture_handle,
        layout: layout_handle,
    });
}

fn validate_mood_atlas(
    atlas: Res<MoodAtlas>,
    mut validation: ResMut<AtlasValidation>,
    images: Res<Assets<Image>>,
) {
    if validation.is_loaded {
        return;
    }

    let Some(texture) = images.get(&atlas.texture) else {
        return;
    };

    let expected = UVec2::new(CELL_SIZE.x * CELL_COUNT, CELL_SIZE.y);
    if texture.width() != expected.x || texture.height() != expected.y {
        error!(
            "{}",
            AtlasError::DimensionMismatch {
                expected,
                actual: UVec2::new(texture.width(), texture.height()),
            }
        );
        return;
    }

    validation.is_loaded = true;
    info!("Mood atlas validated: {CELL_COUNT} cells");
}

/// Creates a mood sprite entity at the given world position. `scale` is
/// relative to the 128px atlas cell.
pub fn spawn_mood_sprite(
    commands: &mut Commands,
    atlas: &Res<MoodAtlas>,
    validation: &Res<AtlasValidation>,
    mood: Mood,
    position: Vec2,
    scale: f32,
) -> Option<Entity> {
    if !validation.is_loaded {
        return None;
    }

    Some(
        commands
            .spawn((
                Sprite {
                    image: atlas.texture.clone(),
                    texture_atlas: Some(TextureAtlas {
                        layout: atlas.layout.clone(),
                        index: mood.atlas_index(),
                    }),
                    ..default()
                },
                Transform::from_xyz(position.x, position.y, 0.0).with_scale(Vec3::splat(scale)),
                Visibility::Visible,
                MoodSprite(mood),
            ))
            .id(),
    )
}

/// Returns whether the mood atlas is ready for spawning sprites.
#[must_use]
pub fn is_mood_atlas_ready(validation: &Res<AtlasValidation>) -> bool {
    validation.is_loaded
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn atlas_indices_are_dense_and_unique() {
        let indices: Vec<usize> = Mood::iter().map(Mood::atlas_index).collect();
        assert_eq!(
            indices,
            (0..CELL_COUNT as usize).collect::<Vec<_>>(),
            "each mood owns exactly one atlas cell"
        );
    }

    #[test]
    fn every_mood_has_emoji_and_label() {
        for mood in Mood::iter() {
            assert!(!mood.emoji().is_empty(), "mood without emoji: {mood:?}");
            assert!(!mood.label().is_empty(), "mood without label: {mood:?}");
        }
    }
}
