use bevy::prelude::*;
use looma_helpers::emoji::Mood;
use looma_helpers::journal::PlayMoment;
use looma_helpers::palette::PlayColor;

// Top-level screens
#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum Screen {
    #[default]
    Home,
    Log,
    Wrapped,
}

// Steps of the logging wizard
#[derive(Clone, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum LogStep {
    #[default]
    Note,
    MoodPick,
    ColorPick,
    Confirm,
}

// Pages of the Play Wrapped slideshow
#[derive(Clone, Copy, Eq, PartialEq, Debug, Hash, Default, States)]
pub enum WrappedPage {
    #[default]
    Summary,
    Personality,
    Stats,
    Recommendations,
    FunFact,
    Complete,
}

impl WrappedPage {
    pub const fn next(self) -> Self {
        match self {
            Self::Summary => Self::Personality,
            Self::Personality => Self::Stats,
            Self::Stats => Self::Recommendations,
            Self::Recommendations => Self::FunFact,
            Self::FunFact | Self::Complete => Self::Complete,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Summary | Self::Personality => Self::Summary,
            Self::Stats => Self::Personality,
            Self::Recommendations => Self::Stats,
            Self::FunFact => Self::Recommendations,
            Self::Complete => Self::FunFact,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The moment being assembled by the wizard.
#[derive(Resource, Debug, Default)]
pub struct DraftMoment {
    pub text: String,
    pub mood: Option<Mood>,
    pub color: Option<PlayColor>,
}

impl DraftMoment {
    pub fn reset(&mut self) {
        self.text.clear();
        self.mood = None;
        self.color = None;
    }
}

/// The fully assembled moment shown by the confirmation step.
#[derive(Resource, Debug)]
pub struct LoggedMoment(pub PlayMoment);

/// The prompts picked for this wizard run, fixed at entry so the text
/// does not reshuffle between steps.
#[derive(Resource)]
pub struct ActivePrompts {
    pub text: &'static str,
    pub mood: &'static str,
    pub color: &'static str,
}

/// Marker linking a spawned glyph entity to a simulation token.
#[derive(Component)]
pub struct TokenSprite(pub looma_helpers::token_field::TokenId);

/// Step dot colors, one per wizard/slideshow position.
pub const STEP_COLORS: [PlayColor; 6] = [
    PlayColor::Green,
    PlayColor::Purple,
    PlayColor::Pink,
    PlayColor::Orange,
    PlayColor::Lavender,
    PlayColor::Blue,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_pages_walk_forward_to_complete() {
        let mut page = WrappedPage::Summary;
        let mut seen = vec![page];
        while page != WrappedPage::Complete {
            page = page.next();
            seen.push(page);
        }
        assert_eq!(
            seen,
            vec![
                WrappedPage::Summary,
                WrappedPage::Personality,
                WrappedPage::Stats,
                WrappedPage::Recommendations,
                WrappedPage::FunFact,
                WrappedPage::Complete,
            ],
            "every page appears exactly once on the way to Complete"
        );
    }

    #[test]
    fn wrapped_back_never_leaves_the_show() {
        assert_eq!(WrappedPage::Summary.previous(), WrappedPage::Summary);
        assert_eq!(WrappedPage::Stats.previous(), WrappedPage::Personality);
    }
}
