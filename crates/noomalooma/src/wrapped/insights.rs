use std::collections::BTreeMap;

use looma_helpers::emoji::Mood;
use looma_helpers::journal::{self, PlayMoment};
use looma_helpers::palette::PlayColor;
use serde::{Deserialize, Serialize};

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One observed pattern in the week's moments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub title: String,
    pub description: String,
    pub emoji: String,
}

/// The week's play personality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personality {
    pub title: String,
    pub description: String,
    pub emoji: String,
}

/// Raw counts behind the stats page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekStats {
    pub total_moments: usize,
    pub active_days: usize,
    pub busiest_day: Option<String>,
    pub dominant_mood: Option<Mood>,
    pub favorite_color: Option<PlayColor>,
}

/// Everything the slideshow renders for one week of play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekInsights {
    pub summary: String,
    pub patterns: Vec<Pattern>,
    pub personality: Personality,
    pub stats: WeekStats,
    pub recommendations: Vec<String>,
    pub fun_fact: String,
}

/// Turns a week of moments into slideshow insights. The seam exists so a
/// remote analyzer can replace the built-in one without touching the UI.
pub trait WeekAnalyzer {
    fn analyze(&self, moments: &[&PlayMoment]) -> WeekInsights;
}

/// Deterministic analyzer built from mood, color, and weekday tallies.
#[derive(Debug, Default)]
pub struct LocalAnalyzer;

impl WeekAnalyzer for LocalAnalyzer {
    fn analyze(&self, moments: &[&PlayMoment]) -> WeekInsights {
        if moments.is_empty() {
            return empty_week();
        }

        let stats = tally(moments);
        let personality = personality_for(stats.dominant_mood.unwrap_or(Mood::Happy));
        let patterns = patterns_for(&stats);
        let recommendations = recommendations_for(&stats);
        let fun_fact = fun_fact_for(moments, &stats);
        let summary = summary_for(&stats);

        WeekInsights {
            summary,
            patterns,
            personality,
            stats,
            recommendations,
            fun_fact,
        }
    }
}

fn empty_week() -> WeekInsights {
    WeekInsights {
        summary: "No play moments recorded this week. Time to start playing!".to_string(),
        patterns: Vec::new(),
        personality: Personality {
            title: "Playful Spirit".to_string(),
            description: "Someone who finds joy in small moments".to_string(),
            emoji: "\u{2728}".to_string(),
        },
        stats: WeekStats::default(),
        recommendations: vec![
            "Try logging a small moment of joy each day".to_string(),
            "Look for opportunities to add play to routine activities".to_string(),
        ],
        fun_fact: "Every moment of play matters!".to_string(),
    }
}

fn tally(moments: &[&PlayMoment]) -> WeekStats {
    let mut mood_counts: BTreeMap<Mood, usize> = BTreeMap::new();
    let mut color_counts: BTreeMap<PlayColor, usize> = BTreeMap::new();
    let mut day_counts: BTreeMap<u8, usize> = BTreeMap::new();

    for moment in moments {
        *mood_counts.entry(moment.mood).or_default() += 1;
        *color_counts.entry(moment.color).or_default() += 1;
        *day_counts.entry(journal::weekday(moment.timestamp)).or_default() += 1;
    }

    WeekStats {
        total_moments: moments.len(),
        active_days: day_counts.len(),
        busiest_day: day_counts
            .iter()
            .max_by_key(|(_, count)| **count)
            .and_then(|(day, _)| WEEKDAY_NAMES.get(usize::from(*day % 7)))
            .map(|name| (*name).to_string()),
        dominant_mood: mood_counts
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(mood, _)| *mood),
        favorite_color: color_counts
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(color, _)| *color),
    }
}

fn personality_for(mood: Mood) -> Personality {
    let (title, description) = match mood {
        Mood::Happy => (
            "Sunbeam",
            "Your play radiates warmth. You find delight in the everyday and it shows.",
        ),
        Mood::Silly => (
            "Jester",
            "You lead with laughter. Goofiness is your love language for the world.",
        ),
        Mood::Peaceful => (
            "Zen Player",
            "You play slow and soft. Calm little rituals are where your joy lives.",
        ),
        Mood::Magical => (
            "Spark Chaser",
            "You hunt for wonder. Ordinary days keep surprising you with sparkle.",
        ),
        Mood::Celebratory => (
            "Confetti Thrower",
            "You turn small wins into parties. Everything is worth a tiny cheer.",
        ),
        Mood::Creative => (
            "Maker",
            "Your hands are always busy. Play, for you, leaves something behind.",
        ),
        Mood::Dramatic => (
            "Storyteller",
            "You play with flair. Every moment gets a little extra narrative.",
        ),
        Mood::Adventurous => (
            "Explorer",
            "You wander on purpose. New corners of the familiar call your name.",
        ),
    };
    Personality {
        title: title.to_string(),
        description: description.to_string(),
        emoji: mood.emoji().to_string(),
    }
}

fn patterns_for(stats: &WeekStats) -> Vec<Pattern> {
    let mut patterns = Vec::new();

    if let Some(mood) = stats.dominant_mood {
        patterns.push(Pattern {
            title: format!("{} week", mood.label()),
            description: format!(
                "{} showed up more than any other mood in your moments.",
                mood.label()
            ),
            emoji: mood.emoji().to_string(),
        });
    }
    if let Some(color) = stats.favorite_color {
        patterns.push(Pattern {
            title: format!("Drawn to {}", color.label()),
            description: format!("{} kept catching your eye this week.", color.label()),
            emoji: "\u{1f3a8}".to_string(),
        });
    }
    if let Some(day) = &stats.busiest_day {
        patterns.push(Pattern {
            title: format!("{day}s are for play"),
            description: format!("More of your moments landed on {day} than any other day."),
            emoji: "\u{1f4c5}".to_string(),
        });
    }

    patterns
}

fn recommendations_for(stats: &WeekStats) -> Vec<String> {
    let mut recommendations = Vec::new();

    if stats.active_days < 4 {
        recommendations
            .push("Try sprinkling moments across more days, even tiny ones count".to_string());
    } else {
        recommendations.push("You played most days this week, keep that streak alive".to_string());
    }

    match stats.dominant_mood {
        Some(Mood::Peaceful) => recommendations
            .push("Your calm streak is lovely, maybe invite one silly moment in".to_string()),
        Some(Mood::Silly) => recommendations
            .push("All that giggling earns a quiet, peaceful moment too".to_string()),
        Some(mood) => recommendations.push(format!(
            "Lean into those {} moments, and see what a new mood feels like",
            mood.label().to_lowercase()
        )),
        None => {}
    }

    recommendations
}

fn fun_fact_for(moments: &[&PlayMoment], stats: &WeekStats) -> String {
    let words: usize = moments
        .iter()
        .map(|moment| moment.text.split_whitespace().count())
        .sum();
    match stats.total_moments {
        1 => "One single moment can tint a whole week. Yours did.".to_string(),
        n => format!("You wrote {words} words about play across {n} moments this week."),
    }
}

fn summary_for(stats: &WeekStats) -> String {
    let day_phrase = match stats.active_days {
        1 => "one day".to_string(),
        7 => "every single day".to_string(),
        n => format!("{n} different days"),
    };
    format!(
        "You logged {} play moment{} across {} this week. That's a week well played!",
        stats.total_moments,
        if stats.total_moments == 1 { "" } else { "s" },
        day_phrase
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(timestamp: i64, mood: Mood, color: PlayColor, text: &str) -> PlayMoment {
        PlayMoment {
            id: timestamp.to_string(),
            timestamp,
            text: text.to_string(),
            mood,
            color,
            tags: Vec::new(),
        }
    }

    #[test]
    fn empty_week_gets_the_fallback_insights() {
        let insights = LocalAnalyzer.analyze(&[]);
        assert!(insights.summary.contains("No play moments"));
        assert!(insights.patterns.is_empty());
        assert_eq!(insights.personality.title, "Playful Spirit");
        assert_eq!(insights.recommendations.len(), 2);
    }

    #[test]
    fn dominant_mood_drives_the_personality() {
        let day = 86_400;
        let moments = vec![
            moment(0, Mood::Silly, PlayColor::Pink, "made faces at the cat"),
            moment(day, Mood::Silly, PlayColor::Pink, "wore mismatched socks"),
            moment(2 * day, Mood::Happy, PlayColor::Green, "sunny walk"),
        ];
        let refs: Vec<&PlayMoment> = moments.iter().collect();
        let insights = LocalAnalyzer.analyze(&refs);

        assert_eq!(insights.personality.title, "Jester");
        assert_eq!(insights.stats.total_moments, 3);
        assert_eq!(insights.stats.active_days, 3);
        assert_eq!(insights.stats.dominant_mood, Some(Mood::Silly));
        assert_eq!(insights.stats.favorite_color, Some(PlayColor::Pink));
    }

    #[test]
    fn busiest_day_names_the_weekday_with_most_moments() {
        // 1970-01-01 was a Thursday
        let moments = vec![
            moment(0, Mood::Happy, PlayColor::Green, "a"),
            moment(60, Mood::Happy, PlayColor::Green, "b"),
            moment(86_400, Mood::Happy, PlayColor::Green, "c"),
        ];
        let refs: Vec<&PlayMoment> = moments.iter().collect();
        let insights = LocalAnalyzer.analyze(&refs);

        assert_eq!(insights.stats.busiest_day.as_deref(), Some("Thursday"));
        assert!(
            insights
                .patterns
                .iter()
                .any(|pattern| pattern.title.contains("Thursday")),
            "busiest day surfaces as a pattern"
        );
    }

    #[test]
    fn analyzer_is_deterministic() {
        let moments = vec![moment(0, Mood::Magical, PlayColor::Lavender, "found a feather")];
        let refs: Vec<&PlayMoment> = moments.iter().collect();
        assert_eq!(LocalAnalyzer.analyze(&refs), LocalAnalyzer.analyze(&refs));
    }

    #[test]
    fn insights_round_trip_through_json() {
        let moments = vec![moment(0, Mood::Creative, PlayColor::Orange, "doodled a map")];
        let refs: Vec<&PlayMoment> = moments.iter().collect();
        let insights = LocalAnalyzer.analyze(&refs);

        let payload = serde_json::to_string(&insights).unwrap();
        let parsed: WeekInsights = serde_json::from_str(&payload).unwrap();
        assert_eq!(parsed, insights);
    }
}
