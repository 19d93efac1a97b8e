//! Logging prompts, picked by time of day and day of week so the wizard
//! never greets an evening wind-down with a morning question.

#[cfg(not(target_arch = "wasm32"))]
use crate::journal;

pub struct LoggingPrompts {
    pub text: &'static str,
    pub mood: &'static str,
    pub color: &'static str,
}

const MORNING: &[&str] = &[
    "How are you greeting the day playfully?",
    "What's bringing lightness to your morning?",
    "How did you start today with intention?",
];

const MIDDAY: &[&str] = &[
    "What pulled you into the present moment?",
    "How did you find play in the middle of your day?",
    "What made you pause and smile?",
];

const AFTERNOON: &[&str] = &[
    "What re-energized you just now?",
    "How did you shift into a more playful mindset?",
    "What helped you reconnect with joy?",
];

const EVENING: &[&str] = &[
    "How are you winding down with presence?",
    "What brought you back to yourself tonight?",
    "How did you choose to play instead of scroll?",
];

const LATE_NIGHT: &[&str] = &[
    "What gentle joy are you ending the day with?",
    "How are you honoring this quiet moment?",
];

const ANYTIME: &[&str] = &[
    "What playful moment just happened?",
    "How did you just choose joy?",
    "What made you smile in the last few minutes?",
    "Describe this moment of lightness...",
    "What did play look like just now?",
    "How did you step into presence?",
    "What sparked curiosity for you?",
    "Share this pocket of joy...",
    "What felt alive and engaging?",
    "How did you connect with the moment?",
];

const WEEKEND_TEXT: &[&str] = &[
    "How are you honoring your free time?",
    "What does unhurried play look like today?",
    "How are you savoring this weekend moment?",
];

const MOOD_PROMPTS: &[&str] = &[
    "How did this moment feel?",
    "What's your play energy right now?",
    "Capture the mood of this experience",
    "How would you emoji this feeling?",
    "What emoji matches this moment's vibe?",
    "Sum up this feeling in one emoji",
];

const COLOR_PROMPTS: &[&str] = &[
    "What color captures this moment?",
    "If this feeling had a color...",
    "What hue matches your play energy?",
    "Choose the color of this experience",
    "What color is this moment for you?",
    "Paint this feeling with a color",
];

/// Prompts for the given local hour (0-23) and weekday (0 = Sunday).
/// Monday and Friday carry fixed themed prompts; weekends draw from their
/// own text pool; every other day mixes a time-of-day text prompt with a
/// random mood/color prompt.
pub fn prompts_for(hour: u32, weekday: u8) -> LoggingPrompts {
    match weekday {
        1 => {
            return LoggingPrompts {
                text: "New week, new opportunities for play. How are you starting?",
                mood: "Monday mood check - how are you feeling about play today?",
                color: "What color is your Monday energy?",
            };
        }
        5 => {
            return LoggingPrompts {
                text: "The week is winding down. How are you transitioning into play?",
                mood: "Friday feeling - what's your end-of-week vibe?",
                color: "What color celebrates making it through the week?",
            };
        }
        0 | 6 => {
            return LoggingPrompts {
                text: choose(WEEKEND_TEXT),
                mood: "How did this moment feel?",
                color: "What color captures this moment?",
            };
        }
        _ => {}
    }

    LoggingPrompts {
        text: choose(text_pool(hour)),
        mood: choose(MOOD_PROMPTS),
        color: choose(COLOR_PROMPTS),
    }
}

/// Prompts for right now.
pub fn current_prompts() -> LoggingPrompts {
    let (hour, weekday) = local_hour_and_weekday();
    prompts_for(hour, weekday)
}

// The hour buckets have deliberate gaps (10, 14, 18, 22); those hours fall
// through to the anytime pool.
const fn text_pool(hour: u32) -> &'static [&'static str] {
    match hour {
        6..=9 => MORNING,
        11..=13 => MIDDAY,
        15..=17 => AFTERNOON,
        19..=21 => EVENING,
        23 | 0..=5 => LATE_NIGHT,
        _ => ANYTIME,
    }
}

fn choose(pool: &'static [&'static str]) -> &'static str {
    pool.get(fastrand::usize(..pool.len())).map_or("", |s| s)
}

fn local_hour_and_weekday() -> (u32, u8) {
    #[cfg(target_arch = "wasm32")]
    {
        let date = web_sys::js_sys::Date::new_0();
        (date.get_hours(), date.get_day() as u8)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        // No timezone database on native; UTC is close enough for prompts.
        let now = journal::now_unix_secs();
        (
            (now.div_euclid(3600).rem_euclid(24)) as u32,
            journal::weekday(now),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monday_and_friday_are_themed() {
        let monday = prompts_for(12, 1);
        assert!(monday.text.starts_with("New week"), "got {}", monday.text);

        let friday = prompts_for(12, 5);
        assert!(
            friday.color.contains("celebrates"),
            "got {}",
            friday.color
        );
    }

    #[test]
    fn weekend_text_comes_from_weekend_pool() {
        for weekday in [0, 6] {
            let prompts = prompts_for(9, weekday);
            assert!(
                WEEKEND_TEXT.contains(&prompts.text),
                "unexpected weekend prompt: {}",
                prompts.text
            );
        }
    }

    #[test]
    fn hour_buckets_respect_gaps() {
        assert_eq!(text_pool(7), MORNING);
        assert_eq!(text_pool(12), MIDDAY);
        assert_eq!(text_pool(16), AFTERNOON);
        assert_eq!(text_pool(20), EVENING);
        assert_eq!(text_pool(2), LATE_NIGHT);
        // the deliberate gaps
        for hour in [10, 14, 18, 22] {
            assert_eq!(text_pool(hour), ANYTIME, "hour {hour} should fall through");
        }
    }

    #[test]
    fn weekday_prompts_draw_from_expected_pools() {
        let prompts = prompts_for(12, 3);
        assert!(MIDDAY.contains(&prompts.text));
        assert!(MOOD_PROMPTS.contains(&prompts.mood));
        assert!(COLOR_PROMPTS.contains(&prompts.color));
    }
}
