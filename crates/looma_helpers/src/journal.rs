use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::emoji::Mood;
use crate::palette::PlayColor;

/// Key for the journal payload in browser local storage.
const STORAGE_KEY: &str = "noomalooma-play-moments";

const SECS_PER_DAY: i64 = 86_400;
const WEEK_SECS: i64 = 7 * SECS_PER_DAY;

/// One logged play moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayMoment {
    pub id: String,
    /// Unix seconds.
    pub timestamp: i64,
    pub text: String,
    pub mood: Mood,
    pub color: PlayColor,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("journal payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("local storage unavailable: {0}")]
    Storage(String),

    #[error("journal file error: {0}")]
    Io(#[from] std::io::Error),
}

/// All logged moments, bucketed by civil date (`YYYY-MM-DD`).
#[derive(Resource, Debug, Default, Clone, Serialize, Deserialize)]
pub struct MomentJournal {
    moments: BTreeMap<String, Vec<PlayMoment>>,
}

impl MomentJournal {
    /// Loads the journal from local storage, falling back to an empty
    /// journal when nothing is stored yet or the payload is unreadable.
    pub fn load() -> Self {
        match read_storage() {
            Ok(Some(payload)) => match serde_json::from_str(&payload) {
                Ok(journal) => journal,
                Err(err) => {
                    warn!("discarding unreadable journal: {}", JournalError::from(err));
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(err) => {
                warn!("journal load failed: {err}");
                Self::default()
            }
        }
    }

    /// Appends a moment under its date bucket without persisting.
    pub fn record(&mut self, moment: PlayMoment) {
        let date = civil_date(moment.timestamp);
        self.moments.entry(date).or_default().push(moment);
    }

    /// Appends a moment and persists the journal. A failed write is logged
    /// and the in-memory journal keeps the moment.
    pub fn push(&mut self, moment: PlayMoment) {
        self.record(moment);

        if let Err(err) = self.save() {
            warn!("journal save failed: {err}");
        }
    }

    fn save(&self) -> Result<(), JournalError> {
        let payload = serde_json::to_string(self)?;
        write_storage(&payload)
    }

    pub fn all(&self) -> impl Iterator<Item = &PlayMoment> {
        self.moments.values().flatten()
    }

    pub fn len(&self) -> usize {
        self.moments.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.moments.values().all(Vec::is_empty)
    }

    pub fn on_date(&self, date: &str) -> &[PlayMoment] {
        self.moments.get(date).map_or(&[], Vec::as_slice)
    }

    pub fn with_mood(&self, mood: Mood) -> impl Iterator<Item = &PlayMoment> {
        self.all().filter(move |moment| moment.mood == mood)
    }

    /// Moments from the seven days leading up to `now` (unix seconds).
    pub fn last_week(&self, now: i64) -> Vec<&PlayMoment> {
        let cutoff = now - WEEK_SECS;
        self.all()
            .filter(|moment| moment.timestamp >= cutoff && moment.timestamp <= now)
            .collect()
    }
}

/// Unix seconds right now.
pub fn now_unix_secs() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        (web_sys::js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |duration| duration.as_secs() as i64)
    }
}

/// `YYYY-MM-DD` for a unix timestamp, computed from days since epoch.
pub fn civil_date(timestamp: i64) -> String {
    let days = timestamp.div_euclid(SECS_PER_DAY);
    let (year, month, day) = civil_from_days(days);
    format!("{year:04}-{month:02}-{day:02}")
}

/// 0 = Sunday .. 6 = Saturday, JavaScript's `Date::getDay` convention.
pub fn weekday(timestamp: i64) -> u8 {
    let days = timestamp.div_euclid(SECS_PER_DAY);
    // 1970-01-01 was a Thursday.
    ((days + 4).rem_euclid(7)) as u8
}

// Howard Hinnant's days-from-civil inverse, proleptic Gregorian.
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let year = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

#[cfg(target_arch = "wasm32")]
fn read_storage() -> Result<Option<String>, JournalError> {
    local_storage()?
        .get_item(STORAGE_KEY)
        .map_err(|err| JournalError::Storage(format!("{err:?}")))
}

#[cfg(target_arch = "wasm32")]
fn write_storage(payload: &str) -> Result<(), JournalError> {
    local_storage()?
        .set_item(STORAGE_KEY, payload)
        .map_err(|err| JournalError::Storage(format!("{err:?}")))
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, JournalError> {
    web_sys::window()
        .ok_or_else(|| JournalError::Storage("no window".to_string()))?
        .local_storage()
        .map_err(|err| JournalError::Storage(format!("{err:?}")))?
        .ok_or_else(|| JournalError::Storage("local storage disabled".to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn journal_path() -> std::path::PathBuf {
    let base = std::env::var_os("HOME").map_or_else(
        || std::path::PathBuf::from("."),
        std::path::PathBuf::from,
    );
    base.join(".noomalooma").join(format!("{STORAGE_KEY}.json"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_storage() -> Result<Option<String>, JournalError> {
    let path = journal_path();
    if !path.exists() {
        return Ok(None);
    }
    Ok(Some(std::fs::read_to_string(path)?))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_storage(payload: &str) -> Result<(), JournalError> {
    let path = journal_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moment(id: &str, timestamp: i64, mood: Mood) -> PlayMoment {
        PlayMoment {
            id: id.to_string(),
            timestamp,
            text: "chased pigeons".to_string(),
            mood,
            color: PlayColor::Green,
            tags: Vec::new(),
        }
    }

    #[test]
    fn civil_date_buckets_moments_by_day() {
        assert_eq!(civil_date(0), "1970-01-01");
        assert_eq!(civil_date(SECS_PER_DAY - 1), "1970-01-01");
        assert_eq!(civil_date(SECS_PER_DAY), "1970-01-02");
        // 2026-08-28 00:00:00 UTC
        assert_eq!(civil_date(1_787_875_200), "2026-08-28");
    }

    #[test]
    fn weekday_matches_js_get_day() {
        // 1970-01-01 was a Thursday
        assert_eq!(weekday(0), 4);
        // 2026-08-28 is a Friday
        assert_eq!(weekday(1_787_875_200), 5);
        // three days later, a Monday
        assert_eq!(weekday(1_787_875_200 + 3 * SECS_PER_DAY), 1);
    }

    #[test]
    fn push_buckets_by_date_and_counts() {
        let mut journal = MomentJournal::default();
        journal.record(moment("a", 0, Mood::Happy));
        journal.record(moment("b", 10, Mood::Silly));
        journal.record(moment("c", SECS_PER_DAY + 1, Mood::Happy));

        assert_eq!(journal.len(), 3);
        assert_eq!(journal.on_date("1970-01-01").len(), 2);
        assert_eq!(journal.on_date("1970-01-02").len(), 1);
        assert_eq!(journal.with_mood(Mood::Happy).count(), 2);
    }

    #[test]
    fn last_week_filters_older_moments() {
        let now = 100 * SECS_PER_DAY;
        let mut journal = MomentJournal::default();
        journal.record(moment("old", now - WEEK_SECS - 1, Mood::Happy));
        journal.record(moment("edge", now - WEEK_SECS, Mood::Silly));
        journal.record(moment("fresh", now - 60, Mood::Peaceful));

        let week: Vec<&str> = journal
            .last_week(now)
            .iter()
            .map(|moment| moment.id.as_str())
            .collect();
        assert_eq!(week, vec!["edge", "fresh"], "cutoff is inclusive at 7 days");
    }
}
