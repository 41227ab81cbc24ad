//! Validated seed structures

use crate::schema::{RawDemoConfig, RawSeed};
use crate::validation::parse_time_of_day;
use dayplan_util::Time;

/// Validated seed ready for use by the CLI
#[derive(Debug, Clone)]
pub struct Seed {
    /// Presentation settings
    pub demo: DemoConfig,

    /// Events to preload
    pub events: Vec<SeedEvent>,
}

impl Seed {
    /// Convert from a raw seed (after validation)
    pub fn from_raw(raw: RawSeed) -> Self {
        let events = raw
            .events
            .into_iter()
            .map(|e| SeedEvent {
                name: e.name,
                start: time_from_str(&e.start),
                end: time_from_str(&e.end),
                planned: time_from_str(&e.planned),
            })
            .collect();

        Self {
            demo: DemoConfig::from_raw(raw.demo),
            events,
        }
    }
}

/// Presentation settings with defaults applied
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub clear_screen: bool,
}

impl DemoConfig {
    fn from_raw(raw: RawDemoConfig) -> Self {
        Self {
            clear_screen: raw.clear_screen.unwrap_or(true),
        }
    }
}

/// A preloaded event; the schedule derives the actual duration on insert
#[derive(Debug, Clone)]
pub struct SeedEvent {
    pub name: String,
    pub start: Time,
    pub end: Time,
    pub planned: Time,
}

/// Validation guarantees the string parses; fold to a `Time`
fn time_from_str(s: &str) -> Time {
    let (h, m, sec) = parse_time_of_day(s).unwrap_or((0, 0, 0));
    Time::from_hms(h, m, sec)
}
