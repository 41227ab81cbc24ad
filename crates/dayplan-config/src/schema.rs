//! Raw seed schema (as parsed from TOML)

use serde::{Deserialize, Serialize};

/// Raw seed file as parsed from TOML
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawSeed {
    /// Seed schema version
    pub config_version: u32,

    /// Demo presentation settings
    #[serde(default)]
    pub demo: RawDemoConfig,

    /// Events to preload into the schedule
    #[serde(default)]
    pub events: Vec<RawEvent>,
}

/// Presentation settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawDemoConfig {
    /// Clear the screen between menus (default: true)
    pub clear_screen: Option<bool>,
}

/// Raw event definition
///
/// Times are `H:MM:SS` strings; hours are uncapped so planned durations
/// beyond a day stay expressible.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawEvent {
    /// Display name
    pub name: String,

    /// Start time
    pub start: String,

    /// End time
    pub end: String,

    /// Planned duration
    pub planned: String,
}
