//! Construction counting for `Time` values
//!
//! The counter is owned by whichever component builds the values rather
//! than living in hidden global state. It is never decremented or reset;
//! tests inject a fresh counter per case. The program is single-threaded,
//! so a plain integer suffices.

use crate::Time;

/// Counts `Time` constructions performed through it
#[derive(Debug, Default)]
pub struct ConstructionCounter {
    count: u64,
}

impl ConstructionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructions recorded so far
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Record one construction that happened elsewhere
    pub fn record(&mut self) {
        self.count += 1;
    }

    /// Build a counted `Time` from an (hours, minutes, seconds) triple
    pub fn make(&mut self, hours: i64, minutes: i64, seconds: i64) -> Time {
        self.record();
        Time::from_hms(hours, minutes, seconds)
    }

    /// Build a counted `Time` from a raw second count
    pub fn make_seconds(&mut self, total_seconds: i64) -> Time {
        self.record();
        Time::from_seconds(total_seconds)
    }

    /// Count a copy produced elsewhere (operator results, postfix
    /// snapshots) and hand it back
    pub fn adopt(&mut self, time: Time) -> Time {
        self.record();
        time
    }
}
