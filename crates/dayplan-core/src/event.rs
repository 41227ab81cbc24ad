//! Events and derived durations

use dayplan_util::{DAY_SECONDS, Time};

/// How an event's actual duration compares to its plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    /// Actual ran longer than planned
    Behind,
    /// Actual came in under plan
    Ahead,
    /// Actual equals planned exactly
    OnTime,
}

impl Pace {
    pub fn label(self) -> &'static str {
        match self {
            Pace::Behind => "running long",
            Pace::Ahead => "ahead of plan",
            Pace::OnTime => "on time",
        }
    }
}

/// A scheduled event
///
/// `actual` is always derived from `start` and `end`; it is recomputed on
/// construction and on every retime, never set directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    start: Time,
    end: Time,
    planned: Time,
    actual: Time,
}

impl Event {
    pub fn new(name: impl Into<String>, start: Time, end: Time, planned: Time) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            planned,
            actual: derive_actual(start, end),
        }
    }

    pub fn start(&self) -> Time {
        self.start
    }

    pub fn end(&self) -> Time {
        self.end
    }

    pub fn planned(&self) -> Time {
        self.planned
    }

    pub fn actual(&self) -> Time {
        self.actual
    }

    /// Replace the times and recompute the actual duration
    pub fn retime(&mut self, start: Time, end: Time, planned: Time) {
        self.start = start;
        self.end = end;
        self.planned = planned;
        self.actual = derive_actual(start, end);
    }

    /// Mutable access to the start time for the operator demos.
    ///
    /// Deliberately does not recompute `actual`: the demos manipulate a
    /// stored time in place, and the derived duration only tracks
    /// create/edit, matching the schedule management flow.
    pub fn start_mut(&mut self) -> &mut Time {
        &mut self.start
    }

    /// Classify actual duration against the plan
    pub fn pace(&self) -> Pace {
        if self.actual > self.planned {
            Pace::Behind
        } else if self.actual < self.planned {
            Pace::Ahead
        } else {
            Pace::OnTime
        }
    }

    /// Difference between actual and planned duration (clamped at zero
    /// when the event ran short, like all `Time` subtraction)
    pub fn plan_difference(&self) -> Time {
        self.actual - self.planned
    }
}

/// End minus start on raw second counts, wrapped by 24h when the event
/// crosses midnight.
///
/// Computed on raw totals because operator subtraction saturates at zero
/// and would swallow the negative difference the rollover rule keys on.
fn derive_actual(start: Time, end: Time) -> Time {
    let mut raw = end.total_seconds() - start.total_seconds();
    if raw < 0 {
        raw += DAY_SECONDS;
    }
    Time::from_seconds(raw)
}
