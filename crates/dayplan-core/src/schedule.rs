//! The in-memory event list

use crate::Event;
use dayplan_util::{DAY_SECONDS, Time};
use thiserror::Error;
use tracing::{debug, info};

/// Schedule errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("No event at index {0}")]
    EventNotFound(usize),

    #[error("Schedule is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Process-lifetime, in-memory event list.
///
/// Lives for the duration of the run only: nothing is persisted.
#[derive(Debug, Default)]
pub struct Schedule {
    events: Vec<Event>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Append an event, returning its index
    pub fn add(&mut self, event: Event) -> usize {
        debug!(name = %event.name, start = %event.start(), "Event added");
        self.events.push(event);
        self.events.len() - 1
    }

    pub fn get(&self, index: usize) -> Result<&Event> {
        self.events
            .get(index)
            .ok_or(ScheduleError::EventNotFound(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Event> {
        self.events
            .get_mut(index)
            .ok_or(ScheduleError::EventNotFound(index))
    }

    /// Remove an event, logging the times it carried.
    ///
    /// The log line is the explicit replacement for teardown-time logging:
    /// it fires here, at the removal boundary, not at drop time.
    pub fn remove(&mut self, index: usize) -> Result<Event> {
        if index >= self.events.len() {
            return Err(ScheduleError::EventNotFound(index));
        }
        let event = self.events.remove(index);
        info!(
            name = %event.name,
            start = %event.start().describe(),
            end = %event.end().describe(),
            "Event removed"
        );
        Ok(event)
    }

    /// Gap from the end of `from` to the start of `to`, wrapped by 24h
    /// when the raw difference is negative (the next day's schedule).
    ///
    /// Same rollover rule as the derived actual duration, and computed on
    /// raw totals for the same reason: saturating subtraction hides the
    /// sign the rule needs.
    pub fn interval_between(&self, from: usize, to: usize) -> Result<Time> {
        if self.events.is_empty() {
            return Err(ScheduleError::Empty);
        }
        let from_event = self.get(from)?;
        let to_event = self.get(to)?;

        let mut raw = to_event.start().total_seconds() - from_event.end().total_seconds();
        if raw < 0 {
            raw += DAY_SECONDS;
        }
        Ok(Time::from_seconds(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(name: &str, start: (i64, i64, i64), end: (i64, i64, i64)) -> Event {
        Event::new(
            name,
            Time::from_hms(start.0, start.1, start.2),
            Time::from_hms(end.0, end.1, end.2),
            Time::from_hms(1, 0, 0),
        )
    }

    #[test]
    fn add_get_remove() {
        let mut schedule = Schedule::new();
        assert!(schedule.is_empty());

        let idx = schedule.add(make_event("a", (9, 0, 0), (10, 0, 0)));
        assert_eq!(idx, 0);
        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.get(0).unwrap().name, "a");

        let removed = schedule.remove(0).unwrap();
        assert_eq!(removed.name, "a");
        assert!(schedule.is_empty());
    }

    #[test]
    fn get_out_of_range() {
        let schedule = Schedule::new();
        assert_eq!(schedule.get(0), Err(ScheduleError::EventNotFound(0)));
    }

    #[test]
    fn remove_out_of_range() {
        let mut schedule = Schedule::new();
        schedule.add(make_event("a", (9, 0, 0), (10, 0, 0)));
        assert_eq!(schedule.remove(5), Err(ScheduleError::EventNotFound(5)));
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn interval_same_day() {
        let mut schedule = Schedule::new();
        schedule.add(make_event("a", (9, 0, 0), (10, 0, 0)));
        schedule.add(make_event("b", (11, 30, 0), (12, 0, 0)));

        let gap = schedule.interval_between(0, 1).unwrap();
        assert_eq!(gap, Time::from_hms(1, 30, 0));
    }

    #[test]
    fn interval_wraps_midnight() {
        let mut schedule = Schedule::new();
        schedule.add(make_event("evening", (20, 0, 0), (23, 0, 0)));
        schedule.add(make_event("breakfast", (8, 0, 0), (8, 30, 0)));

        // 23:00 today to 08:00 tomorrow
        let gap = schedule.interval_between(0, 1).unwrap();
        assert_eq!(gap, Time::from_hms(9, 0, 0));
    }

    #[test]
    fn interval_on_empty_schedule() {
        let schedule = Schedule::new();
        assert_eq!(schedule.interval_between(0, 1), Err(ScheduleError::Empty));
    }

    #[test]
    fn edit_through_get_mut() {
        let mut schedule = Schedule::new();
        schedule.add(make_event("a", (9, 0, 0), (10, 0, 0)));

        let event = schedule.get_mut(0).unwrap();
        event.retime(
            Time::from_hms(9, 0, 0),
            Time::from_hms(11, 0, 0),
            Time::from_hms(2, 0, 0),
        );
        assert_eq!(schedule.get(0).unwrap().actual(), Time::from_hms(2, 0, 0));
    }
}
