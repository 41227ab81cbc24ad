//! Seed validation
//!
//! The `Time` value type accepts any integers without complaint, so range
//! checking lives here, on the caller side: minutes and seconds must fall
//! in [0, 60) and no component may be negative.

use crate::schema::{RawEvent, RawSeed};
use thiserror::Error;

/// Validation error
#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Event '{name}': {message}")]
    EventError { name: String, message: String },

    #[error("Invalid time '{value}' for event '{name}': {message}")]
    InvalidTime {
        name: String,
        value: String,
        message: String,
    },
}

/// Validate a raw seed
pub fn validate_seed(seed: &RawSeed) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for event in &seed.events {
        errors.extend(validate_event(event));
    }

    errors
}

fn validate_event(event: &RawEvent) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if event.name.trim().is_empty() {
        errors.push(ValidationError::EventError {
            name: event.name.clone(),
            message: "name cannot be empty".into(),
        });
    }

    for (field, value) in [
        ("start", &event.start),
        ("end", &event.end),
        ("planned", &event.planned),
    ] {
        if let Err(message) = parse_time_of_day(value) {
            errors.push(ValidationError::InvalidTime {
                name: event.name.clone(),
                value: value.clone(),
                message: format!("{field}: {message}"),
            });
        }
    }

    errors
}

/// Parse `H:MM:SS` into an (hours, minutes, seconds) triple.
///
/// Hours are uncapped; minutes and seconds must be in [0, 60); nothing
/// may be negative.
pub fn parse_time_of_day(s: &str) -> Result<(i64, i64, i64), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return Err("Expected H:MM:SS format".into());
    }

    let hours: i64 = parts[0].trim().parse().map_err(|_| "Invalid hours".to_string())?;
    let minutes: i64 = parts[1].trim().parse().map_err(|_| "Invalid minutes".to_string())?;
    let seconds: i64 = parts[2].trim().parse().map_err(|_| "Invalid seconds".to_string())?;

    if hours < 0 || minutes < 0 || seconds < 0 {
        return Err("Components must be non-negative".into());
    }
    if minutes >= 60 {
        return Err("Minutes must be 0-59".into());
    }
    if seconds >= 60 {
        return Err("Seconds must be 0-59".into());
    }

    Ok((hours, minutes, seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_of_day_accepts_valid() {
        assert_eq!(parse_time_of_day("9:30:00").unwrap(), (9, 30, 0));
        assert_eq!(parse_time_of_day("0:00:00").unwrap(), (0, 0, 0));
        assert_eq!(parse_time_of_day("23:59:59").unwrap(), (23, 59, 59));
        // Hours uncapped: multi-day durations are valid
        assert_eq!(parse_time_of_day("25:00:00").unwrap(), (25, 0, 0));
    }

    #[test]
    fn parse_time_of_day_rejects_invalid() {
        assert!(parse_time_of_day("12:75:00").is_err());
        assert!(parse_time_of_day("12:00:60").is_err());
        assert!(parse_time_of_day("-1:00:00").is_err());
        assert!(parse_time_of_day("12:30").is_err());
        assert!(parse_time_of_day("noon").is_err());
        assert!(parse_time_of_day("").is_err());
    }

    #[test]
    fn rejects_empty_name() {
        let event = RawEvent {
            name: "  ".into(),
            start: "9:00:00".into(),
            end: "10:00:00".into(),
            planned: "1:00:00".into(),
        };
        let errors = validate_event(&event);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], ValidationError::EventError { .. }));
    }

    #[test]
    fn collects_all_time_errors() {
        let event = RawEvent {
            name: "bad".into(),
            start: "9:75:00".into(),
            end: "oops".into(),
            planned: "1:00:00".into(),
        };
        let errors = validate_event(&event);
        assert_eq!(errors.len(), 2);
    }
}
