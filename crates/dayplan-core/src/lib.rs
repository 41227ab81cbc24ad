//! In-memory event schedule for dayplan
//!
//! This crate contains:
//! - `Event`: a named entry with start, end, planned and derived actual
//!   duration (midnight rollover applied)
//! - `Schedule`: the process-lifetime event list with CRUD and inter-event
//!   intervals
//! - `Pace`: actual-versus-planned classification

mod event;
mod schedule;

pub use event::*;
pub use schedule::*;
