//! Shared value types for dayplan
//!
//! This crate provides:
//! - The `Time` value type (seconds since midnight, full operator set)
//! - `ConstructionCounter` for tracking how many `Time` values a component
//!   has built

mod counter;
mod time;

pub use counter::*;
pub use time::*;
