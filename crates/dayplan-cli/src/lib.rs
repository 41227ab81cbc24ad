//! Library surface of the dayplan binary
//!
//! Exposed so integration tests can drive the menus over a scripted
//! reader/writer pair instead of a terminal.

mod app;
mod console;

pub use app::App;
pub use console::{Console, ConsoleError};
