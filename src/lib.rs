//! Library module for unit_tally
//!
//! A small assertion tracker for hand-written test drivers. It counts passing
//! and failing assertions, prints a colored marker line for each failure (and
//! each pass in verbose mode), and produces a one-line summary at the end.
//! Failed assertions never panic.

pub mod config;
pub mod constants;
pub mod logging;
pub mod number;
pub mod tally;
pub mod terminal_output;
pub mod test_utils;
pub mod timestamp;
pub mod tracker;

pub use config::{ConfigError, TrackerConfig};
pub use number::Number;
pub use tally::Tally;
pub use tracker::{AssertionTracker, TestScope};
