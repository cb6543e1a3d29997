//! Pass/fail counters and the summary line.
//!
//! A [`Tally`] is plain `Copy` data. Trackers running on different threads
//! each own one; the caller combines them with [`Tally::merge`] (or `+=`, or
//! `Iterator::sum`) to get an overall result.

use crate::constants::ANSI_RED;
use crate::terminal_output::paint;
use std::fmt;
use std::iter::Sum;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub failed: usize,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn record_pass(&mut self) {
        self.passed += 1;
    }

    pub fn record_fail(&mut self) {
        self.failed += 1;
    }

    /// Add another session's counts to this one
    pub fn merge(&mut self, other: Tally) {
        self.passed += other.passed;
        self.failed += other.failed;
    }

    /// The summary line, wrapped in red when anything failed and `color` is on.
    pub fn summary_line(&self, color: bool) -> String {
        let line = self.to_string();
        if self.failed > 0 {
            paint(ANSI_RED, &line, color)
        } else {
            line
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ran {} assertions, {} passed {} failed",
            self.total(),
            self.passed,
            self.failed
        )
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, other: Tally) {
        self.merge(other);
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Self {
        iter.fold(Tally::new(), |mut acc, t| {
            acc.merge(t);
            acc
        })
    }
}
