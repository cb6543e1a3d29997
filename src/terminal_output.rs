//! Terminal output formatting
//!
//! Renders the pass/fail markers and the colored fragments of each result line.
//! Color is applied only around the marker, the failure infix and a failing
//! summary; the test name and the reason stay uncolored.

use crate::config::TrackerConfig;
use crate::constants::{
    ANSI_GREEN, ANSI_RED, ANSI_RESET, FAILED_INFIX, FANCY_FAIL_MARK, FANCY_PASS_MARK,
    PASSED_SUFFIX, PLAIN_FAIL_MARK, PLAIN_PASS_MARK,
};

/// Marker and color choices derived from a [`TrackerConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalOutput {
    fancy: bool,
    color: bool,
}

impl TerminalOutput {
    pub fn new(fancy: bool, color: bool) -> Self {
        Self { fancy, color }
    }

    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.fancy, config.color)
    }

    pub fn red(&self, s: &str) -> String {
        paint(ANSI_RED, s, self.color)
    }

    pub fn green(&self, s: &str) -> String {
        paint(ANSI_GREEN, s, self.color)
    }

    pub fn pass_mark(&self) -> String {
        self.green(if self.fancy {
            FANCY_PASS_MARK
        } else {
            PLAIN_PASS_MARK
        })
    }

    pub fn fail_mark(&self) -> String {
        self.red(if self.fancy {
            FANCY_FAIL_MARK
        } else {
            PLAIN_FAIL_MARK
        })
    }

    /// `<pass mark><test> passed`
    pub fn pass_line(&self, test: &str) -> String {
        format!("{}{test}{PASSED_SUFFIX}", self.pass_mark())
    }

    /// `<fail mark><test> FAILED: <reason>`
    pub fn fail_line(&self, test: &str, reason: &str) -> String {
        format!("{}{test}{}{reason}", self.fail_mark(), self.red(FAILED_INFIX))
    }
}

/// Wrap `s` in `code` and a reset, or return it untouched when color is off.
pub fn paint(code: &str, s: &str, color: bool) -> String {
    if color {
        format!("{code}{s}{ANSI_RESET}")
    } else {
        s.to_string()
    }
}
