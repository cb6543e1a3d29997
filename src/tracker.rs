//! Assertion tracking
//!
//! [`AssertionTracker`] counts passing and failing assertions for one test
//! session and prints a line for every failure (and, in verbose mode, for every
//! pass). Mismatches are never fatal: they are counted, printed, and the caller
//! carries on.
//!
//! ## Test names
//!
//! Each printed line names the test that made the assertion. The name comes
//! from, in order:
//!
//! 1. the innermost live [`TestScope`] created with [`AssertionTracker::test`], or a
//!    name set with [`AssertionTracker::set_test_name`]
//! 2. the call site of the assertion (`file:line`), captured with `#[track_caller]`
//!
//! Helper functions that wrap assertions should carry `#[track_caller]` too so
//! the fallback points at the test rather than the helper.
//!
//! ## Usage Example
//!
//! ```rust
//! use unit_tally::{AssertionTracker, TrackerConfig};
//!
//! let mut tracker = AssertionTracker::with_writer(TrackerConfig::default(), Vec::new());
//! {
//!     let mut t = tracker.test("parses_numbers");
//!     t.assert_equals_number("42".parse::<i32>().unwrap(), 42);
//!     t.assert_equals_string(&"abc".to_uppercase(), "ABC");
//! }
//! assert_eq!(tracker.summarize(), "Ran 2 assertions, 2 passed 0 failed");
//! ```

use crate::config::TrackerConfig;
use crate::number::Number;
use crate::tally::Tally;
use crate::terminal_output::TerminalOutput;
use std::fmt::Display;
use std::io::{self, Write};
use std::ops::{Deref, DerefMut};
use std::panic::Location;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Counts assertion results for one session and reports them on `W`
#[derive(Debug)]
pub struct AssertionTracker<W: Write = io::Stdout> {
    config: TrackerConfig,
    tally: Tally,
    started: Instant,
    current_test: Option<String>,
    writer: W,
}

impl AssertionTracker<io::Stdout> {
    /// A quiet tracker with plain markers, printing to stdout
    pub fn new() -> Self {
        Self::with_options(false, false)
    }

    /// A tracker printing to stdout, optionally reporting passes too
    pub fn verbose(verbose: bool) -> Self {
        Self::with_options(verbose, false)
    }

    pub fn with_options(verbose: bool, fancy: bool) -> Self {
        Self::from_config(TrackerConfig::new(verbose, fancy))
    }

    pub fn from_config(config: TrackerConfig) -> Self {
        Self::with_writer(config, io::stdout())
    }
}

impl Default for AssertionTracker<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> AssertionTracker<W> {
    /// Create a tracker that writes result lines to `writer`.
    ///
    /// Every other constructor ends up here.
    pub fn with_writer(config: TrackerConfig, writer: W) -> Self {
        trace!(
            verbose = config.verbose,
            fancy = config.fancy,
            color = config.color,
            "Assertion tracker created"
        );
        Self {
            config,
            tally: Tally::new(),
            started: Instant::now(),
            current_test: None,
            writer,
        }
    }

    /// Start a fresh session: zero both counters and restart the clock.
    pub fn reinitialize(&mut self) {
        debug!(previous = %self.tally, "Reinitializing assertion tracker");
        self.tally = Tally::new();
        self.started = Instant::now();
    }

    /// `Ran N assertions, P passed F failed`, in red if anything failed.
    pub fn summarize(&self) -> String {
        self.tally.summary_line(self.config.color)
    }

    pub fn passed(&self) -> usize {
        self.tally.passed
    }

    pub fn failed(&self) -> usize {
        self.tally.failed
    }

    pub fn total(&self) -> usize {
        self.tally.total()
    }

    pub fn all_passed(&self) -> bool {
        self.tally.all_passed()
    }

    /// Counts for this session, for merging with other trackers
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Time since construction or the last [`reinitialize`](Self::reinitialize)
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn is_verbose(&self) -> bool {
        self.config.verbose
    }

    pub fn is_fancy(&self) -> bool {
        self.config.fancy
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.config.verbose = verbose;
    }

    pub fn set_fancy(&mut self, fancy: bool) {
        self.config.fancy = fancy;
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Attribute assertions to `name` until the returned guard is dropped.
    ///
    /// Scopes nest: dropping an inner scope restores the outer name.
    pub fn test(&mut self, name: impl Into<String>) -> TestScope<'_, W> {
        let previous = self.current_test.replace(name.into());
        TestScope {
            tracker: self,
            previous,
        }
    }

    /// Set (or clear) the current test name without a guard
    pub fn set_test_name(&mut self, name: Option<&str>) {
        self.current_test = name.map(str::to_string);
    }

    pub fn current_test(&self) -> Option<&str> {
        self.current_test.as_deref()
    }

    /// Count a pass; print it in verbose mode.
    #[track_caller]
    pub fn record_pass(&mut self) {
        let test = self.test_name();
        debug!(test = %test, "Assertion passed");
        if self.config.verbose {
            let line = self.output().pass_line(&test);
            self.emit(&line);
        }
        self.tally.record_pass();
    }

    /// Count a failure and always print it.
    #[track_caller]
    pub fn record_fail(&mut self, reason: &str) {
        let test = self.test_name();
        debug!(test = %test, reason, "Assertion failed");
        let line = self.output().fail_line(&test, reason);
        self.emit(&line);
        self.tally.record_fail();
    }

    /// Unconditionally pass
    #[track_caller]
    pub fn pass(&mut self) {
        self.record_pass();
    }

    /// Unconditionally fail
    #[track_caller]
    pub fn fail(&mut self, reason: &str) {
        self.record_fail(reason);
    }

    #[track_caller]
    pub fn assert_true(&mut self, result: bool, reason: &str) {
        if result {
            self.record_pass();
        } else {
            self.record_fail(reason);
        }
    }

    #[track_caller]
    pub fn assert_false(&mut self, result: bool, reason: &str) {
        if !result {
            self.record_pass();
        } else {
            self.record_fail(reason);
        }
    }

    /// Pass if `actual` is `None`.
    #[track_caller]
    pub fn assert_null<T: Display>(&mut self, actual: Option<T>) {
        match actual {
            None => self.record_pass(),
            Some(value) => self.record_fail(&format!("expected NULL, got <<{value}>>")),
        }
    }

    #[track_caller]
    pub fn assert_equals_string(&mut self, actual: &str, expected: &str) {
        if actual == expected {
            self.record_pass();
        } else {
            self.record_fail(&format!("expected \"{expected}\" got \"{actual}\""));
        }
    }

    #[track_caller]
    pub fn assert_equals_value<T>(&mut self, actual: &T, expected: &T)
    where
        T: PartialEq + Display + ?Sized,
    {
        if actual == expected {
            self.record_pass();
        } else {
            self.record_fail(&format!("expected <<{expected}>> got <<{actual}>>"));
        }
    }

    #[track_caller]
    pub fn assert_equals_number<N: Number>(&mut self, actual: N, expected: N) {
        if actual == expected {
            self.record_pass();
        } else {
            self.record_fail(&format!("expected {expected} got {actual}"));
        }
    }

    fn output(&self) -> TerminalOutput {
        TerminalOutput::from_config(&self.config)
    }

    #[track_caller]
    fn test_name(&self) -> String {
        match &self.current_test {
            Some(name) => name.clone(),
            None => {
                let caller = Location::caller();
                format!("{}:{}", caller.file(), caller.line())
            }
        }
    }

    fn emit(&mut self, line: &str) {
        let result = writeln!(self.writer, "{line}").and_then(|_| self.writer.flush());
        if let Err(e) = result {
            warn!("Failed to write assertion result: {e}");
        }
    }
}

/// Guard returned by [`AssertionTracker::test`]
///
/// Dereferences to the tracker, so assertions are made directly on the scope.
pub struct TestScope<'a, W: Write> {
    tracker: &'a mut AssertionTracker<W>,
    previous: Option<String>,
}

impl<W: Write> Deref for TestScope<'_, W> {
    type Target = AssertionTracker<W>;

    fn deref(&self) -> &Self::Target {
        self.tracker
    }
}

impl<W: Write> DerefMut for TestScope<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.tracker
    }
}

impl<W: Write> Drop for TestScope<'_, W> {
    fn drop(&mut self) {
        self.tracker.current_test = self.previous.take();
    }
}
