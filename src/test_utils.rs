//! Helpers for testing code that reports through an [`AssertionTracker`].

use crate::config::TrackerConfig;
use crate::tracker::AssertionTracker;

/// A tracker that writes into memory instead of stdout.
pub fn capture(config: TrackerConfig) -> AssertionTracker<Vec<u8>> {
    AssertionTracker::with_writer(config, Vec::new())
}

/// Captured output, split into lines, escape codes left in place.
pub fn output_lines(tracker: &AssertionTracker<Vec<u8>>) -> Vec<String> {
    String::from_utf8_lossy(tracker.writer())
        .lines()
        .map(str::to_string)
        .collect()
}

/// Captured output, split into lines, with ANSI escape codes removed.
pub fn plain_lines(tracker: &AssertionTracker<Vec<u8>>) -> Vec<String> {
    output_lines(tracker)
        .iter()
        .map(String::as_str)
        .map(strip_ansi)
        .collect()
}

/// Strip ANSI escape sequences so assertions can match on the visible text.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'[') {
            chars.next();
            // CSI ends at the first byte in 0x40..=0x7E
            for nc in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&nc) {
                    break;
                }
            }
        }
    }
    out
}
