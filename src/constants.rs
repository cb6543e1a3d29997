//! Centralized constants for console escape codes, marker glyphs and environment variables.

/// ANSI escape that switches the foreground to red.
pub const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape that switches the foreground to green.
pub const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape that resets all attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// Plain pass marker, including its trailing separator.
pub const PLAIN_PASS_MARK: &str = ". ";

/// Plain fail marker, including its trailing separator.
pub const PLAIN_FAIL_MARK: &str = "X ";

/// Fancy pass marker (check mark).
pub const FANCY_PASS_MARK: &str = "\u{2713} ";

/// Fancy fail marker (ballot x).
pub const FANCY_FAIL_MARK: &str = "\u{2717} ";

/// Infix placed between the test name and the reason on a failure line.
pub const FAILED_INFIX: &str = " FAILED: ";

/// Suffix placed after the test name on a verbose pass line.
pub const PASSED_SUFFIX: &str = " passed";

/// Enables verbose output when set to a truthy value.
pub const ENV_VERBOSE: &str = "UNIT_TALLY_VERBOSE";

/// Enables fancy glyphs when set to a truthy value.
pub const ENV_FANCY: &str = "UNIT_TALLY_FANCY";

/// Disables color when present with any value (see <https://no-color.org>).
pub const ENV_NO_COLOR: &str = "NO_COLOR";
