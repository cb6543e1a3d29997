//! Runs a small demonstration suite through an `AssertionTracker` and prints its summary.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::info;
use unit_tally::{
    AssertionTracker, TrackerConfig,
    timestamp::{format_current_time, format_elapsed},
};

/// Demonstration driver for the unit_tally assertion tracker
#[derive(Parser)]
#[command(
    name = "tally_demo",
    version = env!("CARGO_PKG_VERSION"),
    about = "Run a demonstration suite through the unit_tally assertion tracker",
    long_about = "Runs a handful of assertions against the standard library and prints one line \
                  per failure (or per assertion with --verbose) followed by a summary.\n\n\
                  UNIT_TALLY_VERBOSE, UNIT_TALLY_FANCY and NO_COLOR are read first; flags override them."
)]
struct Args {
    /// Print passing assertions too
    #[arg(long, help = "Print a line for every assertion, not just failures")]
    verbose: bool,

    /// Use Unicode check and cross glyphs
    #[arg(long, help = "Use Unicode glyphs instead of ASCII markers")]
    fancy: bool,

    /// Disable ANSI colors
    #[arg(long, help = "Do not emit ANSI color codes")]
    no_color: bool,

    /// Include a deliberately failing test
    #[arg(long, help = "Add a test that always fails, to show failure output")]
    with_failure: bool,

    /// Log to rolling file instead of stderr
    #[arg(long, help = "Write logs to a rolling daily file instead of stderr")]
    log_to_file: bool,

    /// Enable debug-level logging
    #[arg(long, help = "Log every recorded assertion at debug level")]
    debug: bool,
}

impl Args {
    fn tracker_config(&self, mut config: TrackerConfig) -> TrackerConfig {
        config.verbose |= self.verbose;
        config.fancy |= self.fancy;
        if self.no_color {
            config.color = false;
        }
        config
    }
}

fn string_tests(t: &mut AssertionTracker) {
    let mut t = t.test("string_tests");
    t.assert_equals_string(&"tally".to_uppercase(), "TALLY");
    t.assert_equals_string("a-b-c".split('-').collect::<Vec<_>>().concat().as_str(), "abc");
    t.assert_true("unit tally".contains("tally"), "substring not found");
    t.assert_false("".contains('x'), "empty string contains x");
}

fn number_tests(t: &mut AssertionTracker) {
    let mut t = t.test("number_tests");
    t.assert_equals_number(2 + 2, 4);
    t.assert_equals_number("17".parse::<u32>().unwrap_or_default(), 17);
    t.assert_equals_number(0.5_f64 * 4.0, 2.0);
}

fn option_tests(t: &mut AssertionTracker) {
    let mut t = t.test("option_tests");
    let words = ["alpha", "beta"];
    t.assert_null(words.iter().find(|w| w.starts_with('z')));
    t.assert_equals_value(&words.len(), &2);
}

fn deliberate_failure(t: &mut AssertionTracker) {
    let mut t = t.test("deliberate_failure");
    t.assert_equals_string(&"abc".replace('c', "d"), "abc");
    t.assert_null(Some("left over"));
}

fn main() -> Result<()> {
    let args = Args::parse();

    unit_tally::logging::init_subscriber(args.log_to_file, args.debug);

    let env_config =
        TrackerConfig::from_env().context("Reading tracker settings from environment")?;
    let config = args.tracker_config(env_config);
    info!(?config, "Starting demonstration suite");

    let mut tracker = AssertionTracker::from_config(config);
    string_tests(&mut tracker);
    number_tests(&mut tracker);
    option_tests(&mut tracker);
    if args.with_failure {
        deliberate_failure(&mut tracker);
    }

    let mut stdout = std::io::stdout();
    writeln!(
        stdout,
        "[{}] {} in {}",
        format_current_time(),
        tracker.summarize(),
        format_elapsed(tracker.elapsed())
    )?;
    stdout.flush()?;

    if !tracker.all_passed() {
        std::process::exit(1);
    }
    Ok(())
}
