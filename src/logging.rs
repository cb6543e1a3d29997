//! Logging initialization utilities.
//!
//! Provides a single entry point `init_subscriber` that configures tracing for either
//! stderr (default) or a rolling daily log file. Debug mode enables debug level, which
//! logs every recorded assertion. Subsequent calls after the first are no-ops.

use directories::ProjectDirs;
use std::{fs, path::PathBuf, sync::Once};
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Directory used for log files, if the platform has a cache dir
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "unit_tally", "unit_tally").map(|proj| {
        let mut dir = PathBuf::from(proj.cache_dir());
        dir.push("logs");
        dir
    })
}

/// Initialize the global tracing subscriber.
///
/// * `log_to_file` - if true, write logs to a rolling daily file under the user's cache dir
/// * `debug_level` - if true, set global log level to `debug`, otherwise `warn`
pub fn init_subscriber(log_to_file: bool, debug_level: bool) {
    INIT.call_once(|| {
        let level = if debug_level { "debug" } else { "warn" };
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        if log_to_file && let Some(dir) = log_dir() {
            if let Err(e) = fs::create_dir_all(&dir) {
                eprintln!("Failed to create log dir {:?}: {e}", dir);
            }
            let file_appender = tracing_appender::rolling::daily(&dir, "tally.log");
            let (nb, guard) = tracing_appender::non_blocking(file_appender);
            // Keep guard alive for program lifetime to ensure flushing.
            Box::leak(Box::new(guard));
            fmt()
                .with_env_filter(env_filter)
                .with_writer(nb)
                .with_ansi(false)
                .with_target(false)
                .init();
            tracing::debug!(
                "Logging initialized (file mode) debug_level={} dir={:?}",
                debug_level,
                dir
            );
            return;
        }

        // stderr keeps log lines apart from assertion output on stdout
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
            .init();
        tracing::debug!("Logging initialized (stderr mode) debug_level={}", debug_level);
    });
}
