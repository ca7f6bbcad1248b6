#![cfg(feature = "std")]

use log::{self, LevelFilter, Metadata, Record};
use std::env;
use std::string::String;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SEA_BATTLE_LOG";

/// Writes `[sea-battle] LEVEL module: message` lines to stderr, so they do
/// not interleave with the boards drawn on stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Render one log line. The crate name is dropped from the target, leaving
/// the module (`game`, `generator`, `player::cli`, ...).
pub fn format_record(record: &Record) -> String {
    let target = record.target();
    let module = target
        .strip_prefix("sea_battle::")
        .unwrap_or(target);
    format!("[sea-battle] {:<5} {}: {}", record.level(), module, record.args())
}

/// Level named by `raw`, case-insensitive; `info` when absent or unparsable.
pub fn log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|lvl| lvl.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the stderr logger with its level taken from `SEA_BATTLE_LOG`.
/// Calling it again is harmless.
pub fn init_logging() {
    let level = log_level(env::var(LOG_ENV).ok().as_deref());
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
