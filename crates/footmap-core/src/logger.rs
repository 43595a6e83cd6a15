//! Stderr logging for the footmap binaries.
//!
//! Lines look like `[  0.042s DEBUG footmap_heatmap] message`. Records from
//! the footmap crates pass at the requested level; everything else (image
//! decoders, CLI parsing) is capped at `Warn` so `--verbose` only shows
//! pipeline diagnostics. Libraries only use the `log` macros and never
//! install anything themselves.

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

/// Target prefix shared by every crate of the workspace.
const OWN_TARGET: &str = "footmap";

/// Effective filter for records of `target` when the user asked for `level`.
fn level_for_target(level: LevelFilter, target: &str) -> LevelFilter {
    if target.starts_with(OWN_TARGET) {
        level
    } else {
        level.min(LevelFilter::Warn)
    }
}

/// Level used by the CLI for its `--verbose` switch.
pub fn verbosity_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= level_for_target(self.level, metadata.target())
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let target = record.target();
        let crate_name = target.split("::").next().unwrap_or(target);
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(
            stderr,
            "[{elapsed:7.3}s {:>5} {crate_name}] {}",
            record.level(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger; footmap records pass at `level`.
///
/// Later calls are no-ops.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// `EnvFilter` directive used when `RUST_LOG` is unset.
#[cfg(feature = "tracing")]
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,footmap=debug"
    } else {
        "info"
    }
}

/// Install a `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` turns on debug output for
/// the footmap crates. With `json = true` events are flattened into one
/// JSON object per line.
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let builder = fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE);
    if json {
        let _ = builder.json().flatten_event(true).finish().try_init();
    } else {
        let _ = builder
            .with_timer(fmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn own_crates_follow_requested_level() {
        for target in ["footmap", "footmap_heatmap::pipeline", "footmap_core"] {
            assert_eq!(
                level_for_target(LevelFilter::Debug, target),
                LevelFilter::Debug
            );
        }
    }

    #[test]
    fn foreign_crates_are_capped_at_warn() {
        assert_eq!(
            level_for_target(LevelFilter::Trace, "png::decoder"),
            LevelFilter::Warn
        );
        assert_eq!(
            level_for_target(LevelFilter::Error, "image"),
            LevelFilter::Error
        );
    }

    #[test]
    fn verbose_switch_maps_to_debug() {
        assert_eq!(verbosity_level(true), LevelFilter::Debug);
        assert_eq!(verbosity_level(false), LevelFilter::Warn);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn verbose_directive_targets_footmap() {
        assert_eq!(default_directive(false), "info");
        assert!(default_directive(true).contains("footmap=debug"));
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }
}
