//! Logging - tracing Subscriber Setup
//!
//! Console output always; a daily rolling file in the data directory when enabled.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::constants::LOG_FILE_PREFIX;
use crate::domain::config::LoggingConfig;
use crate::utils::config_store::get_or_create_data_dir;

/// Filter for the configured directive, `info` when it does not parse
fn config_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("policy-sim: invalid log level \"{directive}\" ({e}), using info");
        EnvFilter::new("info")
    })
}

/// Build the filter: `RUST_LOG` wins, then the configured level
fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| config_filter(&config.level))
}

/// Initialize the global subscriber
///
/// The returned guard must be held for the lifetime of the process so the
/// file writer can flush.
pub fn init(config: &LoggingConfig) -> Option<WorkerGuard> {
    let (file_layer, guard) = if config.file {
        match get_or_create_data_dir() {
            Ok(dir) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer().with_ansi(false).with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("policy-sim: file logging disabled: {e}");
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    let result = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt::layer())
        .with(file_layer)
        .try_init();

    if let Err(e) = result {
        eprintln!("policy-sim: tracing already initialized: {e}");
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn configured_level_is_used() {
        assert_eq!(config_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(config_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn invalid_level_falls_back_to_info() {
        let filter = config_filter("policy_sim=loudest");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
