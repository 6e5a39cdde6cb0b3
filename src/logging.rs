//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so they never mix with replies
//! or JSON on stdout. `RUST_LOG` wins over everything else.

use std::env;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const ENV_LOG: &str = "ASSISTANT_BOT_LOG";

/// Map `-v` occurrences to a level; `ASSISTANT_BOT_LOG` applies when no flag is given.
pub fn level_for(verbose: u8, env_level: Option<&str>) -> Level {
    match verbose {
        0 => env_level.map(parse_level).unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn parse_level(s: &str) -> Level {
    match s.trim().to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(verbose: u8) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let env_level = env::var(ENV_LOG).ok();
        let level = level_for(verbose, env_level.as_deref());

        let filter = if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("assistant_bot={}", level))
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(verbose >= 2)
                    .with_writer(std::io::stderr),
            )
            .try_init();
    });
}
