//! Tracing subscriber setup.
//!
//! Logs go to stderr so that verdict lines on stdout stay machine-friendly.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::env_var::EnvVars;

/// Filter used when `CI_GUARD_LOG` is unset or unparsable.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Only the first call takes effect.
pub fn init(env: &EnvVars) {
    let filter = filter_for(env);
    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    if is_json(env) {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init()
            .ok();
    }
}

fn filter_for(env: &EnvVars) -> EnvFilter {
    env.log
        .as_deref()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn is_json(env: &EnvVars) -> bool {
    env.log_format
        .as_deref()
        .is_some_and(|format| format.eq_ignore_ascii_case("json"))
}
