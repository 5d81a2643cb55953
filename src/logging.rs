//! Diagnostics go to `stderr` so the result line on `stdout` stays alone.
//! `RUST_LOG` picks the level (`warn` when unset) and
//! `MIN_TRIANGLE_PATH_LOG_FORMAT` picks `human` or `json` output.

use std::{env, str::FromStr};

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FORMAT_ENV: &str = "MIN_TRIANGLE_PATH_LOG_FORMAT";

#[derive(Debug, Error, PartialEq, Eq)]
#[error("`MIN_TRIANGLE_PATH_LOG_FORMAT` must be `human` or `json`, got `{0}`")]
pub struct UnsupportedLogFormat(String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for LogFormat {
    type Err = UnsupportedLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(UnsupportedLogFormat(other.to_owned())),
        }
    }
}

pub fn init_logging() -> Result<(), UnsupportedLogFormat> {
    let format = match env::var_os(LOG_FORMAT_ENV) {
        Some(raw) => raw.to_string_lossy().parse()?,
        None => LogFormat::default(),
    };

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let layer = match format {
        LogFormat::Human => layer.boxed(),
        LogFormat::Json => layer.json().boxed(),
    };

    // Fails only when a global subscriber is already set, which is fine.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();

    Ok(())
}
