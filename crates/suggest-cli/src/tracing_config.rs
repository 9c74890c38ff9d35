//! Tracing setup for the `suggest` binary.
//!
//! Output format is chosen by `SUGGEST_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented span tree via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! SUGGEST_LOG=debug suggest index --project .
//! SUGGEST_LOG="suggest_resolver=trace" SUGGEST_LOG_FORMAT=tree suggest check --from src/main.ts ./utl
//! ```
//!
//! Nothing is installed unless `SUGGEST_LOG` or `RUST_LOG` is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const LOG_ENV: &str = "SUGGEST_LOG";
const LOG_FORMAT_ENV: &str = "SUGGEST_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to [`LogFormat::Text`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var(LOG_FORMAT_ENV).unwrap_or_default())
    }
}

/// Filter from `SUGGEST_LOG`, falling back to `RUST_LOG`. `None` when
/// neither is set.
pub fn build_filter() -> Option<EnvFilter> {
    filter_from(
        std::env::var(LOG_ENV).ok().as_deref(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
    )
}

fn filter_from(suggest_log: Option<&str>, rust_log: Option<&str>) -> Option<EnvFilter> {
    suggest_log
        .or(rust_log)
        .map(|directives| EnvFilter::builder().parse_lossy(directives))
}

/// Install the global subscriber on stderr, if logging was requested.
pub fn init_tracing() {
    let Some(filter) = build_filter() else {
        return;
    };

    let registry = Registry::default().with(filter);
    match LogFormat::from_env() {
        LogFormat::Tree => registry
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_indent_lines(true)
                    .with_deferred_spans(true)
                    .with_targets(true),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

#[cfg(test)]
#[path = "../tests/tracing_config.rs"]
mod tests;
