//! `suggest.json` loading.
//!
//! ```json
//! {
//!   "maxSuggestions": 3,
//!   "minScore": 0.4,
//!   "extensions": [".ts", ".tsx"],
//!   "vendorDirectory": "node_modules",
//!   "exclude": ["dist/**", "**/*.generated.ts"]
//! }
//! ```
//!
//! Every field is optional. Command-line flags override the file.

use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Deserialize;
use std::path::Path;

use suggest_common::MAX_SUGGESTIONS;
use suggest_ranking::RankingOptions;
use suggest_resolver::IndexOptions;

use crate::args::RankingArgs;

pub const CONFIG_FILE_NAME: &str = "suggest.json";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestConfig {
    #[serde(default)]
    pub max_suggestions: Option<usize>,
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub vendor_directory: Option<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Options handed to the library crates, plus the compiled exclude set.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub ranking: RankingOptions,
    pub index: IndexOptions,
    pub exclude: GlobSet,
}

impl SuggestConfig {
    /// Apply command-line overrides. Excludes accumulate.
    pub fn with_overrides(mut self, ranking: RankingArgs, exclude: &[String]) -> Self {
        if ranking.max_suggestions.is_some() {
            self.max_suggestions = ranking.max_suggestions;
        }
        if ranking.min_score.is_some() {
            self.min_score = ranking.min_score;
        }
        self.exclude.extend(exclude.iter().cloned());
        self
    }

    pub fn ranking_options(&self) -> Result<RankingOptions> {
        let mut options = RankingOptions::default();
        if let Some(max_suggestions) = self.max_suggestions {
            if max_suggestions > MAX_SUGGESTIONS {
                bail!("maxSuggestions must be at most {MAX_SUGGESTIONS}, got {max_suggestions}");
            }
            options.max_suggestions = max_suggestions;
        }
        if let Some(min_score) = self.min_score {
            if !(0.0..1.0).contains(&min_score) {
                bail!("minScore must be in [0, 1), got {min_score}");
            }
            options.min_score = min_score;
        }
        Ok(options)
    }

    pub fn index_options(&self) -> Result<IndexOptions> {
        let mut options = IndexOptions::default();
        if let Some(extensions) = &self.extensions {
            if let Some(bad) = extensions.iter().find(|ext| !ext.starts_with('.') || ext.len() < 2) {
                bail!("extension '{bad}' must start with '.'");
            }
            options.extensions = extensions.clone();
        }
        if let Some(vendor_directory) = &self.vendor_directory {
            if vendor_directory.is_empty() || vendor_directory.contains('/') {
                bail!("vendorDirectory must be a single directory name, got '{vendor_directory}'");
            }
            options.vendor_directory = vendor_directory.clone();
        }
        Ok(options)
    }

    pub fn resolve(&self) -> Result<ResolvedConfig> {
        Ok(ResolvedConfig {
            ranking: self.ranking_options()?,
            index: self.index_options()?,
            exclude: build_exclude_set(&self.exclude)?,
        })
    }
}

pub fn parse_config(source: &str) -> Result<SuggestConfig> {
    let config = serde_json::from_str(source)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<SuggestConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// An explicit path must exist; otherwise `suggest.json` in `project_root`
/// is used when present.
pub fn discover_config(project_root: &Path, explicit: Option<&Path>) -> Result<SuggestConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    let candidate = project_root.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        load_config(&candidate)
    } else {
        Ok(SuggestConfig::default())
    }
}

fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern.trim_start_matches("./"))
            .with_context(|| format!("invalid exclude pattern '{pattern}'"))?;
        builder.add(glob);
    }
    builder.build().context("failed to compile exclude patterns")
}

#[cfg(test)]
#[path = "../tests/config.rs"]
mod tests;
