//! Workspace glob expansion (`"workspaces": ["packages/*"]`).

use std::collections::VecDeque;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use suggest_common::limits::MAX_WORKSPACE_GLOB_DEPTH;
use suggest_common::path::join_path;
use tracing::warn;

use crate::fs::FileSystem;

struct WorkspaceMatcher {
    include: GlobSet,
    exclude: GlobSet,
    max_depth: usize,
}

impl WorkspaceMatcher {
    fn new(patterns: &[String]) -> Option<Self> {
        let mut include = GlobSetBuilder::new();
        let mut exclude = GlobSetBuilder::new();
        let mut max_depth = 0;

        for raw in patterns {
            let (negated, pattern) = match raw.trim().strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, raw.trim()),
            };
            let pattern = pattern.trim_start_matches("./").trim_end_matches('/');
            if pattern.is_empty() {
                continue;
            }

            let glob = match GlobBuilder::new(pattern).literal_separator(true).build() {
                Ok(glob) => glob,
                Err(err) => {
                    warn!(pattern = raw.as_str(), error = %err, "skipping invalid workspace glob");
                    continue;
                }
            };

            if negated {
                exclude.add(glob);
            } else {
                include.add(glob);
                max_depth = max_depth.max(pattern_depth(pattern));
            }
        }

        if max_depth == 0 {
            return None;
        }

        Some(WorkspaceMatcher {
            include: include.build().ok()?,
            exclude: exclude.build().ok()?,
            max_depth,
        })
    }

    fn is_match(&self, relative: &str) -> bool {
        self.include.is_match(relative) && !self.exclude.is_match(relative)
    }
}

fn pattern_depth(pattern: &str) -> usize {
    if pattern.contains("**") {
        MAX_WORKSPACE_GLOB_DEPTH
    } else {
        pattern.split('/').count().min(MAX_WORKSPACE_GLOB_DEPTH)
    }
}

/// Directories under `root` matched by the workspace `patterns`.
///
/// Patterns are relative to `root`; `!`-prefixed patterns exclude. The walk
/// never descends deeper than the longest pattern and skips hidden
/// directories and `vendor_directory`. Results are in breadth-first order.
pub fn expand_workspace_globs(
    fs: &dyn FileSystem,
    root: &str,
    patterns: &[String],
    vendor_directory: &str,
) -> Vec<String> {
    let Some(matcher) = WorkspaceMatcher::new(patterns) else {
        return Vec::new();
    };

    let mut matched = Vec::new();
    let mut queue: VecDeque<(String, String, usize)> = VecDeque::new();
    queue.push_back((root.to_string(), String::new(), 0));

    while let Some((absolute, relative, depth)) = queue.pop_front() {
        for child in fs.list_directories(&absolute) {
            if child == vendor_directory || child.starts_with('.') {
                continue;
            }
            let child_relative = if relative.is_empty() {
                child.clone()
            } else {
                format!("{relative}/{child}")
            };
            let child_absolute = join_path(&absolute, &child);

            if matcher.is_match(&child_relative) {
                matched.push(child_absolute.clone());
            }
            if depth + 1 < matcher.max_depth {
                queue.push_back((child_absolute, child_relative, depth + 1));
            }
        }
    }

    matched
}

#[cfg(test)]
#[path = "../tests/workspace.rs"]
mod tests;
