//! Project discovery on disk.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use suggest_common::path::{extension_of, normalize_path, relative_path};
use suggest_resolver::{NodeModulesResolver, OsFileSystem, ProjectUnit, UnitId};

use crate::config::ResolvedConfig;

/// Canonical project root as a forward-slash string.
pub fn project_root(path: &Path) -> Result<String> {
    let canonical = path
        .canonicalize()
        .with_context(|| format!("failed to resolve project root: {}", path.display()))?;
    if !canonical.is_dir() {
        bail!("project root is not a directory: {}", canonical.display());
    }
    Ok(path_string(&canonical))
}

/// Source files under `root` with a supported extension, sorted.
///
/// Hidden and vendored directories are not entered; files matching the
/// exclude set (relative to `root`) are dropped.
pub fn discover_source_files(root: &str, config: &ResolvedConfig) -> Vec<String> {
    let extensions = config.index.extension_list();
    let vendor = config.index.vendor_directory.as_str();

    let mut files: Vec<String> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped_directory(entry, vendor))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| path_string(entry.path()))
        .filter(|path| extension_of(path, &extensions).is_some())
        .filter(|path| !config.exclude.is_match(relative_path(root, path)))
        .collect();

    files.sort();
    debug!(root, files = files.len(), "discovered source files");
    files
}

/// A compilation unit for everything under `root`, resolving fallbacks on
/// disk.
pub fn load_project(root: &str, config: &ResolvedConfig) -> ProjectUnit {
    let files = discover_source_files(root, config);
    let resolver = NodeModulesResolver::new(Arc::new(OsFileSystem), config.index.clone());
    ProjectUnit::new(UnitId::new(1), root, files).with_resolver(Arc::new(resolver))
}

/// `file` made absolute against `root` when relative.
pub fn absolute_file(root: &str, file: &Path) -> String {
    let path = if file.is_absolute() {
        file.to_path_buf()
    } else {
        PathBuf::from(root).join(file)
    };
    let path = path.canonicalize().unwrap_or(path);
    path_string(&path)
}

fn is_skipped_directory(entry: &DirEntry, vendor: &str) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == vendor
}

fn path_string(path: &Path) -> String {
    normalize_path(&path.to_string_lossy())
}

#[cfg(test)]
#[path = "../tests/project.rs"]
mod tests;
