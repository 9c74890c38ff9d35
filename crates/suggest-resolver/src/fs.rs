//! Filesystem oracle consumed by the module-path index.
//!
//! All paths are normalized (forward-slash) strings. [`OsFileSystem`] reads
//! the real disk; [`MemoryFileSystem`] serves a fixed tree for tests and for
//! hosts that already hold file contents in memory.

use std::collections::BTreeSet;
use std::io;
use std::path::Path;

use rustc_hash::FxHashMap;
use suggest_common::path::{dirname, file_name, normalize_path};

/// Read-only filesystem access.
pub trait FileSystem: Send + Sync {
    /// Whether `path` names an existing regular file.
    fn file_exists(&self, path: &str) -> bool;

    /// Whether `path` names an existing directory.
    fn directory_exists(&self, path: &str) -> bool;

    /// Read a whole file as UTF-8.
    fn read_file(&self, path: &str) -> io::Result<String>;

    /// Names (not paths) of the immediate child directories of `path`,
    /// sorted. Unreadable or missing directories yield an empty list.
    fn list_directories(&self, path: &str) -> Vec<String>;
}

/// [`FileSystem`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn directory_exists(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn list_directories(&self, path: &str) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(path) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|kind| kind.is_dir()))
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// In-memory [`FileSystem`].
///
/// Adding a file also registers every ancestor directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    files: FxHashMap<String, String>,
    directories: BTreeSet<String>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`add_file`](Self::add_file).
    #[must_use]
    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        self.add_file(path, content);
        self
    }

    pub fn add_file(&mut self, path: &str, content: impl Into<String>) {
        let path = normalize_path(path);
        self.register_ancestors(dirname(&path).to_string());
        self.files.insert(path, content.into());
    }

    /// Register an empty directory.
    pub fn add_directory(&mut self, path: &str) {
        self.register_ancestors(normalize_path(path));
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    fn register_ancestors(&mut self, mut directory: String) {
        loop {
            if !self.directories.insert(directory.clone()) {
                return;
            }
            let parent = dirname(&directory);
            if parent == directory {
                return;
            }
            directory = parent.to_string();
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn file_exists(&self, path: &str) -> bool {
        self.files.contains_key(&normalize_path(path))
    }

    fn directory_exists(&self, path: &str) -> bool {
        self.directories.contains(&normalize_path(path))
    }

    fn read_file(&self, path: &str) -> io::Result<String> {
        self.files
            .get(&normalize_path(path))
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, format!("{path}: no such file")))
    }

    fn list_directories(&self, path: &str) -> Vec<String> {
        let path = normalize_path(path);
        self.directories
            .iter()
            .filter(|directory| **directory != path && dirname(directory) == path)
            .map(|directory| file_name(directory).to_string())
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/fs.rs"]
mod tests;
