//! Per-unit module path index.
//!
//! Built once per compilation unit from its source-file list and the package
//! manifests reachable from it. After construction the index is read-only;
//! every lookup is an in-memory set operation.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexSet;
use rustc_hash::{FxHashMap, FxHashSet};
use suggest_common::path::{
    dirname, extension_of, is_declaration_file, is_under_directory_named, join_path,
    normalize_path, strip_known_extension,
};
use tracing::{debug, trace, warn};

use crate::fs::FileSystem;
use crate::manifest::{load_manifest, read_package_name};
use crate::options::IndexOptions;
use crate::specifier::types_package_target;
use crate::unit::{CompilationUnit, ModuleResolver};
use crate::workspace::expand_workspace_globs;

/// Local files and reachable package names of one compilation unit.
pub struct ModulePathIndex {
    local_files: IndexSet<String>,
    files_by_directory: FxHashMap<String, Vec<String>>,
    package_names: IndexSet<String>,
    manifests: Vec<String>,
    extensions: Vec<String>,
    resolver: Option<Arc<dyn ModuleResolver>>,
}

impl fmt::Debug for ModulePathIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModulePathIndex")
            .field("local_files", &self.local_files.len())
            .field("package_names", &self.package_names.len())
            .field("manifests", &self.manifests)
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

impl ModulePathIndex {
    /// Index `unit`.
    ///
    /// Never fails: unreadable or malformed manifests are logged and
    /// skipped.
    pub fn build(unit: &dyn CompilationUnit, fs: &dyn FileSystem, options: &IndexOptions) -> Self {
        let extensions = options.extension_list();
        let mut builder = IndexBuilder::new(fs, options);

        let mut source_dirs: IndexSet<String> = IndexSet::new();
        for file in unit.source_files() {
            let normalized = normalize_path(file);
            if is_declaration_file(&normalized)
                || is_under_directory_named(&normalized, &options.vendor_directory)
            {
                continue;
            }
            source_dirs.insert(dirname(&normalized).to_string());
            if extension_of(&normalized, &extensions).is_some() {
                builder.add_local_file(normalized);
            }
        }
        let base_dir = normalize_path(unit.current_directory());
        if !base_dir.is_empty() {
            source_dirs.insert(base_dir);
        }

        let manifests = builder.collect_manifests(&source_dirs);
        builder.read_dependencies(&manifests);
        builder.discover_siblings(&manifests);

        let index = ModulePathIndex {
            local_files: builder.local_files,
            files_by_directory: builder.files_by_directory,
            package_names: builder.package_names,
            manifests,
            extensions: options.extensions.clone(),
            resolver: unit.module_resolver(),
        };

        debug!(
            unit = %unit.id(),
            local_files = index.local_files.len(),
            package_names = index.package_names.len(),
            manifests = index.manifests.len(),
            "built module path index"
        );
        index
    }

    /// An index over explicit sets, without manifest discovery.
    pub fn from_parts(
        local_files: impl IntoIterator<Item = String>,
        package_names: impl IntoIterator<Item = String>,
        options: &IndexOptions,
    ) -> Self {
        let mut index = ModulePathIndex {
            local_files: IndexSet::new(),
            files_by_directory: FxHashMap::default(),
            package_names: IndexSet::new(),
            manifests: Vec::new(),
            extensions: options.extensions.clone(),
            resolver: None,
        };
        for file in local_files {
            let file = normalize_path(&file);
            if index.local_files.insert(file.clone()) {
                index
                    .files_by_directory
                    .entry(dirname(&file).to_string())
                    .or_default()
                    .push(file);
            }
        }
        for name in package_names {
            insert_package_name(&mut index.package_names, name);
        }
        index
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn ModuleResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn local_files(&self) -> impl Iterator<Item = &str> {
        self.local_files.iter().map(String::as_str)
    }

    pub fn local_file_count(&self) -> usize {
        self.local_files.len()
    }

    pub fn has_local_file(&self, path: &str) -> bool {
        self.local_files.contains(path)
    }

    /// Local files whose parent directory is exactly `directory`.
    pub fn local_files_in_directory(&self, directory: &str) -> &[String] {
        self.files_by_directory
            .get(directory)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn package_names(&self) -> impl Iterator<Item = &str> {
        self.package_names.iter().map(String::as_str)
    }

    pub fn package_name_count(&self) -> usize {
        self.package_names.len()
    }

    pub fn has_package(&self, name: &str) -> bool {
        self.package_names.contains(name)
    }

    /// Nearest manifests of the unit's directories, in discovery order.
    /// Malformed ones are listed but contribute nothing.
    pub fn manifests(&self) -> &[String] {
        &self.manifests
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn has_resolver(&self) -> bool {
        self.resolver.is_some()
    }

    /// Ask the unit's module resolver. `false` when the unit has none.
    pub fn can_resolve_module(&self, specifier: &str, containing_file: &str) -> bool {
        let resolved = self
            .resolver
            .as_ref()
            .is_some_and(|resolver| resolver.can_resolve(specifier, containing_file));
        trace!(specifier, containing_file, resolved, "fallback module resolution");
        resolved
    }

    /// Resolve an absolute module path against the local-file set, probing
    /// supported extensions and `index.<ext>` files.
    pub fn resolve_local(&self, path: &str) -> Option<String> {
        let extensions: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        probe_module_path(path, &extensions, |candidate| self.has_local_file(candidate))
    }
}

/// Probe `path` as-is, then with its known extension replaced by each of
/// `extensions`, then as `index.<ext>` inside it. Returns the first
/// candidate for which `exists` holds.
pub fn probe_module_path(
    path: &str,
    extensions: &[&str],
    exists: impl Fn(&str) -> bool,
) -> Option<String> {
    if exists(path) {
        return Some(path.to_string());
    }

    let stem = strip_known_extension(path, extensions);
    let with_extension = extensions.iter().map(|ext| format!("{stem}{ext}"));
    let index_files = extensions
        .iter()
        .map(|ext| join_path(stem, &format!("index{ext}")));

    with_extension.chain(index_files).find(|candidate| exists(candidate))
}

fn insert_package_name(names: &mut IndexSet<String>, name: String) {
    if name.is_empty() {
        return;
    }
    if let Some(target) = types_package_target(&name) {
        names.insert(target);
    }
    names.insert(name);
}

struct IndexBuilder<'a> {
    fs: &'a dyn FileSystem,
    options: &'a IndexOptions,
    local_files: IndexSet<String>,
    files_by_directory: FxHashMap<String, Vec<String>>,
    package_names: IndexSet<String>,
    nearest_manifest: FxHashMap<String, Option<String>>,
}

impl<'a> IndexBuilder<'a> {
    fn new(fs: &'a dyn FileSystem, options: &'a IndexOptions) -> Self {
        IndexBuilder {
            fs,
            options,
            local_files: IndexSet::new(),
            files_by_directory: FxHashMap::default(),
            package_names: IndexSet::new(),
            nearest_manifest: FxHashMap::default(),
        }
    }

    fn add_local_file(&mut self, file: String) {
        if self.local_files.insert(file.clone()) {
            self.files_by_directory
                .entry(dirname(&file).to_string())
                .or_default()
                .push(file);
        }
    }

    /// Nearest manifest for every directory, deduplicated by path.
    fn collect_manifests(&mut self, directories: &IndexSet<String>) -> Vec<String> {
        let mut manifests: IndexSet<String> = IndexSet::new();
        for directory in directories {
            if let Some(manifest) = self.find_nearest_manifest(directory) {
                manifests.insert(manifest);
            }
        }
        manifests.into_iter().collect()
    }

    fn find_nearest_manifest(&mut self, start: &str) -> Option<String> {
        let mut visited: Vec<String> = Vec::new();
        let mut current = start.to_string();

        let found = loop {
            if let Some(cached) = self.nearest_manifest.get(&current) {
                break cached.clone();
            }
            visited.push(current.clone());

            let candidate = join_path(&current, &self.options.manifest_file_name);
            if self.fs.file_exists(&candidate) {
                break Some(candidate);
            }

            let parent = dirname(&current);
            if parent == current {
                break None;
            }
            current = parent.to_string();
        };

        for directory in visited {
            self.nearest_manifest.insert(directory, found.clone());
        }
        found
    }

    fn read_dependencies(&mut self, manifests: &[String]) {
        for path in manifests {
            let manifest = match load_manifest(self.fs, path) {
                Ok(manifest) => manifest,
                Err(err) => {
                    warn!(error = %err, "skipping package manifest");
                    continue;
                }
            };

            for name in manifest.dependency_names() {
                insert_package_name(&mut self.package_names, name.to_string());
            }

            if !manifest.workspaces.is_empty() {
                let root = dirname(path);
                let members = expand_workspace_globs(
                    self.fs,
                    root,
                    &manifest.workspaces,
                    &self.options.vendor_directory,
                );
                trace!(manifest = path.as_str(), members = members.len(), "expanded workspace globs");
                for member in members {
                    self.add_package_name_at(&member);
                }
            }
        }
    }

    /// Sibling directories of each manifest's package directory that carry a
    /// manifest of their own.
    fn discover_siblings(&mut self, manifests: &[String]) {
        let mut visited_parents: FxHashSet<String> = FxHashSet::default();

        for path in manifests {
            let package_dir = dirname(path);
            let parent = dirname(package_dir).to_string();
            if !visited_parents.insert(parent.clone()) {
                continue;
            }

            for child in self.fs.list_directories(&parent) {
                if child == self.options.vendor_directory {
                    continue;
                }
                self.add_package_name_at(&join_path(&parent, &child));
            }
        }
    }

    fn add_package_name_at(&mut self, directory: &str) {
        let manifest = join_path(directory, &self.options.manifest_file_name);
        if !self.fs.file_exists(&manifest) {
            return;
        }
        if let Some(name) = read_package_name(self.fs, &manifest) {
            insert_package_name(&mut self.package_names, name);
        }
    }
}

#[cfg(test)]
#[path = "../tests/index.rs"]
mod tests;
