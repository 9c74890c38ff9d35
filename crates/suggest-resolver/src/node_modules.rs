use std::sync::Arc;

use suggest_common::path::{dirname, join_path, normalize_path, resolve_relative};

use crate::fs::FileSystem;
use crate::index::probe_module_path;
use crate::options::IndexOptions;
use crate::specifier::{SpecifierKind, classify_specifier, extract_module_name, types_package_for};
use crate::unit::ModuleResolver;

/// [`ModuleResolver`] that follows Node's lookup on a [`FileSystem`].
///
/// Relative specifiers resolve against files on disk with extension and
/// `index` probing. Bare specifiers resolve when
/// `<ancestor>/<vendor dir>/<package>` (or its `@types` package) exists for
/// some ancestor of the containing file.
pub struct NodeModulesResolver {
    fs: Arc<dyn FileSystem>,
    options: IndexOptions,
}

impl NodeModulesResolver {
    pub fn new(fs: Arc<dyn FileSystem>, options: IndexOptions) -> Self {
        NodeModulesResolver { fs, options }
    }

    fn resolve_relative_file(&self, specifier: &str, containing_file: &str) -> bool {
        let target = resolve_relative(containing_file, specifier);
        let extensions = self.options.extension_list();
        probe_module_path(&target, &extensions, |candidate| self.fs.file_exists(candidate))
            .is_some()
    }

    fn resolve_package(&self, specifier: &str, containing_file: &str) -> bool {
        let package = extract_module_name(specifier);
        let types_package = types_package_for(package);
        let containing_file = normalize_path(containing_file);
        let mut current = dirname(&containing_file).to_string();

        loop {
            let vendor = join_path(&current, &self.options.vendor_directory);
            if self.fs.directory_exists(&vendor)
                && (self.fs.directory_exists(&join_path(&vendor, package))
                    || self.fs.directory_exists(&join_path(&vendor, &types_package)))
            {
                return true;
            }

            let parent = dirname(&current);
            if parent == current {
                return false;
            }
            current = parent.to_string();
        }
    }
}

impl ModuleResolver for NodeModulesResolver {
    fn can_resolve(&self, specifier: &str, containing_file: &str) -> bool {
        match classify_specifier(specifier) {
            None => false,
            Some(SpecifierKind::Relative) => self.resolve_relative_file(specifier, containing_file),
            Some(SpecifierKind::Package) => self.resolve_package(specifier, containing_file),
            Some(kind) => kind.is_always_valid(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/node_modules.rs"]
mod tests;
