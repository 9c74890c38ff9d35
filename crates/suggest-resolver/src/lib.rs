//! Module path discovery for did-you-mean diagnostics.
//!
//! This crate answers "does this module specifier resolve?" without asking
//! the type checker on every import:
//! - [`ModulePathIndex`] holds a unit's local files and every package name
//!   reachable from its manifests (own, ancestor, workspace siblings)
//! - [`ModuleIndexCache`] builds that index at most once per [`UnitId`]
//! - [`FileSystem`] abstracts disk access ([`OsFileSystem`], [`MemoryFileSystem`])
//! - [`classify_specifier`] sorts specifiers into relative, builtin,
//!   protocol, subpath and package kinds

mod cache;
mod fs;
mod index;
mod manifest;
mod node_modules;
mod options;
mod specifier;
mod unit;
mod workspace;

pub use cache::ModuleIndexCache;
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use index::{ModulePathIndex, probe_module_path};
pub use manifest::{ManifestError, PackageManifest, load_manifest, read_package_name};
pub use node_modules::NodeModulesResolver;
pub use options::IndexOptions;
pub use specifier::{
    NODE_BUILTIN_MODULES, SpecifierKind, classify_specifier, extract_module_name,
    is_node_builtin, is_relative_specifier, split_package_specifier, types_package_for,
    types_package_target,
};
pub use unit::{CompilationUnit, ModuleResolver, ProjectUnit, UnitId};
pub use workspace::expand_workspace_globs;
