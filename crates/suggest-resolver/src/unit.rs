//! Compilation units and the module-resolution hook.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Opaque identity of a compilation unit.
///
/// The host hands out a new id whenever a unit is recompiled or replaced;
/// cached indexes are keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UnitId(u64);

impl UnitId {
    pub const fn new(raw: u64) -> Self {
        UnitId(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

/// Last-resort module resolution, usually backed by the host compiler.
pub trait ModuleResolver: Send + Sync {
    /// Whether `specifier`, written in `containing_file`, resolves to
    /// anything at all.
    fn can_resolve(&self, specifier: &str, containing_file: &str) -> bool;
}

/// A set of source files checked together.
pub trait CompilationUnit {
    fn id(&self) -> UnitId;

    /// Every source file of the unit, declaration files included.
    fn source_files(&self) -> &[String];

    /// The unit's base directory.
    fn current_directory(&self) -> &str;

    /// Resolver consulted before a specifier is declared unresolved.
    fn module_resolver(&self) -> Option<Arc<dyn ModuleResolver>> {
        None
    }
}

/// A [`CompilationUnit`] built from an explicit file list.
#[derive(Clone)]
pub struct ProjectUnit {
    id: UnitId,
    root: String,
    files: Vec<String>,
    resolver: Option<Arc<dyn ModuleResolver>>,
}

impl ProjectUnit {
    pub fn new(id: UnitId, root: impl Into<String>, files: Vec<String>) -> Self {
        ProjectUnit {
            id,
            root: root.into(),
            files,
            resolver: None,
        }
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: Arc<dyn ModuleResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }
}

impl fmt::Debug for ProjectUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProjectUnit")
            .field("id", &self.id)
            .field("root", &self.root)
            .field("files", &self.files.len())
            .field("resolver", &self.resolver.is_some())
            .finish()
    }
}

impl CompilationUnit for ProjectUnit {
    fn id(&self) -> UnitId {
        self.id
    }

    fn source_files(&self) -> &[String] {
        &self.files
    }

    fn current_directory(&self) -> &str {
        &self.root
    }

    fn module_resolver(&self) -> Option<Arc<dyn ModuleResolver>> {
        self.resolver.clone()
    }
}
