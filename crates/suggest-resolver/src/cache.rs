use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::fs::FileSystem;
use crate::index::ModulePathIndex;
use crate::options::IndexOptions;
use crate::unit::{CompilationUnit, UnitId};

/// Module path indexes keyed by compilation-unit identity.
///
/// Each unit's index is built at most once. The owner drops an entry with
/// [`invalidate`](Self::invalidate) when the unit is replaced; a new unit
/// id never sees an older unit's index.
#[derive(Debug, Default)]
pub struct ModuleIndexCache {
    entries: FxHashMap<UnitId, Arc<ModulePathIndex>>,
}

impl ModuleIndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached index for `unit`, building it on first use.
    pub fn get_or_build(
        &mut self,
        unit: &dyn CompilationUnit,
        fs: &dyn FileSystem,
        options: &IndexOptions,
    ) -> Arc<ModulePathIndex> {
        let id = unit.id();
        if let Some(index) = self.entries.get(&id) {
            trace!(unit = %id, "module path index cache hit");
            return Arc::clone(index);
        }

        let index = Arc::new(ModulePathIndex::build(unit, fs, options));
        self.entries.insert(id, Arc::clone(&index));
        index
    }

    pub fn get(&self, id: UnitId) -> Option<Arc<ModulePathIndex>> {
        self.entries.get(&id).cloned()
    }

    /// Drop the entry for `id`. Returns whether one existed.
    pub fn invalidate(&mut self, id: UnitId) -> bool {
        let removed = self.entries.remove(&id).is_some();
        if removed {
            debug!(unit = %id, "invalidated module path index");
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/cache.rs"]
mod tests;
