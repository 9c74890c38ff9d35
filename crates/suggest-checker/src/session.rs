use std::fmt;
use std::sync::Arc;

use suggest_ranking::{CandidateRanker, RankingOptions};
use suggest_resolver::{
    CompilationUnit, FileSystem, IndexOptions, ModuleIndexCache, ModulePathIndex, UnitId,
};

use crate::module_path::ModulePathValidator;
use crate::oracle::TypeOracle;
use crate::result::ValidationResult;
use crate::symbols::SymbolValidator;

/// Long-lived checking state shared by every validation of a host session.
///
/// Owns the per-unit [`ModuleIndexCache`]: a unit's index is built on its
/// first module-path check and reused until [`invalidate`](Self::invalidate)
/// drops it.
pub struct SuggestionChecker {
    cache: ModuleIndexCache,
    ranker: CandidateRanker,
    fs: Arc<dyn FileSystem>,
    index_options: IndexOptions,
}

impl fmt::Debug for SuggestionChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionChecker")
            .field("cached_units", &self.cache.len())
            .field("ranker", &self.ranker)
            .field("index_options", &self.index_options)
            .finish_non_exhaustive()
    }
}

impl SuggestionChecker {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self::with_options(fs, RankingOptions::default(), IndexOptions::default())
    }

    pub fn with_options(
        fs: Arc<dyn FileSystem>,
        ranking: RankingOptions,
        index_options: IndexOptions,
    ) -> Self {
        SuggestionChecker {
            cache: ModuleIndexCache::new(),
            ranker: CandidateRanker::new(ranking),
            fs,
            index_options,
        }
    }

    pub fn ranker(&self) -> &CandidateRanker {
        &self.ranker
    }

    pub fn index_options(&self) -> &IndexOptions {
        &self.index_options
    }

    /// The module path index of `unit`, built on first use.
    pub fn module_index(&mut self, unit: &dyn CompilationUnit) -> Arc<ModulePathIndex> {
        self.cache
            .get_or_build(unit, self.fs.as_ref(), &self.index_options)
    }

    /// Validate a module specifier written in `containing_file` of `unit`.
    pub fn check_module_path(
        &mut self,
        unit: &dyn CompilationUnit,
        specifier: &str,
        containing_file: &str,
    ) -> ValidationResult {
        let index = self.module_index(unit);
        ModulePathValidator::new(&index, &self.ranker).validate(specifier, containing_file)
    }

    /// Member, import, export and identifier checks against `oracle`.
    pub fn symbols<'a, O: TypeOracle + ?Sized>(&'a self, oracle: &'a O) -> SymbolValidator<'a, O> {
        SymbolValidator::new(oracle, &self.ranker)
    }

    /// Forget the index of a replaced unit.
    pub fn invalidate(&mut self, unit: UnitId) -> bool {
        self.cache.invalidate(unit)
    }

    pub fn cached_units(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
#[path = "../tests/session.rs"]
mod tests;
