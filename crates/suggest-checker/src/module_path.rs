//! Module specifier validation against a [`ModulePathIndex`].
//!
//! Classify -> Resolve -> (Valid | Rank -> (Valid | Invalid)).
//! Builtin, protocol and subpath specifiers are never checked. Relative
//! specifiers resolve against the index's local files, bare specifiers
//! against its package names; both consult the unit's module resolver
//! before giving up. An unresolved specifier with no plausible alternative
//! is Valid.

use indexmap::IndexMap;
use suggest_common::path::{
    dirname, extension_of, file_name, normalize_path, resolve_relative, strip_known_extension,
    to_module_specifier,
};
use suggest_format::{MessageContext, ModuleKind};
use suggest_ranking::{CandidateRanker, ScoredCandidate, SuggestionSet};
use suggest_resolver::{ModulePathIndex, SpecifierKind, classify_specifier, extract_module_name};
use tracing::trace;

use crate::predicates::{is_valid_local_file_candidate, is_valid_package_candidate};
use crate::result::ValidationResult;

/// Validates module specifiers of one compilation unit.
#[derive(Debug, Clone, Copy)]
pub struct ModulePathValidator<'a> {
    index: &'a ModulePathIndex,
    ranker: &'a CandidateRanker,
}

impl<'a> ModulePathValidator<'a> {
    pub fn new(index: &'a ModulePathIndex, ranker: &'a CandidateRanker) -> Self {
        ModulePathValidator { index, ranker }
    }

    /// Validate `specifier` as written in `containing_file`.
    pub fn validate(&self, specifier: &str, containing_file: &str) -> ValidationResult {
        let Some(kind) = classify_specifier(specifier) else {
            trace!("empty module specifier");
            return ValidationResult::Valid;
        };
        if kind.is_always_valid() {
            trace!(specifier, ?kind, "module specifier is never checked");
            return ValidationResult::Valid;
        }

        let containing_file = normalize_path(containing_file);
        match kind {
            SpecifierKind::Relative => self.validate_relative(specifier, &containing_file),
            SpecifierKind::Package => self.validate_package(specifier, &containing_file),
            _ => ValidationResult::Valid,
        }
    }

    fn validate_relative(&self, specifier: &str, containing_file: &str) -> ValidationResult {
        let target = resolve_relative(containing_file, specifier);
        if let Some(resolved) = self.index.resolve_local(&target) {
            trace!(specifier, resolved = resolved.as_str(), "resolved against local files");
            return ValidationResult::Valid;
        }
        if self.index.can_resolve_module(specifier, containing_file) {
            return ValidationResult::Valid;
        }

        // Ranked on the last segment only; candidates are keyed by file name.
        let candidates = self.local_candidates(specifier, &target, containing_file);
        let ranked = self
            .ranker
            .rank_names(file_name(specifier), candidates.keys().map(String::as_str));
        let suggestions = SuggestionSet::from_ranked(
            ranked
                .into_iter()
                .filter_map(|suggestion| {
                    let rendered = candidates.get(&suggestion.name)?;
                    Some(ScoredCandidate::named(rendered.clone(), suggestion.score))
                })
                .collect(),
        );
        trace!(specifier, suggestions = suggestions.len(), "ranked local module candidates");

        ValidationResult::from_suggestions(
            MessageContext::Module {
                requested_path: specifier.to_string(),
                module_kind: ModuleKind::Local,
            },
            suggestions,
        )
    }

    /// Local files next to the requested path: file name (extension kept
    /// only when the request has one) mapped to the specifier rendered
    /// relative to the containing file.
    fn local_candidates(
        &self,
        specifier: &str,
        target: &str,
        containing_file: &str,
    ) -> IndexMap<String, String> {
        let extensions: Vec<&str> = self.index.extensions().iter().map(String::as_str).collect();
        let keep_extension = extension_of(specifier, &extensions).is_some();
        let from_dir = dirname(containing_file);

        let mut candidates: IndexMap<String, String> = IndexMap::new();
        for file in self.index.local_files_in_directory(dirname(target)) {
            if file == containing_file || !is_valid_local_file_candidate(file) {
                continue;
            }
            let path = if keep_extension {
                file.as_str()
            } else {
                strip_known_extension(file, &extensions)
            };
            candidates
                .entry(file_name(path).to_string())
                .or_insert_with(|| to_module_specifier(from_dir, path));
        }
        candidates
    }

    fn validate_package(&self, specifier: &str, containing_file: &str) -> ValidationResult {
        let package = extract_module_name(specifier);
        if self.index.has_package(package) {
            trace!(specifier, package, "package is known");
            return ValidationResult::Valid;
        }
        if self.index.can_resolve_module(specifier, containing_file) {
            return ValidationResult::Valid;
        }

        let candidates = self
            .index
            .package_names()
            .filter(|name| is_valid_package_candidate(name, package));
        let suggestions = self.ranker.rank_names(package, candidates);
        trace!(specifier, suggestions = suggestions.len(), "ranked package candidates");

        ValidationResult::from_suggestions(
            MessageContext::Module {
                requested_path: specifier.to_string(),
                module_kind: ModuleKind::Package,
            },
            suggestions,
        )
    }
}

#[cfg(test)]
#[path = "../tests/module_path.rs"]
mod tests;
