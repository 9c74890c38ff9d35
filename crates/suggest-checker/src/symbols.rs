//! Member, export, import and identifier validation over a [`TypeOracle`].
//!
//! Every check follows the same shape: fetch the valid names from the
//! oracle, return Valid when the query is among them, otherwise rank the
//! names that pass the context's predicate and, only for the suggestions
//! that survive ranking, ask the oracle for signatures.
//!
//! Oracle failures never turn into diagnostics. A failed name lookup makes
//! the query Valid; a failed signature lookup leaves that suggestion
//! without a signature.

use rustc_hash::FxHashSet;
use suggest_format::MessageContext;
use suggest_ranking::{CandidateRanker, SuggestionSet};
use tracing::trace;

use crate::oracle::{OracleError, TypeOracle};
use crate::predicates::{
    is_valid_export_candidate, is_valid_import_candidate, is_valid_member_candidate,
    is_valid_name_candidate,
};
use crate::result::ValidationResult;

/// An import or re-export site: `import { name } from "specifier"`.
#[derive(Debug, Clone, Copy)]
pub struct ImportSite<'s> {
    pub specifier: &'s str,
    pub containing_file: &'s str,
    pub name: &'s str,
}

pub struct SymbolValidator<'a, O: TypeOracle + ?Sized> {
    oracle: &'a O,
    ranker: &'a CandidateRanker,
}

impl<'a, O: TypeOracle + ?Sized> SymbolValidator<'a, O> {
    pub fn new(oracle: &'a O, ranker: &'a CandidateRanker) -> Self {
        SymbolValidator { oracle, ranker }
    }

    /// `object.property` where `object` has type `object_type`.
    pub fn validate_member(&self, object_type: &O::Type, property: &str) -> ValidationResult {
        let properties = match self.oracle.properties_of_type(object_type) {
            Ok(properties) => dedupe_names(properties),
            Err(err) => return skipped("member", property, &err),
        };
        if properties.iter().any(|name| name == property) {
            return ValidationResult::Valid;
        }

        let suggestions = self
            .rank(property, &properties, is_valid_member_candidate)
            .with_signatures(|suggestion| {
                signature_or_none(self.oracle.property_signature(object_type, &suggestion.name))
            });

        ValidationResult::from_suggestions(
            MessageContext::Member {
                property: property.to_string(),
                type_name: self.oracle.type_name(object_type),
            },
            suggestions,
        )
    }

    /// A key of an object literal checked against its contextual type.
    ///
    /// Literals without a contextual type accept any key.
    pub fn validate_object_literal_member(
        &self,
        contextual_type: Option<&O::Type>,
        key: &str,
    ) -> ValidationResult {
        match contextual_type {
            Some(contextual_type) => self.validate_member(contextual_type, key),
            None => ValidationResult::Valid,
        }
    }

    /// A named import. Type-only imports are not checked.
    pub fn validate_import(&self, site: ImportSite<'_>, type_only: bool) -> ValidationResult {
        if type_only {
            return ValidationResult::Valid;
        }
        self.validate_module_member(site, is_valid_import_candidate, |name, module_path, type_name| {
            MessageContext::Import {
                name,
                module_path,
                type_name,
            }
        })
    }

    /// A named re-export: `export { name } from "specifier"`.
    pub fn validate_export(&self, site: ImportSite<'_>) -> ValidationResult {
        self.validate_module_member(site, is_valid_export_candidate, |name, module_path, type_name| {
            MessageContext::Export {
                name,
                module_path,
                type_name,
            }
        })
    }

    /// An identifier that did not resolve in `containing_file`.
    pub fn validate_missing_name(&self, containing_file: &str, name: &str) -> ValidationResult {
        let names = match self.oracle.names_in_scope(containing_file) {
            Ok(names) => dedupe_names(names),
            Err(err) => return skipped("name", name, &err),
        };
        if names.iter().any(|candidate| candidate == name) {
            return ValidationResult::Valid;
        }

        let suggestions = self
            .rank(name, &names, is_valid_name_candidate)
            .with_signatures(|suggestion| {
                signature_or_none(self.oracle.name_signature(containing_file, &suggestion.name))
            });

        ValidationResult::from_suggestions(
            MessageContext::MissingName {
                name: name.to_string(),
            },
            suggestions,
        )
    }

    fn validate_module_member(
        &self,
        site: ImportSite<'_>,
        predicate: fn(&str, &str) -> bool,
        context: impl FnOnce(String, String, Option<String>) -> MessageContext,
    ) -> ValidationResult {
        // Unresolved modules are reported by the module-path check.
        let module_path = match self
            .oracle
            .resolve_module_path(site.specifier, site.containing_file)
        {
            Ok(Some(module_path)) => module_path,
            Ok(None) => return ValidationResult::Valid,
            Err(err) => return skipped("module", site.specifier, &err),
        };

        let exports = match self
            .oracle
            .exports_of_module(&module_path, site.containing_file)
        {
            Ok(exports) => dedupe_names(exports),
            Err(err) => return skipped("export", site.name, &err),
        };
        if exports.iter().any(|export| export == site.name) {
            return ValidationResult::Valid;
        }

        let suggestions = self
            .rank(site.name, &exports, predicate)
            .with_signatures(|suggestion| {
                signature_or_none(self.oracle.export_signature(&module_path, &suggestion.name))
            });

        ValidationResult::from_suggestions(
            context(
                site.name.to_string(),
                site.specifier.to_string(),
                self.oracle.module_type_name(&module_path),
            ),
            suggestions,
        )
    }

    fn rank(
        &self,
        query: &str,
        names: &[String],
        predicate: fn(&str, &str) -> bool,
    ) -> SuggestionSet {
        let candidates = names
            .iter()
            .map(String::as_str)
            .filter(|name| predicate(name, query));
        self.ranker.rank_names(query, candidates)
    }
}

/// First occurrence wins; union types repeat shared members.
fn dedupe_names(names: Vec<String>) -> Vec<String> {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    names
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

fn signature_or_none(result: Result<Option<String>, OracleError>) -> Option<String> {
    match result {
        Ok(signature) => signature.filter(|signature| !signature.is_empty()),
        Err(err) => {
            trace!(error = %err, "dropping signature");
            None
        }
    }
}

fn skipped(what: &str, query: &str, err: &OracleError) -> ValidationResult {
    trace!(what, query, error = %err, "oracle lookup failed, treating as valid");
    ValidationResult::Valid
}

#[cfg(test)]
#[path = "../tests/symbols.rs"]
mod tests;
