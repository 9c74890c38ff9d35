//! "Valid candidate" predicates applied before ranking.
//!
//! Each takes the candidate and the query being validated; no predicate
//! ever accepts the query itself.

use suggest_common::path::{file_name, is_test_file};

/// Named imports: no private (`_`, `__`) or empty names.
pub fn is_valid_import_candidate(name: &str, query: &str) -> bool {
    !name.is_empty() && name != query && !name.starts_with('_')
}

/// Exports follow the import rule and never suggest `default`.
pub fn is_valid_export_candidate(name: &str, query: &str) -> bool {
    is_valid_import_candidate(name, query) && name != "default"
}

/// Members: no internal (`__`) names.
pub fn is_valid_member_candidate(name: &str, query: &str) -> bool {
    !name.is_empty() && name != query && !name.starts_with("__")
}

/// Identifiers in scope share the member rule.
pub fn is_valid_name_candidate(name: &str, query: &str) -> bool {
    is_valid_member_candidate(name, query)
}

pub fn is_valid_package_candidate(name: &str, query: &str) -> bool {
    !name.is_empty() && name != query
}

/// Local files offered for a relative specifier: no dotfiles, no tests.
pub fn is_valid_local_file_candidate(path: &str) -> bool {
    let name = file_name(path);
    !name.starts_with('.') && !is_test_file(name)
}

#[cfg(test)]
#[path = "../tests/predicates.rs"]
mod tests;
