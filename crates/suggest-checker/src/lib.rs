//! Did-you-mean validation.
//!
//! Decides, for a module specifier, a member access, a named import or
//! export, or an unresolved identifier, whether to report it and with which
//! suggestions:
//! - [`ModulePathValidator`] checks specifiers against a unit's
//!   [`ModulePathIndex`](suggest_resolver::ModulePathIndex)
//! - [`SymbolValidator`] checks names against a [`TypeOracle`]
//! - [`SuggestionChecker`] ties both to a per-unit index cache
//!
//! Every check fails open: missing type information or the absence of a
//! plausible alternative yields [`ValidationResult::Valid`].

mod module_path;
mod oracle;
mod predicates;
mod result;
mod session;
mod symbols;

pub use module_path::ModulePathValidator;
pub use oracle::{OracleError, TypeOracle};
pub use predicates::{
    is_valid_export_candidate, is_valid_import_candidate, is_valid_local_file_candidate,
    is_valid_member_candidate, is_valid_name_candidate, is_valid_package_candidate,
};
pub use result::ValidationResult;
pub use session::SuggestionChecker;
pub use symbols::{ImportSite, SymbolValidator};
