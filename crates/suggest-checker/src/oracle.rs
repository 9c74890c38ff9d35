//! The type-checking service consulted for member, export and scope names.

use thiserror::Error;

/// Failure of a [`TypeOracle`] call.
///
/// Validation never surfaces these: a failed lookup makes the query Valid,
/// a failed signature lookup drops the signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    #[error("type information is unavailable")]
    Unavailable,
    #[error("type oracle failed: {0}")]
    Failed(String),
}

/// Symbol and type introspection supplied by the host compiler.
///
/// `Type` is whatever handle the host uses for a type (an interned id, a
/// reference into its arena, ...). Only the name lists are required; every
/// enrichment has a default that reports nothing.
pub trait TypeOracle {
    type Type;

    /// Property names of `ty`. Union types may list a name more than once.
    fn properties_of_type(&self, ty: &Self::Type) -> Result<Vec<String>, OracleError>;

    /// Display name of `ty`, used in message headers.
    fn type_name(&self, _ty: &Self::Type) -> Option<String> {
        None
    }

    fn property_signature(
        &self,
        _ty: &Self::Type,
        _property: &str,
    ) -> Result<Option<String>, OracleError> {
        Ok(None)
    }

    /// Resolve `specifier` as written in `containing_file` to the path of
    /// the module it names.
    fn resolve_module_path(
        &self,
        specifier: &str,
        containing_file: &str,
    ) -> Result<Option<String>, OracleError>;

    /// Export names of the module at `module_path`.
    fn exports_of_module(
        &self,
        module_path: &str,
        containing_file: &str,
    ) -> Result<Vec<String>, OracleError>;

    /// Display name of the module's namespace type, if it has one.
    fn module_type_name(&self, _module_path: &str) -> Option<String> {
        None
    }

    fn export_signature(
        &self,
        _module_path: &str,
        _name: &str,
    ) -> Result<Option<String>, OracleError> {
        Ok(None)
    }

    /// Names visible at top level of `containing_file`.
    fn names_in_scope(&self, _containing_file: &str) -> Result<Vec<String>, OracleError> {
        Err(OracleError::Unavailable)
    }

    fn name_signature(
        &self,
        _containing_file: &str,
        _name: &str,
    ) -> Result<Option<String>, OracleError> {
        Ok(None)
    }
}
