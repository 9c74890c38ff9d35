//! Diagnostic message composition.
//!
//! Every message is a header sentence, optionally followed by
//! ` Did you mean:` and one `  - ` line per suggestion:
//!
//! ```text
//! Property 'nmae' does not exist on type 'User'. Did you mean:
//!   - name: string
//! ```

use rustc_hash::FxHashSet;
use serde::Serialize;
use suggest_common::messages::{
    CANNOT_FIND_LOCAL_MODULE, CANNOT_FIND_MODULE_OR_TYPE_DECLARATIONS, CANNOT_FIND_NAME,
    DID_YOU_MEAN, EXPORT_DOES_NOT_EXIST_IN_MODULE, EXPORT_DOES_NOT_EXIST_ON_TYPE,
    NO_SIMILAR_SUGGESTIONS, PROPERTY_DOES_NOT_EXIST, PROPERTY_DOES_NOT_EXIST_ON_TYPE,
    SUGGESTION_LINE_PREFIX, format_message,
};
use suggest_ranking::{ScoredCandidate, SuggestionSet};

use crate::signature::format_signature_lines;

/// How a module specifier was classified when it failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleKind {
    /// Relative or absolute path to a local file.
    Local,
    /// Bare package specifier.
    Package,
}

/// What was being validated when a query failed, with the fields its
/// message needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MessageContext {
    #[serde(rename_all = "camelCase")]
    Member {
        property: String,
        type_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Export {
        name: String,
        module_path: String,
        type_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Import {
        name: String,
        module_path: String,
        type_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    MissingName { name: String },
    #[serde(rename_all = "camelCase")]
    Module {
        requested_path: String,
        module_kind: ModuleKind,
    },
}

impl MessageContext {
    /// The text the user wrote.
    pub fn query(&self) -> &str {
        match self {
            MessageContext::Member { property, .. } => property,
            MessageContext::Export { name, .. }
            | MessageContext::Import { name, .. }
            | MessageContext::MissingName { name } => name,
            MessageContext::Module { requested_path, .. } => requested_path,
        }
    }

    /// Whether suggestion lines render signatures when available.
    pub fn includes_signatures(&self) -> bool {
        !matches!(self, MessageContext::Module { .. })
    }
}

/// Render the full message for `context` and `suggestions`.
pub fn compose_message(context: &MessageContext, suggestions: &SuggestionSet) -> String {
    match context {
        MessageContext::Member {
            property,
            type_name,
        } => format_member_message(property, type_name.as_deref(), suggestions),
        MessageContext::Export {
            name,
            module_path,
            type_name,
        } => format_export_message(name, module_path, type_name.as_deref(), suggestions),
        MessageContext::Import {
            name,
            module_path,
            type_name,
        } => format_import_message(name, module_path, type_name.as_deref(), suggestions),
        MessageContext::MissingName { name } => format_missing_name_message(name, suggestions),
        MessageContext::Module {
            requested_path,
            module_kind,
        } => format_module_message(requested_path, *module_kind, suggestions),
    }
}

pub fn format_member_message(
    property: &str,
    type_name: Option<&str>,
    suggestions: &SuggestionSet,
) -> String {
    let header = match non_empty(type_name) {
        Some(type_name) => format_message(PROPERTY_DOES_NOT_EXIST_ON_TYPE, &[property, type_name]),
        None => format_message(PROPERTY_DOES_NOT_EXIST, &[property]),
    };
    with_suggestions(header, suggestions, true)
}

pub fn format_import_message(
    name: &str,
    module_path: &str,
    type_name: Option<&str>,
    suggestions: &SuggestionSet,
) -> String {
    format_export_context_message(name, module_path, type_name, suggestions)
}

pub fn format_export_message(
    name: &str,
    module_path: &str,
    type_name: Option<&str>,
    suggestions: &SuggestionSet,
) -> String {
    format_export_context_message(name, module_path, type_name, suggestions)
}

fn format_export_context_message(
    name: &str,
    module_path: &str,
    type_name: Option<&str>,
    suggestions: &SuggestionSet,
) -> String {
    let header = match non_empty(type_name) {
        Some(type_name) => format_message(EXPORT_DOES_NOT_EXIST_ON_TYPE, &[name, type_name]),
        None => format_message(EXPORT_DOES_NOT_EXIST_IN_MODULE, &[name, module_path]),
    };
    with_suggestions(header, suggestions, true)
}

/// Local paths are double-quoted; packages are single-quoted and mention
/// type declarations.
pub fn format_module_message(
    requested_path: &str,
    kind: ModuleKind,
    suggestions: &SuggestionSet,
) -> String {
    let template = match kind {
        ModuleKind::Local => CANNOT_FIND_LOCAL_MODULE,
        ModuleKind::Package => CANNOT_FIND_MODULE_OR_TYPE_DECLARATIONS,
    };
    let header = format_message(template, &[requested_path]);
    with_suggestions(header, suggestions, false)
}

pub fn format_missing_name_message(name: &str, suggestions: &SuggestionSet) -> String {
    let header = format_message(CANNOT_FIND_NAME, &[name]);
    with_suggestions(header, suggestions, true)
}

/// Context-free rendering: the suggestion list alone, or a fixed sentence
/// when there is nothing to suggest.
pub fn format_suggestion_message(suggestions: &SuggestionSet) -> String {
    if suggestions.is_empty() {
        return NO_SIMILAR_SUGGESTIONS.to_string();
    }
    format!(
        "{DID_YOU_MEAN}\n{}",
        format_suggestion_list(suggestions, false)
    )
}

/// One `  - ` line per rendered suggestion, deduplicated by exact text in
/// rank order.
pub fn format_suggestion_list(suggestions: &SuggestionSet, include_signatures: bool) -> String {
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut lines: Vec<String> = Vec::new();

    for suggestion in suggestions {
        for line in suggestion_lines(suggestion, include_signatures) {
            let line = format!("{SUGGESTION_LINE_PREFIX}{line}");
            if seen.insert(line.clone()) {
                lines.push(line);
            }
        }
    }

    lines.join("\n")
}

fn suggestion_lines(suggestion: &ScoredCandidate, include_signatures: bool) -> Vec<String> {
    match (&suggestion.signature, include_signatures) {
        (Some(signature), true) => format_signature_lines(&suggestion.name, signature),
        _ => vec![suggestion.name.clone()],
    }
}

fn with_suggestions(header: String, suggestions: &SuggestionSet, include_signatures: bool) -> String {
    if suggestions.is_empty() {
        return header;
    }
    format!(
        "{header} {DID_YOU_MEAN}\n{}",
        format_suggestion_list(suggestions, include_signatures)
    )
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
#[path = "../tests/message.rs"]
mod tests;
