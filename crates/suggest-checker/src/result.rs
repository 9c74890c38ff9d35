use serde::Serialize;
use suggest_common::{Diagnostic, RuleName};
use suggest_format::{MessageContext, compose_message};
use suggest_ranking::SuggestionSet;

/// Outcome of one validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum ValidationResult {
    /// Nothing to report: the query resolved, or there was no plausible
    /// alternative to offer.
    Valid,
    Invalid {
        query: String,
        context: MessageContext,
        suggestions: SuggestionSet,
    },
}

impl ValidationResult {
    /// Invalid with `suggestions`, or Valid when there are none.
    pub fn from_suggestions(context: MessageContext, suggestions: SuggestionSet) -> Self {
        if suggestions.is_empty() {
            return ValidationResult::Valid;
        }
        ValidationResult::Invalid {
            query: context.query().to_string(),
            context,
            suggestions,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn query(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { query, .. } => Some(query),
        }
    }

    pub fn suggestions(&self) -> Option<&SuggestionSet> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { suggestions, .. } => Some(suggestions),
        }
    }

    /// Rendered diagnostic text for an Invalid result.
    pub fn message(&self) -> Option<String> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid {
                context,
                suggestions,
                ..
            } => Some(compose_message(context, suggestions)),
        }
    }

    /// Convert an Invalid result into a diagnostic at `start..start+length`.
    pub fn into_diagnostic(
        self,
        rule: RuleName,
        file: impl Into<String>,
        start: u32,
        length: u32,
    ) -> Option<Diagnostic> {
        let message = self.message()?;
        Some(Diagnostic::error(rule, file, start, length, message))
    }
}

#[cfg(test)]
#[path = "../tests/result.rs"]
mod tests;
