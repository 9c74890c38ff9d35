use serde::Serialize;
use std::fmt;

const RULE_DOCS_BASE_URL: &str =
    "https://github.com/prover-coder-ai/suggest/blob/main/docs/rules";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
}

/// The lint rule a diagnostic is reported under.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleName {
    SuggestExports,
    SuggestImports,
    SuggestMembers,
    SuggestMissingNames,
    SuggestModulePaths,
}

impl RuleName {
    pub const ALL: [RuleName; 5] = [
        RuleName::SuggestExports,
        RuleName::SuggestImports,
        RuleName::SuggestMembers,
        RuleName::SuggestMissingNames,
        RuleName::SuggestModulePaths,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RuleName::SuggestExports => "suggest-exports",
            RuleName::SuggestImports => "suggest-imports",
            RuleName::SuggestMembers => "suggest-members",
            RuleName::SuggestMissingNames => "suggest-missing-names",
            RuleName::SuggestModulePaths => "suggest-module-paths",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rule| rule.as_str() == name)
    }

    pub fn docs_url(self) -> String {
        format!("{RULE_DOCS_BASE_URL}/{}.md", self.as_str())
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic ready for the host's sink: a location plus rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub rule: RuleName,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(
        rule: RuleName,
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            rule,
            file: file.into(),
            start,
            length,
            message_text: message.into(),
        }
    }

    pub fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics.rs"]
mod tests;
