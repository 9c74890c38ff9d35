use colored::Colorize;
use serde::Serialize;

use suggest_common::{Diagnostic, DiagnosticCategory};
use suggest_ranking::SuggestionSet;

use crate::args::OutputFormat;

/// What `suggest index` prints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSummary {
    pub root: String,
    pub local_files: usize,
    pub manifests: Vec<String>,
    pub package_names: Vec<String>,
}

pub struct Reporter {
    color: bool,
    format: OutputFormat,
}

impl Reporter {
    pub fn new(color: bool, format: OutputFormat) -> Self {
        Reporter { color, format }
    }

    pub fn render_diagnostics(&self, diagnostics: &[Diagnostic]) -> String {
        match self.format {
            OutputFormat::Json => to_json(diagnostics),
            OutputFormat::Text => {
                let mut out = String::new();
                for (index, diagnostic) in diagnostics.iter().enumerate() {
                    if index > 0 {
                        out.push('\n');
                    }
                    out.push_str(&self.format_diagnostic(diagnostic));
                }
                out
            }
        }
    }

    /// `file:start - error suggest-module-paths: message`
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let location = if diagnostic.file.is_empty() {
            "<unknown>".to_string()
        } else {
            format!("{}:{}", diagnostic.file, diagnostic.start)
        };
        let location = if self.color {
            location.cyan().to_string()
        } else {
            location
        };

        format!(
            "{location} - {} {}: {}",
            self.format_category(diagnostic.category),
            self.format_rule(diagnostic),
            diagnostic.message_text
        )
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = match category {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Suggestion => "suggestion",
        };
        if !self.color {
            return label.to_string();
        }
        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().to_string(),
        }
    }

    fn format_rule(&self, diagnostic: &Diagnostic) -> String {
        let rule = diagnostic.rule.as_str();
        if self.color {
            rule.bright_black().to_string()
        } else {
            rule.to_string()
        }
    }

    pub fn render_summary(&self, summary: &IndexSummary) -> String {
        if self.format == OutputFormat::Json {
            return to_json(summary);
        }

        let mut out = format!(
            "root: {}\nlocal files: {}\nmanifests: {}\npackages: {}",
            summary.root,
            summary.local_files,
            summary.manifests.len(),
            summary.package_names.len()
        );
        for manifest in &summary.manifests {
            out.push_str(&format!("\n  manifest {manifest}"));
        }
        for name in &summary.package_names {
            out.push_str(&format!("\n  package {name}"));
        }
        out
    }

    pub fn render_suggestions(&self, suggestions: &SuggestionSet) -> String {
        match self.format {
            OutputFormat::Json => to_json(suggestions),
            OutputFormat::Text => suggest_format::format_suggestion_message(suggestions),
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("{{\"error\": \"{err}\"}}"))
}

#[cfg(test)]
#[path = "../tests/reporter.rs"]
mod tests;
