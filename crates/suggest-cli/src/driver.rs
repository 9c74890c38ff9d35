//! Command execution. Each command renders its output to a string; the
//! binary prints it and exits with [`Outcome::exit_code`].

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use suggest_checker::SuggestionChecker;
use suggest_common::{Diagnostic, RuleName};
use suggest_format::format_signature_lines;
use suggest_ranking::CandidateRanker;
use suggest_resolver::OsFileSystem;

use crate::args::{
    CheckArgs, CliArgs, Command, IndexArgs, OutputFormat, ProjectArgs, RankArgs, SignatureArgs,
};
use crate::config::{ResolvedConfig, SuggestConfig, discover_config};
use crate::project::{absolute_file, load_project, project_root};
use crate::reporter::{IndexSummary, Reporter};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DIAGNOSTICS_REPORTED: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub exit_code: i32,
}

impl Outcome {
    fn success(output: String) -> Self {
        Outcome {
            output,
            exit_code: EXIT_SUCCESS,
        }
    }
}

pub fn execute(args: &CliArgs, color: bool) -> Result<Outcome> {
    match &args.command {
        Command::Check(check) => run_check(check, color),
        Command::Index(index) => run_index(index),
        Command::Rank(rank) => run_rank(rank),
        Command::Signature(signature) => Ok(run_signature(signature)),
    }
}

fn load_config(project: &ProjectArgs, root: &str) -> Result<ResolvedConfig> {
    discover_config(Path::new(root), project.config.as_deref())?
        .with_overrides(project.ranking, &project.exclude)
        .resolve()
}

fn run_check(args: &CheckArgs, color: bool) -> Result<Outcome> {
    let root = project_root(&args.project.project)?;
    let config = load_config(&args.project, &root)?;
    let unit = load_project(&root, &config);
    let from = absolute_file(&root, &args.from);
    let source = std::fs::read_to_string(&from).unwrap_or_default();

    let mut checker =
        SuggestionChecker::with_options(Arc::new(OsFileSystem), config.ranking, config.index);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    for specifier in &args.specifiers {
        let result = checker.check_module_path(&unit, specifier, &from);
        debug!(specifier = specifier.as_str(), valid = result.is_valid(), "checked specifier");

        let (start, length) = locate_specifier(&source, specifier);
        if let Some(diagnostic) =
            result.into_diagnostic(RuleName::SuggestModulePaths, from.as_str(), start, length)
        {
            diagnostics.push(diagnostic);
        }
    }

    let color = color && !args.no_color && args.format == OutputFormat::Text;
    let reporter = Reporter::new(color, args.format);
    let exit_code = if diagnostics.is_empty() {
        EXIT_SUCCESS
    } else {
        EXIT_DIAGNOSTICS_REPORTED
    };
    let output = if diagnostics.is_empty() && args.format == OutputFormat::Text {
        String::new()
    } else {
        reporter.render_diagnostics(&diagnostics)
    };
    Ok(Outcome { output, exit_code })
}

fn run_index(args: &IndexArgs) -> Result<Outcome> {
    let root = project_root(&args.project.project)?;
    let config = load_config(&args.project, &root)?;
    let unit = load_project(&root, &config);

    let mut checker =
        SuggestionChecker::with_options(Arc::new(OsFileSystem), config.ranking, config.index);
    let index = checker.module_index(&unit);

    let mut package_names: Vec<String> = index.package_names().map(str::to_string).collect();
    package_names.sort();
    let summary = IndexSummary {
        root,
        local_files: index.local_file_count(),
        manifests: index.manifests().to_vec(),
        package_names,
    };
    Ok(Outcome::success(
        Reporter::new(false, args.format).render_summary(&summary),
    ))
}

fn run_rank(args: &RankArgs) -> Result<Outcome> {
    let options = SuggestConfig::default()
        .with_overrides(args.ranking, &[])
        .ranking_options()?;
    let suggestions = CandidateRanker::new(options)
        .rank_names(&args.query, args.candidates.iter().map(String::as_str));
    Ok(Outcome::success(
        Reporter::new(false, args.format).render_suggestions(&suggestions),
    ))
}

fn run_signature(args: &SignatureArgs) -> Outcome {
    Outcome::success(format_signature_lines(&args.name, &args.signature).join("\n"))
}

/// Byte span of the first quoted occurrence of `specifier` in `source`,
/// quotes excluded. `(0, 0)` when it does not appear.
pub fn locate_specifier(source: &str, specifier: &str) -> (u32, u32) {
    ['"', '\'', '`']
        .iter()
        .find_map(|quote| source.find(&format!("{quote}{specifier}{quote}")))
        .and_then(|offset| {
            let start = u32::try_from(offset + 1).ok()?;
            let length = u32::try_from(specifier.len()).ok()?;
            Some((start, length))
        })
        .unwrap_or((0, 0))
}

#[cfg(test)]
#[path = "../tests/driver.rs"]
mod tests;
