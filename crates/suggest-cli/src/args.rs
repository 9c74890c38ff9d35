use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the `suggest` binary.
#[derive(Parser, Debug)]
#[command(
    name = "suggest",
    version,
    about = "Did-you-mean diagnostics for module paths and names"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate module specifiers as written in one source file.
    Check(CheckArgs),
    /// Print the module path index of a project.
    Index(IndexArgs),
    /// Rank candidate names against a query.
    Rank(RankArgs),
    /// Format a type signature the way suggestion lines show it.
    Signature(SignatureArgs),
}

/// Options shared by commands that load a project.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project root directory.
    #[arg(short = 'p', long = "project", default_value = ".")]
    pub project: PathBuf,

    /// Configuration file (defaults to `suggest.json` in the project root).
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Additional glob patterns of files to leave out of the index.
    #[arg(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    #[command(flatten)]
    pub ranking: RankingArgs,
}

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct RankingArgs {
    /// Maximum number of suggestions per diagnostic.
    #[arg(long = "max-suggestions")]
    pub max_suggestions: Option<usize>,

    /// Candidates must score strictly above this value (0 to 1).
    #[arg(long = "min-score")]
    pub min_score: Option<f64>,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Source file the specifiers are written in.
    #[arg(long)]
    pub from: PathBuf,

    /// Module specifiers to validate.
    #[arg(required = true)]
    pub specifiers: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Args, Debug)]
pub struct IndexArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct RankArgs {
    pub query: String,

    pub candidates: Vec<String>,

    #[command(flatten)]
    pub ranking: RankingArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct SignatureArgs {
    pub name: String,

    pub signature: String,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "../tests/args.rs"]
mod tests;
