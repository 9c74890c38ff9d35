//! The `suggest` command-line front end.
//!
//! - `args` - clap definitions
//! - `config` - `suggest.json` loading and command-line overrides
//! - `project` - source-file discovery with `walkdir`
//! - `driver` - command execution
//! - `reporter` - text and JSON rendering
//! - `tracing_config` - subscriber setup from `SUGGEST_LOG`

pub mod args;
pub mod config;
pub mod driver;
pub mod project;
pub mod reporter;
pub mod tracing_config;
