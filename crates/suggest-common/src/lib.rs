//! Common types and utilities for the suggest workspace.
//!
//! This crate provides foundational pieces used across all suggest crates:
//! - Limits and fixed constants that form part of the observable contract
//! - Posix-style path helpers (`normalize_path`, `dirname`, `relative_path`)
//! - Diagnostic records, rule names and message templates

// Centralized limits and thresholds
pub mod limits;
pub use limits::{
    MANIFEST_FILE_NAME, MAX_SUGGESTIONS, MIN_SIMILARITY_SCORE, SUPPORTED_EXTENSIONS,
    VENDOR_DIRECTORY,
};

// Path helpers over normalized (forward-slash) strings
pub mod path;

// Diagnostic records handed to the host's sink
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, RuleName};

// Message templates (`{0}` placeholders)
pub mod messages;
pub use messages::format_message;
