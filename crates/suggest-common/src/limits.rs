//! Centralized limits and fixed constants.
//!
//! These values are part of the observable contract: they decide how many
//! suggestions a diagnostic may carry, which files count as local modules,
//! and which extensions are probed when a relative specifier is resolved.
//! Option structs in downstream crates default to these values.

// =============================================================================
// Ranking
// =============================================================================

/// Maximum number of suggestions a single diagnostic lists.
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum similarity score a candidate must exceed to be suggested.
///
/// Scores are normalized edit-distance similarities in `(0, 1]`. At `0.3` a
/// five-character name tolerates three edits, which keeps single typos and
/// transpositions while dropping unrelated names.
pub const MIN_SIMILARITY_SCORE: f64 = 0.3;

// =============================================================================
// Module files
// =============================================================================

/// Extensions of files that count as local modules.
///
/// Used both to classify the source files of a compilation unit and to probe
/// extensionless relative specifiers (`./util` -> `./util.ts`, ...).
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    ".ts", ".tsx", ".mts", ".cts", ".js", ".jsx", ".mjs", ".cjs", ".json", ".css", ".scss",
    ".sass", ".less", ".svg",
];

/// Declaration-file extensions. Declaration files never count as local files.
pub const DECLARATION_EXTENSIONS: &[&str] = &[".d.ts", ".d.mts", ".d.cts"];

/// Name of the vendored-dependency directory skipped during discovery.
pub const VENDOR_DIRECTORY: &str = "node_modules";

/// File name of a package manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Manifest sections whose keys name reachable packages.
pub const DEPENDENCY_SECTIONS: &[&str] = &[
    "dependencies",
    "devDependencies",
    "peerDependencies",
    "optionalDependencies",
];

/// Test-file markers; files containing them are never proposed as modules.
pub const TEST_FILE_MARKERS: &[&str] = &[".test.", ".spec."];

// =============================================================================
// Workspace discovery
// =============================================================================

/// Deepest directory level a recursive (`**`) workspace glob is expanded to.
pub const MAX_WORKSPACE_GLOB_DEPTH: usize = 6;
