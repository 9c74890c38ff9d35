//! Path helpers over normalized path strings.
//!
//! Paths handed to the suggestion engine come from the host as plain strings
//! and may use either separator. Everything in the index is stored with
//! forward slashes so that set membership and module-specifier rendering do
//! not depend on the platform.

use crate::limits::{DECLARATION_EXTENSIONS, TEST_FILE_MARKERS};

/// Replace backslashes with forward slashes.
pub fn normalize_path(path: &str) -> String {
    path.replace('\\', "/")
}

/// Parent directory of a normalized path.
///
/// `/a/b` -> `/a`, `/a` -> `/`, `/` -> `/`, `a` -> `.`
pub fn dirname(path: &str) -> &str {
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(idx) => &trimmed[..idx],
        None => ".",
    }
}

/// Last path segment.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Join a segment onto a base directory with a single separator.
pub fn join_path(base: &str, segment: &str) -> String {
    if segment.is_empty() {
        return base.to_string();
    }
    if base.is_empty() {
        return segment.to_string();
    }
    if base.ends_with('/') {
        format!("{base}{segment}")
    } else {
        format!("{base}/{segment}")
    }
}

/// Collapse `.` and `..` segments and duplicate separators.
///
/// Absolute paths never climb above `/`; relative paths keep leading `..`.
pub fn collapse_segments(path: &str) -> String {
    let is_absolute = path.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(parts.last(), Some(last) if *last != "..") {
                    parts.pop();
                } else if !is_absolute {
                    parts.push("..");
                }
            }
            _ => parts.push(segment),
        }
    }

    let joined = parts.join("/");
    if is_absolute {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}

/// Resolve a relative (or absolute) module specifier against the file that
/// contains it.
pub fn resolve_relative(containing_file: &str, specifier: &str) -> String {
    let specifier = normalize_path(specifier);
    if specifier.starts_with('/') {
        return collapse_segments(&specifier);
    }
    let containing_file = normalize_path(containing_file);
    collapse_segments(&join_path(dirname(&containing_file), &specifier))
}

/// Relative path from `from_dir` to `target`, without a leading `./`.
///
/// Returns an empty string when both point at the same location.
pub fn relative_path(from_dir: &str, target: &str) -> String {
    let from = collapse_segments(&normalize_path(from_dir));
    let to = collapse_segments(&normalize_path(target));

    let from_parts: Vec<&str> = from.split('/').filter(|s| !s.is_empty() && *s != ".").collect();
    let to_parts: Vec<&str> = to.split('/').filter(|s| !s.is_empty() && *s != ".").collect();

    let common = from_parts
        .iter()
        .zip(to_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<&str> = Vec::with_capacity(from_parts.len() - common + to_parts.len());
    segments.extend(std::iter::repeat_n("..", from_parts.len() - common));
    segments.extend(&to_parts[common..]);
    segments.join("/")
}

/// Render `target` as a module specifier written inside `from_dir`.
///
/// The result always starts with `./` or `../`.
pub fn to_module_specifier(from_dir: &str, target: &str) -> String {
    let relative = relative_path(from_dir, target);
    if relative == ".." || relative.starts_with("../") {
        relative
    } else if relative.is_empty() {
        ".".to_string()
    } else {
        format!("./{relative}")
    }
}

/// The first extension from `extensions` that `path` ends with.
pub fn extension_of<'e>(path: &str, extensions: &[&'e str]) -> Option<&'e str> {
    extensions.iter().copied().find(|ext| path.ends_with(ext))
}

/// Strip the first matching extension from `extensions`.
pub fn strip_known_extension<'p>(path: &'p str, extensions: &[&str]) -> &'p str {
    match extension_of(path, extensions) {
        Some(ext) => &path[..path.len() - ext.len()],
        None => path,
    }
}

/// `.d.ts`, `.d.mts` and `.d.cts` files.
pub fn is_declaration_file(path: &str) -> bool {
    DECLARATION_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Whether any directory segment of `path` equals `directory_name`.
pub fn is_under_directory_named(path: &str, directory_name: &str) -> bool {
    let mut segments = path.split('/').collect::<Vec<_>>();
    // The last segment is the file itself.
    segments.pop();
    segments.iter().any(|segment| *segment == directory_name)
}

/// Test and spec files (`foo.test.ts`, `bar.spec.js`), with or without the
/// trailing extension.
pub fn is_test_file(path: &str) -> bool {
    TEST_FILE_MARKERS
        .iter()
        .any(|marker| path.contains(marker) || path.ends_with(marker.trim_end_matches('.')))
}

#[cfg(test)]
#[path = "../tests/path.rs"]
mod tests;
