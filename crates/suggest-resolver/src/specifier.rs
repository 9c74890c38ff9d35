//! Module specifier classification and package-name extraction.

use serde::Serialize;

/// Node.js core modules importable without the `node:` prefix.
pub const NODE_BUILTIN_MODULES: &[&str] = &[
    "assert",
    "assert/strict",
    "async_hooks",
    "buffer",
    "child_process",
    "cluster",
    "console",
    "constants",
    "crypto",
    "dgram",
    "diagnostics_channel",
    "dns",
    "dns/promises",
    "domain",
    "events",
    "fs",
    "fs/promises",
    "http",
    "http2",
    "https",
    "inspector",
    "inspector/promises",
    "module",
    "net",
    "os",
    "path",
    "path/posix",
    "path/win32",
    "perf_hooks",
    "process",
    "punycode",
    "querystring",
    "readline",
    "readline/promises",
    "repl",
    "stream",
    "stream/consumers",
    "stream/promises",
    "stream/web",
    "string_decoder",
    "sys",
    "timers",
    "timers/promises",
    "tls",
    "trace_events",
    "tty",
    "url",
    "util",
    "util/types",
    "v8",
    "vm",
    "wasi",
    "worker_threads",
    "zlib",
];

const NODE_PROTOCOL: &str = "node:";
const TYPES_SCOPE: &str = "@types/";

/// What kind of module a specifier names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecifierKind {
    /// `./x`, `../x`, `/x`, `.`, `..`
    Relative,
    /// A Node.js core module, with or without `node:`.
    Builtin,
    /// `scheme:rest` with a scheme of at least two characters.
    Protocol,
    /// `#internal` package imports.
    Subpath,
    /// A bare package specifier.
    Package,
}

impl SpecifierKind {
    /// Kinds that are never validated.
    pub fn is_always_valid(self) -> bool {
        matches!(
            self,
            SpecifierKind::Builtin | SpecifierKind::Protocol | SpecifierKind::Subpath
        )
    }
}

/// Classify `specifier`. Returns `None` for an empty (or blank) specifier.
pub fn classify_specifier(specifier: &str) -> Option<SpecifierKind> {
    if specifier.trim().is_empty() {
        return None;
    }
    let kind = if is_relative_specifier(specifier) {
        SpecifierKind::Relative
    } else if is_node_builtin(specifier) {
        SpecifierKind::Builtin
    } else if has_protocol(specifier) {
        SpecifierKind::Protocol
    } else if specifier.starts_with('#') {
        SpecifierKind::Subpath
    } else {
        SpecifierKind::Package
    };
    Some(kind)
}

pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier.starts_with('/')
}

/// Whether `specifier` (optionally `node:`-prefixed) is a Node.js core
/// module or a subpath of one.
pub fn is_node_builtin(specifier: &str) -> bool {
    let name = specifier.strip_prefix(NODE_PROTOCOL).unwrap_or(specifier);
    if name.is_empty() {
        return false;
    }
    NODE_BUILTIN_MODULES.contains(&name) || NODE_BUILTIN_MODULES.contains(&extract_module_name(name))
}

/// `scheme:` prefix per RFC 3986, at least two characters long so that
/// drive letters (`C:`) do not count.
fn has_protocol(specifier: &str) -> bool {
    let Some(colon) = specifier.find(':') else {
        return false;
    };
    let scheme = &specifier[..colon];
    scheme.len() >= 2
        && scheme.starts_with(|ch: char| ch.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}

/// Split a bare specifier into package name and subpath.
///
/// `lodash/fp` -> (`lodash`, `fp`), `@babel/core/lib` -> (`@babel/core`, `lib`)
pub fn split_package_specifier(specifier: &str) -> (&str, Option<&str>) {
    let name_end = if let Some(scoped) = specifier.strip_prefix('@') {
        match scoped.find('/') {
            Some(scope_end) => {
                let after_scope = scope_end + 2;
                specifier[after_scope..]
                    .find('/')
                    .map(|slash| after_scope + slash)
            }
            None => None,
        }
    } else {
        specifier.find('/')
    };

    match name_end {
        Some(end) => (&specifier[..end], Some(&specifier[end + 1..])),
        None => (specifier, None),
    }
}

/// Package name of a bare specifier.
pub fn extract_module_name(specifier: &str) -> &str {
    split_package_specifier(specifier).0
}

/// The package an `@types/...` package provides types for.
///
/// `@types/node` -> `node`, `@types/babel__core` -> `@babel/core`
pub fn types_package_target(package_name: &str) -> Option<String> {
    let rest = package_name.strip_prefix(TYPES_SCOPE)?;
    if rest.is_empty() {
        return None;
    }
    match rest.split_once("__") {
        Some((scope, name)) if !scope.is_empty() && !name.is_empty() => {
            Some(format!("@{scope}/{name}"))
        }
        _ => Some(rest.to_string()),
    }
}

/// The `@types/...` package that would carry types for `package_name`.
pub fn types_package_for(package_name: &str) -> String {
    match package_name
        .strip_prefix('@')
        .and_then(|scoped| scoped.split_once('/'))
    {
        Some((scope, name)) => format!("{TYPES_SCOPE}{scope}__{name}"),
        None => format!("{TYPES_SCOPE}{package_name}"),
    }
}

#[cfg(test)]
#[path = "../tests/specifier.rs"]
mod tests;
