//! Package manifest (`package.json`) loading.
//!
//! Only the fields the index needs are read. Each one is deserialized
//! leniently: a field of the wrong shape degrades to empty instead of
//! failing the whole manifest. A file that is not JSON at all is a
//! [`ManifestError`].

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::fs::FileSystem;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The parts of a package manifest used for package discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_keys")]
    pub dependencies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_keys")]
    pub dev_dependencies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_keys")]
    pub peer_dependencies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_keys")]
    pub optional_dependencies: Vec<String>,
    /// Workspace globs, from either `"workspaces": [..]` or
    /// `"workspaces": { "packages": [..] }`.
    #[serde(default, deserialize_with = "lenient_workspaces")]
    pub workspaces: Vec<String>,
}

impl PackageManifest {
    /// Parse manifest text. `path` is only used for the error.
    pub fn from_json(path: &str, content: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(content).map_err(|source| ManifestError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Keys of every dependency section, in section order, empty names
    /// skipped. Names listed in several sections repeat.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies
            .iter()
            .chain(&self.dev_dependencies)
            .chain(&self.peer_dependencies)
            .chain(&self.optional_dependencies)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}

/// Read and parse the manifest at `path`.
pub fn load_manifest(fs: &dyn FileSystem, path: &str) -> Result<PackageManifest, ManifestError> {
    let content = fs.read_file(path).map_err(|source| ManifestError::Read {
        path: path.to_string(),
        source,
    })?;
    PackageManifest::from_json(path, &content)
}

/// Read only the `name` of the manifest at `path`; any failure is `None`.
pub fn read_package_name(fs: &dyn FileSystem, path: &str) -> Option<String> {
    load_manifest(fs, path).ok().and_then(|manifest| manifest.name)
}

fn lenient_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(name) if !name.is_empty() => Some(name),
        _ => None,
    })
}

fn lenient_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map.into_iter().map(|(key, _)| key).collect(),
        _ => Vec::new(),
    })
}

fn lenient_workspaces<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let patterns = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("packages") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };
    Ok(patterns
        .into_iter()
        .filter_map(|item| match item {
            Value::String(pattern) if !pattern.is_empty() => Some(pattern),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
#[path = "../tests/manifest.rs"]
mod tests;
