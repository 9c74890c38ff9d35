use serde::Deserialize;
use suggest_common::limits::{MANIFEST_FILE_NAME, SUPPORTED_EXTENSIONS, VENDOR_DIRECTORY};

/// Tuning for [`ModulePathIndex`](crate::ModulePathIndex) construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexOptions {
    /// Extensions of files that count as local modules, also probed during
    /// relative resolution. Each starts with a dot.
    pub extensions: Vec<String>,
    /// Directory name skipped during discovery.
    pub vendor_directory: String,
    /// Package manifest file name.
    pub manifest_file_name: String,
}

impl IndexOptions {
    /// The extensions as borrowed strings, for the path helpers.
    pub fn extension_list(&self) -> Vec<&str> {
        self.extensions.iter().map(String::as_str).collect()
    }
}

impl Default for IndexOptions {
    fn default() -> Self {
        IndexOptions {
            extensions: SUPPORTED_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect(),
            vendor_directory: VENDOR_DIRECTORY.to_string(),
            manifest_file_name: MANIFEST_FILE_NAME.to_string(),
        }
    }
}
