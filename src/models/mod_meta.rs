use crate::models::paths;
use camino::Utf8PathBuf;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Persisted description of an installed mod. `files` is exactly the set of
/// content-relative paths installed for this mod, without duplicates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ModMetadata {
    pub id: String,
    pub name: String,
    pub author: String,
    pub description: String,
    pub files: Vec<Utf8PathBuf>,
}

/// Registry entry as handed to the presentation layer: metadata plus the
/// icon handle resolved at load time. Not persisted as a unit.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ModRecord {
    pub metadata: ModMetadata,
    pub icon: Option<String>,
}

/// Partial metadata parsed from the in-archive descriptor. Fields the
/// descriptor leaves out stay empty and fail the completeness check.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CandidateDescriptor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

/// Extracted package awaiting admission. Never persisted. Entry keys are
/// archive-relative paths; directory markers keep their trailing slash.
#[derive(Debug, Clone, Default)]
pub struct CandidatePackage {
    pub entries: IndexMap<String, Vec<u8>>,
    pub descriptor: CandidateDescriptor,
}

impl CandidatePackage {
    /// Entry paths that are actual files, not directory markers.
    pub fn file_paths(&self) -> impl Iterator<Item = &str> {
        self.entries
            .keys()
            .map(String::as_str)
            .filter(|path| !path.ends_with('/'))
    }

    /// Content-relative paths of the package's content files, as they would
    /// appear in the registry `files` list after install.
    pub fn content_files(&self) -> Vec<Utf8PathBuf> {
        self.file_paths()
            .filter_map(paths::strip_content_prefix)
            .map(Utf8PathBuf::from)
            .collect()
    }
}
