use crate::core::registry_store::ModSet;
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::collections::BTreeSet;

/// Derived mapping from installed content-relative path to the id of the
/// mod that owns it. Built from the enabled partition only: a disabled
/// mod's files stay on disk but are free for reuse by new installs.
#[derive(Debug, Clone, Default)]
pub struct FileOwnershipIndex {
    owners: IndexMap<Utf8PathBuf, String>,
}

impl FileOwnershipIndex {
    /// Builds the index from the enabled registry. Two entries claiming the
    /// same path can only come from a corrupted registry; the later entry in
    /// document order wins.
    pub fn build(enabled: &ModSet) -> Self {
        let mut owners = IndexMap::new();
        for (id, metadata) in enabled {
            for file in &metadata.files {
                owners.insert(file.clone(), id.clone());
            }
        }
        Self { owners }
    }

    pub fn owner_of(&self, path: &Utf8Path) -> Option<&str> {
        self.owners.get(path).map(String::as_str)
    }

    /// Distinct owners of any candidate path already present in the index.
    /// An empty set means no collision.
    pub fn find_collisions(&self, paths: &[Utf8PathBuf]) -> BTreeSet<String> {
        paths
            .iter()
            .filter_map(|path| self.owners.get(path))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
