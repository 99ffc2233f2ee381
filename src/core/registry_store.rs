use crate::models::error::VaultError;
use crate::models::mod_meta::ModMetadata;
use crate::models::paths::VaultPathRules;
use camino::Utf8Path;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use tracing::warn;

/// One registry partition document: mod id to metadata, in document order.
/// Document order is load-bearing downstream (see FileOwnershipIndex).
pub type ModSet = IndexMap<String, ModMetadata>;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Partition {
    Enabled,
    Disabled,
}

impl Partition {
    pub fn document<'a>(&self, paths: &'a VaultPathRules) -> &'a Utf8Path {
        match self {
            Partition::Enabled => &paths.enabled,
            Partition::Disabled => &paths.disabled,
        }
    }

    pub fn other(&self) -> Partition {
        match self {
            Partition::Enabled => Partition::Disabled,
            Partition::Disabled => Partition::Enabled,
        }
    }
}

/// Whole-document JSON persistence for the two registry partitions.
/// Callers own read-modify-write correctness; there is no merge.
pub struct RegistryStore {
    paths: VaultPathRules,
}

impl RegistryStore {
    pub fn new(paths: VaultPathRules) -> Self {
        Self { paths }
    }

    /// Loads a partition document. A missing document is an empty registry;
    /// a malformed one loads as empty too, so a corrupted file never blocks
    /// lifecycle operations (fail-open, see DESIGN.md).
    pub fn load(&self, partition: Partition) -> ModSet {
        let doc = partition.document(&self.paths);
        let text = match fs::read_to_string(doc) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return ModSet::default(),
            Err(e) => {
                warn!("unreadable registry document {doc}: {e}");
                return ModSet::default();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|e| {
            warn!("malformed registry document {doc}: {e}");
            ModSet::default()
        })
    }

    /// Replaces a partition document with the given mapping.
    pub fn save(&self, partition: Partition, mods: &ModSet) -> Result<(), VaultError> {
        fs::create_dir_all(&self.paths.data)?;
        let doc = partition.document(&self.paths);
        fs::write(doc, serde_json::to_string_pretty(mods)?)?;
        Ok(())
    }
}
