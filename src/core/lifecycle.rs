use crate::core::registry_store::{Partition, RegistryStore};
use crate::models::error::VaultError;
use crate::models::mod_meta::{CandidatePackage, ModMetadata};
use crate::models::paths::{self, VaultPathRules};
use crate::utils::file::FileUtils;
use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use tracing::{debug, info, warn};

/// Pending partition move, written to disk before the two document saves so
/// a crash between them can be finished at next startup instead of leaving
/// the id in both partitions or in neither.
#[derive(Serialize, Deserialize, Debug)]
struct TransferIntent {
    id: String,
    to: Partition,
    metadata: ModMetadata,
}

/// Lifecycle operations for a single mod id:
/// absent -> enabled <-> disabled -> absent.
pub struct ModLifecycle {
    root: Utf8PathBuf,
    paths: VaultPathRules,
    store: RegistryStore,
}

impl ModLifecycle {
    pub fn new(root: &Utf8Path) -> Self {
        let paths = VaultPathRules::new(root);
        let store = RegistryStore::new(paths.clone());
        Self {
            root: root.to_owned(),
            paths,
            store,
        }
    }

    pub fn store(&self) -> &RegistryStore {
        &self.store
    }

    pub fn paths(&self) -> &VaultPathRules {
        &self.paths
    }

    /// Installs an admitted candidate under the given id. The caller must
    /// run the admission pipeline first; this only guards the partition
    /// invariant itself. A failure partway through the entry writes leaves
    /// orphan files behind (reclaimable via prune_orphans) and no registry
    /// entry.
    pub fn install(
        &self,
        candidate: &CandidatePackage,
        id: &str,
    ) -> Result<ModMetadata, VaultError> {
        let mut enabled = self.store.load(Partition::Enabled);
        if enabled.contains_key(id) || self.store.load(Partition::Disabled).contains_key(id) {
            return Err(VaultError::AlreadyInstalled(id.to_string()));
        }

        let mut files = Vec::new();
        for (entry_path, data) in &candidate.entries {
            if entry_path.ends_with('/') {
                continue; // directory marker
            }
            if !paths::is_recognized(entry_path) {
                debug!("installing unrecognized entry {entry_path}");
            }
            FileUtils::write_file(&self.root.join(entry_path), data)?;
            if let Some(rel) = paths::strip_content_prefix(entry_path) {
                files.push(Utf8PathBuf::from(rel));
            }
        }

        let metadata = ModMetadata {
            id: id.to_string(),
            name: candidate.descriptor.name.clone(),
            author: candidate.descriptor.author.clone(),
            description: candidate.descriptor.description.clone(),
            files,
        };

        enabled.insert(id.to_string(), metadata.clone());
        self.store.save(Partition::Enabled, &enabled)?;
        info!("installed mod {id}");
        Ok(metadata)
    }

    /// Moves a disabled mod back into the enabled partition. Files stay on
    /// disk throughout; only the registry documents change.
    pub fn enable(&self, id: &str) -> Result<(), VaultError> {
        self.transfer(id, Partition::Disabled, Partition::Enabled)
    }

    /// Moves an enabled mod into the disabled partition, releasing its file
    /// paths for reuse by new installs.
    pub fn disable(&self, id: &str) -> Result<(), VaultError> {
        self.transfer(id, Partition::Enabled, Partition::Disabled)
    }

    fn transfer(&self, id: &str, from: Partition, to: Partition) -> Result<(), VaultError> {
        let mut source = self.store.load(from);
        let metadata = source
            .get(id)
            .cloned()
            .ok_or_else(|| VaultError::ModNotFound(id.to_string()))?;

        self.write_marker(&TransferIntent {
            id: id.to_string(),
            to,
            metadata: metadata.clone(),
        })?;

        // Copy before delete: the id must never be absent from both documents.
        let mut target = self.store.load(to);
        target.insert(id.to_string(), metadata);
        self.store.save(to, &target)?;
        source.shift_remove(id);
        self.store.save(from, &source)?;

        self.clear_marker()?;
        debug!("moved mod {id} {from:?} -> {to:?}");
        Ok(())
    }

    /// Deletes a mod from whichever partition holds it, removing its content
    /// files and (best-effort) its icon from disk. Returns the partition the
    /// mod was removed from.
    pub fn delete(&self, id: &str) -> Result<Partition, VaultError> {
        for partition in [Partition::Disabled, Partition::Enabled] {
            let mut mods = self.store.load(partition);
            let Some(metadata) = mods.get(id).cloned() else {
                continue;
            };

            for file in &metadata.files {
                FileUtils::delete_if_exists(&self.paths.content.join(file))?;
            }
            let _ = FileUtils::delete_if_exists(&self.paths.icon_file(id));

            mods.shift_remove(id);
            self.store.save(partition, &mods)?;
            info!("deleted mod {id} from {partition:?}");
            return Ok(partition);
        }

        Err(VaultError::ModNotFound(id.to_string()))
    }

    /// Finishes a partition move interrupted between its two document
    /// writes. No-op when no marker is present.
    pub fn repair(&self) -> Result<(), VaultError> {
        let raw = match fs::read_to_string(&self.paths.transfer_marker) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        };

        let TransferIntent { id, to, metadata } = match serde_json::from_str(&raw) {
            Ok(intent) => intent,
            Err(e) => {
                warn!("discarding unreadable transfer marker: {e}");
                return self.clear_marker();
            }
        };

        warn!("repairing interrupted move of mod {id} to {to:?}");
        let mut target = self.store.load(to);
        target.entry(id.clone()).or_insert(metadata);
        self.store.save(to, &target)?;

        let from = to.other();
        let mut source = self.store.load(from);
        if source.shift_remove(&id).is_some() {
            self.store.save(from, &source)?;
        }

        self.clear_marker()
    }

    fn write_marker(&self, intent: &TransferIntent) -> Result<(), VaultError> {
        fs::create_dir_all(&self.paths.data)?;
        fs::write(&self.paths.transfer_marker, serde_json::to_string(intent)?)?;
        Ok(())
    }

    fn clear_marker(&self) -> Result<(), VaultError> {
        FileUtils::delete_if_exists(&self.paths.transfer_marker)?;
        Ok(())
    }
}
