use crate::core::admission;
use crate::core::lifecycle::ModLifecycle;
use crate::core::ownership::FileOwnershipIndex;
use crate::core::registry_store::Partition;
use crate::models::admission::AdmissionResult;
use crate::models::error::VaultError;
use crate::models::mod_meta::{CandidatePackage, ModRecord};
use crate::utils::file::FileUtils;
use crate::utils::{icon, id};
use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// Registry snapshot for the presentation layer: both partitions with icon
/// handles resolved, in document order.
#[derive(Debug, Default)]
pub struct RegistrySnapshot {
    pub enabled: IndexMap<String, ModRecord>,
    pub disabled: IndexMap<String, ModRecord>,
}

/// Change notification emitted after every completed lifecycle operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VaultEvent {
    Installed(String),
    Enabled(String),
    Disabled(String),
    Deleted(String),
}

type Subscriber = Box<dyn Fn(&VaultEvent) + Send>;

/// Orchestrates admission and lifecycle operations over one data root,
/// keeping the file-ownership index in step with the enabled partition and
/// notifying subscribers of registry changes.
pub struct VaultService {
    lifecycle: ModLifecycle,
    index: FileOwnershipIndex,
    subscribers: Vec<Subscriber>,
}

impl VaultService {
    /// Opens the vault at the given data root: finishes any partition move
    /// interrupted by a crash, then builds the ownership index from the
    /// enabled registry.
    pub fn open(root: &Utf8Path) -> Result<Self, VaultError> {
        let lifecycle = ModLifecycle::new(root);
        lifecycle.repair()?;
        let index = FileOwnershipIndex::build(&lifecycle.store().load(Partition::Enabled));

        Ok(Self {
            lifecycle,
            index,
            subscribers: Vec::new(),
        })
    }

    /// Registers an observer for registry change events.
    pub fn subscribe(&mut self, subscriber: impl Fn(&VaultEvent) + Send + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn notify(&self, event: VaultEvent) {
        for subscriber in &self.subscribers {
            subscriber(&event);
        }
    }

    pub fn ownership(&self) -> &FileOwnershipIndex {
        &self.index
    }

    // The index is a cache over the enabled partition; always rebuild from
    // the store rather than patching it from possibly stale state.
    fn rebuild_index(&mut self) {
        self.index = FileOwnershipIndex::build(&self.lifecycle.store().load(Partition::Enabled));
    }

    /// Loads both partitions, resolving each mod's icon handle from its id.
    pub fn load_registry(&self) -> RegistrySnapshot {
        let resolve = |partition| {
            self.lifecycle
                .store()
                .load(partition)
                .into_iter()
                .map(|(id, metadata)| {
                    let icon =
                        icon::load_icon_as_data_uri(&self.lifecycle.paths().icon_file(&id));
                    (id, ModRecord { metadata, icon })
                })
                .collect()
        };

        RegistrySnapshot {
            enabled: resolve(Partition::Enabled),
            disabled: resolve(Partition::Disabled),
        }
    }

    /// Runs the admission pipeline against the current ownership index.
    pub fn validate_candidate(&self, candidate: &CandidatePackage) -> AdmissionResult {
        admission::validate(candidate, &self.index)
    }

    /// Validates and installs a candidate, deriving its id from the package
    /// contents. Returns the new mod's id.
    #[instrument(skip(self, candidate))]
    pub fn install(&mut self, candidate: &CandidatePackage) -> Result<String, VaultError> {
        self.validate_candidate(candidate)?;

        let id = id::content_id(&candidate.entries);
        self.lifecycle.install(candidate, &id)?;
        self.rebuild_index();
        self.notify(VaultEvent::Installed(id.clone()));
        Ok(id)
    }

    #[instrument(skip(self))]
    pub fn enable(&mut self, id: &str) -> Result<(), VaultError> {
        self.lifecycle.enable(id)?;
        self.rebuild_index();
        self.notify(VaultEvent::Enabled(id.to_string()));
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn disable(&mut self, id: &str) -> Result<(), VaultError> {
        self.lifecycle.disable(id)?;
        self.rebuild_index();
        self.notify(VaultEvent::Disabled(id.to_string()));
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn delete(&mut self, id: &str) -> Result<(), VaultError> {
        let partition = self.lifecycle.delete(id)?;
        if partition == Partition::Enabled {
            self.rebuild_index();
        }
        self.notify(VaultEvent::Deleted(id.to_string()));
        Ok(())
    }

    /// Deletes content files owned by no registered mod in either partition
    /// and returns their paths. Orphans appear when an install fails partway
    /// through its writes.
    pub fn prune_orphans(&self) -> Result<Vec<Utf8PathBuf>, VaultError> {
        let store = self.lifecycle.store();
        let owned: BTreeSet<Utf8PathBuf> = [Partition::Enabled, Partition::Disabled]
            .into_iter()
            .flat_map(|partition| store.load(partition).into_values())
            .flat_map(|metadata| metadata.files)
            .collect();

        let content_root = &self.lifecycle.paths().content;
        let mut removed = Vec::new();
        for rel in FileUtils::collect_files(content_root) {
            if !owned.contains(&rel) {
                FileUtils::delete_if_exists(&content_root.join(&rel))?;
                removed.push(rel);
            }
        }

        if !removed.is_empty() {
            info!("pruned {} orphaned content file(s)", removed.len());
        }
        Ok(removed)
    }
}
