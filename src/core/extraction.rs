use crate::models::error::VaultError;
use crate::models::mod_meta::{CandidateDescriptor, CandidatePackage};
use camino::Utf8Path;
use indexmap::IndexMap;
use std::fs::File;
use std::io::Read;
use tracing::debug;

/// Name of the in-archive descriptor entry.
pub const DESCRIPTOR_ENTRY: &str = "mod.txt";

pub struct Extraction;

impl Extraction {
    /// Unpacks a package archive into memory. Entries whose paths would
    /// escape the archive root are skipped (zip-slip guard). Directory
    /// entries keep their trailing slash so downstream stages can tell
    /// markers from files.
    pub fn unpack(archive_path: &Utf8Path) -> Result<CandidatePackage, VaultError> {
        let file = File::open(archive_path)?;
        let mut archive = zip::ZipArchive::new(file)?;

        let mut entries = IndexMap::new();
        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;

            if entry.enclosed_name().is_none() {
                debug!("skipping unsafe archive path {:?}", entry.name());
                continue;
            }

            let name = entry.name().to_string();
            if entry.is_dir() {
                entries.insert(name, Vec::new());
                continue;
            }

            let mut data = Vec::with_capacity(entry.size() as usize);
            entry.read_to_end(&mut data)?;
            entries.insert(name, data);
        }

        let descriptor = Self::read_descriptor(&entries)?;
        Ok(CandidatePackage { entries, descriptor })
    }

    /// Parses the `mod.txt` descriptor. A missing entry yields an empty
    /// descriptor, which the admission pipeline reports as incomplete
    /// metadata; a malformed one is a parse error.
    pub fn read_descriptor(
        entries: &IndexMap<String, Vec<u8>>,
    ) -> Result<CandidateDescriptor, VaultError> {
        match entries.get(DESCRIPTOR_ENTRY) {
            Some(raw) => Ok(serde_json::from_slice(raw)?),
            None => Ok(CandidateDescriptor::default()),
        }
    }
}
