use crate::models::error::VaultError;
use camino::{Utf8Path, Utf8PathBuf};
use walkdir::WalkDir;

pub struct FileUtils;

impl FileUtils {
    /// Writes bytes to a file, creating parent directories as needed.
    pub fn write_file(path: &Utf8Path, data: &[u8]) -> Result<(), VaultError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Removes a file if it exists. Returns whether a file was removed;
    /// absence is not an error.
    pub fn delete_if_exists(path: &Utf8Path) -> Result<bool, VaultError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists every file under `base` as a path relative to `base`. A missing
    /// base directory yields an empty list.
    pub fn collect_files(base: &Utf8Path) -> Vec<Utf8PathBuf> {
        WalkDir::new(base)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .filter_map(|e| {
                let path = Utf8PathBuf::from_path_buf(e.path().to_path_buf()).ok()?;
                let rel = path.strip_prefix(base).ok()?;
                Some(rel.to_path_buf())
            })
            .collect()
    }
}
