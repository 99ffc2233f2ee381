use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "mod_vault";

/// Application-level settings: where the vault keeps its data root
/// (registry documents, content tree, icons).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppSettings {
    pub version: u8,
    pub home: PathBuf,
}

impl Default for AppSettings {
    fn default() -> Self {
        let base_dir = ProjectDirs::from("com", "martes", APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .or_else(|| {
                std::env::current_exe()
                    .ok()
                    .and_then(|exe_path| exe_path.parent().map(|p| p.to_path_buf()))
            })
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            version: 0,
            home: base_dir,
        }
    }
}

impl AppSettings {
    pub fn load() -> Result<AppSettings, confy::ConfyError> {
        confy::load(APP_NAME, None)
    }

    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, None, self)
    }
}
