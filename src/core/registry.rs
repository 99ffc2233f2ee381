use crate::core::service::VaultService;
use parking_lot::Mutex;
use std::sync::Arc;

/// Holds the application's vault behind a single-writer lock so the
/// embedding layer cannot interleave lifecycle operations.
pub struct AppRegistry {
    pub active_vault: Arc<Mutex<Option<VaultService>>>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self {
            active_vault: Arc::new(Mutex::new(None)),
        }
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}
