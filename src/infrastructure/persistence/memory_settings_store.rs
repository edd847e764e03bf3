use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::application::ports::{FormantSettingsStore, SettingsStoreError};
use crate::domain::FormantSettings;

/// Process-local store that also keeps every write, in order.
#[derive(Default)]
pub struct InMemorySettingsStore {
    history: Mutex<Vec<FormantSettings>>,
}

impl InMemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn history(&self) -> Vec<FormantSettings> {
        self.history.lock().await.clone()
    }
}

#[async_trait]
impl FormantSettingsStore for InMemorySettingsStore {
    async fn save(&self, settings: &FormantSettings) -> Result<(), SettingsStoreError> {
        self.history.lock().await.push(*settings);
        Ok(())
    }

    async fn load(&self) -> Result<Option<FormantSettings>, SettingsStoreError> {
        Ok(self.history.lock().await.last().copied())
    }
}
