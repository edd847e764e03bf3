use std::io;

use async_trait::async_trait;

use crate::domain::FormantSettings;

#[async_trait]
pub trait FormantSettingsStore: Send + Sync {
    /// Overwrites the persisted record.
    async fn save(&self, settings: &FormantSettings) -> Result<(), SettingsStoreError>;

    async fn load(&self) -> Result<Option<FormantSettings>, SettingsStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsStoreError {
    #[error("serialization failed: {0}")]
    Serialization(String),
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
