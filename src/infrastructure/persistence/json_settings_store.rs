use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::application::ports::{FormantSettingsStore, SettingsStoreError};
use crate::domain::FormantSettings;

const RECORD_KEY: &str = "formanting";

#[derive(Debug, Serialize, Deserialize)]
struct FormantRecord {
    key: String,
    enabled: bool,
    quefrency: f64,
    timbre: f64,
    updated_at: DateTime<Utc>,
}

/// Keeps the last formant settings in a single JSON record on disk.
///
/// Writes are serialized through one async mutex and land via an atomic
/// rename, so readers never observe a half-written record.
pub struct JsonFileSettingsStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_record(&self, record: &FormantRecord) -> Result<(), SettingsStoreError> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent)?;

        let json = serde_json::to_vec_pretty(record)
            .map_err(|e| SettingsStoreError::Serialization(e.to_string()))?;

        let mut staging = tempfile::NamedTempFile::new_in(&parent)?;
        staging.write_all(&json)?;
        staging.flush()?;
        staging
            .persist(&self.path)
            .map_err(|e| SettingsStoreError::WriteFailed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl FormantSettingsStore for JsonFileSettingsStore {
    async fn save(&self, settings: &FormantSettings) -> Result<(), SettingsStoreError> {
        let _guard = self.write_lock.lock().await;

        let record = FormantRecord {
            key: RECORD_KEY.to_string(),
            enabled: settings.enabled,
            quefrency: settings.quefrency,
            timbre: settings.timbre,
            updated_at: Utc::now(),
        };
        self.write_record(&record)?;

        tracing::debug!(
            path = %self.path.display(),
            enabled = settings.enabled,
            quefrency = settings.quefrency,
            timbre = settings.timbre,
            "Formant settings persisted"
        );

        Ok(())
    }

    async fn load(&self) -> Result<Option<FormantSettings>, SettingsStoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let record: FormantRecord = serde_json::from_slice(&bytes)
            .map_err(|e| SettingsStoreError::Serialization(e.to_string()))?;

        if record.key != RECORD_KEY {
            tracing::warn!(key = %record.key, "Ignoring settings record with unexpected key");
            return Ok(None);
        }

        Ok(Some(FormantSettings {
            enabled: record.enabled,
            quefrency: record.quefrency,
            timbre: record.timbre,
        }))
    }
}
