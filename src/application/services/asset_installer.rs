use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{AssetError, AssetSource};
use crate::domain::AssetTarget;

/// Downloads the pretrained pitch/embedding assets into their expected layout.
pub struct AssetInstaller {
    source: Arc<dyn AssetSource>,
    root: PathBuf,
    manifest: Vec<AssetTarget>,
}

impl AssetInstaller {
    pub fn new(source: Arc<dyn AssetSource>, root: PathBuf) -> Self {
        Self::with_manifest(source, root, AssetTarget::default_manifest())
    }

    pub fn with_manifest(
        source: Arc<dyn AssetSource>,
        root: PathBuf,
        manifest: Vec<AssetTarget>,
    ) -> Self {
        Self {
            source,
            root,
            manifest,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn missing(&self) -> Vec<&AssetTarget> {
        self.manifest
            .iter()
            .filter(|target| !target.local_path(&self.root).is_file())
            .collect()
    }

    /// Fetches every manifest entry in order, overwriting existing files.
    pub async fn install_all(&self) -> Result<Vec<PathBuf>, AssetError> {
        let mut installed = Vec::with_capacity(self.manifest.len());

        for target in &self.manifest {
            installed.push(self.install(target).await?);
        }

        tracing::info!(count = installed.len(), "All assets downloaded");
        Ok(installed)
    }

    async fn install(&self, target: &AssetTarget) -> Result<PathBuf, AssetError> {
        let dir = self.root.join(&target.destination);
        tokio::fs::create_dir_all(&dir).await?;

        let path = target.local_path(&self.root);
        tracing::info!(file = %target.filename, dir = %dir.display(), "Downloading asset");

        let bytes = self.source.fetch(&target.filename, &path).await?;
        tracing::debug!(file = %target.filename, bytes, "Asset downloaded");

        Ok(path)
    }
}
