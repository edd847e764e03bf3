use std::io;
use std::path::{Component, Path, PathBuf};

use crate::domain::ModelBundle;

const WEIGHTS_EXTENSION: &str = "pth";
const INDEX_EXTENSION: &str = "index";

/// Locates the weights and similarity index inside `<models_root>/<model_name>`.
pub struct ModelResolver {
    models_root: PathBuf,
}

impl ModelResolver {
    pub fn new(models_root: impl Into<PathBuf>) -> Self {
        Self {
            models_root: models_root.into(),
        }
    }

    pub fn models_root(&self) -> &Path {
        &self.models_root
    }

    /// Resolves a model directory. Reads the directory on every call.
    ///
    /// A directory without weights is not an error: the bundle comes back with
    /// an empty weights path and a warning is logged.
    pub fn resolve(&self, model_name: &str) -> Result<ModelBundle, ModelResolveError> {
        if !is_plain_name(model_name) {
            return Err(ModelResolveError::InvalidName(model_name.to_string()));
        }

        let model_dir = self.models_root.join(model_name);
        if !model_dir.is_dir() {
            return Err(ModelResolveError::ModelNotFound(model_dir));
        }

        let mut weights = Vec::new();
        let mut indexes = Vec::new();

        let entries = std::fs::read_dir(&model_dir).map_err(|e| read_failed(&model_dir, e))?;
        for entry in entries {
            let path = entry.map_err(|e| read_failed(&model_dir, e))?.path();
            if !path.is_file() {
                continue;
            }
            match path.extension().and_then(|ext| ext.to_str()) {
                Some(WEIGHTS_EXTENSION) => weights.push(path),
                Some(INDEX_EXTENSION) => indexes.push(path),
                _ => {}
            }
        }

        let weights_path = pick_first(model_name, "weights", weights);
        let index_path = pick_first(model_name, "index", indexes);

        if weights_path.is_none() {
            tracing::warn!(
                model = model_name,
                dir = %model_dir.display(),
                "No weights file found in model directory"
            );
        }

        Ok(ModelBundle::new(
            weights_path.unwrap_or_default(),
            index_path.unwrap_or_default(),
        ))
    }

    /// Resolves every model directory under the root, skipping ones that fail.
    pub fn list_models(&self) -> Result<Vec<(String, ModelBundle)>, ModelResolveError> {
        if !self.models_root.is_dir() {
            return Err(ModelResolveError::ModelNotFound(self.models_root.clone()));
        }

        let mut names = Vec::new();
        let entries =
            std::fs::read_dir(&self.models_root).map_err(|e| read_failed(&self.models_root, e))?;
        for entry in entries {
            let path = entry.map_err(|e| read_failed(&self.models_root, e))?.path();
            if path.is_dir() {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();

        let mut models = Vec::with_capacity(names.len());
        for name in names {
            match self.resolve(&name) {
                Ok(bundle) => models.push((name, bundle)),
                Err(e) => tracing::warn!(model = %name, error = %e, "Skipping model directory"),
            }
        }

        Ok(models)
    }
}

fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

fn pick_first(model_name: &str, kind: &str, mut candidates: Vec<PathBuf>) -> Option<PathBuf> {
    candidates.sort();
    if candidates.len() > 1 {
        tracing::warn!(
            model = model_name,
            kind,
            chosen = %candidates[0].display(),
            ignored = ?&candidates[1..],
            "Multiple candidate files found, using the first in name order"
        );
    }
    candidates.into_iter().next()
}

fn read_failed(dir: &Path, e: io::Error) -> ModelResolveError {
    ModelResolveError::ReadFailed(format!("{}: {}", dir.display(), e))
}

#[derive(Debug, thiserror::Error)]
pub enum ModelResolveError {
    #[error("model directory not found: {}", .0.display())]
    ModelNotFound(PathBuf),
    #[error("invalid model name: {0}")]
    InvalidName(String),
    #[error("failed to read model directory: {0}")]
    ReadFailed(String),
}
