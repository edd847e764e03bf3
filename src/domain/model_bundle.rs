use std::path::{Path, PathBuf};

/// Weights and optional similarity index of one model directory.
///
/// An empty `weights_path` means the directory held no weights file; callers
/// must check [`ModelBundle::weights`] before loading.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelBundle {
    pub weights_path: PathBuf,
    pub index_path: PathBuf,
}

impl ModelBundle {
    pub fn new(weights_path: PathBuf, index_path: PathBuf) -> Self {
        Self {
            weights_path,
            index_path,
        }
    }

    pub fn weights(&self) -> Option<&Path> {
        non_empty(&self.weights_path)
    }

    pub fn index(&self) -> Option<&Path> {
        non_empty(&self.index_path)
    }

    pub fn has_weights(&self) -> bool {
        self.weights().is_some()
    }
}

fn non_empty(path: &Path) -> Option<&Path> {
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}
