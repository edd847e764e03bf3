use std::path::{Path, PathBuf};

/// One file of the pretrained-asset manifest and where it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTarget {
    pub filename: String,
    pub destination: PathBuf,
}

impl AssetTarget {
    pub fn new(filename: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            destination: destination.into(),
        }
    }

    pub fn local_path(&self, root: &Path) -> PathBuf {
        root.join(&self.destination).join(&self.filename)
    }

    pub fn default_manifest() -> Vec<Self> {
        vec![
            Self::new("hubert_base.pt", "assets/hubert"),
            Self::new("rmvpe.pt", "assets/rmvpe"),
            Self::new("fcpe.pt", "assets/fcpe"),
            Self::new("tiny.pth", "torchcrepe/assets"),
            Self::new("full.pth", "torchcrepe/assets"),
        ]
    }
}
