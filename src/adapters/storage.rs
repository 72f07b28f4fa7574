use crate::core::AssetSource;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Assets read from a directory on local disk.
#[derive(Debug, Clone)]
pub struct LocalAssets {
    base_path: PathBuf,
}

impl LocalAssets {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl AssetSource for LocalAssets {
    async fn read_asset(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        // the file handle is closed when the read returns
        let data = tokio::fs::read(&full_path).await?;
        Ok(data)
    }
}
