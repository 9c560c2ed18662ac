//! Deck sources - where the manifest and chapter datasets come from.

use std::future::Future;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::error::{LoadError, ManifestError};
use crate::domain::{ChapterData, Manifest};
use crate::paths;

/// Asynchronous access to the static chapter data.
///
/// Fetching is the only suspension point of a session; everything else
/// runs synchronously once the data is in hand.
pub trait DeckSource: Send + Sync {
    fn manifest(&self) -> impl Future<Output = Result<Manifest, ManifestError>> + Send;

    fn chapter(&self, file_key: &str) -> impl Future<Output = Result<ChapterData, LoadError>> + Send;
}

/// Reads `manifest.json` and chapter files from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirSource {
    data_dir: PathBuf,
}

impl DirSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }
}

impl DeckSource for DirSource {
    async fn manifest(&self) -> Result<Manifest, ManifestError> {
        let path = paths::manifest_path(&self.data_dir);
        let shown = path.display().to_string();

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ManifestError::NotFound(shown.clone()),
            _ => ManifestError::IoError(shown.clone(), e.to_string()),
        })?;

        let manifest = Manifest::from_json(&content)
            .map_err(|e| ManifestError::ParseError(shown.clone(), e.to_string()))?;

        tracing::debug!("Loaded manifest with {} chapters from {}", manifest.surahs.len(), shown);
        Ok(manifest)
    }

    async fn chapter(&self, file_key: &str) -> Result<ChapterData, LoadError> {
        let path = paths::chapter_path(&self.data_dir, file_key)
            .ok_or_else(|| LoadError::InvalidKey(file_key.to_string()))?;
        let shown = path.display().to_string();

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound(shown.clone()),
            _ => LoadError::IoError(shown.clone(), e.to_string()),
        })?;

        let data = ChapterData::from_json(&content)
            .map_err(|e| LoadError::ParseError(shown.clone(), e.to_string()))?;

        tracing::debug!("Loaded {} cards from {}", data.cards.len(), shown);
        Ok(data)
    }
}
