use async_trait::async_trait;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use waypost_core::settings::Result;
use waypost_core::{RedirectMap, SettingsStore, StoreError};

/// JSON-file implementation of the `SettingsStore` trait.
///
/// The whole redirect map is stored as one flat JSON object. A missing
/// file reads as an empty map. Saves go through a named temp file in
/// the same directory followed by a rename, so readers never observe a
/// partially written document.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not created until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for JsonFileSettingsStore {
    async fn load(&self) -> Result<RedirectMap> {
        trace!(path = %self.path.display(), "loading settings file");

        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "settings file absent, starting empty");
                return Ok(RedirectMap::new());
            }
            Err(e) => return Err(StoreError::Read(e.to_string())),
        };

        serde_json::from_slice(&bytes).map_err(|e| StoreError::InvalidData(e.to_string()))
    }

    async fn save(&self, map: RedirectMap) -> Result<()> {
        trace!(path = %self.path.display(), entries = map.len(), "saving settings file");

        let json = serde_json::to_vec_pretty(&map)
            .map_err(|e| StoreError::Write(e.to_string()))?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, &json))
            .await
            .map_err(|e| StoreError::Write(e.to_string()))??;

        debug!(path = %self.path.display(), entries = map.len(), "settings saved");
        Ok(())
    }
}

/// Writes `bytes` to a temp file next to `path`, then renames it over
/// `path` so the replacement is atomic from the reader's perspective.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| StoreError::Write(e.to_string()))?;
    tmp.write_all(bytes)
        .map_err(|e| StoreError::Write(e.to_string()))?;
    tmp.persist(path)
        .map_err(|e| StoreError::Write(e.to_string()))?;

    Ok(())
}
