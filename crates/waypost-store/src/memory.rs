use async_trait::async_trait;
use parking_lot::RwLock;
use waypost_core::settings::Result;
use waypost_core::{RedirectMap, SettingsStore};

/// In-memory implementation of the `SettingsStore` trait.
///
/// The settings value is a single small document, so a plain RwLock
/// over the whole map is enough: saves replace the document wholesale
/// and loads clone it.
#[derive(Debug, Default)]
pub struct InMemorySettingsStore {
    map: RwLock<RedirectMap>,
}

impl InMemorySettingsStore {
    /// Creates a new store with an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given map.
    pub fn with_map(map: RedirectMap) -> Self {
        Self {
            map: RwLock::new(map),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettingsStore {
    async fn load(&self) -> Result<RedirectMap> {
        Ok(self.map.read().clone())
    }

    async fn save(&self, map: RedirectMap) -> Result<()> {
        *self.map.write() = map;
        Ok(())
    }
}
