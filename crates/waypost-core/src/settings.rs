use crate::error::StoreError;
use crate::redirect_map::RedirectMap;
use async_trait::async_trait;

/// Result type for settings store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence for the redirect map.
///
/// The map is a single document: `load` returns the whole thing (an
/// empty map if nothing has ever been saved) and `save` replaces the
/// whole thing. There is no partial-update API and no value
/// validation; concurrent saves are last-write-wins.
#[async_trait]
pub trait SettingsStore: Send + Sync + 'static {
    /// Returns the currently persisted map, or an empty map if none
    /// has ever been saved.
    async fn load(&self) -> Result<RedirectMap>;

    /// Overwrites the entire persisted map.
    async fn save(&self, map: RedirectMap) -> Result<()>;
}
