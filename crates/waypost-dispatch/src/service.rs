use std::sync::Arc;

use crate::dispatcher::Dispatcher;
use async_trait::async_trait;
use tracing::{debug, trace};
use waypost_core::{ContentTypeId, SettingsStore};

/// Service for resolving single-item views to redirect targets.
///
/// Loads the redirect map fresh from the settings store on every call,
/// so there is no in-process state to go stale between admin saves.
#[derive(Debug, Clone)]
pub struct DispatcherService<S> {
    store: Arc<S>,
}

impl<S: SettingsStore> DispatcherService<S> {
    /// Creates a new DispatcherService over the given settings store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new DispatcherService sharing an existing store handle.
    pub fn from_arc(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Resolves a content type to its configured redirect target.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(target))` - A non-empty target is configured
    /// * `Ok(None)` - No entry, or the entry is an empty string
    /// * `Err(e)` - The settings store failed
    pub async fn resolve(&self, content_type: &ContentTypeId) -> crate::Result<Option<String>> {
        Dispatcher::resolve(self, content_type).await
    }
}

#[async_trait]
impl<S: SettingsStore> Dispatcher for DispatcherService<S> {
    async fn resolve(&self, content_type: &ContentTypeId) -> crate::Result<Option<String>> {
        trace!(content_type = %content_type, "resolving redirect target");

        let map = self.store.load().await?;

        match map.target(content_type) {
            Some(target) if !target.is_empty() => {
                debug!(content_type = %content_type, target = %target, "redirect target found");
                Ok(Some(target.to_owned()))
            }
            Some(_) => {
                // Empty target means "configured row left blank" - no redirect.
                trace!(content_type = %content_type, "empty redirect target, skipping");
                Ok(None)
            }
            None => {
                trace!(content_type = %content_type, "no redirect configured");
                Ok(None)
            }
        }
    }
}
