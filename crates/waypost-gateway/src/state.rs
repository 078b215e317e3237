use std::sync::Arc;

use waypost_core::{ContentTypeRegistry, SettingsStore};
use waypost_dispatch::{Dispatcher, DispatcherService};

/// Shared application state.
///
/// Built once at startup from explicitly constructed dependencies and
/// cloned into every handler. The registry is immutable after startup;
/// the store is re-read on every operation that needs it.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn SettingsStore>,
    registry: Arc<ContentTypeRegistry>,
    dispatcher: Arc<dyn Dispatcher>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        registry: Arc<ContentTypeRegistry>,
        dispatcher: Arc<dyn Dispatcher>,
    ) -> Self {
        Self {
            store,
            registry,
            dispatcher,
        }
    }

    /// Builds state from a concrete store, wiring the dispatcher over
    /// the same store handle.
    pub fn from_store<S: SettingsStore>(store: Arc<S>, registry: Arc<ContentTypeRegistry>) -> Self {
        let dispatcher = Arc::new(DispatcherService::from_arc(Arc::clone(&store)));
        Self::new(store, registry, dispatcher)
    }

    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }

    pub fn registry(&self) -> &ContentTypeRegistry {
        self.registry.as_ref()
    }

    pub fn dispatcher(&self) -> &dyn Dispatcher {
        self.dispatcher.as_ref()
    }
}
