//! Core types and traits for the Waypost redirect service.
//!
//! This crate provides the shared vocabulary used by the settings
//! store backends, the redirect dispatcher, and the gateway: content
//! type identifiers, the registry of configurable content types, the
//! persisted redirect map, and the `SettingsStore` trait.

pub mod content_type;
pub mod error;
pub mod redirect_map;
pub mod registry;
pub mod settings;

pub use content_type::{ContentTypeDescriptor, ContentTypeId};
pub use error::{CoreError, StoreError};
pub use redirect_map::RedirectMap;
pub use registry::{ContentTypeRegistry, EXCLUDED_TYPES};
pub use settings::SettingsStore;
