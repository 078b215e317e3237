//! Settings store backends for the Waypost redirect service.
//!
//! Implementations of the [`SettingsStore`] trait from `waypost-core`:
//! an in-memory store for tests and ephemeral deployments, and a
//! JSON-file store for persistence across restarts.
//!
//! [`SettingsStore`]: waypost_core::SettingsStore

pub mod file;
pub mod memory;

pub use file::JsonFileSettingsStore;
pub use memory::InMemorySettingsStore;
