//! Redirect dispatch for the Waypost redirect service.
//!
//! This crate decides, for a given content type, whether a single-item
//! view of that type should be redirected and where to. The
//! [`DispatcherService`] re-reads the settings store on every call, so
//! admin saves take effect on the next request with no cache to
//! invalidate.

pub mod dispatcher;
pub mod error;
pub mod service;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, Result};
pub use service::DispatcherService;
