//! HTTP gateway for the Waypost redirect service.
//!
//! Serves single-item content views with a redirect middleware layered
//! in front of them, the admin settings form, and a health endpoint.
//! All dependencies (settings store, content type registry, dispatcher)
//! are passed in explicitly through [`AppState`]; nothing is wired up
//! through globals.

pub mod app;
pub mod cli;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod registry;
pub mod render;
pub mod state;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
