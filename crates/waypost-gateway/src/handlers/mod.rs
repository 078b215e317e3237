pub mod admin;
pub mod content;
pub mod health;

pub use admin::{save_redirects_handler, show_redirects_handler};
pub use content::single_item_handler;
pub use health::health_handler;
