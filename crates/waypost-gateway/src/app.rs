use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    health_handler, save_redirects_handler, show_redirects_handler, single_item_handler,
};
use crate::middleware::redirect_single_views;
use crate::state::AppState;

pub struct App {}

impl App {
    /// Wires the full route table against the given state.
    ///
    /// The redirect middleware is layered on the content routes only;
    /// admin and health traffic never goes through dispatch.
    pub fn router(state: AppState) -> Router {
        let content = Router::new()
            .route("/{content_type}/{slug}", get(single_item_handler))
            .layer(from_fn_with_state(state.clone(), redirect_single_views));

        Router::new()
            .route("/health", get(health_handler))
            .route(
                "/admin/redirects",
                get(show_redirects_handler).post(save_redirects_handler),
            )
            .merge(content)
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
