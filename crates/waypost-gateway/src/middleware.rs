use axum::extract::{Path, Request, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};
use waypost_core::ContentTypeId;

use crate::error::AppError;
use crate::state::AppState;

/// Redirect dispatch, layered on the single-item content routes.
///
/// Runs before the view renders: if the requested content type is
/// registered and has a non-empty configured target, responds with a
/// fixed 301 and the stored target verbatim in `Location`, terminating
/// further handling. In every other case the request falls through to
/// the normal render path. A stored target that is not a valid header
/// value is logged and treated as if no redirect were configured.
pub async fn redirect_single_views(
    State(state): State<AppState>,
    Path((content_type, _slug)): Path<(String, String)>,
    request: Request,
    next: Next,
) -> Response {
    let type_id = ContentTypeId::new_unchecked(content_type);

    // A request can only be a single-item view of a registered type.
    // Stale map entries for unregistered types never match.
    if !state.registry().contains(&type_id) {
        return next.run(request).await;
    }

    let target = match state.dispatcher().resolve(&type_id).await {
        Ok(target) => target,
        Err(e) => return AppError::from(e).into_response(),
    };

    match target {
        Some(target) => match HeaderValue::from_str(&target) {
            Ok(location) => {
                debug!(content_type = %type_id, target = %target, "redirecting single view");
                let mut response = StatusCode::MOVED_PERMANENTLY.into_response();
                response.headers_mut().insert(header::LOCATION, location);
                response
            }
            Err(_) => {
                warn!(
                    content_type = %type_id,
                    "configured redirect target is not a valid header value, skipping"
                );
                next.run(request).await
            }
        },
        None => next.run(request).await,
    }
}
