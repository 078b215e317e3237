use axum::extract::{Path, State};
use maud::Markup;
use tracing::trace;
use waypost_core::ContentTypeId;

use crate::error::{AppError, Result};
use crate::render;
use crate::state::AppState;

/// The normal render path for a single-item view. The redirect
/// middleware has already passed on this request by the time it
/// reaches here.
pub async fn single_item_handler(
    State(state): State<AppState>,
    Path((content_type, slug)): Path<(String, String)>,
) -> Result<Markup> {
    let type_id = ContentTypeId::new_unchecked(&content_type);

    let descriptor = state
        .registry()
        .get(&type_id)
        .ok_or(AppError::UnknownContentType(content_type))?;

    trace!(content_type = %type_id, slug = %slug, "rendering single view");
    Ok(render::single_item_page(descriptor, &slug))
}
