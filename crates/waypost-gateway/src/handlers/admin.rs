use axum::extract::{Query, RawForm, State};
use axum::response::Redirect;
use maud::Markup;
use serde::Deserialize;
use tracing::debug;
use waypost_core::{ContentTypeId, RedirectMap};

use crate::error::Result;
use crate::render;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AdminQuery {
    #[serde(default)]
    saved: bool,
}

/// Renders the settings form from the currently persisted map.
pub async fn show_redirects_handler(
    State(state): State<AppState>,
    Query(query): Query<AdminQuery>,
) -> Result<Markup> {
    let map = state.store().load().await?;
    Ok(render::admin_page(state.registry(), &map, query.saved))
}

/// Replaces the entire persisted map with the submitted form fields,
/// then sends the browser back to the form with the saved notice.
pub async fn save_redirects_handler(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> Result<Redirect> {
    let map = parse_redirect_form(&body);
    debug!(entries = map.len(), "saving submitted redirect map");

    state.store().save(map).await?;
    Ok(Redirect::to("/admin/redirects?saved=true"))
}

/// Builds the replacement map from `map[<id>]` form fields.
///
/// Values are taken verbatim, empty strings included; fields outside
/// the `map[...]` namespace are ignored. Keys are not checked against
/// the registry, matching the whole-map replacement contract.
fn parse_redirect_form(body: &[u8]) -> RedirectMap {
    form_urlencoded::parse(body)
        .filter_map(|(key, value)| {
            let id = key.strip_prefix("map[")?.strip_suffix(']')?;
            Some((ContentTypeId::new_unchecked(id), value.into_owned()))
        })
        .collect()
}
