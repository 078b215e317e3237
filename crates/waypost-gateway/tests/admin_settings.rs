use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use waypost_core::{
    ContentTypeDescriptor, ContentTypeId, ContentTypeRegistry, RedirectMap, SettingsStore,
    EXCLUDED_TYPES,
};
use waypost_gateway::{App, AppState};
use waypost_store::InMemorySettingsStore;

fn id(s: &str) -> ContentTypeId {
    ContentTypeId::new_unchecked(s)
}

fn descriptor(type_id: &str, label: &str, builtin: bool) -> ContentTypeDescriptor {
    ContentTypeDescriptor::builder()
        .id(id(type_id))
        .label(label)
        .builtin(builtin)
        .build()
}

/// Registry with built-ins, two configurable types, and every
/// excluded type registered as a plain non-builtin type.
fn registry() -> ContentTypeRegistry {
    let mut registry = ContentTypeRegistry::new();
    registry.register(descriptor("page", "Pages", true)).unwrap();
    registry.register(descriptor("event", "Events", false)).unwrap();
    registry.register(descriptor("faq", "FAQs", false)).unwrap();
    for excluded in EXCLUDED_TYPES {
        registry
            .register(descriptor(excluded, "Internal", false))
            .unwrap();
    }
    registry
}

fn app_with_store(store: Arc<InMemorySettingsStore>) -> Router {
    App::router(AppState::from_store(store, Arc::new(registry())))
}

async fn get_body(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_form(app: &Router, body: &str) -> axum::response::Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/admin/redirects")
                .header(
                    header::CONTENT_TYPE,
                    "application/x-www-form-urlencoded",
                )
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn form_lists_configurable_types_only() {
    let store = Arc::new(InMemorySettingsStore::new());
    let app = app_with_store(store);

    let (status, body) = get_body(&app, "/admin/redirects").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"name="map[event]""#));
    assert!(body.contains(r#"name="map[faq]""#));
    assert!(!body.contains(r#"name="map[page]""#));
    assert!(!body.contains(r#"name="map[post]""#));
    for excluded in EXCLUDED_TYPES {
        assert!(
            !body.contains(&format!(r#"name="map[{excluded}]""#)),
            "excluded type {excluded} must never render as a form row"
        );
    }
}

#[tokio::test]
async fn form_prefills_saved_targets() {
    let mut map = RedirectMap::new();
    map.set(id("event"), "https://example.com/events");
    let store = Arc::new(InMemorySettingsStore::with_map(map));
    let app = app_with_store(store);

    let (_, body) = get_body(&app, "/admin/redirects").await;

    assert!(body.contains(r#"value="https://example.com/events""#));
}

#[tokio::test]
async fn save_replaces_the_whole_map_and_redirects_back() {
    let store = Arc::new(InMemorySettingsStore::new());
    let app = app_with_store(Arc::clone(&store));

    let response = post_form(
        &app,
        "map%5Bevent%5D=https%3A%2F%2Fexample.com%2Fevents&map%5Bfaq%5D=",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "/admin/redirects?saved=true"
    );

    let saved = store.load().await.unwrap();
    assert_eq!(saved.target(&id("event")), Some("https://example.com/events"));
    assert_eq!(saved.target(&id("faq")), Some(""));
    assert_eq!(saved.len(), 2);
}

#[tokio::test]
async fn save_drops_entries_missing_from_the_submission() {
    let mut previous = RedirectMap::new();
    previous.set(id("event"), "https://example.com/events");
    previous.set(id("faq"), "https://example.com/faq");
    let store = Arc::new(InMemorySettingsStore::with_map(previous));
    let app = app_with_store(Arc::clone(&store));

    post_form(&app, "map%5Bevent%5D=https%3A%2F%2Fexample.com%2Fnew").await;

    let saved = store.load().await.unwrap();
    assert_eq!(saved.target(&id("event")), Some("https://example.com/new"));
    assert_eq!(saved.target(&id("faq")), None);
    assert_eq!(saved.len(), 1);
}

#[tokio::test]
async fn saved_notice_shows_after_the_redirect() {
    let store = Arc::new(InMemorySettingsStore::new());
    let app = app_with_store(store);

    let (_, without_notice) = get_body(&app, "/admin/redirects").await;
    assert!(!without_notice.contains("Settings saved."));

    let (_, with_notice) = get_body(&app, "/admin/redirects?saved=true").await;
    assert!(with_notice.contains("Settings saved."));
}

#[tokio::test]
async fn saved_settings_drive_the_next_request() {
    let store = Arc::new(InMemorySettingsStore::new());
    let app = app_with_store(store);

    // No redirect before the save.
    let before = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/event/summer-fest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(before.status(), StatusCode::OK);

    post_form(&app, "map%5Bevent%5D=https%3A%2F%2Fexample.com%2Fevents").await;

    let after = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/event/summer-fest")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(after.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        after.headers().get(header::LOCATION).unwrap(),
        "https://example.com/events"
    );
}
