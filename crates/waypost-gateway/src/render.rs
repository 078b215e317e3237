//! Server-rendered HTML pages.
//!
//! All dynamic content is HTML-escaped by maud.

use maud::{html, Markup, DOCTYPE};
use waypost_core::{ContentTypeDescriptor, ContentTypeRegistry, RedirectMap};

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                (body)
            }
        }
    }
}

/// The admin settings form: one row per configurable content type.
///
/// Built-in and excluded content types are filtered out by the
/// registry before this is called with them, so they never render.
pub fn admin_page(registry: &ContentTypeRegistry, map: &RedirectMap, saved: bool) -> Markup {
    layout(
        "Single Redirects",
        html! {
            h1 { "Single Redirects" }
            @if saved {
                p class="notice" { "Settings saved." }
            }
            p {
                "Set up the desired redirection for the single view of each \
                 registered content type. Leave a field blank to disable the \
                 redirection for that type."
            }
            form method="post" action="/admin/redirects" {
                table {
                    tr {
                        th { "Content type" }
                        th { "Redirect URL" }
                    }
                    @for descriptor in registry.configurable() {
                        (admin_row(descriptor, map.target(&descriptor.id).unwrap_or("")))
                    }
                }
                button type="submit" { "Save changes" }
            }
        },
    )
}

fn admin_row(descriptor: &ContentTypeDescriptor, target: &str) -> Markup {
    let input_id = format!("{}-redirect", descriptor.id);
    html! {
        tr {
            td {
                label for=(input_id) { (descriptor.label) }
            }
            td {
                input type="url" id=(input_id) name=(format!("map[{}]", descriptor.id)) value=(target);
            }
        }
    }
}

/// The normal (non-redirected) single-item view.
pub fn single_item_page(descriptor: &ContentTypeDescriptor, slug: &str) -> Markup {
    layout(
        &descriptor.label,
        html! {
            article {
                h1 { (descriptor.label) ": " (slug) }
                p { "Single view of " code { (descriptor.id) } " item " code { (slug) } "." }
            }
        },
    )
}

pub fn not_found_page() -> Markup {
    layout(
        "Not found",
        html! {
            h1 { "Not found" }
            p { "No such content here." }
        },
    )
}
