//! Content type registry bootstrap.
//!
//! The registry is built once during startup: the built-in types
//! first, then any types declared in an optional JSON file, and handed
//! to [`AppState`](crate::AppState) as an explicit dependency.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use waypost_core::{ContentTypeDescriptor, ContentTypeId, ContentTypeRegistry};

/// Content types every deployment ships with. Never configurable
/// through the admin form.
pub const BUILTIN_TYPES: [(&str, &str); 2] = [("post", "Posts"), ("page", "Pages")];

#[derive(Debug, Deserialize)]
struct ContentTypeEntry {
    id: String,
    label: String,
    #[serde(default)]
    builtin: bool,
}

/// Builds the registry from the built-ins plus an optional JSON file
/// of `{ "id", "label", "builtin"? }` entries.
pub fn bootstrap_registry(content_types: Option<&Path>) -> anyhow::Result<ContentTypeRegistry> {
    let mut registry = ContentTypeRegistry::new();

    for (id, label) in BUILTIN_TYPES {
        registry.register(
            ContentTypeDescriptor::builder()
                .id(ContentTypeId::new(id)?)
                .label(label)
                .builtin(true)
                .build(),
        )?;
    }

    if let Some(path) = content_types {
        let bytes = std::fs::read(path)
            .with_context(|| format!("reading content types file {}", path.display()))?;
        let entries: Vec<ContentTypeEntry> = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing content types file {}", path.display()))?;

        for entry in entries {
            registry.register(
                ContentTypeDescriptor::builder()
                    .id(ContentTypeId::new(entry.id)?)
                    .label(entry.label)
                    .builtin(entry.builtin)
                    .build(),
            )?;
        }
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtins_only_when_no_file_is_given() {
        let registry = bootstrap_registry(None).unwrap();

        assert!(registry.contains(&ContentTypeId::new("post").unwrap()));
        assert!(registry.contains(&ContentTypeId::new("page").unwrap()));
        assert_eq!(registry.configurable().count(), 0);
    }

    #[test]
    fn loads_types_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{ "id": "event", "label": "Events" }},
                {{ "id": "faq", "label": "FAQs" }}
            ]"#
        )
        .unwrap();

        let registry = bootstrap_registry(Some(file.path())).unwrap();

        let ids: Vec<&str> = registry
            .configurable()
            .map(|descriptor| descriptor.id.as_str())
            .collect();
        assert_eq!(ids, vec!["event", "faq"]);
    }

    #[test]
    fn rejects_invalid_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": "Not Valid", "label": "Nope" }}]"#).unwrap();

        assert!(bootstrap_registry(Some(file.path())).is_err());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{ "id": "post", "label": "Posts Again" }}]"#).unwrap();

        assert!(bootstrap_registry(Some(file.path())).is_err());
    }
}
