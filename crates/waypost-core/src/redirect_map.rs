use crate::content_type::ContentTypeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The persisted mapping from content type to redirect target.
///
/// Targets are stored verbatim: no URL validation, no normalization.
/// An empty string means "no redirect configured" and entries for
/// unregistered content types are tolerated; they simply never match.
/// The map is always replaced wholesale on save, never patched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectMap {
    entries: BTreeMap<ContentTypeId, String>,
}

impl RedirectMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw stored target for a content type, if any.
    ///
    /// This includes empty strings; callers that care about whether a
    /// redirect should actually fire must skip empty targets.
    pub fn target(&self, id: &ContentTypeId) -> Option<&str> {
        self.entries.get(id).map(String::as_str)
    }

    /// Sets the target for a content type, replacing any previous value.
    pub fn set(&mut self, id: ContentTypeId, target: impl Into<String>) {
        self.entries.insert(id, target.into());
    }

    /// Iterates over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&ContentTypeId, &str)> {
        self.entries.iter().map(|(id, target)| (id, target.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(ContentTypeId, String)> for RedirectMap {
    fn from_iter<I: IntoIterator<Item = (ContentTypeId, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
