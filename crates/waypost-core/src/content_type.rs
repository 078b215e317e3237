use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use typed_builder::TypedBuilder;

/// A validated content type identifier.
///
/// Identifiers must be 1-32 characters long and contain only lowercase
/// ASCII alphanumeric characters, hyphens, or underscores.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeId(String);

const MAX_LENGTH: usize = 32;

impl ContentTypeId {
    /// Creates a new `ContentTypeId` after validating the input.
    ///
    /// Valid identifiers are 1-32 characters of `[a-z0-9_-]`.
    pub fn new(id: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Creates a `ContentTypeId` without validation.
    ///
    /// Use this for identifiers read back from storage or submitted
    /// forms: stale keys for content types that were later unregistered
    /// are tolerated and simply never match a request.
    pub fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(id: &str) -> std::result::Result<(), CoreError> {
        if id.is_empty() || id.len() > MAX_LENGTH {
            return Err(CoreError::InvalidContentTypeId(format!(
                "length must be between 1 and {}, got {}",
                MAX_LENGTH,
                id.len()
            )));
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        {
            return Err(CoreError::InvalidContentTypeId(format!(
                "must contain only lowercase alphanumeric characters, hyphens, or underscores: '{}'",
                id
            )));
        }

        Ok(())
    }
}

impl Display for ContentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A registered content type as reported by the host registry.
///
/// Read-only to the dispatcher; the admin surface uses the label and
/// the builtin flag to decide which rows to render.
#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct ContentTypeDescriptor {
    /// Unique identifier of the content type.
    pub id: ContentTypeId,
    /// Human-readable label shown in the admin form.
    #[builder(setter(into))]
    pub label: String,
    /// Built-in types are never configurable through the admin form.
    #[builder(default = false)]
    pub builtin: bool,
}
