use crate::content_type::{ContentTypeDescriptor, ContentTypeId};
use crate::error::{CoreError, Result};

/// Content types that must never appear as configurable rows in the
/// admin form, regardless of registration state. These are internal
/// bookkeeping types registered by bundled extensions.
pub const EXCLUDED_TYPES: [&str; 3] = ["form_definition", "form_field", "reusable_block"];

/// The registry of content types known to the host.
///
/// The gateway builds this once at startup and passes it to the admin
/// surface explicitly. The dispatcher never consults it: redirect
/// lookup goes by identifier alone, so entries for types missing from
/// the registry are harmless.
#[derive(Debug, Clone, Default)]
pub struct ContentTypeRegistry {
    types: Vec<ContentTypeDescriptor>,
}

impl ContentTypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a content type. Registering an id twice is an error.
    pub fn register(&mut self, descriptor: ContentTypeDescriptor) -> Result<()> {
        if self.contains(&descriptor.id) {
            return Err(CoreError::AlreadyRegistered(descriptor.id.to_string()));
        }
        self.types.push(descriptor);
        Ok(())
    }

    /// Looks up a content type by id.
    pub fn get(&self, id: &ContentTypeId) -> Option<&ContentTypeDescriptor> {
        self.types.iter().find(|descriptor| &descriptor.id == id)
    }

    pub fn contains(&self, id: &ContentTypeId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over all registered content types.
    pub fn iter(&self) -> impl Iterator<Item = &ContentTypeDescriptor> {
        self.types.iter()
    }

    /// The content types eligible for redirect configuration: every
    /// registered non-builtin type whose id is not in [`EXCLUDED_TYPES`].
    pub fn configurable(&self) -> impl Iterator<Item = &ContentTypeDescriptor> {
        self.types
            .iter()
            .filter(|descriptor| !descriptor.builtin)
            .filter(|descriptor| !EXCLUDED_TYPES.contains(&descriptor.id.as_str()))
    }
}
