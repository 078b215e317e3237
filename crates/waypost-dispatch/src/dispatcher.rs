use crate::Result;
use async_trait::async_trait;
use waypost_core::ContentTypeId;

#[async_trait]
pub trait Dispatcher: Send + Sync + 'static {
    /// Resolves a content type to its configured redirect target.
    /// Returns `None` if no redirect is configured or the configured
    /// target is empty.
    async fn resolve(&self, content_type: &ContentTypeId) -> Result<Option<String>>;
}
