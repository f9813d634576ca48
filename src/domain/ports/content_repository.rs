use crate::domain::entities::{ContentItem, ContentKind, ContentStatus, Lesson};
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait ContentRepository: Send + Sync {
    async fn get_content(&self, kind: ContentKind, id: &str) -> DomainResult<Option<ContentItem>>;

    /// Current child lessons of a module
    async fn list_module_lessons(&self, module_id: &str) -> DomainResult<Vec<Lesson>>;

    /// Compare-and-set status patch.
    ///
    /// Writes `status` and `updated_at` only if the stored status still equals
    /// `expected`. Returns `false` when nothing was written.
    async fn update_content_status(
        &self,
        kind: ContentKind,
        id: &str,
        expected: ContentStatus,
        status: ContentStatus,
        updated_at: &str,
    ) -> DomainResult<bool>;
}
