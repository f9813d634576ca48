use crate::domain::entities::{AuditLogEntry, ContentKind};
use crate::domain::errors::DomainResult;

/// Append-only audit trail of status changes
#[async_trait::async_trait]
pub trait AuditLogRepository: Send + Sync {
    async fn append_audit_entry(&self, entry: &AuditLogEntry) -> DomainResult<()>;

    /// Entries for one content item, oldest first
    async fn list_audit_entries(
        &self,
        content_type: ContentKind,
        content_id: &str,
    ) -> DomainResult<Vec<AuditLogEntry>>;
}
