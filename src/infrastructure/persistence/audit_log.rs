use async_trait::async_trait;
use sqlx::Row;

use super::{optional_column, parse_column, Database};
use crate::domain::entities::{AuditLogEntry, ContentKind};
use crate::domain::errors::DomainResult;
use crate::domain::ports::AuditLogRepository;

#[async_trait]
impl AuditLogRepository for Database {
    async fn append_audit_entry(&self, entry: &AuditLogEntry) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO content_audit_log (id, content_type, content_id, action, from_status, to_status, performed_by, comment, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&entry.id)
        .bind(entry.content_type.as_str())
        .bind(&entry.content_id)
        .bind(entry.action.as_str())
        .bind(entry.from_status.as_str())
        .bind(entry.to_status.as_str())
        .bind(&entry.performed_by)
        .bind(entry.comment.clone())
        .bind(&entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_audit_entries(
        &self,
        content_type: ContentKind,
        content_id: &str,
    ) -> DomainResult<Vec<AuditLogEntry>> {
        let rows = sqlx::query(
            "SELECT id, content_type, content_id, action, from_status, to_status, performed_by, comment, created_at
             FROM content_audit_log
             WHERE content_type = ? AND content_id = ?
             ORDER BY created_at ASC, rowid ASC",
        )
        .bind(content_type.as_str())
        .bind(content_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DomainResult<AuditLogEntry> {
                Ok(AuditLogEntry {
                    id: row.try_get("id")?,
                    content_type: parse_column(row, "content_type")?,
                    content_id: row.try_get("content_id")?,
                    action: parse_column(row, "action")?,
                    from_status: parse_column(row, "from_status")?,
                    to_status: parse_column(row, "to_status")?,
                    performed_by: row.try_get("performed_by")?,
                    comment: optional_column(row, "comment")?,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }
}
