#![allow(dead_code)]
use coursedesk::domain::entities::{AuditLogEntry, ContentKind, Notification};
use coursedesk::domain::errors::{DomainError, DomainResult};
use coursedesk::domain::ports::{AuditLogRepository, NotificationRepository};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Audit sink that rejects every write and counts the attempts
#[derive(Default)]
pub struct FailingAuditLog {
    attempts: AtomicUsize,
}

impl FailingAuditLog {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AuditLogRepository for FailingAuditLog {
    async fn append_audit_entry(&self, _entry: &AuditLogEntry) -> DomainResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Storage("audit log unavailable".to_string()))
    }

    async fn list_audit_entries(
        &self,
        _content_type: ContentKind,
        _content_id: &str,
    ) -> DomainResult<Vec<AuditLogEntry>> {
        Ok(Vec::new())
    }
}

/// Notification sink that rejects every write and counts the attempts
#[derive(Default)]
pub struct FailingNotifications {
    attempts: AtomicUsize,
}

impl FailingNotifications {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl NotificationRepository for FailingNotifications {
    async fn enqueue_notification(&self, _notification: &Notification) -> DomainResult<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Storage("notification queue unavailable".to_string()))
    }

    async fn list_notifications(&self, _user_id: &str) -> DomainResult<Vec<Notification>> {
        Ok(Vec::new())
    }
}
