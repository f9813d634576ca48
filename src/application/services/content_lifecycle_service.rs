use crate::domain::entities::{
    AuditLogEntry, ContentItem, ContentKind, ContentStatus, Notification,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{AuditLogRepository, Clock, ContentRepository, NotificationRepository};
use crate::domain::services::status_hierarchy;
use crate::domain::services::{validate_transition, LifecycleAction};
use crate::infrastructure::observability::{CONTENT_TRANSITIONS_TOTAL, SIDE_EFFECT_FAILURES_TOTAL};
use serde::Serialize;
use std::sync::Arc;

/// Result of a successful lifecycle transition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitionOutcome {
    pub content_type: ContentKind,
    pub content_id: String,
    pub from_status: ContentStatus,
    pub to_status: ContentStatus,
    pub updated_at: String,
}

#[derive(Clone)]
pub struct ContentLifecycleService {
    content_repo: Arc<dyn ContentRepository>,
    audit_repo: Arc<dyn AuditLogRepository>,
    notification_repo: Arc<dyn NotificationRepository>,
    clock: Arc<dyn Clock>,
    action_url_base: String,
}

impl ContentLifecycleService {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        audit_repo: Arc<dyn AuditLogRepository>,
        notification_repo: Arc<dyn NotificationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            content_repo,
            audit_repo,
            notification_repo,
            clock,
            action_url_base: String::new(),
        }
    }

    /// Prefix for the action URLs placed on approval notifications
    pub fn with_action_url_base(mut self, base: impl Into<String>) -> Self {
        self.action_url_base = base.into();
        self
    }

    /// pending -> approved
    #[tracing::instrument(skip(self))]
    pub async fn approve(
        &self,
        kind: ContentKind,
        content_id: &str,
        performed_by: &str,
        comment: Option<String>,
    ) -> DomainResult<TransitionOutcome> {
        self.transition(LifecycleAction::Approve, kind, content_id, performed_by, comment)
            .await
    }

    /// pending -> changes_requested. The reason is recorded verbatim.
    #[tracing::instrument(skip(self))]
    pub async fn reject(
        &self,
        kind: ContentKind,
        content_id: &str,
        performed_by: &str,
        reason: &str,
    ) -> DomainResult<TransitionOutcome> {
        if reason.trim().is_empty() {
            return Err(DomainError::ValidationFailure(
                "A reason is required to reject content".to_string(),
            ));
        }

        self.transition(
            LifecycleAction::Reject,
            kind,
            content_id,
            performed_by,
            Some(reason.to_string()),
        )
        .await
    }

    /// approved -> published
    #[tracing::instrument(skip(self))]
    pub async fn publish(
        &self,
        kind: ContentKind,
        content_id: &str,
        performed_by: &str,
        comment: Option<String>,
    ) -> DomainResult<TransitionOutcome> {
        self.transition(LifecycleAction::Publish, kind, content_id, performed_by, comment)
            .await
    }

    /// published -> approved
    #[tracing::instrument(skip(self))]
    pub async fn unpublish(
        &self,
        kind: ContentKind,
        content_id: &str,
        performed_by: &str,
        comment: Option<String>,
    ) -> DomainResult<TransitionOutcome> {
        self.transition(LifecycleAction::Unpublish, kind, content_id, performed_by, comment)
            .await
    }

    /// Audit trail of a content item, oldest first
    pub async fn content_history(
        &self,
        kind: ContentKind,
        content_id: &str,
    ) -> DomainResult<Vec<AuditLogEntry>> {
        self.load(kind, content_id).await?;
        self.audit_repo.list_audit_entries(kind, content_id).await
    }

    async fn transition(
        &self,
        action: LifecycleAction,
        kind: ContentKind,
        content_id: &str,
        performed_by: &str,
        comment: Option<String>,
    ) -> DomainResult<TransitionOutcome> {
        let item = self.load(kind, content_id).await?;
        let from_status = item.status();

        let to_status = validate_transition(action, kind, from_status).map_err(|e| {
            tracing::warn!("Refusing to {} {} {}: {}", action, kind, content_id, e);
            e
        })?;

        self.check_hierarchy(action, &item, to_status).await?;

        let now = self.clock.now_rfc3339();
        let applied = self
            .content_repo
            .update_content_status(kind, content_id, from_status, to_status, &now)
            .await?;

        if !applied {
            return Err(DomainError::InvalidStatusTransition(format!(
                "{} {} changed status concurrently; expected {}",
                kind.label(),
                content_id,
                from_status
            )));
        }

        tracing::info!(
            "{} {} moved from {} to {} by {}",
            kind.label(),
            content_id,
            from_status,
            to_status,
            performed_by
        );
        metrics::counter!(
            CONTENT_TRANSITIONS_TOTAL,
            "action" => action.to_string(),
            "content_type" => kind.as_str()
        )
        .increment(1);

        let entry = AuditLogEntry::new(
            kind,
            content_id.to_string(),
            action.audit_action(),
            from_status,
            to_status,
            performed_by.to_string(),
            comment.clone(),
            now.clone(),
        );
        if let Err(e) = self.audit_repo.append_audit_entry(&entry).await {
            record_side_effect_failure("audit", kind, content_id, &e);
        }

        if action.notifies_owner(kind) {
            let notification = self.build_notification(action, &item, comment.as_deref(), &now);
            if let Err(e) = self
                .notification_repo
                .enqueue_notification(&notification)
                .await
            {
                record_side_effect_failure("notification", kind, content_id, &e);
            }
        }

        Ok(TransitionOutcome {
            content_type: kind,
            content_id: content_id.to_string(),
            from_status,
            to_status,
            updated_at: now,
        })
    }

    async fn load(&self, kind: ContentKind, content_id: &str) -> DomainResult<ContentItem> {
        self.content_repo
            .get_content(kind, content_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("{} {}", kind.label(), content_id)))
    }

    /// Modules are checked against their lessons on approve; lessons against
    /// their module on approve and publish.
    async fn check_hierarchy(
        &self,
        action: LifecycleAction,
        item: &ContentItem,
        to_status: ContentStatus,
    ) -> DomainResult<()> {
        match (action, item) {
            (LifecycleAction::Approve, ContentItem::Module(module)) => {
                let lessons = self.content_repo.list_module_lessons(&module.meta.id).await?;
                status_hierarchy::validate_module_status(to_status, &lessons, &module.meta.title)
            }
            (LifecycleAction::Approve | LifecycleAction::Publish, ContentItem::Lesson(lesson)) => {
                let module = self.load(ContentKind::Module, &lesson.module_id).await?;
                status_hierarchy::validate_lesson_status(
                    to_status,
                    module.status(),
                    &lesson.meta.title,
                )
            }
            _ => Ok(()),
        }
    }

    fn build_notification(
        &self,
        action: LifecycleAction,
        item: &ContentItem,
        reason: Option<&str>,
        now: &str,
    ) -> Notification {
        let kind = item.kind();
        match action {
            LifecycleAction::Reject => Notification::new_rejection(
                item.created_by().to_string(),
                kind,
                item.id().to_string(),
                item.title(),
                reason.unwrap_or_default(),
                now.to_string(),
            ),
            _ => {
                let action_url = matches!(kind, ContentKind::Quiz | ContentKind::Assignment)
                    .then(|| self.action_url(kind, item.id()));
                Notification::new_approval(
                    item.created_by().to_string(),
                    kind,
                    item.id().to_string(),
                    item.title(),
                    action_url,
                    now.to_string(),
                )
            }
        }
    }

    fn action_url(&self, kind: ContentKind, content_id: &str) -> String {
        format!(
            "{}/{}/{}",
            self.action_url_base.trim_end_matches('/'),
            kind.table(),
            content_id
        )
    }
}

/// Side effects run after the status write; their failure is logged, not returned
fn record_side_effect_failure(
    sink: &'static str,
    kind: ContentKind,
    content_id: &str,
    error: &DomainError,
) {
    tracing::error!(
        "Failed to write {} record for {} {}: {}",
        sink,
        kind,
        content_id,
        error
    );
    metrics::counter!(SIDE_EFFECT_FAILURES_TOTAL, "sink" => sink).increment(1);
}
