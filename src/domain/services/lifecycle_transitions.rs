use crate::domain::entities::{AuditAction, ContentKind, ContentStatus};
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The only status-changing operations the lifecycle exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleAction {
    Approve,
    Reject,
    Publish,
    Unpublish,
}

impl LifecycleAction {
    /// Status the item must currently hold
    pub fn required_status(&self) -> ContentStatus {
        match self {
            LifecycleAction::Approve | LifecycleAction::Reject => ContentStatus::Pending,
            LifecycleAction::Publish => ContentStatus::Approved,
            LifecycleAction::Unpublish => ContentStatus::Published,
        }
    }

    pub fn target_status(&self) -> ContentStatus {
        match self {
            LifecycleAction::Approve => ContentStatus::Approved,
            LifecycleAction::Reject => ContentStatus::ChangesRequested,
            LifecycleAction::Publish => ContentStatus::Published,
            LifecycleAction::Unpublish => ContentStatus::Approved,
        }
    }

    pub fn audit_action(&self) -> AuditAction {
        match self {
            LifecycleAction::Approve => AuditAction::Approved,
            LifecycleAction::Reject => AuditAction::Rejected,
            LifecycleAction::Publish => AuditAction::Published,
            LifecycleAction::Unpublish => AuditAction::Unpublished,
        }
    }

    /// Whether the content owner hears about this action
    pub fn notifies_owner(&self, kind: ContentKind) -> bool {
        match self {
            LifecycleAction::Approve => {
                matches!(kind, ContentKind::Quiz | ContentKind::Assignment)
            }
            LifecycleAction::Reject => true,
            LifecycleAction::Publish | LifecycleAction::Unpublish => false,
        }
    }

    fn past_tense(&self) -> &'static str {
        match self {
            LifecycleAction::Approve => "approved",
            LifecycleAction::Reject => "rejected",
            LifecycleAction::Publish => "published",
            LifecycleAction::Unpublish => "unpublished",
        }
    }
}

impl fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleAction::Approve => "approve",
            LifecycleAction::Reject => "reject",
            LifecycleAction::Publish => "publish",
            LifecycleAction::Unpublish => "unpublish",
        };
        write!(f, "{}", name)
    }
}

/// Validates the source status for `action` and returns the status to write
pub fn validate_transition(
    action: LifecycleAction,
    kind: ContentKind,
    current: ContentStatus,
) -> DomainResult<ContentStatus> {
    let required = action.required_status();
    if current != required {
        return Err(DomainError::InvalidStatusTransition(format!(
            "Only {} {} items can be {} (current status: {})",
            required,
            kind,
            action.past_tense(),
            current
        )));
    }
    Ok(action.target_status())
}
