use crate::domain::entities::content::{ContentKind, ContentStatus};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Approved,
    Rejected,
    Published,
    Unpublished,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Approved => "approved",
            AuditAction::Rejected => "rejected",
            AuditAction::Published => "published",
            AuditAction::Unpublished => "unpublished",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(AuditAction::Approved),
            "rejected" => Ok(AuditAction::Rejected),
            "published" => Ok(AuditAction::Published),
            "unpublished" => Ok(AuditAction::Unpublished),
            other => Err(format!("Unknown audit action '{}'", other)),
        }
    }
}

/// Immutable record of a status-changing action on a content item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: String,
    pub content_type: ContentKind,
    pub content_id: String,
    pub action: AuditAction,
    pub from_status: ContentStatus,
    pub to_status: ContentStatus,
    pub performed_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: String, // RFC 3339
}

impl AuditLogEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        content_type: ContentKind,
        content_id: String,
        action: AuditAction,
        from_status: ContentStatus,
        to_status: ContentStatus,
        performed_by: String,
        comment: Option<String>,
        created_at: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content_type,
            content_id,
            action,
            from_status,
            to_status,
            performed_by,
            comment,
            created_at,
        }
    }
}
