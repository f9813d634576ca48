use crate::domain::entities::content::ContentKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification type representing the kind of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    ContentApproved,
    ContentRejected,
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::ContentApproved => "content_approved",
            NotificationType::ContentRejected => "content_rejected",
        }
    }
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content_approved" => Ok(NotificationType::ContentApproved),
            "content_rejected" => Ok(NotificationType::ContentRejected),
            other => Err(format!("Unknown notification type '{}'", other)),
        }
    }
}

/// Message queued for a content owner about a review outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub content_type: ContentKind,
    pub content_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
    pub is_read: bool,
    pub created_at: String, // RFC 3339
}

impl Notification {
    /// Create a new approval notification
    pub fn new_approval(
        user_id: String,
        content_type: ContentKind,
        content_id: String,
        content_title: &str,
        action_url: Option<String>,
        created_at: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            notification_type: NotificationType::ContentApproved,
            title: format!("{} approved", content_type.label()),
            message: format!(
                "Your {} \"{}\" has been approved",
                content_type.as_str(),
                content_title
            ),
            content_type,
            content_id,
            action_url,
            is_read: false,
            created_at,
        }
    }

    /// Create a new rejection notification carrying the reviewer's reason
    pub fn new_rejection(
        user_id: String,
        content_type: ContentKind,
        content_id: String,
        content_title: &str,
        reason: &str,
        created_at: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            notification_type: NotificationType::ContentRejected,
            title: format!("{} needs changes", content_type.label()),
            message: format!(
                "Your {} \"{}\" was sent back for changes: {}",
                content_type.as_str(),
                content_title,
                reason
            ),
            content_type,
            content_id,
            action_url: None,
            is_read: false,
            created_at,
        }
    }
}
