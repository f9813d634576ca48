use crate::domain::entities::Notification;
use crate::domain::errors::DomainResult;

/// Repository for notification operations
#[async_trait::async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Queue a notification for delivery
    async fn enqueue_notification(&self, notification: &Notification) -> DomainResult<()>;

    /// List notifications for a user, newest first
    async fn list_notifications(&self, user_id: &str) -> DomainResult<Vec<Notification>>;
}
