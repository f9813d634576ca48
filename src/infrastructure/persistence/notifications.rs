use async_trait::async_trait;
use sqlx::Row;

use super::{optional_column, parse_column, Database};
use crate::domain::entities::Notification;
use crate::domain::errors::DomainResult;
use crate::domain::ports::NotificationRepository;

#[async_trait]
impl NotificationRepository for Database {
    async fn enqueue_notification(&self, notification: &Notification) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO notifications (id, user_id, type, title, message, content_type, content_id, action_url, is_read, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&notification.id)
        .bind(&notification.user_id)
        .bind(notification.notification_type.as_str())
        .bind(&notification.title)
        .bind(&notification.message)
        .bind(notification.content_type.as_str())
        .bind(&notification.content_id)
        .bind(notification.action_url.clone())
        .bind(if notification.is_read { 1_i64 } else { 0_i64 })
        .bind(&notification.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_notifications(&self, user_id: &str) -> DomainResult<Vec<Notification>> {
        let rows = sqlx::query(
            "SELECT id, user_id, type, title, message, content_type, content_id, action_url, is_read, created_at
             FROM notifications
             WHERE user_id = ?
             ORDER BY created_at DESC, rowid DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DomainResult<Notification> {
                let is_read: i64 = row.try_get("is_read")?;
                Ok(Notification {
                    id: row.try_get("id")?,
                    user_id: row.try_get("user_id")?,
                    notification_type: parse_column(row, "type")?,
                    title: row.try_get("title")?,
                    message: row.try_get("message")?,
                    content_type: parse_column(row, "content_type")?,
                    content_id: row.try_get("content_id")?,
                    action_url: optional_column(row, "action_url")?,
                    is_read: is_read != 0,
                    created_at: row.try_get("created_at")?,
                })
            })
            .collect()
    }
}
