use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

use super::{optional_column, parse_column, Database};
use crate::domain::entities::{
    Assignment, ContentItem, ContentKind, ContentMeta, ContentStatus, Course, Lesson, Module, Quiz,
};
use crate::domain::errors::DomainResult;
use crate::domain::ports::ContentRepository;

fn meta_from_row(row: &AnyRow) -> DomainResult<ContentMeta> {
    Ok(ContentMeta {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        status: parse_column(row, "status")?,
        created_by: row.try_get("created_by")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn item_from_row(kind: ContentKind, row: &AnyRow) -> DomainResult<ContentItem> {
    let meta = meta_from_row(row)?;
    let item = match kind {
        ContentKind::Course => ContentItem::Course(Course { meta }),
        ContentKind::Module => ContentItem::Module(Module {
            meta,
            course_id: row.try_get("course_id")?,
        }),
        ContentKind::Lesson => ContentItem::Lesson(Lesson {
            meta,
            module_id: row.try_get("module_id")?,
        }),
        ContentKind::Quiz => ContentItem::Quiz(Quiz {
            meta,
            course_id: row.try_get("course_id")?,
            passing_score: optional_column(row, "passing_score")?,
        }),
        ContentKind::Assignment => ContentItem::Assignment(Assignment {
            meta,
            course_id: row.try_get("course_id")?,
            max_points: row.try_get("max_points")?,
        }),
    };
    Ok(item)
}

#[async_trait]
impl ContentRepository for Database {
    async fn get_content(&self, kind: ContentKind, id: &str) -> DomainResult<Option<ContentItem>> {
        let row = sqlx::query(&format!("SELECT * FROM {} WHERE id = ?", kind.table()))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|row| item_from_row(kind, &row)).transpose()
    }

    async fn list_module_lessons(&self, module_id: &str) -> DomainResult<Vec<Lesson>> {
        let rows = sqlx::query(
            "SELECT id, module_id, title, status, created_by, created_at, updated_at
             FROM lessons
             WHERE module_id = ?
             ORDER BY created_at ASC",
        )
        .bind(module_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DomainResult<Lesson> {
                Ok(Lesson {
                    meta: meta_from_row(row)?,
                    module_id: row.try_get("module_id")?,
                })
            })
            .collect()
    }

    async fn update_content_status(
        &self,
        kind: ContentKind,
        id: &str,
        expected: ContentStatus,
        status: ContentStatus,
        updated_at: &str,
    ) -> DomainResult<bool> {
        let result = sqlx::query(&format!(
            "UPDATE {} SET status = ?, updated_at = ? WHERE id = ? AND status = ?",
            kind.table()
        ))
        .bind(status.as_str())
        .bind(updated_at)
        .bind(id)
        .bind(expected.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
