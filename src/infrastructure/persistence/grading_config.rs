use async_trait::async_trait;
use super::{optional_column, Database};
use crate::domain::entities::CourseGradingConfig;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::GradingConfigRepository;

#[async_trait]
impl GradingConfigRepository for Database {
    async fn get_grading_config(
        &self,
        course_id: &str,
    ) -> DomainResult<Option<CourseGradingConfig>> {
        let row = sqlx::query("SELECT grading_config FROM courses WHERE id = ?")
            .bind(course_id)
            .fetch_optional(&self.pool)
            .await?;

        let raw: Option<String> = match row {
            Some(row) => optional_column(&row, "grading_config")?,
            None => return Err(DomainError::NotFound(format!("Course {}", course_id))),
        };

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    async fn save_grading_config(
        &self,
        course_id: &str,
        config: &CourseGradingConfig,
        updated_at: &str,
    ) -> DomainResult<()> {
        let json = serde_json::to_string(config)?;

        let result =
            sqlx::query("UPDATE courses SET grading_config = ?, updated_at = ? WHERE id = ?")
                .bind(json)
                .bind(updated_at)
                .bind(course_id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("Course {}", course_id)));
        }

        Ok(())
    }
}
