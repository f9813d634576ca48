use crate::domain::entities::{ContentKind, CourseGradingConfig};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{Clock, ContentRepository, GradingConfigRepository};
use crate::domain::services::grading_rules;
use std::sync::Arc;

#[derive(Clone)]
pub struct GradingConfigService {
    content_repo: Arc<dyn ContentRepository>,
    config_repo: Arc<dyn GradingConfigRepository>,
    clock: Arc<dyn Clock>,
}

impl GradingConfigService {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        config_repo: Arc<dyn GradingConfigRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            content_repo,
            config_repo,
            clock,
        }
    }

    #[tracing::instrument(skip(self, config))]
    pub async fn update_course_grading_config(
        &self,
        course_id: &str,
        config: CourseGradingConfig,
    ) -> DomainResult<CourseGradingConfig> {
        self.ensure_course(course_id).await?;
        grading_rules::validate_grading_config(&config)?;

        let now = self.clock.now_rfc3339();
        self.config_repo
            .save_grading_config(course_id, &config, &now)
            .await?;

        tracing::info!(
            "Grading config for course {} set to {:?} (pass at {})",
            course_id,
            config.grading_method,
            config.passing_score
        );

        Ok(config)
    }

    pub async fn get_course_grading_config(
        &self,
        course_id: &str,
    ) -> DomainResult<Option<CourseGradingConfig>> {
        self.ensure_course(course_id).await?;
        self.config_repo.get_grading_config(course_id).await
    }

    async fn ensure_course(&self, course_id: &str) -> DomainResult<()> {
        self.content_repo
            .get_content(ContentKind::Course, course_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound(format!("Course {}", course_id)))
    }
}
