use crate::domain::entities::CourseGradingConfig;
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait GradingConfigRepository: Send + Sync {
    async fn get_grading_config(&self, course_id: &str)
        -> DomainResult<Option<CourseGradingConfig>>;

    /// Persist the config verbatim and bump the course's `updated_at`
    async fn save_grading_config(
        &self,
        course_id: &str,
        config: &CourseGradingConfig,
        updated_at: &str,
    ) -> DomainResult<()>;
}
