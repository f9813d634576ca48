use crate::domain::entities::{AssignmentSubmission, GradePatch, QuizAttempt, SubmissionStatus};
use crate::domain::errors::DomainResult;

#[async_trait::async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn get_submission(&self, id: &str) -> DomainResult<Option<AssignmentSubmission>>;

    async fn list_assignment_submissions(
        &self,
        assignment_id: &str,
    ) -> DomainResult<Vec<AssignmentSubmission>>;

    /// Applies `patch` only while the stored status equals `expected`.
    /// Returns `false` when nothing was written.
    async fn update_submission_grade(
        &self,
        id: &str,
        expected: SubmissionStatus,
        patch: &GradePatch,
    ) -> DomainResult<bool>;

    async fn list_quiz_attempts(&self, quiz_id: &str) -> DomainResult<Vec<QuizAttempt>>;
}
