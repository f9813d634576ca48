use crate::domain::entities::{
    Assignment, AssignmentStatistics, AssignmentSubmission, ContentItem, ContentKind, GradePatch,
    QuizStatistics, SubmissionStatus,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ports::{Clock, ContentRepository, SubmissionRepository};
use crate::domain::services::grading_rules;
use crate::infrastructure::observability::SUBMISSIONS_GRADED_TOTAL;
use std::sync::Arc;

#[derive(Clone)]
pub struct GradingService {
    content_repo: Arc<dyn ContentRepository>,
    submission_repo: Arc<dyn SubmissionRepository>,
    clock: Arc<dyn Clock>,
}

impl GradingService {
    pub fn new(
        content_repo: Arc<dyn ContentRepository>,
        submission_repo: Arc<dyn SubmissionRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            content_repo,
            submission_repo,
            clock,
        }
    }

    /// Grades a submitted piece of work: submitted -> graded
    #[tracing::instrument(skip(self, feedback))]
    pub async fn grade_assignment_submission(
        &self,
        submission_id: &str,
        grade: f64,
        feedback: Option<String>,
        graded_by: &str,
    ) -> DomainResult<AssignmentSubmission> {
        let submission = self.load_submission(submission_id).await?;
        let assignment = self.load_assignment(&submission.assignment_id).await?;

        if submission.status != SubmissionStatus::Submitted {
            return Err(DomainError::InvalidStatusTransition(format!(
                "Only submitted work can be graded (current status: {})",
                submission.status
            )));
        }
        grading_rules::validate_grade(grade, assignment.max_points)?;

        let patch = GradePatch {
            grade,
            teacher_feedback: feedback,
            graded_by: Some(graded_by.to_string()),
            graded_at: self.clock.now_rfc3339(),
            status: SubmissionStatus::Graded,
        };
        self.apply(submission, SubmissionStatus::Submitted, patch).await
    }

    /// Revises an existing grade; status and grader stay as they were
    #[tracing::instrument(skip(self, feedback))]
    pub async fn update_grade(
        &self,
        submission_id: &str,
        grade: f64,
        feedback: Option<String>,
    ) -> DomainResult<AssignmentSubmission> {
        let submission = self.load_submission(submission_id).await?;
        let assignment = self.load_assignment(&submission.assignment_id).await?;

        if submission.status != SubmissionStatus::Graded {
            return Err(DomainError::InvalidStatusTransition(format!(
                "Only graded submissions can have their grade updated (current status: {})",
                submission.status
            )));
        }
        grading_rules::validate_grade(grade, assignment.max_points)?;

        let patch = GradePatch {
            grade,
            teacher_feedback: feedback,
            graded_by: None,
            graded_at: self.clock.now_rfc3339(),
            status: SubmissionStatus::Graded,
        };
        self.apply(submission, SubmissionStatus::Graded, patch).await
    }

    pub async fn get_assignment_submissions(
        &self,
        assignment_id: &str,
        status_filter: Option<SubmissionStatus>,
    ) -> DomainResult<Vec<AssignmentSubmission>> {
        let submissions = self
            .submission_repo
            .list_assignment_submissions(assignment_id)
            .await?;

        Ok(match status_filter {
            Some(status) => submissions
                .into_iter()
                .filter(|s| s.status == status)
                .collect(),
            None => submissions,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn calculate_assignment_statistics(
        &self,
        assignment_id: &str,
    ) -> DomainResult<AssignmentStatistics> {
        let submissions = self
            .submission_repo
            .list_assignment_submissions(assignment_id)
            .await?;
        Ok(grading_rules::assignment_statistics(&submissions))
    }

    #[tracing::instrument(skip(self))]
    pub async fn calculate_quiz_statistics(&self, quiz_id: &str) -> DomainResult<QuizStatistics> {
        let attempts = self.submission_repo.list_quiz_attempts(quiz_id).await?;
        if attempts.is_empty() {
            return Ok(QuizStatistics::empty());
        }

        let passing_score = match self.content_repo.get_content(ContentKind::Quiz, quiz_id).await? {
            Some(ContentItem::Quiz(quiz)) => quiz.passing_score,
            _ => return Err(DomainError::NotFound(format!("Quiz {}", quiz_id))),
        };

        Ok(grading_rules::quiz_statistics(&attempts, passing_score))
    }

    async fn apply(
        &self,
        submission: AssignmentSubmission,
        expected: SubmissionStatus,
        patch: GradePatch,
    ) -> DomainResult<AssignmentSubmission> {
        let applied = self
            .submission_repo
            .update_submission_grade(&submission.id, expected, &patch)
            .await?;

        if !applied {
            return Err(DomainError::InvalidStatusTransition(format!(
                "Submission {} changed status concurrently; expected {}",
                submission.id, expected
            )));
        }

        tracing::info!(
            "Submission {} graded {} (assignment {})",
            submission.id,
            patch.grade,
            submission.assignment_id
        );
        metrics::counter!(SUBMISSIONS_GRADED_TOTAL, "status" => expected.as_str()).increment(1);

        let mut updated = submission;
        updated.grade = Some(patch.grade);
        updated.teacher_feedback = patch.teacher_feedback;
        updated.graded_at = Some(patch.graded_at);
        updated.status = patch.status;
        if let Some(graded_by) = patch.graded_by {
            updated.graded_by = Some(graded_by);
        }
        Ok(updated)
    }

    async fn load_submission(&self, submission_id: &str) -> DomainResult<AssignmentSubmission> {
        self.submission_repo
            .get_submission(submission_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Submission {}", submission_id)))
    }

    async fn load_assignment(&self, assignment_id: &str) -> DomainResult<Assignment> {
        match self
            .content_repo
            .get_content(ContentKind::Assignment, assignment_id)
            .await?
        {
            Some(ContentItem::Assignment(assignment)) => Ok(assignment),
            _ => Err(DomainError::NotFound(format!("Assignment {}", assignment_id))),
        }
    }
}
