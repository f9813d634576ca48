use async_trait::async_trait;
use sqlx::{any::AnyRow, Row};

use super::{optional_column, parse_column, Database};
use crate::domain::entities::{AssignmentSubmission, GradePatch, QuizAttempt, SubmissionStatus};
use crate::domain::errors::DomainResult;
use crate::domain::ports::SubmissionRepository;

const SUBMISSION_COLUMNS: &str =
    "id, assignment_id, learner_id, status, grade, teacher_feedback, graded_by, graded_at, is_late";

fn submission_from_row(row: &AnyRow) -> DomainResult<AssignmentSubmission> {
    let is_late: i64 = row.try_get("is_late")?;

    Ok(AssignmentSubmission {
        id: row.try_get("id")?,
        assignment_id: row.try_get("assignment_id")?,
        learner_id: row.try_get("learner_id")?,
        status: parse_column(row, "status")?,
        grade: optional_column(row, "grade")?,
        teacher_feedback: optional_column(row, "teacher_feedback")?,
        graded_by: optional_column(row, "graded_by")?,
        graded_at: optional_column(row, "graded_at")?,
        is_late: is_late != 0,
    })
}

#[async_trait]
impl SubmissionRepository for Database {
    async fn get_submission(&self, id: &str) -> DomainResult<Option<AssignmentSubmission>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM assignment_submissions WHERE id = ?",
            SUBMISSION_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|row| submission_from_row(&row)).transpose()
    }

    async fn list_assignment_submissions(
        &self,
        assignment_id: &str,
    ) -> DomainResult<Vec<AssignmentSubmission>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM assignment_submissions WHERE assignment_id = ? ORDER BY id",
            SUBMISSION_COLUMNS
        ))
        .bind(assignment_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(submission_from_row).collect()
    }

    async fn update_submission_grade(
        &self,
        id: &str,
        expected: SubmissionStatus,
        patch: &GradePatch,
    ) -> DomainResult<bool> {
        // COALESCE keeps the original grader when the patch carries none
        let result = sqlx::query(
            "UPDATE assignment_submissions
             SET grade = ?, teacher_feedback = ?, graded_by = COALESCE(?, graded_by),
                 graded_at = ?, status = ?
             WHERE id = ? AND status = ?",
        )
        .bind(patch.grade)
        .bind(patch.teacher_feedback.clone())
        .bind(patch.graded_by.clone())
        .bind(&patch.graded_at)
        .bind(patch.status.as_str())
        .bind(id)
        .bind(expected.as_str())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn list_quiz_attempts(&self, quiz_id: &str) -> DomainResult<Vec<QuizAttempt>> {
        let rows = sqlx::query(
            "SELECT id, quiz_id, learner_id, percentage
             FROM quiz_attempts
             WHERE quiz_id = ?
             ORDER BY created_at ASC",
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> DomainResult<QuizAttempt> {
                Ok(QuizAttempt {
                    id: row.try_get("id")?,
                    quiz_id: row.try_get("quiz_id")?,
                    learner_id: row.try_get("learner_id")?,
                    percentage: row.try_get("percentage")?,
                })
            })
            .collect()
    }
}
