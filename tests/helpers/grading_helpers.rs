#![allow(dead_code)]
use coursedesk::domain::entities::{AssignmentSubmission, SubmissionStatus};
use coursedesk::domain::ports::SubmissionRepository;
use coursedesk::infrastructure::persistence::Database;
use uuid::Uuid;

pub async fn create_test_submission(
    db: &Database,
    assignment_id: &str,
    learner_id: &str,
    status: SubmissionStatus,
    is_late: bool,
) -> String {
    let id = format!("submission-{}", Uuid::new_v4());
    sqlx::query(
        "INSERT INTO assignment_submissions (id, assignment_id, learner_id, status, is_late)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(assignment_id)
    .bind(learner_id)
    .bind(status.as_str())
    .bind(if is_late { 1_i64 } else { 0_i64 })
    .execute(db.pool())
    .await
    .expect("Failed to create submission");
    id
}

/// Inserts a submission that was already graded by `teacher-0`
pub async fn create_graded_submission(
    db: &Database,
    assignment_id: &str,
    learner_id: &str,
    grade: f64,
    is_late: bool,
) -> String {
    let id = create_test_submission(
        db,
        assignment_id,
        learner_id,
        SubmissionStatus::Graded,
        is_late,
    )
    .await;
    sqlx::query(
        "UPDATE assignment_submissions SET grade = ?, graded_by = 'teacher-0', graded_at = ? WHERE id = ?",
    )
    .bind(grade)
    .bind("2026-02-01T08:00:00+00:00")
    .bind(&id)
    .execute(db.pool())
    .await
    .expect("Failed to grade submission");
    id
}

pub async fn create_test_attempt(
    db: &Database,
    quiz_id: &str,
    learner_id: &str,
    percentage: f64,
) -> String {
    let id = format!("attempt-{}", Uuid::new_v4());
    sqlx::query(
        "INSERT INTO quiz_attempts (id, quiz_id, learner_id, percentage, created_at)
         VALUES (?, ?, ?, ?, datetime('now'))",
    )
    .bind(&id)
    .bind(quiz_id)
    .bind(learner_id)
    .bind(percentage)
    .execute(db.pool())
    .await
    .expect("Failed to create quiz attempt");
    id
}

pub async fn fetch_submission(db: &Database, id: &str) -> AssignmentSubmission {
    db.get_submission(id)
        .await
        .expect("Failed to load submission")
        .expect("Submission missing")
}
