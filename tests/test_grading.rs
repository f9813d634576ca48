mod helpers;

use coursedesk::domain::entities::{ContentStatus, QuizStatistics, SubmissionStatus};
use coursedesk::domain::errors::DomainError;
use coursedesk::infrastructure::persistence::Database;
use helpers::*;
use tokio_test::assert_ok;

async fn published_assignment(db: &Database, max_points: f64) -> String {
    let course = create_test_course(db, ContentStatus::Published).await;
    create_test_assignment(db, &course, ContentStatus::Published, max_points).await
}

#[tokio::test]
async fn test_grade_submission_end_to_end() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let assignment = published_assignment(&db, 100.0).await;
    let submission = create_test_submission(
        &db,
        &assignment,
        "learner-1",
        SubmissionStatus::Submitted,
        true,
    )
    .await;

    let graded = services
        .grading
        .grade_assignment_submission(&submission, 85.0, Some("Good work".to_string()), "teacher1")
        .await
        .unwrap();

    assert_eq!(graded.grade, Some(85.0));
    assert_eq!(graded.teacher_feedback.as_deref(), Some("Good work"));
    assert_eq!(graded.graded_by.as_deref(), Some("teacher1"));
    assert_eq!(graded.status, SubmissionStatus::Graded);
    assert_eq!(graded.graded_at.as_deref(), Some(FIXED_NOW));

    let stored = fetch_submission(&db, &submission).await;
    assert_eq!(stored, graded);

    let stats = services
        .grading
        .calculate_assignment_statistics(&assignment)
        .await
        .unwrap();
    assert_eq!(stats.total_submissions, 1);
    assert_eq!(stats.graded_submissions, 1);
    assert_eq!(stats.average_grade, Some(85.0));
    assert_eq!(stats.highest_grade, Some(85.0));
    assert_eq!(stats.lowest_grade, Some(85.0));
    assert_eq!(stats.late_submissions, 1);
    assert_eq!(stats.on_time_submissions, 0);
}

#[tokio::test]
async fn test_grade_boundaries_are_inclusive() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let assignment = published_assignment(&db, 100.0).await;
    let zero = create_test_submission(
        &db,
        &assignment,
        "learner-1",
        SubmissionStatus::Submitted,
        false,
    )
    .await;
    let full = create_test_submission(
        &db,
        &assignment,
        "learner-2",
        SubmissionStatus::Submitted,
        false,
    )
    .await;
    let over = create_test_submission(
        &db,
        &assignment,
        "learner-3",
        SubmissionStatus::Submitted,
        false,
    )
    .await;

    assert_ok!(
        services
            .grading
            .grade_assignment_submission(&zero, 0.0, None, "teacher1")
            .await
    );
    assert_ok!(
        services
            .grading
            .grade_assignment_submission(&full, 100.0, None, "teacher1")
            .await
    );

    let err = services
        .grading
        .grade_assignment_submission(&over, 101.0, None, "teacher1")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::OutOfRange(_)));
    assert!(err.to_string().contains("100"));

    let untouched = fetch_submission(&db, &over).await;
    assert_eq!(untouched.status, SubmissionStatus::Submitted);
    assert_eq!(untouched.grade, None);
}

#[tokio::test]
async fn test_negative_grade_is_out_of_range() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let assignment = published_assignment(&db, 10.0).await;
    let submission = create_test_submission(
        &db,
        &assignment,
        "learner-1",
        SubmissionStatus::Submitted,
        false,
    )
    .await;

    let err = services
        .grading
        .grade_assignment_submission(&submission, -1.0, None, "teacher1")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::OutOfRange(_)));
}

#[tokio::test]
async fn test_only_submitted_work_can_be_graded() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let assignment = published_assignment(&db, 100.0).await;
    let draft = create_test_submission(
        &db,
        &assignment,
        "learner-1",
        SubmissionStatus::Draft,
        false,
    )
    .await;
    let graded = create_graded_submission(&db, &assignment, "learner-2", 70.0, false).await;

    for id in [&draft, &graded] {
        let err = services
            .grading
            .grade_assignment_submission(id, 50.0, None, "teacher1")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidStatusTransition(_)));
    }

    assert_eq!(fetch_submission(&db, &graded).await.grade, Some(70.0));
}

#[tokio::test]
async fn test_grading_missing_submission_or_assignment() {
    let db = setup_test_db().await;
    let services = test_services(&db);

    let err = services
        .grading
        .grade_assignment_submission("submission-missing", 10.0, None, "teacher1")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));

    // Submission whose assignment row is gone
    let mut conn = db.pool().acquire().await.unwrap();
    sqlx::query("PRAGMA foreign_keys = OFF")
        .execute(&mut *conn)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO assignment_submissions (id, assignment_id, learner_id, status, is_late)
         VALUES ('submission-orphan', 'assignment-gone', 'learner-1', 'submitted', 0)",
    )
    .execute(&mut *conn)
    .await
    .unwrap();
    drop(conn);

    let err = services
        .grading
        .grade_assignment_submission("submission-orphan", 10.0, None, "teacher1")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
    assert!(err.to_string().contains("assignment-gone"));
}

#[tokio::test]
async fn test_update_grade_keeps_grader_and_status() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let assignment = published_assignment(&db, 100.0).await;
    let submission = create_graded_submission(&db, &assignment, "learner-1", 60.0, false).await;

    let updated = services
        .grading
        .update_grade(&submission, 72.5, Some("Regraded after appeal".to_string()))
        .await
        .unwrap();

    assert_eq!(updated.grade, Some(72.5));
    assert_eq!(updated.status, SubmissionStatus::Graded);
    assert_eq!(updated.graded_by.as_deref(), Some("teacher-0"));
    assert_eq!(updated.graded_at.as_deref(), Some(FIXED_NOW));

    let stored = fetch_submission(&db, &submission).await;
    assert_eq!(stored.grade, Some(72.5));
    assert_eq!(stored.graded_by.as_deref(), Some("teacher-0"));
    assert_eq!(stored.teacher_feedback.as_deref(), Some("Regraded after appeal"));
}

#[tokio::test]
async fn test_update_grade_requires_existing_grade() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let assignment = published_assignment(&db, 100.0).await;
    let submission = create_test_submission(
        &db,
        &assignment,
        "learner-1",
        SubmissionStatus::Submitted,
        false,
    )
    .await;

    let err = services
        .grading
        .update_grade(&submission, 50.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidStatusTransition(_)));
}

#[tokio::test]
async fn test_update_grade_checks_max_points() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let assignment = published_assignment(&db, 20.0).await;
    let submission = create_graded_submission(&db, &assignment, "learner-1", 15.0, false).await;

    let err = services
        .grading
        .update_grade(&submission, 21.0, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::OutOfRange(_)));
    assert!(err.to_string().contains("20"));
    assert_eq!(fetch_submission(&db, &submission).await.grade, Some(15.0));
}

#[tokio::test]
async fn test_get_submissions_with_status_filter() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let assignment = published_assignment(&db, 100.0).await;
    create_test_submission(&db, &assignment, "learner-1", SubmissionStatus::Draft, false).await;
    create_test_submission(&db, &assignment, "learner-2", SubmissionStatus::Submitted, false).await;
    create_graded_submission(&db, &assignment, "learner-3", 90.0, false).await;

    let all = services
        .grading
        .get_assignment_submissions(&assignment, None)
        .await
        .unwrap();
    assert_eq!(all.len(), 3);

    let submitted = services
        .grading
        .get_assignment_submissions(&assignment, Some(SubmissionStatus::Submitted))
        .await
        .unwrap();
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].learner_id, "learner-2");
}

#[tokio::test]
async fn test_assignment_statistics_without_graded_work() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let assignment = published_assignment(&db, 100.0).await;
    create_test_submission(&db, &assignment, "learner-1", SubmissionStatus::Submitted, true).await;

    let stats = services
        .grading
        .calculate_assignment_statistics(&assignment)
        .await
        .unwrap();

    assert_eq!(stats.total_submissions, 0);
    assert_eq!(stats.graded_submissions, 0);
    assert_eq!(stats.average_grade, None);
    assert_eq!(stats.highest_grade, None);
    assert_eq!(stats.lowest_grade, None);
    assert_eq!(stats.late_submissions, 0);
    assert_eq!(stats.on_time_submissions, 0);
}

#[tokio::test]
async fn test_assignment_statistics_over_graded_work() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let assignment = published_assignment(&db, 100.0).await;
    create_graded_submission(&db, &assignment, "learner-1", 90.0, false).await;
    create_graded_submission(&db, &assignment, "learner-2", 60.0, true).await;
    create_graded_submission(&db, &assignment, "learner-3", 75.0, false).await;
    create_test_submission(&db, &assignment, "learner-4", SubmissionStatus::Submitted, true).await;

    let stats = services
        .grading
        .calculate_assignment_statistics(&assignment)
        .await
        .unwrap();

    assert_eq!(stats.total_submissions, 3);
    assert_eq!(stats.graded_submissions, 3);
    assert_eq!(stats.average_grade, Some(75.0));
    assert_eq!(stats.highest_grade, Some(90.0));
    assert_eq!(stats.lowest_grade, Some(60.0));
    assert_eq!(stats.late_submissions, 1);
    assert_eq!(stats.on_time_submissions, 2);
}

#[tokio::test]
async fn test_quiz_statistics_without_attempts() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let course = create_test_course(&db, ContentStatus::Published).await;
    let quiz = create_test_quiz(&db, &course, ContentStatus::Published, Some(60.0)).await;

    let stats = services.grading.calculate_quiz_statistics(&quiz).await.unwrap();

    assert_eq!(
        stats,
        QuizStatistics {
            total_attempts: 0,
            unique_students: 0,
            average_score: None,
            highest_score: None,
            lowest_score: None,
            pass_rate: None,
        }
    );
}

#[tokio::test]
async fn test_quiz_pass_rate_divides_passing_attempts_by_students() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let course = create_test_course(&db, ContentStatus::Published).await;
    let quiz = create_test_quiz(&db, &course, ContentStatus::Published, Some(60.0)).await;
    create_test_attempt(&db, &quiz, "learner-1", 80.0).await;
    create_test_attempt(&db, &quiz, "learner-1", 90.0).await;
    create_test_attempt(&db, &quiz, "learner-2", 40.0).await;
    create_test_attempt(&db, &quiz, "learner-3", 60.0).await;

    let stats = services.grading.calculate_quiz_statistics(&quiz).await.unwrap();

    assert_eq!(stats.total_attempts, 4);
    assert_eq!(stats.unique_students, 3);
    assert_eq!(stats.average_score, Some(67.5));
    assert_eq!(stats.highest_score, Some(90.0));
    assert_eq!(stats.lowest_score, Some(40.0));
    assert_eq!(stats.pass_rate, Some(100.0));
}

#[tokio::test]
async fn test_quiz_without_passing_score_has_null_pass_rate() {
    let db = setup_test_db().await;
    let services = test_services(&db);
    let course = create_test_course(&db, ContentStatus::Published).await;
    let quiz = create_test_quiz(&db, &course, ContentStatus::Published, None).await;
    create_test_attempt(&db, &quiz, "learner-1", 55.0).await;

    let stats = services.grading.calculate_quiz_statistics(&quiz).await.unwrap();

    assert_eq!(stats.total_attempts, 1);
    assert_eq!(stats.pass_rate, None);
}
