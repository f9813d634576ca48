#![allow(dead_code)]
use coursedesk::domain::entities::{ContentItem, ContentKind, ContentStatus};
use coursedesk::domain::ports::ContentRepository;
use coursedesk::infrastructure::persistence::Database;
use uuid::Uuid;

pub const AUTHOR: &str = "author-1";
pub const REVIEWER: &str = "reviewer-1";
pub const CREATED_AT: &str = "2026-01-01T09:00:00+00:00";

pub async fn create_test_course(db: &Database, status: ContentStatus) -> String {
    let id = format!("course-{}", Uuid::new_v4());
    sqlx::query(
        "INSERT INTO courses (id, title, status, created_by, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind("Rust Fundamentals")
    .bind(status.as_str())
    .bind(AUTHOR)
    .bind(CREATED_AT)
    .bind(CREATED_AT)
    .execute(db.pool())
    .await
    .expect("Failed to create course");
    id
}

pub async fn create_test_module(
    db: &Database,
    course_id: &str,
    title: &str,
    status: ContentStatus,
) -> String {
    let id = format!("module-{}", Uuid::new_v4());
    sqlx::query(
        "INSERT INTO modules (id, course_id, title, status, created_by, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(course_id)
    .bind(title)
    .bind(status.as_str())
    .bind(AUTHOR)
    .bind(CREATED_AT)
    .bind(CREATED_AT)
    .execute(db.pool())
    .await
    .expect("Failed to create module");
    id
}

pub async fn create_test_lesson(
    db: &Database,
    module_id: &str,
    title: &str,
    status: ContentStatus,
) -> String {
    let id = format!("lesson-{}", Uuid::new_v4());
    sqlx::query(
        "INSERT INTO lessons (id, module_id, title, status, created_by, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(module_id)
    .bind(title)
    .bind(status.as_str())
    .bind(AUTHOR)
    .bind(CREATED_AT)
    .bind(CREATED_AT)
    .execute(db.pool())
    .await
    .expect("Failed to create lesson");
    id
}

pub async fn create_test_quiz(
    db: &Database,
    course_id: &str,
    status: ContentStatus,
    passing_score: Option<f64>,
) -> String {
    let id = format!("quiz-{}", Uuid::new_v4());
    sqlx::query(
        "INSERT INTO quizzes (id, course_id, title, status, created_by, passing_score, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(course_id)
    .bind("Ownership Quiz")
    .bind(status.as_str())
    .bind(AUTHOR)
    .bind(passing_score)
    .bind(CREATED_AT)
    .bind(CREATED_AT)
    .execute(db.pool())
    .await
    .expect("Failed to create quiz");
    id
}

pub async fn create_test_assignment(
    db: &Database,
    course_id: &str,
    status: ContentStatus,
    max_points: f64,
) -> String {
    let id = format!("assignment-{}", Uuid::new_v4());
    sqlx::query(
        "INSERT INTO assignments (id, course_id, title, status, created_by, max_points, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&id)
    .bind(course_id)
    .bind("Borrow Checker Essay")
    .bind(status.as_str())
    .bind(AUTHOR)
    .bind(max_points)
    .bind(CREATED_AT)
    .bind(CREATED_AT)
    .execute(db.pool())
    .await
    .expect("Failed to create assignment");
    id
}

/// Reads an item back through the repository port
pub async fn fetch_content(db: &Database, kind: ContentKind, id: &str) -> ContentItem {
    db.get_content(kind, id)
        .await
        .expect("Failed to load content")
        .expect("Content missing")
}
