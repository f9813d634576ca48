use crate::domain::entities::{ContentStatus, Lesson};
use crate::domain::errors::{DomainError, DomainResult};

/// Position of a status on the publishing ladder.
///
/// `ChangesRequested` is off the ladder and ranks below `Draft`.
pub fn level(status: ContentStatus) -> i32 {
    match status {
        ContentStatus::ChangesRequested => -1,
        ContentStatus::Draft => 0,
        ContentStatus::Pending => 1,
        ContentStatus::Approved => 2,
        ContentStatus::Published => 3,
        ContentStatus::Archived => 4,
    }
}

pub fn compare(a: ContentStatus, b: ContentStatus) -> i32 {
    level(a) - level(b)
}

pub fn is_higher_than(a: ContentStatus, b: ContentStatus) -> bool {
    compare(a, b) > 0
}

/// Whether a child may hold `child` while its parent holds `parent`
pub fn is_allowed(child: ContentStatus, parent: ContentStatus) -> bool {
    compare(child, parent) <= 0
}

/// Validates that a lesson moving to `lesson_status` stays at or below its module
pub fn validate_lesson_status(
    lesson_status: ContentStatus,
    module_status: ContentStatus,
    lesson_title: &str,
) -> DomainResult<()> {
    if is_higher_than(lesson_status, module_status) {
        return Err(DomainError::HierarchyViolation(format!(
            "Lesson \"{}\" cannot be {} while its module is {}",
            lesson_title, lesson_status, module_status
        )));
    }
    Ok(())
}

/// Validates that no child lesson sits above the module's target status.
///
/// Every blocking lesson is reported in a single error.
pub fn validate_module_status(
    module_status: ContentStatus,
    lessons: &[Lesson],
    module_title: &str,
) -> DomainResult<()> {
    let blocking: Vec<String> = lessons
        .iter()
        .filter(|lesson| is_higher_than(lesson.meta.status, module_status))
        .map(|lesson| format!("\"{}\" ({})", lesson.meta.title, lesson.meta.status))
        .collect();

    if blocking.is_empty() {
        return Ok(());
    }

    Err(DomainError::HierarchyViolation(format!(
        "Module \"{}\" cannot be {} while lessons have a higher status: {}",
        module_title,
        module_status,
        blocking.join(", ")
    )))
}

/// Ladder statuses a lesson may hold under a module in `module_status`
pub fn allowed_lesson_statuses(module_status: ContentStatus) -> Vec<ContentStatus> {
    ContentStatus::LADDER
        .into_iter()
        .filter(|status| level(*status) <= level(module_status))
        .collect()
}
