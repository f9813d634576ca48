use crate::domain::entities::{
    AssignmentStatistics, AssignmentSubmission, CourseGradingConfig, GradingMethod, QuizAttempt,
    QuizStatistics, SubmissionStatus,
};
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;

/// Allowed drift of weighted component totals from 100
pub const WEIGHT_TOLERANCE: f64 = 0.01;

/// Grades are inclusive on both ends of `[0, max_points]`
pub fn validate_grade(grade: f64, max_points: f64) -> DomainResult<()> {
    if !grade.is_finite() || !max_points.is_finite() || grade < 0.0 || grade > max_points {
        return Err(DomainError::OutOfRange(format!(
            "Grade must be between 0 and {}",
            max_points
        )));
    }
    Ok(())
}

pub fn validate_grading_config(config: &CourseGradingConfig) -> DomainResult<()> {
    if !(0.0..=100.0).contains(&config.passing_score) {
        return Err(DomainError::ValidationFailure(
            "Passing score must be between 0 and 100".to_string(),
        ));
    }

    if config.grading_method == GradingMethod::Weighted {
        let components = match config.components.as_deref() {
            Some(components) if !components.is_empty() => components,
            _ => {
                return Err(DomainError::ValidationFailure(
                    "Weighted grading requires at least one component".to_string(),
                ))
            }
        };

        if let Some(bad) = components.iter().find(|c| !c.weight.is_finite()) {
            return Err(DomainError::ValidationFailure(format!(
                "Component \"{}\" must have a finite weight",
                bad.name
            )));
        }

        let total: f64 = components.iter().map(|c| c.weight).sum();
        if (total - 100.0).abs() > WEIGHT_TOLERANCE {
            return Err(DomainError::ValidationFailure(format!(
                "Component weights must sum to 100 (got {})",
                total
            )));
        }
    }

    Ok(())
}

/// Summarises the graded submissions of an assignment; other statuses are ignored
pub fn assignment_statistics(submissions: &[AssignmentSubmission]) -> AssignmentStatistics {
    let graded: Vec<&AssignmentSubmission> = submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Graded)
        .collect();

    if graded.is_empty() {
        return AssignmentStatistics::empty();
    }

    let grades: Vec<f64> = graded.iter().filter_map(|s| s.grade).collect();
    let total = graded.len();
    let late = graded.iter().filter(|s| s.is_late).count();

    AssignmentStatistics {
        total_submissions: total,
        graded_submissions: total,
        average_grade: mean(&grades),
        highest_grade: grades.iter().copied().reduce(f64::max),
        lowest_grade: grades.iter().copied().reduce(f64::min),
        late_submissions: late,
        on_time_submissions: total - late,
    }
}

/// Summarises quiz attempts.
///
/// The pass rate counts passing attempts over distinct learners, so a learner
/// who passes twice contributes two to the numerator and one to the denominator.
pub fn quiz_statistics(attempts: &[QuizAttempt], passing_score: Option<f64>) -> QuizStatistics {
    if attempts.is_empty() {
        return QuizStatistics::empty();
    }

    let scores: Vec<f64> = attempts.iter().map(|a| a.percentage).collect();
    let unique_students = attempts
        .iter()
        .map(|a| a.learner_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let pass_rate = passing_score.map(|threshold| {
        let passed = attempts.iter().filter(|a| a.percentage >= threshold).count();
        passed as f64 / unique_students as f64 * 100.0
    });

    QuizStatistics {
        total_attempts: attempts.len(),
        unique_students,
        average_score: mean(&scores),
        highest_score: scores.iter().copied().reduce(f64::max),
        lowest_score: scores.iter().copied().reduce(f64::min),
        pass_rate,
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}
