use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    Graded,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "draft",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Graded => "graded",
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(SubmissionStatus::Draft),
            "submitted" => Ok(SubmissionStatus::Submitted),
            "graded" => Ok(SubmissionStatus::Graded),
            other => Err(format!("Unknown submission status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSubmission {
    pub id: String,
    pub assignment_id: String,
    pub learner_id: String,
    pub status: SubmissionStatus,
    pub grade: Option<f64>,
    pub teacher_feedback: Option<String>,
    pub graded_by: Option<String>,
    pub graded_at: Option<String>, // RFC 3339
    pub is_late: bool,
}

/// Fields written when a grade is recorded or revised
#[derive(Debug, Clone, PartialEq)]
pub struct GradePatch {
    pub grade: f64,
    pub teacher_feedback: Option<String>,
    /// Left untouched when `None`
    pub graded_by: Option<String>,
    pub graded_at: String,
    pub status: SubmissionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: String,
    pub quiz_id: String,
    pub learner_id: String,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradingMethod {
    Numerical,
    Competency,
    Weighted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingComponent {
    pub name: String,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGradingConfig {
    pub passing_score: f64,
    pub grading_method: GradingMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<GradingComponent>>,
}

/// Aggregate over the graded submissions of one assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentStatistics {
    pub total_submissions: usize,
    pub graded_submissions: usize,
    pub average_grade: Option<f64>,
    pub highest_grade: Option<f64>,
    pub lowest_grade: Option<f64>,
    pub late_submissions: usize,
    pub on_time_submissions: usize,
}

impl AssignmentStatistics {
    pub fn empty() -> Self {
        Self {
            total_submissions: 0,
            graded_submissions: 0,
            average_grade: None,
            highest_grade: None,
            lowest_grade: None,
            late_submissions: 0,
            on_time_submissions: 0,
        }
    }
}

/// Aggregate over every attempt of one quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizStatistics {
    pub total_attempts: usize,
    pub unique_students: usize,
    pub average_score: Option<f64>,
    pub highest_score: Option<f64>,
    pub lowest_score: Option<f64>,
    pub pass_rate: Option<f64>,
}

impl QuizStatistics {
    pub fn empty() -> Self {
        Self {
            total_attempts: 0,
            unique_students: 0,
            average_score: None,
            highest_score: None,
            lowest_score: None,
            pass_rate: None,
        }
    }
}
