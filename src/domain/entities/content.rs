use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a content item.
///
/// The publishing ladder is `Draft < Pending < Approved < Published < Archived`.
/// `ChangesRequested` is where a rejected item lands; it sits below the ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    ChangesRequested,
    Draft,
    Pending,
    Approved,
    Published,
    Archived,
}

impl ContentStatus {
    /// The ordered publishing ladder, lowest level first
    pub const LADDER: [ContentStatus; 5] = [
        ContentStatus::Draft,
        ContentStatus::Pending,
        ContentStatus::Approved,
        ContentStatus::Published,
        ContentStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::ChangesRequested => "changes_requested",
            ContentStatus::Draft => "draft",
            ContentStatus::Pending => "pending",
            ContentStatus::Approved => "approved",
            ContentStatus::Published => "published",
            ContentStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "changes_requested" => Ok(ContentStatus::ChangesRequested),
            "draft" => Ok(ContentStatus::Draft),
            "pending" => Ok(ContentStatus::Pending),
            "approved" => Ok(ContentStatus::Approved),
            "published" => Ok(ContentStatus::Published),
            "archived" => Ok(ContentStatus::Archived),
            other => Err(format!("Unknown content status '{}'", other)),
        }
    }
}

/// Type tag for the content variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Course,
    Module,
    Lesson,
    Quiz,
    Assignment,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Course => "course",
            ContentKind::Module => "module",
            ContentKind::Lesson => "lesson",
            ContentKind::Quiz => "quiz",
            ContentKind::Assignment => "assignment",
        }
    }

    /// Capitalised name used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Course => "Course",
            ContentKind::Module => "Module",
            ContentKind::Lesson => "Lesson",
            ContentKind::Quiz => "Quiz",
            ContentKind::Assignment => "Assignment",
        }
    }

    /// Backing table in the content store
    pub fn table(&self) -> &'static str {
        match self {
            ContentKind::Course => "courses",
            ContentKind::Module => "modules",
            ContentKind::Lesson => "lessons",
            ContentKind::Quiz => "quizzes",
            ContentKind::Assignment => "assignments",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "course" | "courses" => Ok(ContentKind::Course),
            "module" | "modules" => Ok(ContentKind::Module),
            "lesson" | "lessons" => Ok(ContentKind::Lesson),
            "quiz" | "quizzes" => Ok(ContentKind::Quiz),
            "assignment" | "assignments" => Ok(ContentKind::Assignment),
            other => Err(format!("Unknown content type '{}'", other)),
        }
    }
}

/// Fields shared by every content variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentMeta {
    pub id: String,
    pub title: String,
    pub status: ContentStatus,
    pub created_by: String,
    pub created_at: String, // RFC 3339
    pub updated_at: String, // RFC 3339
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(flatten)]
    pub meta: ContentMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    #[serde(flatten)]
    pub meta: ContentMeta,
    pub course_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(flatten)]
    pub meta: ContentMeta,
    pub module_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(flatten)]
    pub meta: ContentMeta,
    pub course_id: String,
    pub passing_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(flatten)]
    pub meta: ContentMeta,
    pub course_id: String,
    pub max_points: f64,
}

/// Any record that moves through the editorial lifecycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "lowercase")]
pub enum ContentItem {
    Course(Course),
    Module(Module),
    Lesson(Lesson),
    Quiz(Quiz),
    Assignment(Assignment),
}

impl ContentItem {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentItem::Course(_) => ContentKind::Course,
            ContentItem::Module(_) => ContentKind::Module,
            ContentItem::Lesson(_) => ContentKind::Lesson,
            ContentItem::Quiz(_) => ContentKind::Quiz,
            ContentItem::Assignment(_) => ContentKind::Assignment,
        }
    }

    pub fn meta(&self) -> &ContentMeta {
        match self {
            ContentItem::Course(c) => &c.meta,
            ContentItem::Module(m) => &m.meta,
            ContentItem::Lesson(l) => &l.meta,
            ContentItem::Quiz(q) => &q.meta,
            ContentItem::Assignment(a) => &a.meta,
        }
    }

    pub fn id(&self) -> &str {
        &self.meta().id
    }

    pub fn title(&self) -> &str {
        &self.meta().title
    }

    pub fn status(&self) -> ContentStatus {
        self.meta().status
    }

    pub fn created_by(&self) -> &str {
        &self.meta().created_by
    }
}
