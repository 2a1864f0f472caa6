use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

use crate::model::ids::{CourseId, LessonId, ModuleId};
use crate::model::search::Searchable;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("unknown course level: {0}")]
    UnknownLevel(String),

    #[error("lesson {lesson} has an invalid video url: {reason}")]
    InvalidVideoUrl { lesson: LessonId, reason: String },

    #[error("order must be >= 1")]
    InvalidOrder,
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    pub const ALL: [CourseLevel; 3] = [
        CourseLevel::Beginner,
        CourseLevel::Intermediate,
        CourseLevel::Advanced,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CourseLevel::Beginner => "beginner",
            CourseLevel::Intermediate => "intermediate",
            CourseLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseLevel {
    type Err = CourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(CourseError::UnknownLevel(s.to_string())),
        }
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    id: CourseId,
    title: String,
    description: String,
    level: CourseLevel,
    duration: String,
    module_count: u32,
    lesson_count: u32,
    topics: Vec<String>,
}

impl Course {
    /// # Errors
    ///
    /// Returns `CourseError::EmptyTitle` if the title is blank.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: CourseId,
        title: impl Into<String>,
        description: impl Into<String>,
        level: CourseLevel,
        duration: impl Into<String>,
        module_count: u32,
        lesson_count: u32,
        topics: Vec<String>,
    ) -> Result<Self, CourseError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            level,
            duration: duration.into(),
            module_count,
            lesson_count,
            topics,
        })
    }

    #[must_use]
    pub fn id(&self) -> &CourseId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn level(&self) -> CourseLevel {
        self.level
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Advertised module count (marketing copy, not the number of loaded modules).
    #[must_use]
    pub fn module_count(&self) -> u32 {
        self.module_count
    }

    /// Advertised lesson count.
    #[must_use]
    pub fn lesson_count(&self) -> u32 {
        self.lesson_count
    }

    #[must_use]
    pub fn topics(&self) -> &[String] {
        &self.topics
    }
}

impl Searchable for Course {
    type Facet = CourseLevel;

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2 + self.topics.len());
        fields.push(self.title.as_str());
        fields.push(self.description.as_str());
        fields.extend(self.topics.iter().map(String::as_str));
        fields
    }

    fn facet(&self) -> &CourseLevel {
        &self.level
    }
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseModule {
    pub id: ModuleId,
    pub course_id: CourseId,
    pub title: String,
    pub description: String,
    pub order: u32,
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// Lesson body and metadata. `content` is markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lesson {
    id: LessonId,
    module_id: ModuleId,
    course_id: CourseId,
    title: String,
    description: String,
    duration: String,
    video_url: Url,
    content: String,
    tips: Vec<String>,
    order: u32,
}

/// Unvalidated lesson fields, as written in content tables.
#[derive(Debug, Clone)]
pub struct LessonDraft {
    pub id: LessonId,
    pub module_id: ModuleId,
    pub course_id: CourseId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub video_url: String,
    pub content: String,
    pub tips: Vec<String>,
    pub order: u32,
}

impl LessonDraft {
    /// # Errors
    ///
    /// Returns `CourseError` for a blank title, a zero order, or an
    /// unparseable video url.
    pub fn validate(self) -> Result<Lesson, CourseError> {
        if self.title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        if self.order == 0 {
            return Err(CourseError::InvalidOrder);
        }
        let video_url =
            Url::parse(&self.video_url).map_err(|e| CourseError::InvalidVideoUrl {
                lesson: self.id.clone(),
                reason: e.to_string(),
            })?;

        Ok(Lesson {
            id: self.id,
            module_id: self.module_id,
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            duration: self.duration,
            video_url,
            content: self.content.trim().to_string(),
            tips: self.tips,
            order: self.order,
        })
    }
}

impl Lesson {
    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn module_id(&self) -> &ModuleId {
        &self.module_id
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn video_url(&self) -> &Url {
        &self.video_url
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(video_url: &str) -> LessonDraft {
        LessonDraft {
            id: LessonId::new("ps-l1").unwrap(),
            module_id: ModuleId::new("ps-m1").unwrap(),
            course_id: CourseId::new("password-security").unwrap(),
            title: "Why Strong Passwords Matter".into(),
            description: String::new(),
            duration: "10 min".into(),
            video_url: video_url.into(),
            content: "\n# Heading\n\nBody\n    ".into(),
            tips: vec![],
            order: 1,
        }
    }

    #[test]
    fn lesson_draft_trims_content() {
        let lesson = draft("https://example.com/video1").validate().unwrap();
        assert_eq!(lesson.content(), "# Heading\n\nBody");
        assert_eq!(lesson.video_url().host_str(), Some("example.com"));
    }

    #[test]
    fn lesson_serializes_video_url_as_string() {
        let lesson = draft("https://example.com/video1").validate().unwrap();
        let json = serde_json::to_value(&lesson).unwrap();
        assert_eq!(json["video_url"], "https://example.com/video1");
        assert_eq!(json["id"], "ps-l1");
    }

    #[test]
    fn lesson_draft_rejects_bad_url() {
        let err = draft("not a url").validate().unwrap_err();
        assert!(matches!(err, CourseError::InvalidVideoUrl { .. }));
    }

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!("Advanced".parse::<CourseLevel>().unwrap(), CourseLevel::Advanced);
        assert!("expert".parse::<CourseLevel>().is_err());
    }

    #[test]
    fn course_search_fields_include_topics() {
        let course = Course::new(
            CourseId::new("c").unwrap(),
            "Title",
            "Desc",
            CourseLevel::Beginner,
            "1 hour",
            1,
            1,
            vec!["VPNs".into()],
        )
        .unwrap();
        assert_eq!(course.search_fields(), vec!["Title", "Desc", "VPNs"]);
    }
}
