use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use aware_core::model::{
    BlogPost, Course, CourseError, CourseModule, IdError, Lesson, PostError, Quiz, QuizError,
    QuizId, SelfCheck, SelfCheckError,
};
use thiserror::Error;

/// Errors raised while assembling content tables.
///
/// Content is static, so any of these means the shipped tables are malformed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Quiz(#[from] QuizError),

    #[error(transparent)]
    SelfCheck(#[from] SelfCheckError),

    #[error(transparent)]
    Course(#[from] CourseError),

    #[error(transparent)]
    Post(#[from] PostError),

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("{kind} {id} references unknown {target} {target_id}")]
    DanglingReference {
        kind: &'static str,
        id: String,
        target: &'static str,
        target_id: String,
    },

    #[error("lesson {lesson} belongs to course {lesson_course} but its module is in {module_course}")]
    CourseMismatch {
        lesson: String,
        lesson_course: String,
        module_course: String,
    },
}

/// Source of the read-only question sequences.
pub trait QuestionProvider: Send + Sync {
    fn quizzes(&self) -> &[Arc<Quiz>];

    /// Looks a quiz up by id; `None` when it does not exist.
    fn quiz(&self, id: &QuizId) -> Option<Arc<Quiz>> {
        self.quizzes().iter().find(|quiz| quiz.id() == id).cloned()
    }

    fn self_check(&self) -> Arc<SelfCheck>;
}

/// Read access to courses, modules, lessons and blog posts, in source order.
pub trait CatalogRepository: Send + Sync {
    fn courses(&self) -> &[Course];

    fn modules(&self) -> &[CourseModule];

    fn lessons(&self) -> &[Lesson];

    fn posts(&self) -> &[BlogPost];
}

/// Raw tables before integrity checks.
#[derive(Debug, Clone)]
pub struct ContentTables {
    pub quizzes: Vec<Quiz>,
    pub self_check: SelfCheck,
    pub courses: Vec<Course>,
    pub modules: Vec<CourseModule>,
    pub lessons: Vec<Lesson>,
    pub posts: Vec<BlogPost>,
}

/// Immutable in-memory content shared by every service.
#[derive(Clone)]
pub struct StaticContent {
    quizzes: Arc<[Arc<Quiz>]>,
    self_check: Arc<SelfCheck>,
    courses: Arc<[Course]>,
    modules: Arc<[CourseModule]>,
    lessons: Arc<[Lesson]>,
    posts: Arc<[BlogPost]>,
}

impl StaticContent {
    /// Loads and checks the content shipped with the binary.
    ///
    /// # Errors
    ///
    /// Returns `ContentError` if the built-in tables are malformed.
    pub fn load() -> Result<Self, ContentError> {
        Self::new(crate::tables::builtin()?)
    }

    /// Checks referential integrity and freezes the tables.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::DuplicateId` for repeated ids and
    /// `ContentError::DanglingReference` / `CourseMismatch` for broken links
    /// between courses, modules and lessons.
    pub fn new(tables: ContentTables) -> Result<Self, ContentError> {
        ensure_unique("quiz", tables.quizzes.iter().map(|q| q.id().as_str()))?;
        ensure_unique("course", tables.courses.iter().map(|c| c.id().as_str()))?;
        ensure_unique("module", tables.modules.iter().map(|m| m.id.as_str()))?;
        ensure_unique("lesson", tables.lessons.iter().map(|l| l.id().as_str()))?;
        ensure_unique("post", tables.posts.iter().map(|p| p.id().as_str()))?;

        for module in &tables.modules {
            if !tables.courses.iter().any(|c| c.id() == &module.course_id) {
                return Err(ContentError::DanglingReference {
                    kind: "module",
                    id: module.id.to_string(),
                    target: "course",
                    target_id: module.course_id.to_string(),
                });
            }
        }

        for lesson in &tables.lessons {
            let Some(module) = tables.modules.iter().find(|m| &m.id == lesson.module_id()) else {
                return Err(ContentError::DanglingReference {
                    kind: "lesson",
                    id: lesson.id().to_string(),
                    target: "module",
                    target_id: lesson.module_id().to_string(),
                });
            };
            if &module.course_id != lesson.course_id() {
                return Err(ContentError::CourseMismatch {
                    lesson: lesson.id().to_string(),
                    lesson_course: lesson.course_id().to_string(),
                    module_course: module.course_id.to_string(),
                });
            }
        }

        tracing::debug!(
            quizzes = tables.quizzes.len(),
            courses = tables.courses.len(),
            lessons = tables.lessons.len(),
            posts = tables.posts.len(),
            "content loaded"
        );

        Ok(Self {
            quizzes: tables.quizzes.into_iter().map(Arc::new).collect(),
            self_check: Arc::new(tables.self_check),
            courses: tables.courses.into(),
            modules: tables.modules.into(),
            lessons: tables.lessons.into(),
            posts: tables.posts.into(),
        })
    }
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl QuestionProvider for StaticContent {
    fn quizzes(&self) -> &[Arc<Quiz>] {
        &self.quizzes
    }

    fn self_check(&self) -> Arc<SelfCheck> {
        Arc::clone(&self.self_check)
    }
}

impl CatalogRepository for StaticContent {
    fn courses(&self) -> &[Course] {
        &self.courses
    }

    fn modules(&self) -> &[CourseModule] {
        &self.modules
    }

    fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    fn posts(&self) -> &[BlogPost] {
        &self.posts
    }
}

impl fmt::Debug for StaticContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticContent")
            .field("quizzes_len", &self.quizzes.len())
            .field("self_check_len", &self.self_check.len())
            .field("courses_len", &self.courses.len())
            .field("lessons_len", &self.lessons.len())
            .field("posts_len", &self.posts.len())
            .finish_non_exhaustive()
    }
}
