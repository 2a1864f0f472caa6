mod assessment;
mod blog;
mod certificate;
mod course;
mod ids;
mod quiz;
pub mod search;
mod self_check;

pub use assessment::{Answers, Phase, unanswered};
pub use blog::{BlogCategory, BlogPost, PostError};
pub use certificate::{Certificate, CertificateError, RecipientName};
pub use course::{Course, CourseError, CourseLevel, CourseModule, Lesson, LessonDraft};
pub use ids::{CourseId, IdError, LessonId, ModuleId, PostId, QuestionId, QuizId};
pub use quiz::{Quiz, QuizError, QuizQuestion, QuizSettings};
pub use search::{Filter, Searchable, filter_records};
pub use self_check::{
    ScoredOption, SecurityLevel, SecurityTier, SelfCheck, SelfCheckError, SelfCheckQuestion,
};
