use thiserror::Error;

use aware_core::model::{CertificateError, IdError, QuizError};
use services::{AppServicesError, SessionError};

/// Everything the binary can fail with; printed once by `main`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no quiz with id {0}")]
    UnknownQuiz(String),

    #[error("no course with id {0}")]
    UnknownCourse(String),

    #[error("course {course} has no lesson {lesson}")]
    UnknownLesson { course: String, lesson: String },

    #[error("no blog post with id {0}")]
    UnknownPost(String),

    #[error("invalid answers: {0}")]
    InvalidAnswers(String),

    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Settings(#[from] QuizError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Progress(#[from] services::ProgressError),

    #[error(transparent)]
    Certificate(#[from] CertificateError),

    #[error(transparent)]
    Services(#[from] AppServicesError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
