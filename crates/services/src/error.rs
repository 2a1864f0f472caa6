//! Shared error types for the services crate.

use thiserror::Error;

use aware_core::model::{LessonId, Phase};
use content::ContentError;

/// Errors emitted by assessment sessions.
///
/// Every variant is a caller bug (the presentation layer builds indices from
/// the same collections, and timed attempts belong on a tokio runtime); the
/// session state is left untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot {action} while the session is in phase {phase}")]
    InvalidTransition { action: &'static str, phase: Phase },

    #[error("question index {index} out of range for {len} questions")]
    QuestionOutOfRange { index: usize, len: usize },

    #[error("option {option} out of range for question {question} with {len} options")]
    OptionOutOfRange {
        question: usize,
        option: usize,
        len: usize,
    },

    #[error("a timed quiz needs a running tokio runtime for its countdown")]
    NoRuntime,
}

/// Errors emitted by `CourseProgress`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("lesson {0} is not part of this course")]
    UnknownLesson(LessonId),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Content(#[from] ContentError),
}
