use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for parsing an identifier slug.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdError {
    #[error("{kind} cannot be empty")]
    Empty { kind: &'static str },

    #[error("{kind} contains invalid character {found:?} (allowed: a-z, 0-9, '-')")]
    InvalidChar { kind: &'static str, found: char },
}

fn validate_slug(kind: &'static str, raw: &str) -> Result<(), IdError> {
    if raw.is_empty() {
        return Err(IdError::Empty { kind });
    }
    if let Some(found) = raw
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(IdError::InvalidChar { kind, found });
    }
    Ok(())
}

macro_rules! slug_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Creates a validated identifier.
            ///
            /// # Errors
            ///
            /// Returns `IdError` if the value is empty or not a lowercase slug.
            pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
                let value = value.into();
                validate_slug(stringify!($name), &value)?;
                Ok(Self(value))
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

slug_id!(
    /// Identifier of a quiz.
    QuizId
);
slug_id!(
    /// Identifier of a question, unique within its quiz or questionnaire.
    QuestionId
);
slug_id!(
    /// Identifier of a course.
    CourseId
);
slug_id!(
    /// Identifier of a course module.
    ModuleId
);
slug_id!(
    /// Identifier of a lesson.
    LessonId
);
slug_id!(
    /// Identifier of a blog post.
    PostId
);

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_display() {
        let id = CourseId::new("password-security").unwrap();
        assert_eq!(id.to_string(), "password-security");
    }

    #[test]
    fn test_lesson_id_from_str() {
        let id: LessonId = "ps-l1".parse().unwrap();
        assert_eq!(id.as_str(), "ps-l1");
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = QuizId::new("").unwrap_err();
        assert_eq!(err, IdError::Empty { kind: "QuizId" });
    }

    #[test]
    fn test_uppercase_id_rejected() {
        let err = "Security-Basics".parse::<QuizId>().unwrap_err();
        assert!(matches!(err, IdError::InvalidChar { found: 'S', .. }));
    }

    #[test]
    fn test_id_debug_names_kind() {
        let id = PostId::new("ai-voice-scams").unwrap();
        assert_eq!(format!("{id:?}"), "PostId(ai-voice-scams)");
    }

    #[test]
    fn test_id_serde_validates() {
        let ok: ModuleId = serde_json::from_str("\"ps-m1\"").unwrap();
        assert_eq!(ok.as_str(), "ps-m1");
        assert!(serde_json::from_str::<ModuleId>("\"has space\"").is_err());
    }
}
