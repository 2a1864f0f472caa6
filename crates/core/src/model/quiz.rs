use serde::Serialize;
use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("quiz must contain at least one question")]
    NoQuestions,

    #[error("question {question} has no options")]
    NoOptions { question: QuestionId },

    #[error("question {question} marks option {index} correct but only has {len} options")]
    CorrectOptionOutOfRange {
        question: QuestionId,
        index: usize,
        len: usize,
    },

    #[error("duplicate question id {0}")]
    DuplicateQuestion(QuestionId),

    #[error("time limit must be > 0 minutes")]
    InvalidTimeLimit,

    #[error("passing score must be between 0 and 100, got {0}")]
    InvalidPassingScore(u8),
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

/// Timing and grading configuration of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizSettings {
    time_limit_minutes: u32,
    passing_score: u8,
}

impl QuizSettings {
    /// Creates validated quiz settings.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidTimeLimit` for a zero time limit and
    /// `QuizError::InvalidPassingScore` for a percentage above 100.
    pub fn new(time_limit_minutes: u32, passing_score: u8) -> Result<Self, QuizError> {
        if time_limit_minutes == 0 {
            return Err(QuizError::InvalidTimeLimit);
        }
        if passing_score > 100 {
            return Err(QuizError::InvalidPassingScore(passing_score));
        }
        Ok(Self {
            time_limit_minutes,
            passing_score,
        })
    }

    #[must_use]
    pub fn time_limit_minutes(&self) -> u32 {
        self.time_limit_minutes
    }

    /// Countdown length in seconds.
    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_minutes.saturating_mul(60)
    }

    /// Minimum percentage required to pass.
    #[must_use]
    pub fn passing_score(&self) -> u8 {
        self.passing_score
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Multiple-choice question with exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    id: QuestionId,
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
    explanation: String,
}

impl QuizQuestion {
    /// # Errors
    ///
    /// Returns `QuizError::NoOptions` or `QuizError::CorrectOptionOutOfRange`
    /// when the option list cannot hold the declared correct answer.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        explanation: impl Into<String>,
    ) -> Result<Self, QuizError> {
        if options.is_empty() {
            return Err(QuizError::NoOptions { question: id });
        }
        if correct_option >= options.len() {
            return Err(QuizError::CorrectOptionOutOfRange {
                question: id,
                index: correct_option,
                len: options.len(),
            });
        }
        Ok(Self {
            id,
            prompt: prompt.into(),
            options,
            correct_option,
            explanation: explanation.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn is_correct(&self, answer: Option<usize>) -> bool {
        answer == Some(self.correct_option)
    }
}

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// A timed quiz: ordered questions plus settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    id: QuizId,
    title: String,
    description: String,
    settings: QuizSettings,
    questions: Vec<QuizQuestion>,
}

impl Quiz {
    /// # Errors
    ///
    /// Returns `QuizError` if the title is blank, no questions are given, or
    /// two questions share an id.
    pub fn new(
        id: QuizId,
        title: impl Into<String>,
        description: impl Into<String>,
        settings: QuizSettings,
        questions: Vec<QuizQuestion>,
    ) -> Result<Self, QuizError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        for (i, q) in questions.iter().enumerate() {
            if questions[..i].iter().any(|prev| prev.id == q.id) {
                return Err(QuizError::DuplicateQuestion(q.id.clone()));
            }
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            settings,
            questions,
        })
    }

    /// Same quiz with different settings (e.g. a configured time limit).
    #[must_use]
    pub fn with_settings(mut self, settings: QuizSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn id(&self) -> &QuizId {
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
    pub fn settings(&self) -> QuizSettings {
        self.settings
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&QuizQuestion> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qid(raw: &str) -> QuestionId {
        QuestionId::new(raw).unwrap()
    }

    fn question(id: &str) -> QuizQuestion {
        QuizQuestion::new(qid(id), "Q", vec!["a".into(), "b".into()], 1, "because").unwrap()
    }

    #[test]
    fn settings_reject_zero_time_limit() {
        assert_eq!(QuizSettings::new(0, 70), Err(QuizError::InvalidTimeLimit));
    }

    #[test]
    fn settings_reject_passing_score_over_100() {
        assert_eq!(
            QuizSettings::new(10, 101),
            Err(QuizError::InvalidPassingScore(101))
        );
    }

    #[test]
    fn settings_convert_minutes_to_seconds() {
        let settings = QuizSettings::new(10, 70).unwrap();
        assert_eq!(settings.time_limit_secs(), 600);
    }

    #[test]
    fn question_rejects_out_of_range_correct_option() {
        let err = QuizQuestion::new(qid("q1"), "Q", vec!["a".into()], 1, "").unwrap_err();
        assert!(matches!(
            err,
            QuizError::CorrectOptionOutOfRange { index: 1, len: 1, .. }
        ));
    }

    #[test]
    fn question_unanswered_is_never_correct() {
        let q = question("q1");
        assert!(!q.is_correct(None));
        assert!(!q.is_correct(Some(0)));
        assert!(q.is_correct(Some(1)));
    }

    #[test]
    fn quiz_rejects_duplicate_question_ids() {
        let settings = QuizSettings::new(5, 50).unwrap();
        let err = Quiz::new(
            QuizId::new("dup").unwrap(),
            "Dup",
            "",
            settings,
            vec![question("q1"), question("q1")],
        )
        .unwrap_err();
        assert_eq!(err, QuizError::DuplicateQuestion(qid("q1")));
    }

    #[test]
    fn quiz_rejects_empty_question_list() {
        let settings = QuizSettings::new(5, 50).unwrap();
        let err = Quiz::new(QuizId::new("empty").unwrap(), "Empty", "", settings, vec![])
            .unwrap_err();
        assert_eq!(err, QuizError::NoQuestions);
    }
}
