use std::fmt;
use std::sync::Arc;

use aware_core::model::{Quiz, QuizId, QuizSettings};
use content::QuestionProvider;

use super::attempt::{QuizAttempt, SelfCheckAttempt};
use crate::Clock;

/// Opens quiz and self-check attempts over the shipped question sequences.
#[derive(Clone)]
pub struct AssessmentService {
    clock: Clock,
    questions: Arc<dyn QuestionProvider>,
    settings_override: Option<QuizSettings>,
    timed: bool,
}

impl AssessmentService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<dyn QuestionProvider>) -> Self {
        Self {
            clock,
            questions,
            settings_override: None,
            timed: true,
        }
    }

    /// Replaces every quiz's time limit and passing score.
    #[must_use]
    pub fn with_settings_override(mut self, settings: Option<QuizSettings>) -> Self {
        self.settings_override = settings;
        self
    }

    /// Controls whether opened quiz attempts run a background countdown.
    #[must_use]
    pub fn with_countdown(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    #[must_use]
    pub fn quizzes(&self) -> Vec<Arc<Quiz>> {
        self.questions
            .quizzes()
            .iter()
            .map(|quiz| self.effective(quiz))
            .collect()
    }

    /// Looks a quiz up with any settings override applied.
    #[must_use]
    pub fn quiz(&self, id: &QuizId) -> Option<Arc<Quiz>> {
        self.questions.quiz(id).map(|quiz| self.effective(&quiz))
    }

    /// Opens a fresh attempt in the intro phase; `None` for an unknown quiz.
    #[must_use]
    pub fn open_quiz(&self, id: &QuizId) -> Option<QuizAttempt> {
        let Some(quiz) = self.quiz(id) else {
            tracing::warn!(quiz = %id, "quiz not found");
            return None;
        };
        let attempt = QuizAttempt::new(quiz, self.clock.now()).with_countdown(self.timed);
        tracing::debug!(attempt = %attempt.id(), quiz = %id, "quiz attempt opened");
        Some(attempt)
    }

    #[must_use]
    pub fn open_self_check(&self) -> SelfCheckAttempt {
        let attempt = SelfCheckAttempt::new(self.questions.self_check(), self.clock.now());
        tracing::debug!(attempt = %attempt.id(), "self-check attempt opened");
        attempt
    }

    fn effective(&self, quiz: &Arc<Quiz>) -> Arc<Quiz> {
        match self.settings_override {
            Some(settings) if settings != quiz.settings() => {
                Arc::new(Quiz::clone(quiz).with_settings(settings))
            }
            _ => Arc::clone(quiz),
        }
    }
}

impl fmt::Debug for AssessmentService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AssessmentService")
            .field("clock", &self.clock)
            .field("settings_override", &self.settings_override)
            .field("timed", &self.timed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aware_core::model::Phase;
    use aware_core::time::fixed_clock;
    use content::StaticContent;

    fn service() -> AssessmentService {
        let content = Arc::new(StaticContent::load().unwrap());
        AssessmentService::new(fixed_clock(), content).with_countdown(false)
    }

    #[test]
    fn unknown_quiz_is_not_found() {
        let missing = QuizId::new("does-not-exist").unwrap();
        assert!(service().open_quiz(&missing).is_none());
    }

    #[test]
    fn opened_attempt_starts_in_intro() {
        let id = QuizId::new("security-basics").unwrap();
        let attempt = service().open_quiz(&id).unwrap();
        assert_eq!(attempt.state().phase(), Phase::Intro);
        assert_eq!(attempt.state().remaining_secs(), 600);
        assert_eq!(attempt.opened_at(), aware_core::time::fixed_now());
    }

    #[test]
    fn settings_override_changes_time_limit() {
        let id = QuizId::new("security-basics").unwrap();
        let settings = QuizSettings::new(2, 80).unwrap();
        let service = service().with_settings_override(Some(settings));
        let attempt = service.open_quiz(&id).unwrap();
        assert_eq!(attempt.state().remaining_secs(), 120);
        assert_eq!(attempt.quiz().settings().passing_score(), 80);
    }

    #[test]
    fn self_check_has_eight_questions() {
        let attempt = service().open_self_check();
        assert_eq!(attempt.check().len(), 8);
        assert!(attempt.level().is_none());
    }
}
