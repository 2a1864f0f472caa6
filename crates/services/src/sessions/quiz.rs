use serde::Serialize;

use aware_core::model::{Answers, Phase, Quiz, unanswered};
use aware_core::scoring::{QuizScore, score_quiz};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Snapshot of a quiz session. Transitions go through [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizState {
    phase: Phase,
    current: usize,
    answers: Answers,
    remaining_secs: u32,
    score: Option<QuizScore>,
}

impl QuizState {
    /// Intro state with a full countdown and every question unanswered.
    #[must_use]
    pub fn new(quiz: &Quiz) -> Self {
        Self {
            phase: Phase::Intro,
            current: 0,
            answers: unanswered(quiz.len()),
            remaining_secs: quiz.settings().time_limit_secs(),
            score: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the question on screen.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, question: usize) -> Option<usize> {
        self.answers.get(question).copied().flatten()
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Set once, on entering `Phase::Result`.
    #[must_use]
    pub fn score(&self) -> Option<QuizScore> {
        self.score
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::new(
            self.answers.len(),
            self.answered_count(),
            self.current,
            self.phase == Phase::Result,
        )
    }

    fn require(&self, phase: Phase, action: &QuizAction) -> Result<(), SessionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action: action.name(),
                phase: self.phase,
            })
        }
    }

    fn finish(mut self, quiz: &Quiz) -> Self {
        self.score = Some(score_quiz(quiz, &self.answers));
        self.phase = Phase::Result;
        self
    }
}

//
// ─── ACTIONS ───────────────────────────────────────────────────────────────────
//

/// User intents and timer events accepted by a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Start,
    Select { question: usize, option: usize },
    Next,
    Previous,
    JumpTo(usize),
    Submit,
    /// One second of the countdown elapsed.
    Tick,
    Reset,
}

impl QuizAction {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            QuizAction::Start => "start",
            QuizAction::Select { .. } => "select an answer",
            QuizAction::Next => "advance",
            QuizAction::Previous => "retreat",
            QuizAction::JumpTo(_) => "jump to a question",
            QuizAction::Submit => "submit",
            QuizAction::Tick => "tick",
            QuizAction::Reset => "reset",
        }
    }
}

//
// ─── REDUCER ───────────────────────────────────────────────────────────────────
//

/// Applies one action to a quiz session.
///
/// Ticks outside `InProgress` are stale timer events and leave the state as is.
///
/// # Errors
///
/// Returns `SessionError::InvalidTransition` when the action is not allowed in
/// the current phase, and `QuestionOutOfRange` / `OptionOutOfRange` for
/// indices outside the quiz.
pub fn reduce(quiz: &Quiz, state: &QuizState, action: QuizAction) -> Result<QuizState, SessionError> {
    let len = quiz.len();
    match action {
        QuizAction::Start => {
            state.require(Phase::Intro, &action)?;
            Ok(QuizState {
                phase: Phase::InProgress,
                ..QuizState::new(quiz)
            })
        }
        QuizAction::Select { question, option } => {
            state.require(Phase::InProgress, &action)?;
            let Some(q) = quiz.question(question) else {
                return Err(SessionError::QuestionOutOfRange { index: question, len });
            };
            if option >= q.options().len() {
                return Err(SessionError::OptionOutOfRange {
                    question,
                    option,
                    len: q.options().len(),
                });
            }
            let mut next = state.clone();
            next.answers[question] = Some(option);
            Ok(next)
        }
        QuizAction::Next => {
            state.require(Phase::InProgress, &action)?;
            let mut next = state.clone();
            if next.current + 1 < len {
                next.current += 1;
            }
            Ok(next)
        }
        QuizAction::Previous => {
            state.require(Phase::InProgress, &action)?;
            let mut next = state.clone();
            next.current = next.current.saturating_sub(1);
            Ok(next)
        }
        QuizAction::JumpTo(index) => {
            state.require(Phase::InProgress, &action)?;
            if index >= len {
                return Err(SessionError::QuestionOutOfRange { index, len });
            }
            let mut next = state.clone();
            next.current = index;
            Ok(next)
        }
        QuizAction::Submit => {
            state.require(Phase::InProgress, &action)?;
            Ok(state.clone().finish(quiz))
        }
        QuizAction::Tick => {
            if state.phase != Phase::InProgress {
                return Ok(state.clone());
            }
            let mut next = state.clone();
            next.remaining_secs = next.remaining_secs.saturating_sub(1);
            if next.remaining_secs == 0 {
                return Ok(next.finish(quiz));
            }
            Ok(next)
        }
        QuizAction::Reset => {
            state.require(Phase::Result, &action)?;
            Ok(QuizState::new(quiz))
        }
    }
}
