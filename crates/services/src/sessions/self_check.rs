use serde::Serialize;

use aware_core::model::{Answers, Phase, SelfCheck, unanswered};
use aware_core::scoring::{SecurityScore, assess};

use super::progress::SessionProgress;
use crate::error::SessionError;

/// Snapshot of a self-check questionnaire run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelfCheckState {
    phase: Phase,
    current: usize,
    answers: Answers,
    score: Option<SecurityScore>,
}

impl SelfCheckState {
    #[must_use]
    pub fn new(check: &SelfCheck) -> Self {
        Self {
            phase: Phase::Intro,
            current: 0,
            answers: unanswered(check.len()),
            score: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    /// Answer recorded for the question on screen.
    #[must_use]
    pub fn current_answer(&self) -> Option<usize> {
        self.answers.get(self.current).copied().flatten()
    }

    /// Whether `Next` would move the session forward.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.phase == Phase::InProgress && self.current_answer().is_some()
    }

    #[must_use]
    pub fn score(&self) -> Option<SecurityScore> {
        self.score
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::new(
            self.answers.len(),
            self.answers.iter().filter(|a| a.is_some()).count(),
            self.current,
            self.phase == Phase::Result,
        )
    }

    fn require(&self, phase: Phase, action: SelfCheckAction) -> Result<(), SessionError> {
        if self.phase == phase {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                action: action.name(),
                phase: self.phase,
            })
        }
    }
}

/// User intents accepted by a self-check session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfCheckAction {
    Start,
    /// Records an option for the question on screen.
    Select { option: usize },
    /// Moves forward; from the last question this finishes the questionnaire.
    Next,
    Previous,
    Reset,
}

impl SelfCheckAction {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SelfCheckAction::Start => "start",
            SelfCheckAction::Select { .. } => "select an answer",
            SelfCheckAction::Next => "advance",
            SelfCheckAction::Previous => "retreat",
            SelfCheckAction::Reset => "reset",
        }
    }
}

/// Applies one action to a self-check session.
///
/// `Next` on an unanswered question returns the state unchanged.
///
/// # Errors
///
/// Returns `SessionError::InvalidTransition` when the action is not allowed in
/// the current phase and `OptionOutOfRange` for an unknown option.
pub fn reduce(
    check: &SelfCheck,
    state: &SelfCheckState,
    action: SelfCheckAction,
) -> Result<SelfCheckState, SessionError> {
    match action {
        SelfCheckAction::Start => {
            state.require(Phase::Intro, action)?;
            Ok(SelfCheckState {
                phase: Phase::InProgress,
                ..SelfCheckState::new(check)
            })
        }
        SelfCheckAction::Select { option } => {
            state.require(Phase::InProgress, action)?;
            let question = state.current;
            let Some(q) = check.question(question) else {
                return Err(SessionError::QuestionOutOfRange {
                    index: question,
                    len: check.len(),
                });
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
        SelfCheckAction::Next => {
            state.require(Phase::InProgress, action)?;
            if state.current_answer().is_none() {
                return Ok(state.clone());
            }
            let mut next = state.clone();
            if next.current + 1 < check.len() {
                next.current += 1;
            } else {
                next.score = Some(assess(check.questions(), &next.answers));
                next.phase = Phase::Result;
            }
            Ok(next)
        }
        SelfCheckAction::Previous => {
            state.require(Phase::InProgress, action)?;
            let mut next = state.clone();
            next.current = next.current.saturating_sub(1);
            Ok(next)
        }
        SelfCheckAction::Reset => {
            state.require(Phase::Result, action)?;
            Ok(SelfCheckState::new(check))
        }
    }
}
