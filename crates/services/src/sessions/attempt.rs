use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use aware_core::model::{Phase, Quiz, SecurityLevel, SelfCheck};
use aware_core::scoring::{QuizScore, score_quiz};

use super::countdown::{Countdown, TICK_PERIOD};
use super::quiz::{self, QuizAction, QuizState};
use super::self_check::{self, SelfCheckAction, SelfCheckState};
use crate::error::SessionError;

/// What a countdown tick did to a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining_secs: u32 },
    /// Time ran out and the attempt was submitted as is.
    Expired(QuizScore),
}

//
// ─── QUIZ ATTEMPT ──────────────────────────────────────────────────────────────
//

/// One user's run through a quiz, owning its state and countdown.
///
/// The countdown task exists only while the attempt is in progress.
pub struct QuizAttempt {
    id: Uuid,
    quiz: Arc<Quiz>,
    state: QuizState,
    timed: bool,
    countdown: Option<Countdown>,
    opened_at: DateTime<Utc>,
}

impl QuizAttempt {
    #[must_use]
    pub fn new(quiz: Arc<Quiz>, opened_at: DateTime<Utc>) -> Self {
        let state = QuizState::new(&quiz);
        Self {
            id: Uuid::new_v4(),
            quiz,
            state,
            timed: true,
            countdown: None,
            opened_at,
        }
    }

    /// Disables the background countdown; ticks can still be dispatched by hand.
    #[must_use]
    pub fn with_countdown(mut self, timed: bool) -> Self {
        self.timed = timed;
        self
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn state(&self) -> &QuizState {
        &self.state
    }

    #[must_use]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.timed
    }

    #[must_use]
    pub fn countdown_running(&self) -> bool {
        self.countdown.is_some()
    }

    /// Applies an action and starts or stops the countdown to match the new phase.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the reducer, and returns
    /// `SessionError::NoRuntime` when a timed attempt would enter the
    /// in-progress phase outside a tokio runtime. The state is unchanged then.
    pub fn dispatch(&mut self, action: QuizAction) -> Result<&QuizState, SessionError> {
        let next = quiz::reduce(&self.quiz, &self.state, action)
            .and_then(|next| self.sync_countdown(&next).map(|()| next));
        let next = match next {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(attempt = %self.id, action = action.name(), error = %err, "quiz action rejected");
                return Err(err);
            }
        };
        let from = self.state.phase();
        self.state = next;
        if from != self.state.phase() {
            tracing::info!(
                attempt = %self.id,
                quiz = %self.quiz.id(),
                from = %from,
                to = %self.state.phase(),
                "quiz phase changed"
            );
            if let Some(score) = self.state.score() {
                tracing::info!(
                    attempt = %self.id,
                    correct = score.correct,
                    total = score.total,
                    percentage = score.percentage,
                    passed = score.passed,
                    "quiz scored"
                );
            }
        }
        Ok(&self.state)
    }

    /// Runs the countdown exactly while `next` is in progress.
    fn sync_countdown(&mut self, next: &QuizState) -> Result<(), SessionError> {
        let wanted = self.timed && next.phase() == Phase::InProgress;
        match (wanted, self.countdown.is_some()) {
            (true, false) => self.countdown = Some(Countdown::start(TICK_PERIOD)?),
            (false, true) => self.countdown = None,
            _ => {}
        }
        Ok(())
    }

    /// Waits for the next countdown tick and applies it.
    ///
    /// Never resolves while no countdown is running, which makes it safe to
    /// race against user input in `tokio::select!`.
    ///
    /// # Errors
    ///
    /// Propagates `SessionError` from the reducer.
    pub async fn next_tick(&mut self) -> Result<TickOutcome, SessionError> {
        let ticked = match self.countdown.as_mut() {
            Some(countdown) => countdown.tick().await,
            None => None,
        };
        if ticked.is_none() {
            std::future::pending::<()>().await;
        }
        let state = self.dispatch(QuizAction::Tick)?;
        Ok(match state.score() {
            Some(score) if state.phase() == Phase::Result => TickOutcome::Expired(score),
            _ => TickOutcome::Running {
                remaining_secs: state.remaining_secs(),
            },
        })
    }

    /// # Errors
    ///
    /// See [`QuizAttempt::dispatch`].
    pub fn start(&mut self) -> Result<&QuizState, SessionError> {
        self.dispatch(QuizAction::Start)
    }

    /// # Errors
    ///
    /// See [`QuizAttempt::dispatch`].
    pub fn select_answer(&mut self, question: usize, option: usize) -> Result<&QuizState, SessionError> {
        self.dispatch(QuizAction::Select { question, option })
    }

    /// # Errors
    ///
    /// See [`QuizAttempt::dispatch`].
    pub fn advance(&mut self) -> Result<&QuizState, SessionError> {
        self.dispatch(QuizAction::Next)
    }

    /// # Errors
    ///
    /// See [`QuizAttempt::dispatch`].
    pub fn retreat(&mut self) -> Result<&QuizState, SessionError> {
        self.dispatch(QuizAction::Previous)
    }

    /// # Errors
    ///
    /// See [`QuizAttempt::dispatch`].
    pub fn jump_to(&mut self, index: usize) -> Result<&QuizState, SessionError> {
        self.dispatch(QuizAction::JumpTo(index))
    }

    /// # Errors
    ///
    /// See [`QuizAttempt::dispatch`].
    pub fn submit(&mut self) -> Result<QuizScore, SessionError> {
        self.dispatch(QuizAction::Submit)?;
        Ok(self
            .state
            .score()
            .unwrap_or_else(|| score_quiz(&self.quiz, self.state.answers())))
    }

    /// # Errors
    ///
    /// See [`QuizAttempt::dispatch`].
    pub fn reset(&mut self) -> Result<&QuizState, SessionError> {
        self.dispatch(QuizAction::Reset)
    }
}

impl fmt::Debug for QuizAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizAttempt")
            .field("id", &self.id)
            .field("quiz", self.quiz.id())
            .field("phase", &self.state.phase())
            .field("countdown_running", &self.countdown.is_some())
            .finish_non_exhaustive()
    }
}

//
// ─── SELF-CHECK ATTEMPT ────────────────────────────────────────────────────────
//

/// One user's run through the security self-check.
#[derive(Debug, Clone)]
pub struct SelfCheckAttempt {
    id: Uuid,
    check: Arc<SelfCheck>,
    state: SelfCheckState,
    opened_at: DateTime<Utc>,
}

impl SelfCheckAttempt {
    #[must_use]
    pub fn new(check: Arc<SelfCheck>, opened_at: DateTime<Utc>) -> Self {
        let state = SelfCheckState::new(&check);
        Self {
            id: Uuid::new_v4(),
            check,
            state,
            opened_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn check(&self) -> &SelfCheck {
        &self.check
    }

    #[must_use]
    pub fn state(&self) -> &SelfCheckState {
        &self.state
    }

    #[must_use]
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Level content for the scored tier, once the check is finished.
    #[must_use]
    pub fn level(&self) -> Option<&SecurityLevel> {
        self.state
            .score()
            .and_then(|score| self.check.level(score.tier))
    }

    /// # Errors
    ///
    /// Propagates `SessionError` from the reducer; the state is unchanged then.
    pub fn dispatch(&mut self, action: SelfCheckAction) -> Result<&SelfCheckState, SessionError> {
        let next = self_check::reduce(&self.check, &self.state, action)?;
        let from = self.state.phase();
        self.state = next;
        if from != self.state.phase() {
            tracing::info!(attempt = %self.id, from = %from, to = %self.state.phase(), "self-check phase changed");
        }
        if let (Phase::Result, Some(score)) = (self.state.phase(), self.state.score()) {
            if from != Phase::Result {
                tracing::info!(
                    attempt = %self.id,
                    total = score.total,
                    max = score.max,
                    tier = %score.tier,
                    "self-check scored"
                );
            }
        }
        Ok(&self.state)
    }

    /// # Errors
    ///
    /// See [`SelfCheckAttempt::dispatch`].
    pub fn start(&mut self) -> Result<&SelfCheckState, SessionError> {
        self.dispatch(SelfCheckAction::Start)
    }

    /// # Errors
    ///
    /// See [`SelfCheckAttempt::dispatch`].
    pub fn select_answer(&mut self, option: usize) -> Result<&SelfCheckState, SessionError> {
        self.dispatch(SelfCheckAction::Select { option })
    }

    /// # Errors
    ///
    /// See [`SelfCheckAttempt::dispatch`].
    pub fn advance(&mut self) -> Result<&SelfCheckState, SessionError> {
        self.dispatch(SelfCheckAction::Next)
    }

    /// # Errors
    ///
    /// See [`SelfCheckAttempt::dispatch`].
    pub fn retreat(&mut self) -> Result<&SelfCheckState, SessionError> {
        self.dispatch(SelfCheckAction::Previous)
    }

    /// # Errors
    ///
    /// See [`SelfCheckAttempt::dispatch`].
    pub fn reset(&mut self) -> Result<&SelfCheckState, SessionError> {
        self.dispatch(SelfCheckAction::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aware_core::model::{QuestionId, QuizId, QuizQuestion, QuizSettings};
    use aware_core::time::fixed_now;

    fn quiz() -> Arc<Quiz> {
        let questions = (0..2)
            .map(|i| {
                QuizQuestion::new(
                    QuestionId::new(format!("q{i}")).unwrap(),
                    "Pick one",
                    vec!["yes".into(), "no".into()],
                    0,
                    "",
                )
                .unwrap()
            })
            .collect();
        Arc::new(
            Quiz::new(
                QuizId::new("tiny").unwrap(),
                "Tiny",
                "",
                QuizSettings::new(1, 50).unwrap(),
                questions,
            )
            .unwrap(),
        )
    }

    #[test]
    fn untimed_attempt_never_starts_a_countdown() {
        let mut attempt = QuizAttempt::new(quiz(), fixed_now()).with_countdown(false);
        attempt.start().unwrap();
        assert!(!attempt.countdown_running());
        attempt.select_answer(0, 0).unwrap();
        let score = attempt.submit().unwrap();
        assert_eq!(score.correct, 1);
        assert!(score.passed);
    }

    #[test]
    fn rejected_action_leaves_state_alone() {
        let mut attempt = QuizAttempt::new(quiz(), fixed_now()).with_countdown(false);
        let before = attempt.state().clone();
        assert!(attempt.submit().is_err());
        assert_eq!(attempt.state(), &before);
    }

    #[test]
    fn timed_start_outside_a_runtime_fails_cleanly() {
        let mut attempt = QuizAttempt::new(quiz(), fixed_now());
        let before = attempt.state().clone();
        assert_eq!(attempt.start().unwrap_err(), SessionError::NoRuntime);
        assert_eq!(attempt.state(), &before);
        assert_eq!(attempt.state().phase(), Phase::Intro);
        assert!(!attempt.countdown_running());
    }

    #[tokio::test(start_paused = true)]
    async fn timed_start_inside_a_runtime_runs_the_countdown() {
        let mut attempt = QuizAttempt::new(quiz(), fixed_now());
        attempt.start().unwrap();
        assert_eq!(attempt.state().phase(), Phase::InProgress);
        assert!(attempt.countdown_running());
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_lives_only_while_in_progress() {
        let mut attempt = QuizAttempt::new(quiz(), fixed_now());
        assert!(!attempt.countdown_running());
        attempt.start().unwrap();
        assert!(attempt.countdown_running());
        let outcome = attempt.next_tick().await.unwrap();
        assert_eq!(outcome, TickOutcome::Running { remaining_secs: 59 });
        attempt.submit().unwrap();
        assert!(!attempt.countdown_running());
        attempt.reset().unwrap();
        assert!(!attempt.countdown_running());
        assert_eq!(attempt.state().remaining_secs(), 60);
    }
}
