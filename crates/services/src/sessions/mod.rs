mod attempt;
mod countdown;
mod progress;
pub mod quiz;
mod service;
pub mod self_check;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use attempt::{QuizAttempt, SelfCheckAttempt, TickOutcome};
pub use countdown::{Countdown, TICK_PERIOD};
pub use progress::SessionProgress;
pub use quiz::{QuizAction, QuizState};
pub use self_check::{SelfCheckAction, SelfCheckState};
pub use service::AssessmentService;
