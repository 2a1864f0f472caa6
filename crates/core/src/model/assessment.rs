use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse lifecycle stage of an assessment session.
///
/// The only legal moves are `Intro -> InProgress -> Result` and the explicit
/// reset `Result -> Intro`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    #[default]
    Intro,
    InProgress,
    Result,
}

impl Phase {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Intro => "intro",
            Phase::InProgress => "in-progress",
            Phase::Result => "result",
        }
    }

    #[must_use]
    pub fn is_in_progress(self) -> bool {
        matches!(self, Phase::InProgress)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slot per question; `None` means unanswered.
pub type Answers = Vec<Option<usize>>;

/// Fresh answer mapping with every question unanswered.
#[must_use]
pub fn unanswered(question_count: usize) -> Answers {
    vec![None; question_count]
}
