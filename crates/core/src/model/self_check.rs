use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SelfCheckError {
    #[error("self-check must contain at least one question")]
    NoQuestions,

    #[error("question {question} has no options")]
    NoOptions { question: QuestionId },

    #[error("duplicate question id {0}")]
    DuplicateQuestion(QuestionId),

    #[error("no security level content for tier {0}")]
    MissingLevel(SecurityTier),

    #[error("security level content for tier {0} is defined twice")]
    DuplicateLevel(SecurityTier),

    #[error("unknown security tier: {0}")]
    UnknownTier(String),
}

//
// ─── TIER ──────────────────────────────────────────────────────────────────────
//

/// Qualitative security level assigned from a self-check score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecurityTier {
    Low,
    Medium,
    High,
}

impl SecurityTier {
    pub const ALL: [SecurityTier; 3] = [SecurityTier::Low, SecurityTier::Medium, SecurityTier::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SecurityTier::Low => "low",
            SecurityTier::Medium => "medium",
            SecurityTier::High => "high",
        }
    }
}

impl fmt::Display for SecurityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SecurityTier {
    type Err = SelfCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(SelfCheckError::UnknownTier(other.to_string())),
        }
    }
}

/// Static content describing one tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityLevel {
    pub tier: SecurityTier,
    pub title: String,
    pub description: String,
    pub recommendations: Vec<String>,
}

//
// ─── QUESTIONS ─────────────────────────────────────────────────────────────────
//

/// Answer choice worth a fixed number of points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredOption {
    pub text: String,
    pub score: u32,
}

impl ScoredOption {
    #[must_use]
    pub fn new(text: impl Into<String>, score: u32) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfCheckQuestion {
    id: QuestionId,
    prompt: String,
    options: Vec<ScoredOption>,
}

impl SelfCheckQuestion {
    /// # Errors
    ///
    /// Returns `SelfCheckError::NoOptions` for an empty option list.
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<ScoredOption>,
    ) -> Result<Self, SelfCheckError> {
        if options.is_empty() {
            return Err(SelfCheckError::NoOptions { question: id });
        }
        Ok(Self {
            id,
            prompt: prompt.into(),
            options,
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
    pub fn options(&self) -> &[ScoredOption] {
        &self.options
    }

    /// Points for the given option; out-of-range and unanswered count as 0.
    #[must_use]
    pub fn score_of(&self, answer: Option<usize>) -> u32 {
        answer
            .and_then(|i| self.options.get(i))
            .map_or(0, |option| option.score)
    }

    /// Highest attainable points for this question.
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.options.iter().map(|o| o.score).max().unwrap_or(0)
    }
}

//
// ─── QUESTIONNAIRE ─────────────────────────────────────────────────────────────
//

/// Self-assessment questionnaire plus the content for each tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfCheck {
    questions: Vec<SelfCheckQuestion>,
    levels: Vec<SecurityLevel>,
}

impl SelfCheck {
    /// # Errors
    ///
    /// Returns `SelfCheckError` when there are no questions, ids repeat, or a
    /// tier has missing or duplicated content.
    pub fn new(
        questions: Vec<SelfCheckQuestion>,
        levels: Vec<SecurityLevel>,
    ) -> Result<Self, SelfCheckError> {
        if questions.is_empty() {
            return Err(SelfCheckError::NoQuestions);
        }
        for (i, q) in questions.iter().enumerate() {
            if questions[..i].iter().any(|prev| prev.id == q.id) {
                return Err(SelfCheckError::DuplicateQuestion(q.id.clone()));
            }
        }
        for tier in SecurityTier::ALL {
            match levels.iter().filter(|l| l.tier == tier).count() {
                0 => return Err(SelfCheckError::MissingLevel(tier)),
                1 => {}
                _ => return Err(SelfCheckError::DuplicateLevel(tier)),
            }
        }
        Ok(Self { questions, levels })
    }

    #[must_use]
    pub fn questions(&self) -> &[SelfCheckQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&SelfCheckQuestion> {
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

    /// Content for a tier. Every tier is present (checked in `new`).
    #[must_use]
    pub fn level(&self, tier: SecurityTier) -> Option<&SecurityLevel> {
        self.levels.iter().find(|l| l.tier == tier)
    }
}
