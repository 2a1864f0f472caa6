use serde::Serialize;

use aware_core::model::{SecurityTier, SelfCheck};
use services::SelfCheckState;

use crate::vm::quiz_vm::{OptionVm, option_letter};
use crate::vm::tone::Tone;

/// Presentation attributes of a security tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TierStyle {
    pub badge: &'static str,
    pub icon: &'static str,
    pub tone: Tone,
}

#[must_use]
pub fn tier_style(tier: SecurityTier) -> TierStyle {
    match tier {
        SecurityTier::Low => TierStyle {
            badge: "Low",
            icon: "shield-alert",
            tone: Tone::Danger,
        },
        SecurityTier::Medium => TierStyle {
            badge: "Medium",
            icon: "shield",
            tone: Tone::Warning,
        },
        SecurityTier::High => TierStyle {
            badge: "High",
            icon: "shield-check",
            tone: Tone::Success,
        },
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SelfCheckQuestionVm {
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    pub can_advance: bool,
    pub is_first: bool,
    /// `Next` on this question finishes the check.
    pub is_last: bool,
    pub progress_percent: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelfCheckResultVm {
    pub title: String,
    pub description: String,
    pub recommendations: Vec<String>,
    pub style: TierStyle,
    pub total: u32,
    pub max: u32,
    pub percentage: f64,
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn map_self_check_question(
    check: &SelfCheck,
    state: &SelfCheckState,
) -> Option<SelfCheckQuestionVm> {
    let index = state.current();
    let question = check.question(index)?;
    let selected = state.current_answer();
    let total = check.len();

    Some(SelfCheckQuestionVm {
        number: index + 1,
        total,
        prompt: question.prompt().to_owned(),
        options: question
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| OptionVm {
                letter: option_letter(i),
                text: option.text.clone(),
                selected: selected == Some(i),
            })
            .collect(),
        can_advance: state.can_advance(),
        is_first: index == 0,
        is_last: index + 1 == total,
        progress_percent: services::bar_percent((index + 1) as f64, total as f64),
    })
}

/// Result view once the check is scored; `None` before that.
#[must_use]
pub fn map_self_check_result(check: &SelfCheck, state: &SelfCheckState) -> Option<SelfCheckResultVm> {
    let score = state.score()?;
    let level = check.level(score.tier)?;
    Some(SelfCheckResultVm {
        title: level.title.clone(),
        description: level.description.clone(),
        recommendations: level.recommendations.clone(),
        style: tier_style(score.tier),
        total: score.total,
        max: score.max,
        percentage: score.percentage,
    })
}
