//! Pure scoring over frozen answer mappings.
//!
//! Nothing here looks at session phase; callers score exactly once, on the
//! transition into `Phase::Result`.

use serde::Serialize;

use crate::model::{Quiz, QuizQuestion, SecurityTier, SelfCheckQuestion};

/// Tier thresholds in percent. Below `MEDIUM_FROM_PERCENT` is low, below
/// `HIGH_FROM_PERCENT` is medium.
pub const MEDIUM_FROM_PERCENT: u64 = 40;
pub const HIGH_FROM_PERCENT: u64 = 70;

//
// ─── QUIZ ──────────────────────────────────────────────────────────────────────
//

/// Outcome of a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizScore {
    pub correct: u32,
    pub total: u32,
    /// `round(100 * correct / total)`, halves rounded up.
    pub percentage: u8,
    pub passed: bool,
}

impl QuizScore {
    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.total - self.correct
    }
}

/// Counts questions whose slot equals the correct option.
///
/// Missing slots (answers shorter than questions) and `None` never count.
#[must_use]
pub fn count_correct(questions: &[QuizQuestion], answers: &[Option<usize>]) -> u32 {
    let correct = questions
        .iter()
        .enumerate()
        .filter(|(i, q)| q.is_correct(answers.get(*i).copied().flatten()))
        .count();
    u32::try_from(correct).unwrap_or(u32::MAX)
}

/// Rounded percentage of `part` in `whole`; 0 when `whole` is 0.
#[must_use]
pub fn rounded_percent(part: u32, whole: u32) -> u8 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (u64::from(part.min(whole)), u64::from(whole));
    let rounded = (200 * part + whole) / (2 * whole);
    u8::try_from(rounded).unwrap_or(100)
}

/// Scores answers against a quiz using its passing threshold.
#[must_use]
pub fn score_quiz(quiz: &Quiz, answers: &[Option<usize>]) -> QuizScore {
    score_questions(quiz.questions(), answers, quiz.settings().passing_score())
}

#[must_use]
pub fn score_questions(
    questions: &[QuizQuestion],
    answers: &[Option<usize>],
    passing_score: u8,
) -> QuizScore {
    let correct = count_correct(questions, answers);
    let total = u32::try_from(questions.len()).unwrap_or(u32::MAX);
    let percentage = rounded_percent(correct, total);
    QuizScore {
        correct,
        total,
        percentage,
        passed: percentage >= passing_score,
    }
}

//
// ─── SELF-CHECK ────────────────────────────────────────────────────────────────
//

/// Outcome of a self-check questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SecurityScore {
    pub total: u32,
    pub max: u32,
    pub percentage: f64,
    pub tier: SecurityTier,
}

/// Sum of each question's highest option score.
#[must_use]
pub fn max_score(questions: &[SelfCheckQuestion]) -> u32 {
    questions
        .iter()
        .map(SelfCheckQuestion::max_score)
        .fold(0_u32, u32::saturating_add)
}

/// Sum of selected option scores; unanswered slots contribute 0.
#[must_use]
pub fn total_score(questions: &[SelfCheckQuestion], answers: &[Option<usize>]) -> u32 {
    questions
        .iter()
        .enumerate()
        .map(|(i, q)| q.score_of(answers.get(i).copied().flatten()))
        .fold(0_u32, u32::saturating_add)
}

/// Tier for `total` out of `max`, compared in integers so 40% and 70% are exact.
#[must_use]
pub fn tier_for(total: u32, max: u32) -> SecurityTier {
    let scaled = u64::from(total) * 100;
    let max = u64::from(max);
    if scaled < max * MEDIUM_FROM_PERCENT {
        SecurityTier::Low
    } else if scaled < max * HIGH_FROM_PERCENT {
        SecurityTier::Medium
    } else {
        SecurityTier::High
    }
}

/// Classifies a total score against the questionnaire's maximum.
#[must_use]
pub fn classify(total: u32, questions: &[SelfCheckQuestion]) -> SecurityScore {
    let max = max_score(questions);
    if max == 0 {
        return SecurityScore {
            total,
            max,
            percentage: 0.0,
            tier: SecurityTier::Low,
        };
    }
    SecurityScore {
        total,
        max,
        percentage: 100.0 * f64::from(total) / f64::from(max),
        tier: tier_for(total, max),
    }
}

/// Totals and classifies an answer mapping.
#[must_use]
pub fn assess(questions: &[SelfCheckQuestion], answers: &[Option<usize>]) -> SecurityScore {
    classify(total_score(questions, answers), questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{QuestionId, ScoredOption};

    fn quiz_questions(n: usize) -> Vec<QuizQuestion> {
        (0..n)
            .map(|i| {
                QuizQuestion::new(
                    QuestionId::new(format!("q{i}")).unwrap(),
                    "Q",
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    i % 4,
                    "",
                )
                .unwrap()
            })
            .collect()
    }

    fn check_questions(n: usize, max: u32) -> Vec<SelfCheckQuestion> {
        (0..n)
            .map(|i| {
                let options = (0..=max).map(|s| ScoredOption::new(format!("{s}"), s)).collect();
                SelfCheckQuestion::new(QuestionId::new(format!("s{i}")).unwrap(), "S", options)
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn seven_of_ten_passes_at_seventy() {
        let questions = quiz_questions(10);
        let mut answers: Vec<Option<usize>> =
            questions.iter().map(|q| Some(q.correct_option())).collect();
        for slot in answers.iter_mut().take(3) {
            *slot = slot.map(|c| (c + 1) % 4);
        }
        let score = score_questions(&questions, &answers, 70);
        assert_eq!(score.correct, 7);
        assert_eq!(score.percentage, 70);
        assert!(score.passed);
        assert_eq!(score.incorrect(), 3);
    }

    #[test]
    fn all_correct_is_one_hundred_percent() {
        let questions = quiz_questions(6);
        let answers: Vec<_> = questions.iter().map(|q| Some(q.correct_option())).collect();
        for passing in [0, 50, 100] {
            let score = score_questions(&questions, &answers, passing);
            assert_eq!(score.percentage, 100);
            assert!(score.passed);
        }
    }

    #[test]
    fn unanswered_and_wrong_score_zero() {
        let questions = quiz_questions(4);
        let none: Vec<Option<usize>> = vec![None; 4];
        assert_eq!(score_questions(&questions, &none, 70).correct, 0);
        let wrong: Vec<_> = questions
            .iter()
            .map(|q| Some((q.correct_option() + 1) % 4))
            .collect();
        assert_eq!(score_questions(&questions, &wrong, 70).correct, 0);
    }

    #[test]
    fn short_answer_mapping_counts_missing_as_unanswered() {
        let questions = quiz_questions(3);
        let answers = vec![Some(questions[0].correct_option())];
        let score = score_questions(&questions, &answers, 30);
        assert_eq!(score.correct, 1);
        assert_eq!(score.percentage, 33);
        assert!(score.passed);
    }

    #[test]
    fn percentage_rounds_halves_up() {
        assert_eq!(rounded_percent(1, 8), 13); // 12.5
        assert_eq!(rounded_percent(2, 3), 67);
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(0, 0), 0);
    }

    #[test]
    fn correct_never_exceeds_total() {
        for n in 1..12 {
            let questions = quiz_questions(n);
            for k in 0..=n {
                let answers: Vec<_> = questions
                    .iter()
                    .enumerate()
                    .map(|(i, q)| (i < k).then_some(q.correct_option()))
                    .collect();
                let score = score_questions(&questions, &answers, 70);
                assert!(score.correct <= score.total);
                assert_eq!(score.percentage, rounded_percent(score.correct, score.total));
            }
        }
    }

    #[test]
    fn self_check_ten_of_twenty_four_is_medium() {
        let questions = check_questions(8, 3);
        let score = classify(10, &questions);
        assert_eq!(score.max, 24);
        assert!((score.percentage - 41.666).abs() < 0.01);
        assert_eq!(score.tier, SecurityTier::Medium);
    }

    #[test]
    fn tier_boundaries_are_exact() {
        assert_eq!(tier_for(40, 100), SecurityTier::Medium);
        assert_eq!(tier_for(70, 100), SecurityTier::High);
        assert_eq!(tier_for(39_999, 100_000), SecurityTier::Low);
        assert_eq!(tier_for(69_999, 100_000), SecurityTier::Medium);
        assert_eq!(tier_for(0, 24), SecurityTier::Low);
        assert_eq!(tier_for(24, 24), SecurityTier::High);
    }

    #[test]
    fn classify_is_monotonic_in_any_single_answer() {
        let questions = check_questions(4, 3);
        let mut answers = vec![Some(1), Some(0), Some(2), None];
        for q in 0..answers.len() {
            let before = assess(&questions, &answers);
            let original = answers[q];
            for option in 0..=3 {
                answers[q] = Some(option);
                let after = assess(&questions, &answers);
                if option >= original.unwrap_or(0) {
                    assert!(after.percentage >= before.percentage);
                    assert!(after.tier >= before.tier);
                }
            }
            answers[q] = original;
        }
    }

    #[test]
    fn unanswered_self_check_contributes_nothing() {
        let questions = check_questions(2, 3);
        assert_eq!(total_score(&questions, &[None, Some(3)]), 3);
        assert_eq!(total_score(&questions, &[]), 0);
    }
}
