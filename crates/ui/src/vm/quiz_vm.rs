use serde::Serialize;

use aware_core::model::Quiz;
use aware_core::scoring::QuizScore;
use services::QuizState;

use crate::vm::time_fmt::format_countdown;
use crate::vm::tone::Tone;

/// Below this many seconds the countdown is shown as urgent.
pub const URGENT_BELOW_SECS: u32 = 60;

/// Letter shown next to an option: 0 -> 'A', 1 -> 'B', ...
#[must_use]
pub fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map_or('?', |i| char::from(b'A' + i))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizIntroVm {
    pub title: String,
    pub description: String,
    pub question_count: usize,
    pub time_limit: String,
    pub passing_score: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OptionVm {
    pub letter: char,
    pub text: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizQuestionVm {
    /// One-based.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
    /// One flag per question, for the jump-to indicators.
    pub answered: Vec<bool>,
    pub countdown: String,
    pub countdown_tone: Tone,
    pub is_first: bool,
    pub is_last: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerReviewVm {
    pub number: usize,
    pub prompt: String,
    pub your_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuizResultVm {
    pub headline: &'static str,
    pub message: &'static str,
    pub tone: Tone,
    pub percentage: u8,
    pub correct: u32,
    pub incorrect: u32,
    pub total: u32,
    pub passed: bool,
    pub passing_score: u8,
    pub review: Vec<AnswerReviewVm>,
}

#[must_use]
pub fn map_quiz_intro(quiz: &Quiz) -> QuizIntroVm {
    let settings = quiz.settings();
    QuizIntroVm {
        title: quiz.title().to_owned(),
        description: quiz.description().to_owned(),
        question_count: quiz.len(),
        time_limit: format!("{} minutes", settings.time_limit_minutes()),
        passing_score: settings.passing_score(),
    }
}

/// View of the question under the cursor; `None` outside the question range.
#[must_use]
pub fn map_quiz_question(quiz: &Quiz, state: &QuizState) -> Option<QuizQuestionVm> {
    let index = state.current();
    let question = quiz.question(index)?;
    let selected = state.answer(index);
    let remaining = state.remaining_secs();

    Some(QuizQuestionVm {
        number: index + 1,
        total: quiz.len(),
        prompt: question.prompt().to_owned(),
        options: question
            .options()
            .iter()
            .enumerate()
            .map(|(i, text)| OptionVm {
                letter: option_letter(i),
                text: text.clone(),
                selected: selected == Some(i),
            })
            .collect(),
        answered: state.answers().iter().map(Option::is_some).collect(),
        countdown: format_countdown(remaining),
        countdown_tone: if remaining < URGENT_BELOW_SECS {
            Tone::Danger
        } else {
            Tone::Neutral
        },
        is_first: index == 0,
        is_last: index + 1 == quiz.len(),
    })
}

#[must_use]
pub fn map_quiz_result(quiz: &Quiz, answers: &[Option<usize>], score: QuizScore) -> QuizResultVm {
    let (headline, message, tone) = if score.passed {
        ("Congratulations!", "You've passed the security quiz!", Tone::Success)
    } else {
        ("Keep Learning!", "Don't worry, you can try again!", Tone::Danger)
    };

    let review = quiz
        .questions()
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let answer = answers.get(i).copied().flatten();
            AnswerReviewVm {
                number: i + 1,
                prompt: question.prompt().to_owned(),
                your_answer: answer.and_then(|a| question.option(a)).map(str::to_owned),
                correct_answer: question
                    .option(question.correct_option())
                    .unwrap_or_default()
                    .to_owned(),
                is_correct: question.is_correct(answer),
                explanation: question.explanation().to_owned(),
            }
        })
        .collect();

    QuizResultVm {
        headline,
        message,
        tone,
        percentage: score.percentage,
        correct: score.correct,
        incorrect: score.incorrect(),
        total: score.total,
        passed: score.passed,
        passing_score: quiz.settings().passing_score(),
        review,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aware_core::model::QuizId;
    use content::{QuestionProvider, StaticContent};
    use services::{QuizAction, session::quiz::reduce};

    fn basics() -> std::sync::Arc<Quiz> {
        StaticContent::load()
            .unwrap()
            .quiz(&QuizId::new("security-basics").unwrap())
            .unwrap()
    }

    #[test]
    fn letters_follow_the_alphabet() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
        assert_eq!(option_letter(26), '?');
    }

    #[test]
    fn intro_shows_settings() {
        let vm = map_quiz_intro(&basics());
        assert_eq!(vm.question_count, 10);
        assert_eq!(vm.time_limit, "10 minutes");
        assert_eq!(vm.passing_score, 70);
    }

    #[test]
    fn question_marks_selection_and_indicators() {
        let quiz = basics();
        let mut state = QuizState::new(&quiz);
        for action in [
            QuizAction::Start,
            QuizAction::Select { question: 0, option: 1 },
        ] {
            state = reduce(&quiz, &state, action).unwrap();
        }
        let vm = map_quiz_question(&quiz, &state).unwrap();
        assert_eq!(vm.number, 1);
        assert!(vm.is_first);
        assert!(!vm.is_last);
        assert_eq!(vm.options.len(), 4);
        assert!(vm.options[1].selected);
        assert_eq!(vm.options.iter().filter(|o| o.selected).count(), 1);
        assert_eq!(vm.answered.iter().filter(|a| **a).count(), 1);
        assert_eq!(vm.countdown, "10:00");
        assert_eq!(vm.countdown_tone, Tone::Neutral);
    }

    #[test]
    fn review_reports_unanswered_as_wrong() {
        let quiz = basics();
        let answers = vec![Some(2), None];
        let score = aware_core::scoring::score_quiz(&quiz, &answers);
        let vm = map_quiz_result(&quiz, &answers, score);
        assert_eq!(vm.headline, "Keep Learning!");
        assert_eq!(vm.review.len(), 10);
        assert!(vm.review[0].is_correct);
        assert!(!vm.review[1].is_correct);
        assert_eq!(vm.review[1].your_answer, None);
        assert_eq!(vm.review[0].correct_answer, "12 characters");
        assert_eq!(vm.incorrect, 9);
    }
}
