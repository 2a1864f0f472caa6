use std::sync::Arc;

use aware_core::model::{Phase, QuizId, QuizSettings, SecurityTier};
use aware_core::time::fixed_clock;
use content::StaticContent;
use services::{AssessmentService, TickOutcome};

const CORRECT: [usize; 10] = [2, 1, 1, 2, 1, 1, 3, 1, 2, 2];

fn assessments() -> AssessmentService {
    AssessmentService::new(fixed_clock(), Arc::new(StaticContent::load().unwrap()))
}

fn basics() -> QuizId {
    QuizId::new("security-basics").unwrap()
}

#[test]
fn seven_of_ten_passes_at_seventy() {
    let service = assessments().with_countdown(false);
    let mut attempt = service.open_quiz(&basics()).unwrap();
    attempt.start().unwrap();

    for (question, correct) in CORRECT.iter().enumerate() {
        let option = if question < 7 { *correct } else { (*correct + 1) % 4 };
        attempt.select_answer(question, option).unwrap();
        attempt.advance().unwrap();
    }
    assert_eq!(attempt.state().current(), 9);

    let score = attempt.submit().unwrap();
    assert_eq!(score.correct, 7);
    assert_eq!(score.total, 10);
    assert_eq!(score.percentage, 70);
    assert!(score.passed);
}

#[test]
fn jump_to_revisits_an_answered_question() {
    let service = assessments().with_countdown(false);
    let mut attempt = service.open_quiz(&basics()).unwrap();
    attempt.start().unwrap();
    attempt.select_answer(0, 0).unwrap();
    attempt.jump_to(6).unwrap();
    attempt.jump_to(0).unwrap();
    attempt.select_answer(0, CORRECT[0]).unwrap();
    assert_eq!(attempt.state().answer(0), Some(CORRECT[0]));
    assert_eq!(attempt.state().answered_count(), 1);
}

#[tokio::test(start_paused = true)]
async fn running_out_of_time_scores_like_submit() {
    let settings = QuizSettings::new(1, 70).unwrap();
    let service = assessments().with_settings_override(Some(settings));

    let mut timed = service.open_quiz(&basics()).unwrap();
    timed.start().unwrap();
    for question in 0..4 {
        timed.select_answer(question, CORRECT[question]).unwrap();
    }

    let mut ticks = 0;
    let expired = loop {
        ticks += 1;
        match timed.next_tick().await.unwrap() {
            TickOutcome::Running { remaining_secs } => assert_eq!(remaining_secs, 60 - ticks),
            TickOutcome::Expired(score) => break score,
        }
    };
    assert_eq!(ticks, 60);
    assert_eq!(timed.state().phase(), Phase::Result);
    assert!(!timed.countdown_running());

    let mut manual = service.clone().with_countdown(false).open_quiz(&basics()).unwrap();
    manual.start().unwrap();
    for question in 0..4 {
        manual.select_answer(question, CORRECT[question]).unwrap();
    }
    assert_eq!(manual.submit().unwrap(), expired);
    assert_eq!(expired.percentage, 40);
    assert!(!expired.passed);
}

#[test]
fn self_check_total_of_ten_is_medium() {
    let mut attempt = assessments().open_self_check();
    attempt.start().unwrap();

    for option in [3, 3, 2, 2, 1, 0, 0, 0] {
        // advancing without an answer does nothing
        let before = attempt.state().current();
        attempt.advance().unwrap();
        assert_eq!(attempt.state().current(), before);

        attempt.select_answer(option).unwrap();
        attempt.advance().unwrap();
    }

    assert_eq!(attempt.state().phase(), Phase::Result);
    let score = attempt.state().score().unwrap();
    assert_eq!(score.total, 10);
    assert_eq!(score.max, 24);
    assert!((score.percentage - 41.666).abs() < 0.01);
    assert_eq!(score.tier, SecurityTier::Medium);
    assert_eq!(attempt.level().unwrap().title, "Getting There");

    attempt.reset().unwrap();
    assert_eq!(attempt.state().phase(), Phase::Intro);
    assert!(attempt.level().is_none());
}
