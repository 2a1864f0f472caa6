use std::collections::HashSet;

use aware_core::model::{QuizId, SecurityTier};
use aware_core::scoring::max_score;
use content::{CatalogRepository, QuestionProvider, StaticContent};

fn content() -> StaticContent {
    StaticContent::load().expect("built-in content is valid")
}

#[test]
fn security_basics_has_ten_four_option_questions() {
    let content = content();
    let quiz = content
        .quiz(&QuizId::new("security-basics").unwrap())
        .unwrap();
    assert_eq!(quiz.len(), 10);
    assert_eq!(quiz.settings().time_limit_minutes(), 10);
    assert_eq!(quiz.settings().passing_score(), 70);
    assert!(quiz.questions().iter().all(|q| q.options().len() == 4));

    let correct: Vec<usize> = quiz.questions().iter().map(|q| q.correct_option()).collect();
    assert_eq!(correct, vec![2, 1, 1, 2, 1, 1, 3, 1, 2, 2]);
}

#[test]
fn self_check_covers_every_tier() {
    let check = content().self_check();
    assert_eq!(check.len(), 8);
    assert_eq!(max_score(check.questions()), 24);
    for tier in SecurityTier::ALL {
        let level = check.level(tier).unwrap();
        assert!(!level.title.is_empty());
        assert_eq!(level.recommendations.len(), 5);
    }
}

#[test]
fn every_lesson_resolves_to_its_course() {
    let content = content();
    let courses: HashSet<_> = content.courses().iter().map(|c| c.id().clone()).collect();
    for lesson in content.lessons() {
        assert!(courses.contains(lesson.course_id()), "{}", lesson.id());
        let module = content
            .modules()
            .iter()
            .find(|m| &m.id == lesson.module_id())
            .unwrap();
        assert_eq!(&module.course_id, lesson.course_id());
    }
}

#[test]
fn blog_has_a_featured_post_and_unique_ids() {
    let content = content();
    let posts = content.posts();
    assert!(posts.iter().any(|p| p.is_featured()));
    let ids: HashSet<_> = posts.iter().map(|p| p.id().as_str()).collect();
    assert_eq!(ids.len(), posts.len());
}
