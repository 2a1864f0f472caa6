//! End-to-end tests of the `aware` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn aware() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("aware").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("AWARE_QUIZ_ID")
        .env_remove("AWARE_TIME_LIMIT_MINUTES")
        .env_remove("AWARE_PASSING_SCORE");
    cmd
}

const ALL_CORRECT: &str = "C,B,B,C,B,B,D,B,C,C";

#[test]
fn course_search_finds_password_course() {
    aware()
        .args(["courses", "--search", "password"])
        .assert()
        .success()
        .stdout(predicate::str::contains("password-security"))
        .stdout(predicate::str::contains("advanced-threats").not());
}

#[test]
fn course_listing_as_json() {
    let output = aware()
        .args(["courses", "--json", "--level", "beginner"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let cards: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cards = cards.as_array().unwrap();
    assert!(!cards.is_empty());
    assert!(cards.iter().all(|card| card["level"] == "Beginner"));
}

#[test]
fn unknown_level_is_a_usage_error() {
    aware().args(["courses", "--level", "expert"]).assert().failure();
}

#[test]
fn unknown_course_fails_with_message() {
    aware()
        .args(["course", "no-such-course"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no course with id no-such-course"));
}

#[test]
fn course_progress_counts_done_lessons() {
    aware()
        .args(["course", "password-security", "--done", "ps-l1,ps-l2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Progress: 67% (2 of 3 lessons completed)"));
}

#[test]
fn lesson_from_another_course_is_not_found() {
    aware()
        .args(["lesson", "password-security", "pa-l1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("has no lesson pa-l1"));
}

#[test]
fn lesson_shows_neighbours() {
    aware()
        .args(["lesson", "password-security", "ps-l2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lesson 2 of 3"))
        .stdout(predicate::str::contains("Previous: ps-l1"))
        .stdout(predicate::str::contains("Next: ps-l3"));
}

#[test]
fn blog_post_lists_related_articles() {
    aware()
        .args(["post", "new-phishing-scam-2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New Phishing Scam Targeting Bank Customers"));
}

#[test]
fn quiz_with_all_correct_answers_passes() {
    aware()
        .args(["quiz", "--answers", ALL_CORRECT])
        .assert()
        .success()
        .stdout(predicate::str::contains("Congratulations!"))
        .stdout(predicate::str::contains("Score: 100%"));
}

#[test]
fn quiz_result_as_json() {
    let output = aware()
        .args(["quiz", "--json", "--answers", "C,B,B,C,B,B,D"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["percentage"], 70);
    assert_eq!(result["passed"], true);
    assert_eq!(result["review"].as_array().unwrap().len(), 10);
}

#[test]
fn passing_score_can_be_raised_from_the_environment() {
    aware()
        .env("AWARE_PASSING_SCORE", "80")
        .args(["quiz", "--answers", "C,B,B,C,B,B,D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keep Learning!"));
}

#[test]
fn unknown_quiz_fails() {
    aware()
        .args(["quiz", "--quiz", "nope", "--answers", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no quiz with id nope"));
}

#[test]
fn interactive_quiz_reads_stdin() {
    aware()
        .arg("quiz")
        .write_stdin("\nC\nn\nB\ns\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 1 of 10"))
        .stdout(predicate::str::contains("Score: 20%"));
}

#[test]
fn self_check_with_answers_reports_tier() {
    aware()
        .args(["self-check", "--answers", "D,D,C,C,B,A,A,A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Getting There"))
        .stdout(predicate::str::contains("10/24"));
}

#[test]
fn self_check_requires_every_answer() {
    aware()
        .args(["self-check", "--answers", "D,D,-"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("needs an answer"));
}

#[test]
fn blank_certificate_name_is_rejected() {
    aware().args(["certificate", "  "]).assert().code(2);
}

#[test]
fn certificate_names_the_recipient() {
    aware()
        .args(["certificate", "Ada Lovelace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"))
        .stdout(predicate::str::contains("Cyber Security Awareness Training"));
}

#[test]
fn builtin_content_checks_out() {
    aware()
        .arg("check-content")
        .assert()
        .success()
        .stdout(predicate::str::contains("Content OK"));
}
