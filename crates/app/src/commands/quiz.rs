//! Timed quiz, either interactive on stdin or from `--answers`.

use tokio::io::{AsyncBufReadExt, BufReader};

use aware_core::model::{QuizId, QuizSettings};
use aware_core::scoring::QuizScore;
use services::{AppServices, AssessmentService, Clock, QuizAttempt, TickOutcome};
use ui::vm::{
    QuizResultVm, format_countdown, map_quiz_intro, map_quiz_question, map_quiz_result,
};

use crate::answers::{parse_answers, parse_letter};
use crate::cli::QuizArgs;
use crate::error::CliError;
use crate::output::{heading, print_json};

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Select(usize),
    Next,
    Previous,
    /// Zero-based.
    Jump(usize),
    Submit,
    Help,
    Unknown,
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" | "n" | "next" => return Input::Next,
        "p" | "prev" | "previous" => return Input::Previous,
        "s" | "submit" => return Input::Submit,
        "?" | "h" | "help" => return Input::Help,
        _ => {}
    }
    if let Some(rest) = line.strip_prefix(['g', 'G']) {
        return match rest.trim().parse::<usize>() {
            Ok(number) if number > 0 => Input::Jump(number - 1),
            _ => Input::Unknown,
        };
    }
    parse_letter(line).map_or(Input::Unknown, Input::Select)
}

/// Countdown values worth announcing: whole minutes, then the last 30 and 10 seconds.
fn should_announce(remaining_secs: u32) -> bool {
    remaining_secs % 60 == 0 || remaining_secs == 30 || remaining_secs == 10
}

/// # Errors
///
/// Fails on an unknown quiz id, invalid settings or answers, and stdin errors.
pub async fn run(
    services: &AppServices,
    clock: Clock,
    args: &QuizArgs,
    json: bool,
) -> Result<(), CliError> {
    let id = QuizId::new(args.quiz_id.as_str())?;
    let base = services
        .assessments()
        .quiz(&id)
        .ok_or_else(|| CliError::UnknownQuiz(id.to_string()))?
        .settings();
    let settings_override = if args.time_limit_minutes.is_some() || args.passing_score.is_some() {
        Some(QuizSettings::new(
            args.time_limit_minutes.unwrap_or(base.time_limit_minutes()),
            args.passing_score.unwrap_or(base.passing_score()),
        )?)
    } else {
        None
    };

    let assessments = AssessmentService::new(clock, services.content())
        .with_settings_override(settings_override)
        .with_countdown(args.answers.is_none());
    let mut attempt = assessments
        .open_quiz(&id)
        .ok_or_else(|| CliError::UnknownQuiz(id.to_string()))?;

    let score = match &args.answers {
        Some(raw) => answer_all(&mut attempt, raw)?,
        None => match interact(&mut attempt, json).await? {
            Some(score) => score,
            None => return Ok(()),
        },
    };

    let vm = map_quiz_result(attempt.quiz(), attempt.state().answers(), score);
    if json {
        return print_json(&vm);
    }
    print_result(&vm);
    Ok(())
}

fn answer_all(attempt: &mut QuizAttempt, raw: &str) -> Result<QuizScore, CliError> {
    let answers = parse_answers(raw, attempt.quiz().len())?;
    attempt.start()?;
    for (question, answer) in answers.into_iter().enumerate() {
        if let Some(option) = answer {
            attempt.select_answer(question, option)?;
        }
    }
    Ok(attempt.submit()?)
}

/// Runs the quiz against stdin; `None` when input closes before the start.
async fn interact(attempt: &mut QuizAttempt, quiet: bool) -> Result<Option<QuizScore>, CliError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if !quiet {
        let intro = map_quiz_intro(attempt.quiz());
        heading(&intro.title);
        println!("{}", intro.description);
        println!(
            "{} questions | {} | pass at {}%",
            intro.question_count, intro.time_limit, intro.passing_score
        );
        println!();
        println!("Press Enter to start.");
    }
    if lines.next_line().await?.is_none() {
        return Ok(None);
    }
    attempt.start()?;
    show_question(attempt, quiet);

    let score = loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break attempt.submit()?;
                };
                let outcome = match parse_input(&line) {
                    Input::Select(option) => {
                        let question = attempt.state().current();
                        attempt.select_answer(question, option).map(drop)
                    }
                    Input::Next => attempt.advance().map(drop),
                    Input::Previous => attempt.retreat().map(drop),
                    Input::Jump(index) => attempt.jump_to(index).map(drop),
                    Input::Submit => break attempt.submit()?,
                    Input::Help => {
                        print_help(quiet);
                        continue;
                    }
                    Input::Unknown => {
                        if !quiet {
                            println!("Unrecognised input {:?}; type ? for help.", line.trim());
                        }
                        continue;
                    }
                };
                match outcome {
                    Ok(()) => show_question(attempt, quiet),
                    Err(err) if !quiet => println!("{err}"),
                    Err(_) => {}
                }
            }
            tick = attempt.next_tick() => {
                match tick? {
                    TickOutcome::Running { remaining_secs } => {
                        if !quiet && should_announce(remaining_secs) {
                            println!("{} remaining", format_countdown(remaining_secs));
                        }
                    }
                    TickOutcome::Expired(score) => {
                        if !quiet {
                            println!("Time's up! Your answers were submitted.");
                        }
                        break score;
                    }
                }
            }
        }
    };
    Ok(Some(score))
}

fn show_question(attempt: &QuizAttempt, quiet: bool) {
    if quiet {
        return;
    }
    let Some(vm) = map_quiz_question(attempt.quiz(), attempt.state()) else {
        return;
    };
    let progress = attempt.state().progress();
    println!();
    println!(
        "Question {} of {} | {} answered | {} left",
        vm.number, vm.total, progress.answered, vm.countdown
    );
    println!("{}", vm.prompt);
    for option in &vm.options {
        let mark = if option.selected { ">" } else { " " };
        println!(" {mark} {}) {}", option.letter, option.text);
    }
}

fn print_help(quiet: bool) {
    if quiet {
        return;
    }
    println!("A-D  choose an option");
    println!("n    next question (or just Enter)");
    println!("p    previous question");
    println!("g N  go to question N");
    println!("s    submit the quiz");
}

fn print_result(vm: &QuizResultVm) {
    println!();
    heading(vm.headline);
    println!("{}", vm.message);
    println!(
        "Score: {}% ({} correct, {} incorrect, {} total; pass at {}%)",
        vm.percentage, vm.correct, vm.incorrect, vm.total, vm.passing_score
    );
    println!();
    println!("Review");
    for item in &vm.review {
        let mark = if item.is_correct { "correct" } else { "wrong" };
        println!("{}. {} [{mark}]", item.number, item.prompt);
        println!(
            "   Your answer: {}",
            item.your_answer.as_deref().unwrap_or("(not answered)")
        );
        if !item.is_correct {
            println!("   Correct answer: {}", item.correct_answer);
        }
        println!("   {}", item.explanation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_take_precedence_over_letters() {
        assert_eq!(parse_input("n"), Input::Next);
        assert_eq!(parse_input(""), Input::Next);
        assert_eq!(parse_input(" P "), Input::Previous);
        assert_eq!(parse_input("s"), Input::Submit);
        assert_eq!(parse_input("b"), Input::Select(1));
        assert_eq!(parse_input("D"), Input::Select(3));
    }

    #[test]
    fn jump_is_one_based() {
        assert_eq!(parse_input("g 3"), Input::Jump(2));
        assert_eq!(parse_input("G10"), Input::Jump(9));
        assert_eq!(parse_input("g 0"), Input::Unknown);
        assert_eq!(parse_input("g x"), Input::Unknown);
    }

    #[test]
    fn announcements_at_minutes_and_final_seconds() {
        assert!(should_announce(540));
        assert!(should_announce(30));
        assert!(should_announce(10));
        assert!(!should_announce(59));
        assert!(!should_announce(9));
    }
}
