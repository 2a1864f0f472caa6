use tokio::io::{AsyncBufReadExt, BufReader};

use services::{AppServices, SelfCheckAttempt};
use ui::vm::{SelfCheckResultVm, map_self_check_question, map_self_check_result};

use crate::answers::{parse_answers, parse_letter};
use crate::error::CliError;
use crate::output::{bullet_list, heading, print_json};

/// # Errors
///
/// Fails on incomplete `--answers`, a rejected selection, or stdin errors.
pub async fn run(services: &AppServices, answers: Option<&str>, json: bool) -> Result<(), CliError> {
    let mut attempt = services.assessments().open_self_check();

    let finished = match answers {
        Some(raw) => {
            answer_all(&mut attempt, raw)?;
            true
        }
        None => interact(&mut attempt, json).await?,
    };
    if !finished {
        return Ok(());
    }

    let Some(vm) = map_self_check_result(attempt.check(), attempt.state()) else {
        return Ok(());
    };
    if json {
        return print_json(&vm);
    }
    print_result(&vm);
    Ok(())
}

fn answer_all(attempt: &mut SelfCheckAttempt, raw: &str) -> Result<(), CliError> {
    let len = attempt.check().len();
    let answers = parse_answers(raw, len)?;
    attempt.start()?;
    for (number, answer) in answers.into_iter().enumerate() {
        let Some(option) = answer else {
            return Err(CliError::InvalidAnswers(format!(
                "question {} of {len} needs an answer",
                number + 1
            )));
        };
        attempt.select_answer(option)?;
        attempt.advance()?;
    }
    Ok(())
}

/// Walks the check on stdin; `false` when input closes before the result.
async fn interact(attempt: &mut SelfCheckAttempt, quiet: bool) -> Result<bool, CliError> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    attempt.start()?;

    loop {
        if attempt.state().score().is_some() {
            return Ok(true);
        }
        if !quiet {
            show_question(attempt);
        }
        let Some(line) = lines.next_line().await? else {
            return Ok(false);
        };
        let line = line.trim();
        let result = match line.to_ascii_lowercase().as_str() {
            "" | "n" | "next" => attempt.advance().map(drop),
            "p" | "prev" | "previous" => attempt.retreat().map(drop),
            _ => match parse_letter(line) {
                Some(option) => attempt.select_answer(option).map(drop),
                None => {
                    if !quiet {
                        println!("Choose a letter, n for next or p for previous.");
                    }
                    continue;
                }
            },
        };
        if let Err(err) = result {
            if !quiet {
                println!("{err}");
            }
        }
    }
}

fn show_question(attempt: &SelfCheckAttempt) {
    let Some(vm) = map_self_check_question(attempt.check(), attempt.state()) else {
        return;
    };
    println!();
    println!("Question {} of {} ({}%)", vm.number, vm.total, vm.progress_percent);
    println!("{}", vm.prompt);
    for option in &vm.options {
        let mark = if option.selected { ">" } else { " " };
        println!(" {mark} {}) {}", option.letter, option.text);
    }
    if !vm.can_advance {
        println!("Select an answer to continue.");
    } else if vm.is_last {
        println!("Press Enter to see your results.");
    }
}

fn print_result(vm: &SelfCheckResultVm) {
    println!();
    heading(&vm.title);
    println!(
        "Security level: {} | {}/{} ({:.0}%)",
        vm.style.badge, vm.total, vm.max, vm.percentage
    );
    println!("{}", vm.description);
    println!();
    println!("Recommendations:");
    bullet_list(&vm.recommendations);
}
