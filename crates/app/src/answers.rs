use crate::error::CliError;

/// Parses "C,B,-,D" (or "cb-d") into option indices; `-` leaves a slot empty.
///
/// Missing trailing answers are left empty.
pub fn parse_answers(raw: &str, question_count: usize) -> Result<Vec<Option<usize>>, CliError> {
    let tokens: Vec<char> = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect();
    if tokens.len() > question_count {
        return Err(CliError::InvalidAnswers(format!(
            "{} answers for {question_count} questions",
            tokens.len()
        )));
    }

    let mut answers = vec![None; question_count];
    for (slot, token) in answers.iter_mut().zip(tokens) {
        *slot = match token {
            '-' => None,
            letter if letter.is_ascii_alphabetic() => {
                Some(usize::from(letter.to_ascii_uppercase() as u8 - b'A'))
            }
            other => {
                return Err(CliError::InvalidAnswers(format!("unexpected {other:?}")));
            }
        };
    }
    Ok(answers)
}

/// Interprets one line of interactive input as an option letter.
pub fn parse_letter(input: &str) -> Option<usize> {
    let mut chars = input.trim().chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !letter.is_ascii_alphabetic() {
        return None;
    }
    Some(usize::from(letter.to_ascii_uppercase() as u8 - b'A'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_indices_and_dash_skips() {
        let answers = parse_answers("C, b,-,D", 5).unwrap();
        assert_eq!(answers, vec![Some(2), Some(1), None, Some(3), None]);
    }

    #[test]
    fn too_many_answers_are_rejected() {
        assert!(parse_answers("ABC", 2).is_err());
    }

    #[test]
    fn digits_are_rejected() {
        assert!(parse_answers("1", 1).is_err());
    }

    #[test]
    fn single_letters_only() {
        assert_eq!(parse_letter(" b "), Some(1));
        assert_eq!(parse_letter("ab"), None);
        assert_eq!(parse_letter(""), None);
    }
}
