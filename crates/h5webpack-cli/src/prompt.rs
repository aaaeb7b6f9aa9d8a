//! Overwrite confirmation.

use std::io::{self, BufRead, Write};

use crate::error::{CliError, CliResult};

pub const OVERWRITE_PROMPT: &str = "destination is not empty, continue? [y/N]: ";

/// Accepts answers that start with `y`, contain `yes` or `ok`, or end in
/// `true`, ignoring case.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim_end_matches(['\r', '\n']).to_ascii_lowercase();
    answer.starts_with('y')
        || answer.contains("yes")
        || answer.contains("ok")
        || answer.ends_with("true")
}

/// Ask whether to write into a non-empty destination.
///
/// Uses a `dialoguer` prompt on an interactive terminal, otherwise reads one
/// line from stdin. End of input counts as "no".
pub fn confirm_overwrite() -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal;
        if io::stdin().is_terminal() {
            return confirm_interactive();
        }
    }

    let stdin = io::stdin();
    confirm_from(&mut stdin.lock(), &mut io::stdout())
}

#[cfg(feature = "interactive")]
fn confirm_interactive() -> CliResult<bool> {
    let prompt = OVERWRITE_PROMPT.trim_end_matches([' ', ':']).trim_end_matches(" [y/N]");
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact_opt()
        .map(|answer| answer.unwrap_or(false))
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation".into(),
            source: io::Error::other(e),
        })
}

/// Print the prompt to `output` and read a single answer from `input`.
pub fn confirm_from(input: &mut impl BufRead, output: &mut impl Write) -> CliResult<bool> {
    write!(output, "{OVERWRITE_PROMPT}")?;
    output.flush()?;

    let mut answer = String::new();
    let read = input.read_line(&mut answer).map_err(|e| CliError::IoError {
        message: "failed to read confirmation input".into(),
        source: e,
    })?;

    Ok(read > 0 && is_affirmative(&answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_answers() {
        for answer in ["y", "Y", "yes", "YES\n", "yep", "ok", "okay", "TRUE", "not true", "sure, ok"] {
            assert!(is_affirmative(answer), "{answer:?} should be accepted");
        }
    }

    #[test]
    fn rejected_answers() {
        for answer in ["", "n", "no", "nope", " y", "true ", "continue"] {
            assert!(!is_affirmative(answer), "{answer:?} should be rejected");
        }
    }

    #[test]
    fn prompt_is_written_before_reading() {
        let mut out = Vec::new();
        let ok = confirm_from(&mut "y\n".as_bytes(), &mut out).unwrap();
        assert!(ok);
        assert_eq!(String::from_utf8(out).unwrap(), OVERWRITE_PROMPT);
    }

    #[test]
    fn eof_is_refusal() {
        let mut out = Vec::new();
        assert!(!confirm_from(&mut "".as_bytes(), &mut out).unwrap());
    }
}
