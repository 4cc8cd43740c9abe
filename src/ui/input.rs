//! Line input helpers shared by the session and the roster editor.

use crate::errors::AppResult;
use crate::ui::messages::{prompt, warning};
use std::io::BufRead;

/// Read one trimmed line. `None` at end of input.
pub fn read_answer<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt, then read the answer. End of input reads as an empty answer.
pub fn ask<R: BufRead>(input: &mut R, question: &str) -> AppResult<String> {
    prompt(question);
    Ok(read_answer(input)?.unwrap_or_default())
}

/// Ask a yes/no confirmation from the user
pub fn ask_confirmation<R: BufRead>(input: &mut R, question: &str) -> AppResult<bool> {
    warning(question);
    prompt("Confirm [y/N]:");
    let answer = read_answer(input)?.unwrap_or_default();
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
