//! Guess/answer normalization.
//!
//! A guess counts as correct when it equals an accepted answer after
//! lowercasing and stripping every whitespace character. Whole-string
//! equality only; no substring or fuzzy matching, and stray punctuation
//! never matches.

/// Lowercases `text` and removes all whitespace (not just leading/trailing).
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Returns true when the normalized guess exactly matches any accepted answer.
#[must_use]
pub fn is_accepted(guess: &str, accepted_answers: &[String]) -> bool {
    let guess = normalize(guess);
    accepted_answers
        .iter()
        .any(|answer| normalize(answer) == guess)
}
