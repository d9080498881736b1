//! Name collection and screening.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::console::{self, Tone};

/// Pattern an acceptable name must match: ASCII letters and whitespace only.
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is valid"));

/// Reason a candidate name was turned down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameRejection {
    /// Empty or whitespace-only input.
    Blank,
    /// Input containing digits or symbols.
    InvalidCharacters,
}

impl NameRejection {
    /// Corrective message shown to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Blank => "Oops! It looks like you didn't enter your name. Please try again.",
            Self::InvalidCharacters => {
                "Invalid input. Please enter a name without numbers or special symbols."
            }
        }
    }
}

/// Classifies a candidate name.
///
/// # Parameters
/// * `input` - The raw line read from the user.
///
/// # Returns
/// The trimmed name when it consists of ASCII letters and whitespace,
/// otherwise the [`NameRejection`] describing why it was turned down.
pub fn screen_name(input: &str) -> Result<&str, NameRejection> {
    let candidate = input.trim();
    if candidate.is_empty() {
        return Err(NameRejection::Blank);
    }
    if !NAME_PATTERN.is_match(candidate) {
        return Err(NameRejection::InvalidCharacters);
    }
    Ok(candidate)
}

/// Prompts until an acceptable name is read.
///
/// # Details
/// Rejected input gets a corrective message and another prompt. There is
/// no retry cap; the loop runs until the user provides a usable name.
///
/// # Returns
/// The accepted name.
///
/// # Errors
/// Returns an error only when stdin can no longer be read.
pub fn prompt_for_name() -> Result<String> {
    loop {
        let line = console::ask("May I know your name? ", Tone::Prompt)?;
        match screen_name(&line) {
            Ok(accepted) => return Ok(accepted.to_string()),
            Err(rejection) => console::print_line(rejection.message(), Tone::Error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        assert_eq!(screen_name(""), Err(NameRejection::Blank));
        assert_eq!(screen_name("   "), Err(NameRejection::Blank));
    }

    #[test]
    fn rejects_names_with_digits_or_symbols() {
        assert_eq!(screen_name("John3"), Err(NameRejection::InvalidCharacters));
        assert_eq!(screen_name("John!"), Err(NameRejection::InvalidCharacters));
    }

    #[test]
    fn accepts_plain_and_spaced_names() {
        assert_eq!(screen_name("John"), Ok("John"));
        assert_eq!(screen_name("Mary Ann"), Ok("Mary Ann"));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(screen_name("  John  "), Ok("John"));
    }

    #[test]
    fn rejection_messages_differ() {
        assert_ne!(
            NameRejection::Blank.message(),
            NameRejection::InvalidCharacters.message()
        );
    }
}
