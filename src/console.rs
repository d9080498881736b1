/*
 * @file console.rs
 * @brief Colored console output and prompting for SCAR
 * @author Kevin Thomas
 * @date 2025
 *
 * MIT License
 *
 * Copyright (c) 2025 Kevin Thomas
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Colored console output and line-oriented prompting.
//!
//! Every styled value rendered here embeds its own reset sequence, so the
//! terminal is back in its default state after each print regardless of
//! which path the caller takes.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};

/// Role a piece of console output plays in the conversation.
///
/// # Details
/// Each tone maps to one fixed color so the session keeps the same visual
/// language throughout: prompts, errors, and the bot's own output are
/// always distinguishable at a glance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    /// Name prompt shown before the session starts.
    Prompt,
    /// Per-turn question prompt.
    Question,
    /// Corrective message for rejected input.
    Error,
    /// Farewell printed when the user exits.
    Farewell,
    /// Non-fatal problem reported on stderr.
    Warning,
    /// Decorative startup banner.
    Banner,
    /// Spoken-greeting sentence echoed after the banner.
    Greeting,
    /// Welcome line printed once the name is accepted.
    Welcome,
    /// Answers and the "thinking" indicator.
    Response,
}

/// Applies the styling for a tone to a piece of text.
fn styled(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Prompt => text.yellow(),
        Tone::Question => text.blue(),
        Tone::Error => text.red(),
        Tone::Farewell => text.red(),
        Tone::Warning => text.red().dimmed(),
        Tone::Banner => text.magenta(),
        Tone::Greeting => text.cyan(),
        Tone::Welcome => text.green(),
        Tone::Response => text.white(),
    }
}

/// Prints a full line in the given tone.
pub fn print_line(text: &str, tone: Tone) {
    println!("{}", styled(text, tone));
}

/// Prints without a trailing newline and flushes so the text is visible
/// before the program blocks on input or a delay.
///
/// # Errors
/// Returns an error if stdout cannot be flushed.
pub fn print_inline(text: &str, tone: Tone) -> Result<()> {
    print!("{}", styled(text, tone));
    io::stdout().flush().context("Failed to flush stdout")
}

/// Reports a non-fatal problem on stderr.
pub fn report_warning(text: &str) {
    eprintln!("{}", styled(text, Tone::Warning));
}

/// Shows an inline prompt and reads one line from stdin.
///
/// # Parameters
/// * `prompt` - The text shown before the cursor.
/// * `tone` - The styling applied to the prompt.
///
/// # Returns
/// The line without its trailing newline.
///
/// # Errors
/// Returns an error when stdin cannot be read or has been closed; with no
/// way left to receive input, the session cannot continue.
pub fn ask(prompt: &str, tone: Tone) -> Result<String> {
    print_inline(prompt, tone)?;
    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    if read == 0 {
        anyhow::bail!("standard input closed");
    }
    Ok(line
        .trim_end_matches(|c| c == '\r' || c == '\n')
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styled_text_keeps_content() {
        let rendered = styled("hello", Tone::Prompt).to_string();
        assert!(rendered.contains("hello"));
    }

    #[test]
    fn every_tone_renders() {
        for tone in [
            Tone::Prompt,
            Tone::Question,
            Tone::Error,
            Tone::Farewell,
            Tone::Warning,
            Tone::Banner,
            Tone::Greeting,
            Tone::Welcome,
            Tone::Response,
        ] {
            assert!(styled("x", tone).to_string().contains('x'));
        }
    }
}
