/*
 * @file assistant.rs
 * @brief Implementation of SCAR's chatbot session runtime
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

//! Chatbot session orchestration module.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tokio::task;

use crate::console::{self, Tone};
use crate::name;
use crate::responder;
use crate::speech;

/// Greeting sentence spoken and printed at startup.
const GREETING: &str = "Hello! I am SCAR, your Cybersecurity Awareness Assistant. \
     Let's make the internet a safer place together!";

/// Delay before the banner renders so its output visually staggers the
/// voice greeting.
///
/// Pacing only; neither unit depends on the other having run.
const BANNER_STAGGER: Duration = Duration::from_millis(300);

/// Spacing between the dots of the "thinking" indicator.
const THINKING_DOT_DELAY: Duration = Duration::from_millis(500);

/// Number of dots in the "thinking" indicator.
const THINKING_DOTS: usize = 3;

/// Command that ends the conversation, compared against the whole
/// trimmed line, case-insensitively.
const EXIT_KEYWORD: &str = "exit";

/// Decorative ASCII banner rendered during startup.
const BANNER: &str = r#"
      _                  _
    | '-.            .-' |
    | -. '..\\,.//,.' .- |
    |   \  \\\||///  /   |
   /|    )M\/%%%%/\/(  . |\
  (/\  MM\/%/\||/%\\/MM  /\)
  (//M   \%\\\%%//%//   M\\)
(// M________ /\ ________M \\)
 (// M\ \(',)|  |(',)/ /M \\) \\\\
  (\\ M\.  /,\\//,\  ./M //)
    / MMmm( \\||// )mmMM \  \\
     // MMM\\\||///MMM \\ \\
      \//''\)/||\(/''\\/ \\
      mrf\\( \oo/ )\\\/\
           \'-..-'\/\\
              \\/ \\ ;"#;

/// Runs the whole chatbot session.
///
/// # Details
/// Announces the greeting (voice and banner concurrently), collects a
/// validated name, then answers questions until the user types the exit
/// command.
///
/// # Returns
/// `Ok(())` once the user exits.
///
/// # Errors
/// Returns an error when stdin can no longer be read or a startup task
/// panics.
pub async fn run_chatbot() -> Result<()> {
    announce_greeting().await?;
    let user_name = name::prompt_for_name()?;
    ChatbotRuntime::new(user_name).run_loop()
}

/// Plays the spoken greeting and renders the banner as two concurrent
/// tasks, returning once both have finished.
///
/// # Details
/// The units share no state and impose no ordering on each other's
/// output; the caller only waits for both before any further logic runs.
/// Voice failure is contained inside the voice unit and never aborts
/// startup.
async fn announce_greeting() -> Result<()> {
    let voice = task::spawn_blocking(play_voice_greeting);
    let banner = task::spawn_blocking(render_banner);
    let (voice, banner) = tokio::join!(voice, banner);
    voice?;
    banner?;
    Ok(())
}

/// Voice unit: speaks the greeting, reporting any synthesis failure as a
/// warning.
fn play_voice_greeting() {
    if let Err(err) = speech::speak(GREETING) {
        console::report_warning(&format!("Error with speech synthesis: {}", err));
    }
}

/// Banner unit: renders the ASCII banner and welcome sentence after a
/// short stagger delay.
fn render_banner() {
    thread::sleep(BANNER_STAGGER);
    console::print_line(BANNER, Tone::Banner);
    console::print_line(GREETING, Tone::Greeting);
}

/// Session runtime owning the validated user name.
///
/// # Details
/// The name is immutable once accepted; no other state is carried across
/// turns, so the bot has no memory of prior questions.
struct ChatbotRuntime {
    user_name: String,
}

/// Outcome of classifying one raw input line.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Turn {
    /// Empty or whitespace-only line.
    Blank,
    /// The exit command.
    Exit,
    /// A question to hand to the responder.
    Question(String),
}

impl ChatbotRuntime {
    /// Creates a runtime for the given user.
    fn new(user_name: String) -> Self {
        Self { user_name }
    }

    /// Greets the named user and answers questions until exit.
    ///
    /// # Returns
    /// `Ok(())` once the user issues the exit command.
    ///
    /// # Errors
    /// Bubbles up stdin read failures from the prompt.
    fn run_loop(self) -> Result<()> {
        console::print_line(
            &format!(
                "\nWelcome, {}! Type 'exit' to end the conversation at any time.\n",
                self.user_name
            ),
            Tone::Welcome,
        );
        while self.process_turn()? {}
        Ok(())
    }

    /// Executes one prompt-read-respond turn.
    ///
    /// # Returns
    /// * `Ok(true)` to keep looping, `Ok(false)` once the user exits.
    ///
    /// # Errors
    /// Surfaces stdin read failures; rejected input is never an error.
    fn process_turn(&self) -> Result<bool> {
        let line = console::ask(
            &format!("Ask SCAR a question about cybersecurity, {}: ", self.user_name),
            Tone::Question,
        )?;
        match classify_turn(&line) {
            Turn::Blank => {
                console::print_line(
                    "\nI didn't quite understand that. Could you please type something?",
                    Tone::Error,
                );
                Ok(true)
            }
            Turn::Exit => {
                console::print_line(
                    &format!(
                        "\nThank you for chatting with SCAR, {}. Stay vigilant and safe online!",
                        self.user_name
                    ),
                    Tone::Farewell,
                );
                Ok(false)
            }
            Turn::Question(question) => {
                show_thinking_indicator()?;
                console::print_line(&format!("\n{}", responder::respond(&question)), Tone::Response);
                Ok(true)
            }
        }
    }
}

/// Classifies a raw input line into blank input, the exit command, or a
/// question.
///
/// # Details
/// The exit command must match the whole trimmed line, case-insensitively;
/// a question merely containing "exit" is still a question.
fn classify_turn(line: &str) -> Turn {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Turn::Blank
    } else if trimmed.eq_ignore_ascii_case(EXIT_KEYWORD) {
        Turn::Exit
    } else {
        Turn::Question(trimmed.to_string())
    }
}

/// Prints the dotted "thinking" indicator.
///
/// # Details
/// A pacing affordance, not a real computation: three dots with a fixed
/// delay between them, flushed as they appear.
fn show_thinking_indicator() -> Result<()> {
    console::print_inline("\nSCAR is thinking", Tone::Response)?;
    for _ in 0..THINKING_DOTS {
        console::print_inline(".", Tone::Response)?;
        thread::sleep(THINKING_DOT_DELAY);
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_classified_blank() {
        assert_eq!(classify_turn(""), Turn::Blank);
        assert_eq!(classify_turn("   "), Turn::Blank);
    }

    #[test]
    fn exit_matches_any_case() {
        assert_eq!(classify_turn("exit"), Turn::Exit);
        assert_eq!(classify_turn("Exit"), Turn::Exit);
        assert_eq!(classify_turn("EXIT"), Turn::Exit);
        assert_eq!(classify_turn("  exit  "), Turn::Exit);
    }

    #[test]
    fn exit_must_match_the_whole_line() {
        assert_eq!(
            classify_turn("exit now"),
            Turn::Question("exit now".to_string())
        );
        assert_eq!(
            classify_turn("how do I exit"),
            Turn::Question("how do I exit".to_string())
        );
    }

    #[test]
    fn questions_pass_through_trimmed() {
        assert_eq!(
            classify_turn("  What is malware?  "),
            Turn::Question("What is malware?".to_string())
        );
    }

    #[tokio::test]
    async fn greeting_completes_when_voice_fails() {
        let _seam = speech::seam::hold(true);
        assert!(announce_greeting().await.is_ok());
    }
}
