//! Text-to-speech functionality module.

use std::process::Command;
use std::sync::Mutex;

use anyhow::Result;

/// Synthesizer binaries tried in order until one accepts the utterance.
const ENGINES: &[&str] = &["say", "espeak-ng", "espeak", "spd-say"];

/// Speaks the given text through the default audio output device.
///
/// # Parameters
/// * `text` - The utterance to synthesize.
///
/// # Returns
/// `Ok(())` when a synthesizer accepted the utterance.
///
/// # Errors
/// Returns an error if the text is blank or no synthesizer on this system
/// could play it.
pub fn speak(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        anyhow::bail!("Cannot speak empty text");
    }
    run_synthesizer(text)?;
    Ok(())
}

fn run_synthesizer(text: &str) -> Result<()> {
    if cfg!(test) {
        if *FORCE_ERROR.lock().unwrap() {
            anyhow::bail!("Forced failure for testing");
        }
        return Ok(());
    }

    for engine in ENGINES {
        if let Ok(output) = Command::new(engine).arg(text).output() {
            if output.status.success() {
                return Ok(());
            }
        }
    }
    anyhow::bail!("no speech synthesizer available on this system")
}

#[cfg_attr(not(test), allow(dead_code))]
static FORCE_ERROR: Mutex<bool> = Mutex::new(false);
