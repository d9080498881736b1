//! Binary entry point that launches the interactive cybersecurity
//! awareness chatbot session.

use anyhow::Result;

use scar::assistant;

#[tokio::main]
/// Launches the asynchronous chatbot session and runs it until the user
/// issues the exit command.
async fn main() -> Result<()> {
    assistant::run_chatbot().await
}
