//! End-to-end session tests that drive the compiled binary over piped
//! stdin. The voice unit degrades to a warning on machines without a
//! speech synthesizer, so these run anywhere.

use assert_cmd::Command;
use predicates::prelude::*;

fn scar() -> Command {
    Command::cargo_bin("scar").expect("scar binary builds")
}

#[test]
fn full_session_answers_phishing_question() {
    scar()
        .write_stdin("Alice\nTell me about phishing attacks\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome, Alice!"))
        .stdout(predicate::str::contains(
            "Phishing is a type of cyber attack where attackers try to trick you",
        ))
        .stdout(predicate::str::contains(
            "Thank you for chatting with SCAR, Alice. Stay vigilant and safe online!",
        ));
}

#[test]
fn malware_question_gets_malware_definition() {
    scar()
        .write_stdin("Bob\nWhat is malware?\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Malware is short for malicious software",
        ));
}

#[test]
fn invalid_names_are_reprompted_until_accepted() {
    scar()
        .write_stdin("John3\n\nMary Ann\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a name without numbers or special symbols.",
        ))
        .stdout(predicate::str::contains(
            "Oops! It looks like you didn't enter your name. Please try again.",
        ))
        .stdout(predicate::str::contains("Welcome, Mary Ann!"));
}

#[test]
fn blank_question_is_reprompted() {
    scar()
        .write_stdin("Alice\n\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "I didn't quite understand that. Could you please type something?",
        ));
}

#[test]
fn exit_is_case_insensitive() {
    scar()
        .write_stdin("Alice\nExit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Thank you for chatting with SCAR, Alice",
        ));
}
