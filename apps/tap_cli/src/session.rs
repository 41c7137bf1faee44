//! Drives a [`TapCounter`] from line-oriented input.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use counter_core::{Command, CommandOutcome, CounterEvent};
use feedback::TapCounter;

use crate::{
    input::{parse_line, Action, HELP},
    render::status_line,
};

pub fn run_interactive<R: BufRead, W: Write>(
    counter: &mut TapCounter,
    initial_target: &str,
    input: R,
    mut out: W,
    json: bool,
) -> Result<()> {
    writeln!(out, "{HELP}")?;
    let outcome = counter.apply(Command::configure(initial_target));
    report(&mut out, counter, &outcome, json)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        counter.poll();
        match parse_line(&line) {
            Action::Quit => break,
            Action::Help => writeln!(out, "{HELP}")?,
            Action::Status => print_snapshot(&mut out, counter, json)?,
            Action::Unknown(word) => writeln!(out, "unknown input '{word}' (h for help)")?,
            Action::Command(command) => {
                let outcome = counter.apply(command);
                report(&mut out, counter, &outcome, json)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

/// Applies one JSON-encoded [`Command`] per line. Blank lines and `#` comments
/// are skipped.
pub fn run_script<R: BufRead, W: Write>(
    counter: &mut TapCounter,
    input: R,
    mut out: W,
    json: bool,
) -> Result<()> {
    for (index, line) in input.lines().enumerate() {
        let line = line.context("failed to read script")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let command: Command = serde_json::from_str(line)
            .with_context(|| format!("invalid command on script line {}", index + 1))?;
        counter.poll();
        let outcome = counter.apply(command);
        report(&mut out, counter, &outcome, json)?;
    }
    out.flush()?;
    Ok(())
}

fn report<W: Write>(
    out: &mut W,
    counter: &TapCounter,
    outcome: &CommandOutcome,
    json: bool,
) -> Result<()> {
    match outcome {
        CommandOutcome::Rejected(err) => writeln!(out, "rejected: {err}")?,
        CommandOutcome::Noop => writeln!(out, "ignored")?,
        CommandOutcome::Applied(events) => {
            if events
                .iter()
                .any(|event| matches!(event, CounterEvent::GoalReached { .. }))
            {
                writeln!(out, "Well Done! Goal Completed")?;
            }
        }
    }
    print_snapshot(out, counter, json)
}

fn print_snapshot<W: Write>(out: &mut W, counter: &TapCounter, json: bool) -> Result<()> {
    let snapshot = counter.snapshot();
    if json {
        writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
    } else {
        writeln!(out, "{}", status_line(&snapshot, counter.pulse_active()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
