//! Keyboard line → action.

use counter_core::Command;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Command(Command),
    Status,
    Help,
    Quit,
    Unknown(String),
}

pub const HELP: &str = "\
keys: <enter>/t tap   s start   r reset   c <n> or <n> set target   ? status   h help   q quit";

pub fn parse_line(line: &str) -> Action {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match head.to_ascii_lowercase().as_str() {
        "" | "t" | "tap" => Action::Command(Command::Tap),
        "s" | "start" => Action::Command(Command::Start),
        "r" | "reset" => Action::Command(Command::Reset),
        "c" | "configure" | "target" => Action::Command(Command::configure(rest)),
        "?" | "status" => Action::Status,
        "h" | "help" => Action::Help,
        "q" | "quit" | "exit" => Action::Quit,
        _ if looks_numeric(head) && rest.is_empty() => Action::Command(Command::configure(head)),
        _ => Action::Unknown(line.to_string()),
    }
}

fn looks_numeric(word: &str) -> bool {
    let digits = word.strip_prefix(['-', '+']).unwrap_or(word);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
#[path = "tests/input_tests.rs"]
mod tests;
