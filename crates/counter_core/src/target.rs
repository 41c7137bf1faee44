//! Turning raw user input into a [`Target`].

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};

use crate::{domain::Target, error::TargetRejection};

/// Raw target as typed by the user or passed programmatically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetInput {
    Number(i64),
    Text(String),
}

impl From<&str> for TargetInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for TargetInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for TargetInput {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for TargetInput {
    fn from(value: i32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl From<u32> for TargetInput {
    fn from(value: u32) -> Self {
        Self::Number(i64::from(value))
    }
}

impl std::fmt::Display for TargetInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
        }
    }
}

/// Bounds applied when accepting a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetPolicy {
    pub max: Option<u32>,
}

impl TargetPolicy {
    pub fn unbounded() -> Self {
        Self { max: None }
    }

    pub fn with_max(max: u32) -> Self {
        Self { max: Some(max) }
    }

    pub fn parse(&self, input: &TargetInput) -> Result<Target, TargetRejection> {
        let value = match input {
            TargetInput::Number(value) => *value,
            TargetInput::Text(raw) => parse_whole_number(raw)?,
        };
        self.check(value)
    }

    fn ceiling(&self) -> u32 {
        self.max.unwrap_or(u32::MAX)
    }

    fn check(&self, value: i64) -> Result<Target, TargetRejection> {
        if value <= 0 {
            return Err(TargetRejection::NotPositive);
        }
        let max = self.ceiling();
        let value = u32::try_from(value).map_err(|_| TargetRejection::AboveMaximum { max })?;
        if value > max {
            return Err(TargetRejection::AboveMaximum { max });
        }
        Target::new(value).ok_or(TargetRejection::NotPositive)
    }
}

fn parse_whole_number(raw: &str) -> Result<i64, TargetRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TargetRejection::Empty);
    }

    trimmed.parse::<i64>().or_else(|err| match err.kind() {
        // Still a whole number, just one that no target could ever hold.
        IntErrorKind::PosOverflow => Ok(i64::MAX),
        IntErrorKind::NegOverflow => Ok(i64::MIN),
        _ => Err(TargetRejection::NotANumber),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: impl Into<TargetInput>) -> Result<u32, TargetRejection> {
        TargetPolicy::unbounded().parse(&input.into()).map(Target::get)
    }

    #[test]
    fn accepts_positive_numbers_and_numeric_text() {
        assert_eq!(parse(3), Ok(3));
        assert_eq!(parse("10"), Ok(10));
        assert_eq!(parse("  42 \n"), Ok(42));
        assert_eq!(parse("+8"), Ok(8));
    }

    #[test]
    fn rejects_non_positive_values() {
        assert_eq!(parse(0), Err(TargetRejection::NotPositive));
        assert_eq!(parse(-5), Err(TargetRejection::NotPositive));
        assert_eq!(parse("-1"), Err(TargetRejection::NotPositive));
        assert_eq!(parse("-99999999999999999999999"), Err(TargetRejection::NotPositive));
    }

    #[test]
    fn rejects_text_that_is_not_a_whole_number() {
        assert_eq!(parse("abc"), Err(TargetRejection::NotANumber));
        assert_eq!(parse("3.5"), Err(TargetRejection::NotANumber));
        assert_eq!(parse("10abc"), Err(TargetRejection::NotANumber));
        assert_eq!(parse(""), Err(TargetRejection::Empty));
        assert_eq!(parse("   "), Err(TargetRejection::Empty));
    }

    #[test]
    fn rejects_values_past_the_ceiling() {
        assert_eq!(
            parse(i64::from(u32::MAX) + 1),
            Err(TargetRejection::AboveMaximum { max: u32::MAX })
        );
        assert_eq!(
            parse("99999999999999999999999"),
            Err(TargetRejection::AboveMaximum { max: u32::MAX })
        );

        let policy = TargetPolicy::with_max(1000);
        assert_eq!(policy.parse(&1000.into()).map(Target::get), Ok(1000));
        assert_eq!(
            policy.parse(&"1001".into()),
            Err(TargetRejection::AboveMaximum { max: 1000 })
        );
    }

    #[test]
    fn untagged_input_accepts_numbers_and_strings() {
        let number: TargetInput = serde_json::from_str("5").expect("number");
        assert_eq!(number, TargetInput::Number(5));
        let text: TargetInput = serde_json::from_str("\"abc\"").expect("text");
        assert_eq!(text, TargetInput::Text("abc".to_string()));
    }
}
