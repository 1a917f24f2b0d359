use serde::{Deserialize, Serialize};
use std::fmt;

/// One element of the input array, tagged at ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum InputToken {
    Decimal(i64),
    RomanCandidate(String),
    /// Anything that is neither an integer nor a string (floats, bools, null, nested values).
    Invalid(serde_json::Value),
}

impl InputToken {
    pub fn from_json(value: serde_json::Value) -> Self {
        if let Some(i) = value.as_i64() {
            return InputToken::Decimal(i);
        }
        match value {
            serde_json::Value::String(s) => InputToken::RomanCandidate(s),
            other => InputToken::Invalid(other),
        }
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputToken::Decimal(n) => write!(f, "{}", n),
            InputToken::RomanCandidate(s) => write!(f, "{}", s),
            InputToken::Invalid(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedInput {
    pub decimal_candidates: Vec<i64>,
    pub roman_candidates: Vec<String>,
    pub unclassified: Vec<serde_json::Value>,
    pub positions: GroupPositions,
}

/// Input index of every entry in each group, parallel to the group vectors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupPositions {
    pub decimal: Vec<usize>,
    pub roman: Vec<usize>,
    pub unclassified: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    NotRomanNumeral,
    TooManyDigits,
    UnsupportedType,
    OutOfRange,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectionReason::NotRomanNumeral => "not a valid Roman numeral",
            RejectionReason::TooManyDigits => "more than 4 digits",
            RejectionReason::UnsupportedType => "neither an integer nor a string",
            RejectionReason::OutOfRange => "outside the convertible range",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Index of the token in the input array.
    pub position: usize,
    pub token: InputToken,
    pub reason: RejectionReason,
}

impl Rejection {
    pub fn new(position: usize, token: InputToken, reason: RejectionReason) -> Self {
        Self {
            position,
            token,
            reason,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedInput {
    pub arabic: Vec<i64>,
    /// Input index of each entry in `arabic`.
    pub arabic_positions: Vec<usize>,
    pub roman: Vec<String>,
    /// Sorted by input position.
    pub rejections: Vec<Rejection>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion<I, O> {
    pub input: I,
    pub output: O,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionReport {
    pub roman_to_decimal: Vec<Conversion<String, u32>>,
    pub decimal_to_roman: Vec<Conversion<i64, String>>,
    pub rejections: Vec<Rejection>,
}

/// What to do with tokens that fail their format check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RejectionPolicy {
    #[default]
    Drop,
    Warn,
    Report,
}

/// What to do with decimals that cannot be written as Roman numerals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum RangePolicy {
    #[default]
    Abort,
    Skip,
}
