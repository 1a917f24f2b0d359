use crate::domain::model::{
    ClassifiedInput, InputToken, Rejection, RejectionPolicy, RejectionReason, ValidatedInput,
};
use regex::Regex;
use std::sync::LazyLock;

// `regex` has no lookahead; the leading-letter requirement is checked separately.
static ROMAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M*(C[MD]|D?C{0,3})(X[CL]|L?X{0,3})(I[XV]|V?I{0,3})$").unwrap()
});

static DECIMAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{1,4}$").unwrap());

const ROMAN_ALPHABET: &[char] = &['M', 'D', 'C', 'L', 'X', 'V', 'I'];

pub fn is_roman_numeral(token: &str) -> bool {
    token.starts_with(ROMAN_ALPHABET) && ROMAN_PATTERN.is_match(token)
}

/// Sign is ignored; only the digit count matters. Range is checked at conversion.
pub fn is_decimal_format(value: i64) -> bool {
    DECIMAL_PATTERN.is_match(&value.unsigned_abs().to_string())
}

pub fn check_roman(token: &str) -> Result<(), RejectionReason> {
    if is_roman_numeral(token) {
        Ok(())
    } else {
        Err(RejectionReason::NotRomanNumeral)
    }
}

pub fn check_decimal(value: i64) -> Result<(), RejectionReason> {
    if is_decimal_format(value) {
        Ok(())
    } else {
        Err(RejectionReason::TooManyDigits)
    }
}

/// Applies both filters. Failing entries are collected in input order, never raised.
pub fn validate_input(classified: ClassifiedInput) -> ValidatedInput {
    let mut validated = ValidatedInput::default();
    let positions = classified.positions;

    for (value, position) in classified.decimal_candidates.into_iter().zip(positions.decimal) {
        match check_decimal(value) {
            Ok(()) => {
                validated.arabic.push(value);
                validated.arabic_positions.push(position);
            }
            Err(reason) => validated.rejections.push(Rejection::new(
                position,
                InputToken::Decimal(value),
                reason,
            )),
        }
    }

    for (token, position) in classified.roman_candidates.into_iter().zip(positions.roman) {
        match check_roman(&token) {
            Ok(()) => validated.roman.push(token),
            Err(reason) => validated.rejections.push(Rejection::new(
                position,
                InputToken::RomanCandidate(token),
                reason,
            )),
        }
    }

    for (value, position) in classified.unclassified.into_iter().zip(positions.unclassified) {
        validated.rejections.push(Rejection::new(
            position,
            InputToken::Invalid(value),
            RejectionReason::UnsupportedType,
        ));
    }

    validated.rejections.sort_by_key(|r| r.position);
    validated
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    policy: RejectionPolicy,
}

impl Validator {
    pub fn new(policy: RejectionPolicy) -> Self {
        Self { policy }
    }

    pub fn validate(&self, classified: ClassifiedInput) -> ValidatedInput {
        let validated = validate_input(classified);
        for rejection in &validated.rejections {
            self.log_rejection(rejection);
        }
        tracing::debug!(
            "Validated {} decimal and {} roman tokens, rejected {}",
            validated.arabic.len(),
            validated.roman.len(),
            validated.rejections.len()
        );
        validated
    }

    pub fn log_rejection(&self, rejection: &Rejection) {
        match self.policy {
            RejectionPolicy::Drop => {
                tracing::debug!("Dropping '{}': {}", rejection.token, rejection.reason)
            }
            RejectionPolicy::Warn | RejectionPolicy::Report => {
                tracing::warn!("Rejected '{}': {}", rejection.token, rejection.reason)
            }
        }
    }
}
