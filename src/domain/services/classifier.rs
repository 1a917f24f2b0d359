use crate::domain::model::{ClassifiedInput, InputToken};

/// Partitions tokens by tag. Relative order inside each group is kept.
pub fn classify(tokens: Vec<InputToken>) -> ClassifiedInput {
    let mut classified = ClassifiedInput::default();

    for (position, token) in tokens.into_iter().enumerate() {
        match token {
            InputToken::Decimal(n) => {
                classified.decimal_candidates.push(n);
                classified.positions.decimal.push(position);
            }
            InputToken::RomanCandidate(s) => {
                classified.roman_candidates.push(s);
                classified.positions.roman.push(position);
            }
            InputToken::Invalid(v) => {
                classified.unclassified.push(v);
                classified.positions.unclassified.push(position);
            }
        }
    }

    tracing::debug!(
        "Classified {} decimal, {} roman, {} unsupported tokens",
        classified.decimal_candidates.len(),
        classified.roman_candidates.len(),
        classified.unclassified.len()
    );

    classified
}
