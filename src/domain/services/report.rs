use crate::domain::model::{ConversionReport, RejectionPolicy};
use std::fmt::Display;

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    policy: RejectionPolicy,
}

impl ReportFormatter {
    pub fn new(policy: RejectionPolicy) -> Self {
        Self { policy }
    }

    pub fn format(&self, report: &ConversionReport) -> String {
        let mut lines = vec![
            format!(
                "Roman numerals {} -> {}",
                join(report.roman_to_decimal.iter().map(|c| &c.input)),
                join(report.roman_to_decimal.iter().map(|c| c.output))
            ),
            format!(
                "Decimal numbers {} -> {}",
                join(report.decimal_to_roman.iter().map(|c| c.input)),
                join(report.decimal_to_roman.iter().map(|c| &c.output))
            ),
        ];

        if self.policy == RejectionPolicy::Report && !report.rejections.is_empty() {
            lines.push(format!(
                "Rejected tokens {}",
                join(report.rejections.iter().map(|r| &r.token))
            ));
        }

        let mut text = lines.join("\n");
        text.push('\n');
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Conversion, InputToken, Rejection, RejectionReason};

    fn sample() -> ConversionReport {
        ConversionReport {
            roman_to_decimal: vec![
                Conversion { input: "MCMXCIV".to_string(), output: 1994 },
                Conversion { input: "XII".to_string(), output: 12 },
            ],
            decimal_to_roman: vec![Conversion { input: 58, output: "LVIII".to_string() }],
            rejections: vec![Rejection::new(
                3,
                InputToken::RomanCandidate("IIII".to_string()),
                RejectionReason::NotRomanNumeral,
            )],
        }
    }

    #[test]
    fn test_format_two_lines() {
        let text = ReportFormatter::default().format(&sample());
        assert_eq!(
            text,
            "Roman numerals MCMXCIV,XII -> 1994,12\nDecimal numbers 58 -> LVIII\n"
        );
    }

    #[test]
    fn test_format_lists_rejections_when_requested() {
        let text = ReportFormatter::new(RejectionPolicy::Report).format(&sample());
        assert!(text.ends_with("Rejected tokens IIII\n"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn test_format_empty_report() {
        let text = ReportFormatter::default().format(&ConversionReport::default());
        assert_eq!(text, "Roman numerals  -> \nDecimal numbers  -> \n");
    }
}
