use crate::domain::services::table::{match_prefix, MAX_ROMAN_VALUE, NUMERAL_TABLE};
use crate::utils::error::{EtlError, Result};

/// Splits a numeral into the values of its canonical symbols, longest match first.
fn decompose(roman: &str) -> Result<Vec<u32>> {
    let mut values = Vec::with_capacity(roman.len());
    let mut rest = roman;

    while !rest.is_empty() {
        let pair = match_prefix(rest).ok_or_else(|| EtlError::ConversionError {
            input: roman.to_string(),
            reason: format!("unexpected symbol at '{}'", rest),
        })?;
        values.push(pair.value);
        rest = &rest[pair.symbol.len()..];
    }

    Ok(values)
}

/// Converts a validated Roman numeral to its decimal value.
///
/// Every element except the last is subtracted when it is smaller than its
/// successor and added otherwise; the last element is always added.
pub fn roman_to_decimal(roman: &str) -> Result<u32> {
    let values = decompose(roman)?;
    if values.is_empty() {
        return Err(EtlError::ConversionError {
            input: roman.to_string(),
            reason: "empty numeral".to_string(),
        });
    }

    let mut total: i64 = 0;
    for (idx, &value) in values.iter().enumerate() {
        match values.get(idx + 1) {
            Some(&next) if value < next => total -= i64::from(value),
            _ => total += i64::from(value),
        }
    }

    u32::try_from(total).map_err(|_| EtlError::ConversionError {
        input: roman.to_string(),
        reason: format!("evaluates to {}", total),
    })
}

/// Greedy conversion over the canonical table. Values below 1 yield an empty string.
pub fn decimal_to_roman(value: i64) -> Result<String> {
    if value > i64::from(MAX_ROMAN_VALUE) {
        return Err(EtlError::RangeError {
            value,
            max: MAX_ROMAN_VALUE,
        });
    }

    let mut roman = String::new();
    if value < 1 {
        return Ok(roman);
    }
    let mut remaining = value as u32;

    for pair in &NUMERAL_TABLE {
        while remaining >= pair.value {
            roman.push_str(pair.symbol);
            remaining -= pair.value;
        }
        if remaining == 0 {
            break;
        }
    }

    Ok(roman)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        assert_eq!(roman_to_decimal("IX").unwrap(), 9);
        assert_eq!(roman_to_decimal("MCMXCIV").unwrap(), 1994);
        assert_eq!(roman_to_decimal("LVIII").unwrap(), 58);
        assert_eq!(decimal_to_roman(58).unwrap(), "LVIII");
        assert_eq!(decimal_to_roman(1994).unwrap(), "MCMXCIV");
    }

    #[test]
    fn test_repeated_symbols_add() {
        assert_eq!(roman_to_decimal("I").unwrap(), 1);
        assert_eq!(roman_to_decimal("II").unwrap(), 2);
        assert_eq!(roman_to_decimal("III").unwrap(), 3);
        assert_eq!(roman_to_decimal("XX").unwrap(), 20);
        assert_eq!(roman_to_decimal("MMM").unwrap(), 3000);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(decimal_to_roman(3999).unwrap(), "MMMCMXCIX");
        assert_eq!(decimal_to_roman(1).unwrap(), "I");
        assert_eq!(decimal_to_roman(0).unwrap(), "");
        assert!(matches!(
            decimal_to_roman(4000),
            Err(EtlError::RangeError { value: 4000, max: 3999 })
        ));
        assert_eq!(decimal_to_roman(-1).unwrap(), "");
        assert_eq!(decimal_to_roman(-9999).unwrap(), "");
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(matches!(roman_to_decimal(""), Err(EtlError::ConversionError { .. })));
        assert!(matches!(roman_to_decimal("XZ"), Err(EtlError::ConversionError { .. })));
    }

    #[test]
    fn test_round_trip_full_range() {
        for n in 1..=3999 {
            let roman = decimal_to_roman(n).unwrap();
            assert_eq!(roman_to_decimal(&roman).unwrap() as i64, n, "{}", roman);
        }
    }
}
