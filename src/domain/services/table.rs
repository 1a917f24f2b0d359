/// Largest value expressible with the canonical symbols.
pub const MAX_ROMAN_VALUE: u32 = 3999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumeralPair {
    pub value: u32,
    pub symbol: &'static str,
}

const fn pair(value: u32, symbol: &'static str) -> NumeralPair {
    NumeralPair { value, symbol }
}

/// The 13 canonical pairs, strictly descending by value. Both conversion
/// directions walk this table front to back.
pub static NUMERAL_TABLE: [NumeralPair; 13] = [
    pair(1000, "M"),
    pair(900, "CM"),
    pair(500, "D"),
    pair(400, "CD"),
    pair(100, "C"),
    pair(90, "XC"),
    pair(50, "L"),
    pair(40, "XL"),
    pair(10, "X"),
    pair(9, "IX"),
    pair(5, "V"),
    pair(4, "IV"),
    pair(1, "I"),
];

/// First table entry whose symbol starts `input`. Two-letter forms sit before
/// the single letter they start with, so "CM" wins over "C".
pub fn match_prefix(input: &str) -> Option<&'static NumeralPair> {
    NUMERAL_TABLE.iter().find(|p| input.starts_with(p.symbol))
}
