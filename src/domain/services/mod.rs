pub mod classifier;
pub mod converter;
pub mod report;
pub mod table;
pub mod validator;

pub use classifier::classify;
pub use converter::{decimal_to_roman, roman_to_decimal};
pub use report::ReportFormatter;
pub use validator::{validate_input, Validator};
