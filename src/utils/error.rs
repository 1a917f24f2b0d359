use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Number {value} is out of range (maximum is {max})")]
    RangeError { value: i64, max: u32 },

    #[error("Cannot convert '{input}': {reason}")]
    ConversionError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Input,
    Configuration,
    Conversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 配置錯誤，修正後可重跑
    Medium,
    /// 資料或轉換錯誤
    High,
    /// 系統錯誤
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::IoError(_) => ErrorCategory::Io,
            EtlError::SerializationError(_) | EtlError::ProcessingError { .. } => {
                ErrorCategory::Input
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            EtlError::RangeError { .. } | EtlError::ConversionError { .. } => {
                ErrorCategory::Conversion
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Io => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Conversion => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::IoError(_) => "Check that the input file exists and the output directory is writable",
            EtlError::SerializationError(_) => "Make sure the input file is valid JSON",
            EtlError::ProcessingError { .. } => {
                "The input must be a JSON array of numbers and strings, e.g. [1994, \"MCMXCIV\"]"
            }
            EtlError::ConfigError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
            EtlError::RangeError { .. } => {
                "Remove numbers above 3999 from the input or run with --on-range-error skip"
            }
            EtlError::ConversionError { .. } => "Only validated Roman numerals can be converted",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::IoError(e) => format!("Could not access a file: {}", e),
            EtlError::SerializationError(e) => format!("The input is not valid JSON: {}", e),
            EtlError::RangeError { value, max } => {
                format!("{} cannot be written as a Roman numeral (maximum is {})", value, max)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let io = EtlError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.category(), ErrorCategory::Io);
        assert_eq!(io.severity(), ErrorSeverity::Critical);

        let range = EtlError::RangeError { value: 4000, max: 3999 };
        assert_eq!(range.category(), ErrorCategory::Conversion);
        assert_eq!(range.severity(), ErrorSeverity::High);

        let config = EtlError::ConfigError {
            message: "bad".to_string(),
        };
        assert_eq!(config.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_range_error_message() {
        let err = EtlError::RangeError { value: 4000, max: 3999 };
        assert!(err.to_string().contains("4000"));
        assert!(err.user_friendly_message().contains("3999"));
    }
}
