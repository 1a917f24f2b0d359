use crate::core::ConfigProvider;
use crate::domain::model::{RangePolicy, RejectionPolicy};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{validate_distinct_paths, validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
const LOG_FORMATS: &[&str] = &["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub load: LoadConfig,
    pub policy: Option<PolicyConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub on_rejected: Option<RejectionPolicy>,
    pub on_range_error: Option<RangePolicy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${INPUT_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_path("source.input_path", &self.source.input_path)?;
        validate_path("load.output_path", &self.load.output_path)?;
        validate_distinct_paths(&self.source.input_path, &self.load.output_path)?;

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validate_one_of("logging.level", level, LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validate_one_of("logging.format", format, LOG_FORMATS)?;
            }
        }

        Ok(())
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or("info")
    }

    /// 是否輸出 JSON 格式日誌
    pub fn json_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .is_some_and(|f| f == "json")
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.input_path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn rejection_policy(&self) -> RejectionPolicy {
        self.policy
            .as_ref()
            .and_then(|p| p.on_rejected)
            .unwrap_or_default()
    }

    fn range_policy(&self) -> RangePolicy {
        self.policy
            .as_ref()
            .and_then(|p| p.on_range_error)
            .unwrap_or_default()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[source]
input_path = "data/numeros.json"

[load]
output_path = "out/numeros.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "data/numeros.json");
        assert_eq!(config.output_path(), "out/numeros.txt");
        assert_eq!(config.rejection_policy(), RejectionPolicy::Drop);
        assert_eq!(config.range_policy(), RangePolicy::Abort);
        assert_eq!(config.log_level(), "info");
        assert!(!config.json_logging());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_policies_and_logging() {
        let toml_content = r#"
[source]
input_path = "numeros.json"

[load]
output_path = "numeros.txt"

[policy]
on_rejected = "report"
on_range_error = "skip"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.rejection_policy(), RejectionPolicy::Report);
        assert_eq!(config.range_policy(), RangePolicy::Skip);
        assert_eq!(config.log_level(), "debug");
        assert!(config.json_logging());
    }

    #[test]
    fn test_unknown_policy_fails_to_parse() {
        let toml_content = r#"
[source]
input_path = "numeros.json"

[load]
output_path = "numeros.txt"

[policy]
on_rejected = "shout"
"#;

        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(EtlError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROMAN_ETL_TEST_DIR", "/tmp/numerals");

        let toml_content = r#"
[source]
input_path = "${ROMAN_ETL_TEST_DIR}/numeros.json"

[load]
output_path = "${ROMAN_ETL_UNSET_VAR}/numeros.txt"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.source.input_path, "/tmp/numerals/numeros.json");
        assert_eq!(config.load.output_path, "${ROMAN_ETL_UNSET_VAR}/numeros.txt");

        std::env::remove_var("ROMAN_ETL_TEST_DIR");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[source]
input_path = "numeros.json"

[load]
output_path = "numeros.json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[source]
input_path = "numeros.json"

[load]
output_path = "numeros.txt"

[logging]
level = "loud"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[source]
input_path = "numeros.json"

[load]
output_path = "report.txt"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_path(), "report.txt");
    }
}
