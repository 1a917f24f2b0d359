pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::core::ConfigProvider;
    use crate::domain::model::{RangePolicy, RejectionPolicy};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
    use clap::Parser;

    pub const DEFAULT_INPUT: &str = "numeros.json";
    pub const DEFAULT_OUTPUT: &str = "numeros.txt";

    #[derive(Debug, Clone, Parser)]
    #[command(name = "roman-etl")]
    #[command(about = "Validate and convert between Roman and decimal numerals")]
    pub struct CliConfig {
        /// JSON array of numbers and Roman numeral strings
        #[arg(long = "input", default_value = DEFAULT_INPUT)]
        pub input_path: String,

        /// Report file, overwritten on each run
        #[arg(long = "output", default_value = DEFAULT_OUTPUT)]
        pub output_path: String,

        #[arg(long, value_enum, default_value_t = RejectionPolicy::Drop)]
        pub on_rejected: RejectionPolicy,

        #[arg(long, value_enum, default_value_t = RangePolicy::Abort)]
        pub on_range_error: RangePolicy,

        /// TOML configuration file; replaces the flags above when given
        #[arg(short, long)]
        pub config: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl Default for CliConfig {
        fn default() -> Self {
            Self {
                input_path: DEFAULT_INPUT.to_string(),
                output_path: DEFAULT_OUTPUT.to_string(),
                on_rejected: RejectionPolicy::default(),
                on_range_error: RangePolicy::default(),
                config: None,
                verbose: false,
            }
        }
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input_path
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn rejection_policy(&self) -> RejectionPolicy {
            self.on_rejected
        }

        fn range_policy(&self) -> RangePolicy {
            self.on_range_error
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("input", &self.input_path)?;
            validate_path("output", &self.output_path)?;
            validate_distinct_paths(&self.input_path, &self.output_path)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults_use_fixed_names() {
            let config = CliConfig::parse_from(["roman-etl"]);
            assert_eq!(config.input_path(), "numeros.json");
            assert_eq!(config.output_path(), "numeros.txt");
            assert_eq!(config.rejection_policy(), RejectionPolicy::Drop);
            assert_eq!(config.range_policy(), RangePolicy::Abort);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_policy_flags() {
            let config = CliConfig::parse_from([
                "roman-etl",
                "--on-rejected",
                "report",
                "--on-range-error",
                "skip",
            ]);
            assert_eq!(config.rejection_policy(), RejectionPolicy::Report);
            assert_eq!(config.range_policy(), RangePolicy::Skip);
        }

        #[test]
        fn test_same_input_and_output_rejected() {
            let config = CliConfig::parse_from([
                "roman-etl",
                "--input",
                "data.json",
                "--output",
                "data.json",
            ]);
            assert!(config.validate().is_err());
        }
    }
}
