pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{etl::EtlEngine, pipeline::NumeralPipeline};
pub use domain::model::{InputToken, RangePolicy, RejectionPolicy};
pub use domain::services::{decimal_to_roman, roman_to_decimal};
pub use utils::error::{EtlError, Result};
