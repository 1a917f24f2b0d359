use clap::Parser;
use roman_etl::core::ConfigProvider;
use roman_etl::utils::error::ErrorSeverity;
use roman_etl::utils::{logger, validation::Validate};
use roman_etl::{CliConfig, EtlEngine, EtlError, LocalStorage, NumeralPipeline, TomlConfig};

async fn run<C: ConfigProvider + Validate>(config: C) -> Result<String, EtlError> {
    config.validate()?;

    let storage = LocalStorage::current_dir();
    let pipeline = NumeralPipeline::new(storage, config);
    EtlEngine::new(pipeline).run().await
}

fn exit_code(e: &EtlError) -> i32 {
    match e.severity() {
        ErrorSeverity::Medium => 2,   // 配置錯誤
        ErrorSeverity::High => 1,     // 資料錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

#[tokio::main]
async fn main() {
    let args = CliConfig::parse();

    // 有 TOML 配置時以其為準
    let result = match args.config.clone() {
        Some(path) => match TomlConfig::from_file(&path) {
            Ok(config) => {
                let level = if args.verbose {
                    "debug"
                } else {
                    config.log_level()
                };
                if config.json_logging() {
                    logger::init_json_logger(level);
                } else {
                    logger::init_compact_logger(level);
                }
                tracing::info!("Loaded configuration from: {}", path);
                run(config).await
            }
            Err(e) => {
                logger::init_cli_logger(args.verbose);
                tracing::error!("Failed to load config file '{}'", path);
                Err(e)
            }
        },
        None => {
            logger::init_cli_logger(args.verbose);
            tracing::debug!("CLI config: {:?}", args);
            run(args).await
        }
    };

    match result {
        Ok(output_path) => {
            println!("✅ Report written to {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    }
}
