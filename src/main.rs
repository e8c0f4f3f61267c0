use clap::Parser;
use small_radix::utils::validation::Validate;
use small_radix::utils::{error::AppError, logger};
use small_radix::CliConfig;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    let numeral = config.effective_numeral();
    if numeral != config.numeral {
        tracing::info!("🔧 Numeral sanitized: '{}' -> '{}'", config.numeral, numeral);
    }
    if config.unchecked {
        tracing::debug!("Using unchecked conversion path");
    }

    let result = config.run_conversion();

    match result {
        Ok(output) => {
            tracing::debug!("{} ({}) -> {} ({})", numeral, config.from, output, config.to);
            println!("{}", output);
        }
        Err(e) => {
            let e = AppError::from(e);
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    }
}
