use clap::Parser;
use small_radix::utils::{logger, validation::Validate};
use small_radix::{BatchConfig, BatchRunner, CheckedConverter, LocalStorage, TrustedConverter};

#[derive(Parser)]
#[command(name = "batch-convert")]
#[command(about = "Run a TOML file of radix conversions and write a report")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "conversions.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Override the unchecked setting from config
    #[arg(long)]
    unchecked: Option<bool>,

    /// Dry run - list the jobs without converting
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting batch conversion");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match BatchConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(unchecked) = args.unchecked {
        config.batch.unchecked = Some(unchecked);
        tracing::info!("🔧 Unchecked mode overridden to: {}", unchecked);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No conversion will occur");
        for (i, job) in config.resolved_jobs()?.iter().enumerate() {
            println!("{:>4}. {} ({} -> {})", i + 1, job.numeral, job.from, job.to);
        }
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let outcome = if config.is_unchecked() {
        tracing::warn!("⚠️ Unchecked mode: digits and overflow are not validated");
        BatchRunner::new(TrustedConverter, storage).run(&config)
    } else {
        BatchRunner::new(CheckedConverter, storage).run(&config)
    };

    match outcome {
        Ok((report, output_path)) => {
            println!(
                "✅ {} of {} conversions succeeded",
                report.succeeded,
                report.total()
            );
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Batch failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
