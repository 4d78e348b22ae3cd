use clap::Parser;
use tle_merge::utils::{logger, validation::Validate};
use tle_merge::{CliConfig, LocalStorage, MergeEngine, MergeError, MergePipeline};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Merge failed: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: &CliConfig) -> Result<(), MergeError> {
    let settings = cli.to_settings()?;
    settings.validate()?;
    tracing::debug!("Effective settings: {:?}", settings);

    let pipeline = MergePipeline::new(LocalStorage::current_dir(), settings)?;
    let output_path = MergeEngine::new(pipeline).run().await?;

    println!("📁 Wrote merged file to {}", output_path);
    Ok(())
}
