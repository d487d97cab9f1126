use action_manifest::utils::{logger, validation::Validate};
use action_manifest::{CliConfig, LocalStorage, ManifestBuilder, ScanEngine};
use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    let scan_config = match config.validate().and_then(|()| config.scan_config()) {
        Ok(scan_config) => scan_config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let builder = ManifestBuilder::new(LocalStorage::new(), scan_config)
        .context("failed to compile action patterns")?;
    let engine = ScanEngine::new(builder);

    let output = if config.dry_run {
        tracing::info!("🔍 Dry run, manifest will not be written");
        None
    } else {
        Some(config.output.as_path())
    };

    engine
        .run(&config.root, output)
        .with_context(|| format!("failed to scan {}", config.root.display()))?;

    Ok(())
}
