use clap::Parser;
use msvc_testgen::utils::{logger, validation::Validate};
use msvc_testgen::{CliConfig, LocalFileSystem, RandomIdentifiers, SolutionGenerator};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting msvc-testgen");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve_settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    let generator = SolutionGenerator::new_with_monitoring(
        LocalFileSystem::new(),
        RandomIdentifiers::new(),
        settings,
        config.monitor,
    );

    match generator.run() {
        Ok(summary) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "✅ Generated {} projects into {}",
                    summary.projects.len(),
                    summary.solution_path.display()
                );
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Generation failed: {} (Category: {:?})",
                e,
                e.category()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
