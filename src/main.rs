use anyhow::Context;
use clap::Parser;
use gdap_sync::utils::logger;
use gdap_sync::{CliConfig, GdapError, GdapPipeline, GenerationEngine, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config) {
        match e.downcast_ref::<GdapError>() {
            Some(err) => {
                tracing::debug!(
                    "gdap-sync failed: {} (Category: {:?})",
                    e,
                    err.category()
                );
                tracing::info!("Suggestion: {}", err.recovery_suggestion());
                println!("{}", err.user_friendly_message());
            }
            None => println!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

fn run(config: CliConfig) -> anyhow::Result<()> {
    let settings = config
        .into_settings()
        .context("invalid gdap-sync configuration")?;
    let mode = settings.mode;

    let pipeline = GdapPipeline::new(LocalStorage::default(), settings)?;
    let engine = GenerationEngine::with_mode(pipeline, mode);

    let descriptor = engine.run()?;
    tracing::info!(
        "Descriptor {} lists {} remote dependencies",
        descriptor.name,
        descriptor.remote.len()
    );
    Ok(())
}
