use clap::Parser;
use rate_spread::cli::{Cli, Commands};
use rate_spread::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    rate_spread::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Align(args) => {
            tracing::info!("Aligning spreads");
            args.execute(&config).await?;
        }
        Commands::Render(args) => {
            tracing::info!("Rendering spread chart");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            print!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}
