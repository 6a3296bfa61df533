use clap::Parser;
use crush_statarb::cli::{Cli, Commands};
use crush_statarb::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {:#}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    let _guard = crush_statarb::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Validate(args) => {
            tracing::info!("Starting validation");
            args.execute(&config)?;
        }
        Commands::Backtest(args) => {
            tracing::info!("Starting backtest");
            args.execute(&config)?;
        }
        Commands::Simulate(args) => {
            tracing::info!("Starting simulation");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("# Effective configuration ({})", cli.config);
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
