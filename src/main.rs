use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use errand_pricing::config::{self, Config};
use errand_pricing::init_tracing;
use errand_pricing::pricing::load_pricing_file;

fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();
    let command = args.get_command();

    if let cli::Commands::Version = command {
        println!("Errand Pricing v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let cfg = load(&args)?;

    match command {
        cli::Commands::Table => commands::table::execute(&cfg)?,
        cli::Commands::Quote {
            distance,
            join_route,
            json,
        } => commands::quote::execute(&cfg, distance, join_route, json)?,
        cli::Commands::Errand {
            pickup,
            destination,
            budget,
            distance,
            instructions,
            category,
            join_route,
        } => {
            let request = errand_pricing::errand::ErrandRequest {
                category,
                pickup,
                destination,
                budget,
                instructions,
                join_route,
            };
            commands::errand::execute(&cfg, &request, distance)?;
        }
        cli::Commands::Test => commands::test::execute(&cfg)?,
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&cfg)?,
        },
        cli::Commands::Version => {}
    }

    Ok(())
}

/// Load configuration, start logging, then apply any standalone pricing file
fn load(args: &cli::Cli) -> Result<Config> {
    let mut cfg = config::load_config(&args.config)?;

    init_tracing(&cfg.logging);

    if let Some(path) = &args.pricing_file {
        cfg.pricing = load_pricing_file(path)?;
        config::validate_config(&cfg)?;
    }

    Ok(cfg)
}
