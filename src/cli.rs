use clap::{Parser, Subcommand};
use errand_pricing::errand::ErrandCategory;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "errand-pricing", version, about = "Errand delivery pricing")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    /// Standalone pricing table (TOML or JSON) replacing the [pricing] section
    #[arg(short, long, global = true, env = "ERRAND_PRICING_FILE")]
    pub pricing_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Show the pricing table (default)
    Table,

    /// Price a delivery distance
    Quote {
        /// Travel distance in kilometers
        #[arg(allow_negative_numbers = true)]
        distance: f64,

        /// Apply the shared-route discount
        #[arg(short, long)]
        join_route: bool,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate an errand request and estimate its delivery fee
    Errand {
        #[arg(long)]
        pickup: String,

        #[arg(long)]
        destination: String,

        /// Budget for the errand, in currency units
        #[arg(long, allow_negative_numbers = true)]
        budget: f64,

        /// Travel distance in kilometers
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,

        #[arg(long, default_value = "")]
        instructions: String,

        #[arg(long, default_value = "groceries")]
        category: ErrandCategory,

        /// Apply the shared-route discount
        #[arg(short, long)]
        join_route: bool,
    },

    /// Test configuration file validity
    Test,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
}

impl Cli {
    /// Get the command to execute, defaulting to Table if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Table)
    }
}
