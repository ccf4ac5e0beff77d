use anyhow::Result;
use colored::Colorize;
use errand_pricing::config::Config;
use tracing::info;

/// Execute the config show command
///
/// Prints the effective configuration after file and environment overrides
pub fn show(cfg: &Config) -> Result<()> {
    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(cfg)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}
