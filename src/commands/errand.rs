use crate::commands::quote::describe_quote;
use anyhow::Result;
use colored::Colorize;
use errand_pricing::config::Config;
use errand_pricing::errand::ErrandRequest;
use errand_pricing::error::AppError;
use tracing::{info, warn};

/// Execute the errand command
pub fn execute(cfg: &Config, request: &ErrandRequest, distance_km: f64) -> Result<()> {
    let engine = cfg.engine()?;

    let estimate = match request.estimate(&engine, &cfg.errand, distance_km) {
        Ok(estimate) => estimate,
        Err(errors) => {
            println!("{}", "✗ Errand request is invalid".red());
            for error in &errors.errors {
                println!("    {}: {}", error.field, error.message);
            }
            warn!(fields = errors.errors.len(), "Rejected errand request");
            return Err(AppError::from(errors).into());
        }
    };

    println!("{}", "✓ Errand request is valid".green());
    println!();
    println!("  Category: {}", estimate.category);
    println!("  Route:    {} → {}", request.pickup.trim(), request.destination.trim());
    for line in describe_quote(&estimate.quote, &cfg.currency) {
        println!("{}", line);
    }
    println!("  Budget:   {}", cfg.currency.format(estimate.budget));

    if estimate.within_budget {
        println!("  {}", "Delivery fee fits the budget".green());
    } else {
        println!("  {}", "Delivery fee exceeds the budget".yellow());
    }

    info!(
        category = %estimate.category,
        total = estimate.quote.total,
        within_budget = estimate.within_budget,
        "Estimated errand"
    );
    Ok(())
}
