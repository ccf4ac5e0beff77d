use anyhow::Result;
use colored::Colorize;
use errand_pricing::config::Config;
use errand_pricing::pricing::{CurrencyFormatter, PriceQuote, PriceSource};
use tracing::info;

/// Execute the quote command
pub fn execute(cfg: &Config, distance_km: f64, join_route: bool, json: bool) -> Result<()> {
    let engine = cfg.engine()?;
    let quote = engine.quote(distance_km, join_route);

    info!(distance_km, total = quote.total, "Quoted delivery");

    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        for line in describe_quote(&quote, &cfg.currency) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Human readable lines for a quote, total last
pub(crate) fn describe_quote(quote: &PriceQuote, currency: &CurrencyFormatter) -> Vec<String> {
    let mut lines = Vec::new();

    let source = match quote.source {
        PriceSource::NoCharge => "no chargeable distance".to_string(),
        PriceSource::Tier {
            index,
            max_distance_km,
        } => format!("tier {} (up to {} km)", index + 1, max_distance_km),
        PriceSource::Overflow { extra_km } => format!("overflow ({} km past last tier)", extra_km),
    };

    lines.push(format!("  Distance: {} km", quote.distance_km));
    lines.push(format!("  Pricing:  {}", source));
    if quote.discount > 0.0 {
        lines.push(format!("  Base fee: {}", currency.format(quote.base_price)));
        lines.push(format!(
            "  Shared route discount: -{}",
            currency.format(quote.discount)
        ));
    }
    lines.push(format!(
        "  {}: {}",
        "Delivery fee".bold(),
        currency.format(quote.total).green().bold()
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use errand_pricing::pricing::PricingEngine;

    #[test]
    fn test_describe_tier_quote() {
        colored::control::set_override(false);
        let quote = PricingEngine::default().quote(3.1, false);
        let lines = describe_quote(&quote, &CurrencyFormatter::default());

        assert_eq!(lines[1], "  Pricing:  tier 2 (up to 5 km)");
        assert_eq!(lines.last().unwrap(), "  Delivery fee: $3.00");
    }

    #[test]
    fn test_describe_discounted_quote() {
        colored::control::set_override(false);
        let quote = PricingEngine::default().quote(24.0, true);
        let lines = describe_quote(&quote, &CurrencyFormatter::default());

        assert!(lines.contains(&"  Base fee: $11.00".to_string()));
        assert!(lines.contains(&"  Shared route discount: -$2.00".to_string()));
        assert_eq!(lines.last().unwrap(), "  Delivery fee: $9.00");
    }
}
