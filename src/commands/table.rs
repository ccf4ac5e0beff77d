use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};
use errand_pricing::config::Config;
use errand_pricing::pricing::{CurrencyFormatter, PricingEngine};

/// Execute the table command
pub fn execute(cfg: &Config) -> Result<()> {
    let engine = cfg.engine()?;

    println!("Delivery Pricing");
    println!("================\n");
    println!("{}", render_table(&engine, &cfg.currency));
    println!();
    println!("{}", describe_overflow(&engine, &cfg.currency));
    println!("{}", describe_route_share(&engine, &cfg.currency));

    Ok(())
}

fn render_table(engine: &PricingEngine, currency: &CurrencyFormatter) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("TIER").fg(Color::Cyan),
        Cell::new("DISTANCE (KM)").fg(Color::Cyan),
        Cell::new("PRICE").fg(Color::Cyan),
    ]);

    let mut lower = 0.0;
    for (index, tier) in engine.table().tiers().iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(format!("> {} to {}", lower, tier.max_distance_km)),
            Cell::new(currency.format(tier.price)).set_alignment(CellAlignment::Right),
        ]);
        lower = tier.max_distance_km;
    }

    table
}

fn describe_overflow(engine: &PricingEngine, currency: &CurrencyFormatter) -> String {
    let overflow = engine.overflow();
    format!(
        "Beyond {} km: {} + {} per km over {} km",
        engine.table().last_bound(),
        currency.format(overflow.base_fee),
        currency.format(overflow.per_km_surcharge),
        engine.table().last_bound()
    )
}

fn describe_route_share(engine: &PricingEngine, currency: &CurrencyFormatter) -> String {
    let route_share = engine.route_share();
    format!(
        "Shared route: {} off, minimum {}",
        currency.format(route_share.discount),
        currency.format(route_share.floor)
    )
}
