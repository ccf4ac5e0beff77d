pub mod calculator;
pub mod currency;
pub mod loader;
pub mod models;
pub mod route_share;

pub use calculator::{calculate_delivery_price, default_engine, PricingEngine};
pub use currency::{format_currency, CurrencyFormatter};
pub use loader::{load_pricing_file, parse_pricing_json, parse_pricing_toml, table_fingerprint};
pub use models::{
    OverflowPolicy, PriceQuote, PriceSource, PricingError, PricingTable, PricingTier,
};
pub use route_share::RouteSharePolicy;
