use crate::errand::ErrandLimits;
use crate::pricing::models::{default_tiers, OverflowPolicy, PricingTable, PricingTier};
use crate::pricing::{CurrencyFormatter, PricingEngine, RouteSharePolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable prefix, e.g. `ERRAND_PRICING__LOGGING__LEVEL=debug`
pub const ENV_PREFIX: &str = "ERRAND_PRICING";

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub pricing: PricingConfig,
    pub currency: CurrencyFormatter,
    pub errand: ErrandLimits,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// The `[pricing]` section: tier table plus the rules around it
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingConfig {
    #[serde(default = "default_tiers")]
    pub tiers: Vec<PricingTier>,

    #[serde(default)]
    pub overflow: OverflowPolicy,

    #[serde(default)]
    pub route_share: RouteSharePolicy,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
            overflow: OverflowPolicy::default(),
            route_share: RouteSharePolicy::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Build the pricing engine described by this configuration
    pub fn engine(&self) -> anyhow::Result<PricingEngine> {
        Ok(PricingEngine::from_config(&self.pricing)?)
    }
}

/// Load configuration from `path` (optional) and the environment
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = settings.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    // Same syntax as RUST_LOG: bare levels, `off`, or target directives
    if let Err(e) = EnvFilter::try_new(&cfg.logging.level) {
        anyhow::bail!("logging.level '{}' is invalid: {}", cfg.logging.level, e);
    }

    let table = PricingTable::new(cfg.pricing.tiers.clone())
        .map_err(|e| anyhow::anyhow!("pricing.tiers: {}", e))?;
    cfg.pricing
        .overflow
        .validate(&table)
        .map_err(|e| anyhow::anyhow!("pricing.overflow: {}", e))?;
    cfg.pricing
        .route_share
        .validate()
        .map_err(|e| anyhow::anyhow!("pricing.route_share: {}", e))?;

    if cfg.currency.symbol.is_empty() {
        anyhow::bail!("currency.symbol cannot be empty");
    }

    if !cfg.errand.max_budget.is_finite() || cfg.errand.max_budget <= 0.0 {
        anyhow::bail!("errand.max_budget must be a positive number");
    }
    if cfg.errand.max_instructions_len == 0 {
        anyhow::bail!("errand.max_instructions_len must be >= 1");
    }

    Ok(())
}
