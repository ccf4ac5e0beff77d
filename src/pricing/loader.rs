use crate::config::PricingConfig;
use crate::error::AppError;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{debug, info};

/// Parse a standalone pricing file in TOML form
pub fn parse_pricing_toml(content: &str) -> Result<PricingConfig, AppError> {
    toml::from_str(content)
        .map_err(|e| AppError::ConfigError(format!("Failed to parse pricing TOML: {}", e)))
}

/// Parse a standalone pricing file in JSON form
pub fn parse_pricing_json(content: &str) -> Result<PricingConfig, AppError> {
    serde_json::from_str(content)
        .map_err(|e| AppError::ConfigError(format!("Failed to parse pricing JSON: {}", e)))
}

/// Load a pricing file, picking the parser from its extension
///
/// `.json` files are read as JSON, everything else as TOML.
pub fn load_pricing_file(path: &Path) -> Result<PricingConfig, AppError> {
    info!("Loading pricing table from: {}", path.display());

    let content = std::fs::read_to_string(path)?;
    debug!("Read {} bytes of pricing data", content.len());

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let cfg = if is_json {
        parse_pricing_json(&content)?
    } else {
        parse_pricing_toml(&content)?
    };

    info!("Parsed {} pricing tiers", cfg.tiers.len());
    Ok(cfg)
}

/// SHA-256 over the canonical JSON form of the pricing section
///
/// Two configurations with equal tiers and policies share a fingerprint no
/// matter which file format they came from.
pub fn table_fingerprint(cfg: &PricingConfig) -> String {
    let canonical =
        serde_json::to_string(cfg).expect("plain structs of f64s always serialize to JSON");
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    format!("{:x}", hasher.finalize())
}
