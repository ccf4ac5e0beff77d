use crate::config::PricingConfig;
use crate::pricing::loader::table_fingerprint;
use crate::pricing::models::{
    OverflowPolicy, PriceQuote, PriceSource, PricingError, PricingTable,
};
use crate::pricing::route_share::RouteSharePolicy;
use std::sync::OnceLock;
use tracing::{debug, info, trace};

/// Maps travel distance to a delivery fee
///
/// The engine holds only immutable configuration, so a single instance can be
/// shared across threads and called concurrently without locking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PricingEngine {
    table: PricingTable,
    overflow: OverflowPolicy,
    route_share: RouteSharePolicy,
}

impl PricingEngine {
    /// Create an engine over a validated table and overflow rule
    pub fn new(table: PricingTable, overflow: OverflowPolicy) -> Result<Self, PricingError> {
        overflow.validate(&table)?;
        Ok(Self {
            table,
            overflow,
            route_share: RouteSharePolicy::default(),
        })
    }

    /// Replace the shared-route discount policy
    pub fn with_route_share(mut self, route_share: RouteSharePolicy) -> Result<Self, PricingError> {
        route_share.validate()?;
        self.route_share = route_share;
        Ok(self)
    }

    /// Build an engine from the `[pricing]` configuration section
    pub fn from_config(cfg: &PricingConfig) -> Result<Self, PricingError> {
        let table = PricingTable::new(cfg.tiers.clone())?;
        let engine = Self::new(table, cfg.overflow)?.with_route_share(cfg.route_share)?;

        info!(
            tiers = engine.table.len(),
            last_bound_km = engine.table.last_bound(),
            fingerprint = %table_fingerprint(cfg),
            "Pricing engine initialized"
        );

        Ok(engine)
    }

    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    pub fn overflow(&self) -> &OverflowPolicy {
        &self.overflow
    }

    pub fn route_share(&self) -> &RouteSharePolicy {
        &self.route_share
    }

    /// Delivery fee for `distance_km`
    ///
    /// Zero, negative and non-finite distances cost nothing. A distance equal
    /// to a tier bound belongs to that tier. Past the last bound the fee is the
    /// overflow base fee plus the per-km surcharge on the excess.
    pub fn calculate_delivery_price(&self, distance_km: f64) -> f64 {
        self.price_with_source(distance_km).0
    }

    /// Price a distance, optionally applying the shared-route discount
    pub fn quote(&self, distance_km: f64, join_route: bool) -> PriceQuote {
        let (base_price, source) = self.price_with_source(distance_km);
        let total = if join_route {
            self.route_share.apply(base_price)
        } else {
            base_price
        };

        let quote = PriceQuote {
            distance_km,
            source,
            base_price,
            discount: base_price - total,
            total,
        };

        debug!(
            distance_km,
            join_route,
            base_price,
            total,
            "Computed delivery quote"
        );

        quote
    }

    fn price_with_source(&self, distance_km: f64) -> (f64, PriceSource) {
        // NaN fails every comparison, so check finiteness before the sign
        if !distance_km.is_finite() || distance_km <= 0.0 {
            trace!(distance_km, "Distance has no chargeable value, pricing at zero");
            return (0.0, PriceSource::NoCharge);
        }

        if let Some((index, tier)) = self.table.find(distance_km) {
            return (
                tier.price,
                PriceSource::Tier {
                    index,
                    max_distance_km: tier.max_distance_km,
                },
            );
        }

        let extra_km = distance_km - self.table.last_bound();
        let price = self.overflow.base_fee + extra_km * self.overflow.per_km_surcharge;
        let price = if price.is_finite() { price } else { f64::MAX };

        (price, PriceSource::Overflow { extra_km })
    }
}

static DEFAULT_ENGINE: OnceLock<PricingEngine> = OnceLock::new();

/// Engine over the standard marketplace tiers
pub fn default_engine() -> &'static PricingEngine {
    DEFAULT_ENGINE.get_or_init(PricingEngine::default)
}

/// Delivery fee for `distance_km` using the standard marketplace tiers
pub fn calculate_delivery_price(distance_km: f64) -> f64 {
    default_engine().calculate_delivery_price(distance_km)
}
