use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A distance bracket with a flat delivery fee
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    /// Inclusive upper bound of the bracket, in kilometers
    pub max_distance_km: f64,
    /// Flat fee for any distance inside the bracket
    pub price: f64,
}

impl PricingTier {
    pub const fn new(max_distance_km: f64, price: f64) -> Self {
        Self {
            max_distance_km,
            price,
        }
    }
}

/// Rule applied once a distance exceeds every configured tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverflowPolicy {
    /// Flat charge once the last tier is exceeded (default: 10)
    #[serde(default = "default_base_fee")]
    pub base_fee: f64,

    /// Charge per km past the last tier bound (default: 0.5)
    #[serde(default = "default_per_km_surcharge")]
    pub per_km_surcharge: f64,
}

impl Default for OverflowPolicy {
    fn default() -> Self {
        Self {
            base_fee: default_base_fee(),
            per_km_surcharge: default_per_km_surcharge(),
        }
    }
}

fn default_base_fee() -> f64 {
    10.0
}

fn default_per_km_surcharge() -> f64 {
    0.5
}

impl OverflowPolicy {
    /// Check the policy against the table it extends
    pub fn validate(&self, table: &PricingTable) -> Result<(), PricingError> {
        if !self.base_fee.is_finite() || self.base_fee < 0.0 {
            return Err(PricingError::InvalidOverflow(format!(
                "base_fee must be a finite non-negative number, got {}",
                self.base_fee
            )));
        }
        if !self.per_km_surcharge.is_finite() || self.per_km_surcharge < 0.0 {
            return Err(PricingError::InvalidOverflow(format!(
                "per_km_surcharge must be a finite non-negative number, got {}",
                self.per_km_surcharge
            )));
        }
        let last_price = table.last().price;
        if self.base_fee < last_price {
            return Err(PricingError::InvalidOverflow(format!(
                "base_fee {} is below the last tier price {}",
                self.base_fee, last_price
            )));
        }
        Ok(())
    }
}

/// Errors raised while building pricing configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("pricing table must contain at least one tier")]
    EmptyTable,

    #[error("tier {index}: max_distance_km must be a finite positive number, got {value}")]
    InvalidBound { index: usize, value: f64 },

    #[error("tier {index}: price must be a finite non-negative number, got {value}")]
    InvalidPrice { index: usize, value: f64 },

    #[error("tier {index}: max_distance_km {bound} must be greater than the previous bound {previous}")]
    UnorderedBounds { index: usize, bound: f64, previous: f64 },

    #[error("tier {index}: price {price} is lower than the previous tier price {previous}")]
    DecreasingPrice { index: usize, price: f64, previous: f64 },

    #[error("invalid overflow policy: {0}")]
    InvalidOverflow(String),

    #[error("invalid route share policy: {0}")]
    InvalidRouteShare(String),
}

/// Ordered, validated set of pricing tiers
///
/// Bounds are strictly increasing and prices never decrease, so lookups can
/// binary search and prices stay monotonic in distance. The table cannot be
/// modified once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PricingTable {
    tiers: Vec<PricingTier>,
}

impl PricingTable {
    pub fn new(tiers: Vec<PricingTier>) -> Result<Self, PricingError> {
        if tiers.is_empty() {
            return Err(PricingError::EmptyTable);
        }

        for (index, tier) in tiers.iter().enumerate() {
            if !tier.max_distance_km.is_finite() || tier.max_distance_km <= 0.0 {
                return Err(PricingError::InvalidBound {
                    index,
                    value: tier.max_distance_km,
                });
            }
            if !tier.price.is_finite() || tier.price < 0.0 {
                return Err(PricingError::InvalidPrice {
                    index,
                    value: tier.price,
                });
            }
        }

        for (index, pair) in tiers.windows(2).enumerate() {
            let (previous, current) = (&pair[0], &pair[1]);
            if current.max_distance_km <= previous.max_distance_km {
                return Err(PricingError::UnorderedBounds {
                    index: index + 1,
                    bound: current.max_distance_km,
                    previous: previous.max_distance_km,
                });
            }
            if current.price < previous.price {
                return Err(PricingError::DecreasingPrice {
                    index: index + 1,
                    price: current.price,
                    previous: previous.price,
                });
            }
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Always false for a constructed table; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Highest tier; overflow pricing starts after its bound
    pub fn last(&self) -> &PricingTier {
        // Construction rejects empty tables
        &self.tiers[self.tiers.len() - 1]
    }

    pub fn last_bound(&self) -> f64 {
        self.last().max_distance_km
    }

    /// First tier whose bound is >= `distance_km`
    pub fn find(&self, distance_km: f64) -> Option<(usize, &PricingTier)> {
        let index = self
            .tiers
            .partition_point(|tier| tier.max_distance_km < distance_km);
        self.tiers.get(index).map(|tier| (index, tier))
    }
}

impl Default for PricingTable {
    fn default() -> Self {
        Self {
            tiers: default_tiers(),
        }
    }
}

impl TryFrom<Vec<PricingTier>> for PricingTable {
    type Error = PricingError;

    fn try_from(tiers: Vec<PricingTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

/// Standard marketplace tiers
pub fn default_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier::new(3.0, 2.0),
        PricingTier::new(5.0, 3.0),
        PricingTier::new(7.0, 4.0),
        PricingTier::new(9.0, 5.0),
        PricingTier::new(12.0, 6.0),
        PricingTier::new(14.0, 7.0),
        PricingTier::new(17.0, 8.0),
        PricingTier::new(19.0, 9.0),
        PricingTier::new(22.0, 10.0),
    ]
}

/// Where a quoted price came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PriceSource {
    /// Distance was zero, negative or not a number
    NoCharge,
    Tier { index: usize, max_distance_km: f64 },
    Overflow { extra_km: f64 },
}

/// Price for a single distance, with provenance
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceQuote {
    pub distance_km: f64,
    pub source: PriceSource,
    pub base_price: f64,
    pub discount: f64,
    pub total: f64,
}
