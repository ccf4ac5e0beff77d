use crate::pricing::models::PricingError;
use serde::{Deserialize, Serialize};

/// Discount for errands that join a worker's existing route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSharePolicy {
    /// Amount taken off the delivery fee
    #[serde(default = "default_discount")]
    pub discount: f64,

    /// Lowest fee a shared-route errand can be charged
    #[serde(default = "default_floor")]
    pub floor: f64,
}

impl Default for RouteSharePolicy {
    fn default() -> Self {
        Self {
            discount: default_discount(),
            floor: default_floor(),
        }
    }
}

fn default_discount() -> f64 {
    2.0
}

fn default_floor() -> f64 {
    2.0
}

impl RouteSharePolicy {
    pub fn validate(&self) -> Result<(), PricingError> {
        if !self.discount.is_finite() || self.discount < 0.0 {
            return Err(PricingError::InvalidRouteShare(format!(
                "discount must be a finite non-negative number, got {}",
                self.discount
            )));
        }
        if !self.floor.is_finite() || self.floor < 0.0 {
            return Err(PricingError::InvalidRouteShare(format!(
                "floor must be a finite non-negative number, got {}",
                self.floor
            )));
        }
        Ok(())
    }

    /// Fee after the shared-route discount
    ///
    /// Free deliveries stay free. A fee already below the floor is left as is.
    pub fn apply(&self, price: f64) -> f64 {
        if price <= 0.0 {
            return price;
        }
        (price - self.discount).max(self.floor).min(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_discount() {
        let policy = RouteSharePolicy::default();
        assert_eq!(policy.apply(10.0), 8.0);
        assert_eq!(policy.apply(5.0), 3.0);
    }

    #[test]
    fn test_apply_respects_floor() {
        let policy = RouteSharePolicy::default();
        assert_eq!(policy.apply(3.0), 2.0);
        assert_eq!(policy.apply(2.0), 2.0);
    }

    #[test]
    fn test_apply_never_raises_price() {
        let policy = RouteSharePolicy {
            discount: 2.0,
            floor: 5.0,
        };
        assert_eq!(policy.apply(3.0), 3.0);
    }

    #[test]
    fn test_zero_price_stays_zero() {
        assert_eq!(RouteSharePolicy::default().apply(0.0), 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(RouteSharePolicy::default().validate().is_ok());
        let bad = RouteSharePolicy {
            discount: f64::NAN,
            floor: 2.0,
        };
        assert!(bad.validate().is_err());
    }
}
