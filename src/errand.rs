//! Typed errand requests
//!
//! Callers build an [`ErrandRequest`] from form input and validate it before
//! asking the pricing engine for a fee. The engine itself never sees
//! unvalidated payloads.

use crate::pricing::{CurrencyFormatter, PriceQuote, PricingEngine};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrandCategory {
    #[default]
    Groceries,
    Pharmacy,
    Docs,
    Parcel,
    Fastfood,
}

impl ErrandCategory {
    pub const ALL: [ErrandCategory; 5] = [
        Self::Groceries,
        Self::Pharmacy,
        Self::Docs,
        Self::Parcel,
        Self::Fastfood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Groceries => "groceries",
            Self::Pharmacy => "pharmacy",
            Self::Docs => "docs",
            Self::Parcel => "parcel",
            Self::Fastfood => "fastfood",
        }
    }
}

impl fmt::Display for ErrandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrandCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == needle)
            .ok_or_else(|| format!("unknown errand category: {}", s))
    }
}

/// Bounds applied to errand input
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrandLimits {
    /// Largest budget a single errand may carry (default: 5000)
    #[serde(default = "default_max_budget")]
    pub max_budget: f64,

    /// Longest instructions text, in characters (default: 500)
    #[serde(default = "default_max_instructions_len")]
    pub max_instructions_len: usize,
}

impl Default for ErrandLimits {
    fn default() -> Self {
        Self {
            max_budget: default_max_budget(),
            max_instructions_len: default_max_instructions_len(),
        }
    }
}

fn default_max_budget() -> f64 {
    5000.0
}

fn default_max_instructions_len() -> usize {
    500
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ErrandRequest {
    #[serde(default)]
    pub category: ErrandCategory,
    pub pickup: String,
    pub destination: String,
    pub budget: f64,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub join_route: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrandField {
    Pickup,
    Destination,
    Budget,
    Instructions,
}

impl fmt::Display for ErrandField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pickup => "pickup",
            Self::Destination => "destination",
            Self::Budget => "budget",
            Self::Instructions => "instructions",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: ErrandField,
    pub message: String,
}

/// Every problem found in a request, in form order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrandValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ErrandValidationErrors {
    pub fn first_field(&self) -> Option<ErrandField> {
        self.errors.first().map(|e| e.field)
    }

    pub fn has(&self, field: ErrandField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ErrandValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ErrandValidationErrors {}

/// Validated request priced against a distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrandEstimate {
    pub category: ErrandCategory,
    pub quote: PriceQuote,
    pub budget: f64,
    /// Whether the delivery fee fits inside the errand budget
    pub within_budget: bool,
}

impl ErrandRequest {
    pub fn validate(&self, limits: &ErrandLimits) -> Result<(), ErrandValidationErrors> {
        let mut errors = Vec::new();

        if self.pickup.trim().is_empty() {
            errors.push(FieldError {
                field: ErrandField::Pickup,
                message: "Please enter a pickup location".to_string(),
            });
        }

        if self.destination.trim().is_empty() {
            errors.push(FieldError {
                field: ErrandField::Destination,
                message: "Please enter a delivery destination".to_string(),
            });
        }

        if self.budget.is_nan() || self.budget <= 0.0 {
            errors.push(FieldError {
                field: ErrandField::Budget,
                message: "Budget must be greater than $0".to_string(),
            });
        } else if self.budget > limits.max_budget {
            errors.push(FieldError {
                field: ErrandField::Budget,
                message: format!(
                    "Maximum budget is {} for single errands",
                    CurrencyFormatter::default().format_label(limits.max_budget)
                ),
            });
        }

        if self.instructions.chars().count() > limits.max_instructions_len {
            errors.push(FieldError {
                field: ErrandField::Instructions,
                message: format!(
                    "Instructions must be under {} characters",
                    limits.max_instructions_len
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ErrandValidationErrors { errors })
        }
    }

    /// Validate the request, then price it for `distance_km`
    pub fn estimate(
        &self,
        engine: &PricingEngine,
        limits: &ErrandLimits,
        distance_km: f64,
    ) -> Result<ErrandEstimate, ErrandValidationErrors> {
        self.validate(limits)?;

        let quote = engine.quote(distance_km, self.join_route);
        Ok(ErrandEstimate {
            category: self.category,
            quote,
            budget: self.budget,
            within_budget: quote.total <= self.budget,
        })
    }
}
