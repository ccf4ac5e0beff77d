use crate::errand::ErrandValidationErrors;
use crate::pricing::PricingError;
use std::fmt;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Configuration could not be read or parsed
    ConfigError(String),
    /// Pricing table or policy failed validation
    InvalidPricing(PricingError),
    /// Errand request failed validation
    ValidationError(ErrandValidationErrors),
    /// Filesystem error while reading configuration
    IoError(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::InvalidPricing(err) => write!(f, "Invalid pricing: {}", err),
            Self::ValidationError(err) => write!(f, "Invalid errand: {}", err),
            Self::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPricing(err) => Some(err),
            Self::ValidationError(err) => Some(err),
            Self::IoError(err) => Some(err),
            Self::ConfigError(_) => None,
        }
    }
}

impl AppError {
    /// Stable machine-readable name for the error kind
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "config_error",
            Self::InvalidPricing(_) => "invalid_pricing",
            Self::ValidationError(_) => "validation_error",
            Self::IoError(_) => "io_error",
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        Self::InvalidPricing(err)
    }
}

impl From<ErrandValidationErrors> for AppError {
    fn from(err: ErrandValidationErrors) -> Self {
        Self::ValidationError(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err)
    }
}
