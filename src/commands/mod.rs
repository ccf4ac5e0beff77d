//! Command implementations for the CLI
//!
//! - table: Show the pricing table
//! - quote: Price a single distance
//! - errand: Validate an errand and estimate its fee
//! - test: Test configuration validity
//! - config: Configuration display

pub mod config;
pub mod errand;
pub mod quote;
pub mod table;
