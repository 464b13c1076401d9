//! Configuration loading for the rental pricing engine.
//!
//! Pricing rules can be supplied as a YAML file mapping each category to its
//! base price, optional discount tier and optional bonus points. Loading
//! validates every rule, so malformed configuration fails at startup rather
//! than during a calculation.
//!
//! # Example
//!
//! ```no_run
//! use rental_engine::config::ConfigLoader;
//!
//! let registry = ConfigLoader::load("./config/pricing.yaml").unwrap();
//! println!("Loaded {} pricing rules", registry.len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{PricingConfig, PricingRuleConfig};
