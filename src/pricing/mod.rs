//! Pricing policy for rental categories.
//!
//! Each category is bound to exactly one [`PricingRule`], which owns both the
//! cost formula and any category-specific bonus points. Rules are collected in
//! a [`RuleRegistry`] that is built once and only read afterwards, so adding a
//! new billing rule is a data change rather than a change to the calculator.

mod category;
mod registry;
mod rule;

pub use category::Category;
pub use registry::RuleRegistry;
pub use rule::{BASE_POINTS_PER_RENTAL, BonusPoints, DiscountTier, PricingRule};
