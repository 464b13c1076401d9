//! Configuration types for pricing rules.
//!
//! This module contains the structures deserialized from the YAML rule file.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::EngineResult;
use crate::pricing::{BonusPoints, Category, PricingRule};

/// A single rule as written in the configuration file.
///
/// `discount_price` and `included_days` must be given together or not at
/// all; this is checked when the rule is converted with
/// [`PricingRuleConfig::into_rule`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingRuleConfig {
    /// The base price.
    pub base_price: Decimal,
    /// Price for each day past the included days.
    #[serde(default)]
    pub discount_price: Option<Decimal>,
    /// Number of days covered by the base price.
    #[serde(default)]
    pub included_days: Option<u32>,
    /// Extra points awarded by this rule.
    #[serde(default)]
    pub bonus_points: Option<BonusPoints>,
}

impl PricingRuleConfig {
    /// Validates this entry and turns it into a rule for `category`.
    pub fn into_rule(self, category: Category) -> EngineResult<PricingRule> {
        let rule = PricingRule::from_parts(
            category,
            self.base_price,
            self.discount_price,
            self.included_days,
        )?;

        match self.bonus_points {
            Some(bonus) => rule.with_bonus_points(bonus),
            None => Ok(rule),
        }
    }
}

/// The pricing rule file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Map of category to rule definition.
    pub rules: BTreeMap<String, PricingRuleConfig>,
}
