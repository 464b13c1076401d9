//! Pricing rule definitions and the cost/points formulas.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::Category;

/// Points every rental earns before any category bonus.
pub const BASE_POINTS_PER_RENTAL: u32 = 1;

/// A reduced per-day price that applies once the included days are used up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountTier {
    /// Number of days covered by the base price.
    pub included_days: u32,
    /// Price charged for each day beyond the included days.
    pub extra_day_price: Decimal,
}

/// Extra frequent-renter points attached to a rule.
///
/// # Example
///
/// ```
/// use rental_engine::pricing::BonusPoints;
///
/// let bonus = BonusPoints { points: 1, min_days: 2 };
/// assert!(!bonus.applies(1));
/// assert!(bonus.applies(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusPoints {
    /// Points added when the bonus applies.
    pub points: u32,
    /// Minimum rental length, in days, that earns the bonus.
    pub min_days: u32,
}

impl BonusPoints {
    /// Returns true if a rental of `days_rented` days earns this bonus.
    pub fn applies(&self, days_rented: u32) -> bool {
        days_rented >= self.min_days
    }
}

/// The cost and points formula bound to a category.
///
/// A rule has a base price and optionally a [`DiscountTier`]. Without a tier,
/// or while the rental is still within the included days, every day is
/// charged at the base price. Past the included days the base price is
/// charged once and each extra day at the tier price.
///
/// # Example
///
/// ```
/// use rental_engine::pricing::{Category, PricingRule};
/// use rust_decimal::Decimal;
///
/// let regular = PricingRule::tiered(
///     Category::REGULAR,
///     Decimal::new(2, 0),
///     2,
///     Decimal::new(15, 1),
/// )?;
/// assert_eq!(regular.cost(2)?, Decimal::new(4, 0));
/// assert_eq!(regular.cost(3)?, Decimal::new(35, 1));
/// assert_eq!(regular.points(3)?, 1);
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricingRule {
    category: Category,
    base_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    discount_tier: Option<DiscountTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bonus_points: Option<BonusPoints>,
}

impl PricingRule {
    /// Creates a rule that charges `base_price` for every rented day.
    pub fn flat(category: Category, base_price: Decimal) -> EngineResult<Self> {
        Self::new(category, base_price, None)
    }

    /// Creates a rule with a discount tier after `included_days`.
    pub fn tiered(
        category: Category,
        base_price: Decimal,
        included_days: u32,
        extra_day_price: Decimal,
    ) -> EngineResult<Self> {
        Self::new(
            category,
            base_price,
            Some(DiscountTier {
                included_days,
                extra_day_price,
            }),
        )
    }

    /// Creates a rule, validating its prices and discount tier.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRuleDefinition` if a price is negative or the
    /// discount tier includes zero days.
    pub fn new(
        category: Category,
        base_price: Decimal,
        discount_tier: Option<DiscountTier>,
    ) -> EngineResult<Self> {
        if base_price.is_sign_negative() {
            return Err(invalid(&category, format!("base price {} is negative", base_price)));
        }

        if let Some(tier) = discount_tier {
            if tier.extra_day_price.is_sign_negative() {
                return Err(invalid(
                    &category,
                    format!("discount price {} is negative", tier.extra_day_price),
                ));
            }
            if tier.included_days == 0 {
                return Err(invalid(&category, "included days must be at least 1"));
            }
        }

        Ok(Self {
            category,
            base_price,
            discount_tier,
            bonus_points: None,
        })
    }

    /// Creates a rule from optional discount fields, which must be given
    /// together or not at all.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRuleDefinition` if only one of `discount_price` and
    /// `included_days` is present, or if [`PricingRule::new`] rejects the rule.
    pub fn from_parts(
        category: Category,
        base_price: Decimal,
        discount_price: Option<Decimal>,
        included_days: Option<u32>,
    ) -> EngineResult<Self> {
        let discount_tier = match (discount_price, included_days) {
            (Some(extra_day_price), Some(included_days)) => Some(DiscountTier {
                included_days,
                extra_day_price,
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(invalid(&category, "discount price requires included days"));
            }
            (None, Some(_)) => {
                return Err(invalid(&category, "included days requires a discount price"));
            }
        };

        Self::new(category, base_price, discount_tier)
    }

    /// Attaches bonus points to this rule.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRuleDefinition` if the bonus plus the base points per
    /// rental does not fit in a `u32`.
    pub fn with_bonus_points(mut self, bonus_points: BonusPoints) -> EngineResult<Self> {
        if BASE_POINTS_PER_RENTAL.checked_add(bonus_points.points).is_none() {
            return Err(invalid(
                &self.category,
                format!("bonus of {} points is too large", bonus_points.points),
            ));
        }
        self.bonus_points = Some(bonus_points);
        Ok(self)
    }

    /// The category this rule prices.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The base price.
    pub fn base_price(&self) -> Decimal {
        self.base_price
    }

    /// The discount tier, if the rule has one.
    pub fn discount_tier(&self) -> Option<DiscountTier> {
        self.discount_tier
    }

    /// The bonus points, if the rule has any.
    pub fn bonus_points(&self) -> Option<BonusPoints> {
        self.bonus_points
    }

    /// Calculates the amount due for a rental of `days_rented` days.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if the amount exceeds the range of `Decimal`.
    pub fn cost(&self, days_rented: u32) -> EngineResult<Decimal> {
        let amount = match self.discount_tier {
            Some(tier) if days_rented > tier.included_days => {
                let extra_days = Decimal::from(days_rented - tier.included_days);
                extra_days
                    .checked_mul(tier.extra_day_price)
                    .and_then(|extra| self.base_price.checked_add(extra))
            }
            _ => Decimal::from(days_rented).checked_mul(self.base_price),
        };

        amount.ok_or_else(|| self.overflow(days_rented))
    }

    /// Calculates the frequent-renter points for a rental of `days_rented` days.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if the points do not fit in a `u32`.
    pub fn points(&self, days_rented: u32) -> EngineResult<u32> {
        let bonus = self
            .bonus_points
            .filter(|bonus| bonus.applies(days_rented))
            .map_or(0, |bonus| bonus.points);
        BASE_POINTS_PER_RENTAL
            .checked_add(bonus)
            .ok_or_else(|| self.overflow(days_rented))
    }

    fn overflow(&self, days_rented: u32) -> EngineError {
        EngineError::AmountOverflow {
            operation: format!("pricing {} days of {}", days_rented, self.category),
        }
    }

    /// The rules shipped with the engine: regular, new release, children's
    /// and classic titles.
    pub(crate) fn standard_rules() -> Vec<PricingRule> {
        vec![
            PricingRule {
                category: Category::REGULAR,
                base_price: Decimal::new(2, 0),
                discount_tier: Some(DiscountTier {
                    included_days: 2,
                    extra_day_price: Decimal::new(15, 1),
                }),
                bonus_points: None,
            },
            PricingRule {
                category: Category::NEW_RELEASE,
                base_price: Decimal::new(3, 0),
                discount_tier: None,
                bonus_points: Some(BonusPoints {
                    points: 1,
                    min_days: 2,
                }),
            },
            PricingRule {
                category: Category::CHILDRENS,
                base_price: Decimal::new(15, 1),
                discount_tier: Some(DiscountTier {
                    included_days: 3,
                    extra_day_price: Decimal::new(15, 1),
                }),
                bonus_points: None,
            },
            PricingRule {
                category: Category::CLASSIC,
                base_price: Decimal::new(1, 0),
                discount_tier: None,
                bonus_points: None,
            },
        ]
    }
}

fn invalid(category: &Category, message: impl Into<String>) -> EngineError {
    EngineError::InvalidRuleDefinition {
        category: category.to_string(),
        message: message.into(),
    }
}
