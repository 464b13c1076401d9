//! Lookup from category to pricing rule.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::{Category, PricingRule};

/// The set of registered pricing rules, keyed by category.
///
/// A registry is populated once, before any statement is computed, and is
/// read-only afterwards. It holds exactly one rule per category.
///
/// # Example
///
/// ```
/// use rental_engine::pricing::{Category, RuleRegistry};
///
/// let registry = RuleRegistry::standard();
/// let rule = registry.lookup(&Category::CLASSIC)?;
/// assert_eq!(rule.cost(6)?.to_string(), "6");
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<Category, PricingRule>,
}

impl RuleRegistry {
    /// Builds a registry from a set of rules.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRuleDefinition` if a rule has an empty category or two
    /// rules share a category.
    pub fn from_rules<I>(rules: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = PricingRule>,
    {
        let mut registry = HashMap::new();

        for rule in rules {
            let category = rule.category().clone();
            if category.as_str().is_empty() {
                return Err(EngineError::InvalidRuleDefinition {
                    category: category.to_string(),
                    message: "category must not be empty".to_string(),
                });
            }
            if registry.contains_key(&category) {
                return Err(EngineError::InvalidRuleDefinition {
                    category: category.to_string(),
                    message: "category is registered more than once".to_string(),
                });
            }
            debug!(category = %category, base_price = %rule.base_price(), "Registered pricing rule");
            registry.insert(category, rule);
        }

        Ok(Self { rules: registry })
    }

    /// Returns a registry holding the standard rules for regular, new
    /// release, children's and classic titles.
    pub fn standard() -> Self {
        let rules = PricingRule::standard_rules()
            .into_iter()
            .map(|rule| (rule.category().clone(), rule))
            .collect();
        Self { rules }
    }

    /// Looks up the rule for a category.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` if no rule is registered for `category`.
    pub fn lookup(&self, category: &Category) -> EngineResult<&PricingRule> {
        self.rules
            .get(category)
            .ok_or_else(|| EngineError::UnknownCategory {
                category: category.to_string(),
            })
    }

    /// Returns true if a rule is registered for `category`.
    pub fn contains(&self, category: &Category) -> bool {
        self.rules.contains_key(category)
    }

    /// Returns the registered categories in alphabetical order.
    pub fn categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.rules.keys().collect();
        categories.sort();
        categories
    }

    /// Returns the registered rules ordered by category.
    pub fn rules(&self) -> Vec<&PricingRule> {
        let mut rules: Vec<&PricingRule> = self.rules.values().collect();
        rules.sort_by(|a, b| a.category().cmp(b.category()));
        rules
    }

    /// Returns the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
