//! Statement computation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Customer, RentalItem, Statement, StatementLine, StatementTotals};
use crate::pricing::{PricingRule, RuleRegistry};

/// Prices a single rental with the given rule.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::price_rental;
/// use rental_engine::models::RentalItem;
/// use rental_engine::pricing::{Category, RuleRegistry};
/// use rust_decimal::Decimal;
///
/// let registry = RuleRegistry::standard();
/// let rental = RentalItem::new("Second Movie", Category::NEW_RELEASE, 4, &registry)?;
/// let line = price_rental(&rental, registry.lookup(rental.category())?)?;
///
/// assert_eq!(line.due, Decimal::new(12, 0));
/// assert_eq!(line.points, 2);
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
///
/// # Errors
///
/// Returns `AmountOverflow` if the rule's cost or points overflow.
pub fn price_rental(rental: &RentalItem, rule: &PricingRule) -> EngineResult<StatementLine> {
    Ok(StatementLine {
        title: rental.title().to_string(),
        category: rental.category().clone(),
        days_rented: rental.days_rented(),
        due: rule.cost(rental.days_rented())?,
        points: rule.points(rental.days_rented())?,
    })
}

/// Computes statements against an injected [`RuleRegistry`].
///
/// The calculator does not know about individual categories; every
/// category-specific behaviour lives on the rules it looks up.
#[derive(Debug, Clone, Copy)]
pub struct StatementCalculator<'a> {
    registry: &'a RuleRegistry,
}

impl<'a> StatementCalculator<'a> {
    /// Creates a calculator that prices rentals with `registry`.
    pub fn new(registry: &'a RuleRegistry) -> Self {
        Self { registry }
    }

    /// Computes the statement for a customer.
    ///
    /// Rentals are priced in the order they were added, and the totals are
    /// accumulated in the same pass. Statement lines keep that order.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` if any rental's category has no rule, or
    /// `AmountOverflow` if a line or a total overflows. No partial statement
    /// is returned in either case.
    ///
    /// # Example
    ///
    /// ```
    /// use rental_engine::calculation::StatementCalculator;
    /// use rental_engine::models::{Customer, RentalItem};
    /// use rental_engine::pricing::{Category, RuleRegistry};
    ///
    /// let registry = RuleRegistry::standard();
    /// let mut customer = Customer::new("Scott");
    /// customer.add_rental(RentalItem::new("Fourth Movie", Category::CLASSIC, 6, &registry)?);
    ///
    /// let statement = StatementCalculator::new(&registry).compute(&customer)?;
    /// assert_eq!(statement.totals.total_points, 1);
    /// # Ok::<(), rental_engine::error::EngineError>(())
    /// ```
    pub fn compute(&self, customer: &Customer) -> EngineResult<Statement> {
        let rentals = customer.rentals();
        let mut lines = Vec::with_capacity(rentals.len());
        let mut total_due = Decimal::ZERO;
        let mut total_points: u32 = 0;

        for rental in rentals {
            let rule = self.registry.lookup(rental.category())?;
            let line = price_rental(rental, rule)?;

            debug!(
                title = %line.title,
                category = %line.category,
                days_rented = line.days_rented,
                due = %line.due,
                points = line.points,
                "Priced rental"
            );

            total_due = total_due
                .checked_add(line.due)
                .ok_or_else(|| total_overflow(customer, "amount due"))?;
            total_points = total_points
                .checked_add(line.points)
                .ok_or_else(|| total_overflow(customer, "points"))?;
            lines.push(line);
        }

        debug!(
            customer = %customer.name(),
            rentals = lines.len(),
            total_due = %total_due,
            total_points,
            "Statement computed"
        );

        Ok(Statement {
            customer: customer.name().to_string(),
            lines,
            totals: StatementTotals {
                total_due,
                total_points,
            },
        })
    }
}

fn total_overflow(customer: &Customer, total: &str) -> EngineError {
    EngineError::AmountOverflow {
        operation: format!("summing total {} for {}", total, customer.name()),
    }
}
