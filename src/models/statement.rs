//! Statement result models.
//!
//! A [`Statement`] is produced fresh by each computation and handed to the
//! report renderer or the API layer. It is never stored on the rentals it
//! was computed from.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::pricing::Category;

/// The billed result for a single rental.
///
/// # Example
///
/// ```
/// use rental_engine::models::StatementLine;
/// use rental_engine::pricing::Category;
/// use rust_decimal::Decimal;
///
/// let line = StatementLine {
///     title: "First Movie".to_string(),
///     category: Category::REGULAR,
///     days_rented: 3,
///     due: Decimal::new(35, 1),
///     points: 1,
/// };
/// assert_eq!(line.due.to_string(), "3.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// The title of the rented item.
    pub title: String,
    /// The category the rental was priced under.
    pub category: Category,
    /// The number of days rented.
    pub days_rented: u32,
    /// The amount due for this rental.
    pub due: Decimal,
    /// Frequent-renter points earned by this rental.
    pub points: u32,
}

/// Aggregated totals over all statement lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementTotals {
    /// Sum of all line amounts.
    pub total_due: Decimal,
    /// Sum of all line points.
    pub total_points: u32,
}

/// The computed statement for one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// The name of the customer the statement is for.
    pub customer: String,
    /// One line per rental, in rental order.
    pub lines: Vec<StatementLine>,
    /// Totals over all lines.
    pub totals: StatementTotals,
}
