//! Human-readable rendering of a computed statement.
//!
//! Rendering only consumes a [`Statement`]; it never prices anything.

use crate::models::Statement;

/// Returns "point" for exactly one point and "points" otherwise.
pub fn pluralize_points(points: u32) -> &'static str {
    if points == 1 { "point" } else { "points" }
}

/// Renders a statement as plain text.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::StatementCalculator;
/// use rental_engine::models::{Customer, RentalItem};
/// use rental_engine::pricing::{Category, RuleRegistry};
/// use rental_engine::report::render_statement;
///
/// let registry = RuleRegistry::standard();
/// let mut customer = Customer::new("Scott");
/// customer.add_rental(RentalItem::new("First Movie", Category::REGULAR, 3, &registry)?);
///
/// let statement = StatementCalculator::new(&registry).compute(&customer)?;
/// let text = render_statement(&statement);
/// assert!(text.starts_with("Rental record for Scott\n"));
/// assert!(text.contains("First Movie\tcost 3.5\n"));
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
pub fn render_statement(statement: &Statement) -> String {
    let mut out = format!("Rental record for {}\n\n", statement.customer);

    for line in &statement.lines {
        out.push_str(&format!("{}\tcost {}\n", line.title, line.due.normalize()));
        out.push_str(&format!(
            "You earned {} frequent renter {}.\n",
            line.points,
            pluralize_points(line.points)
        ));
    }

    out.push_str(&format!(
        "\nThe total amount owed is {}\n",
        statement.totals.total_due.normalize()
    ));
    out.push_str(&format!(
        "During this billing cycle you have earned {} frequent renter {}.\n",
        statement.totals.total_points,
        pluralize_points(statement.totals.total_points)
    ));

    out
}
