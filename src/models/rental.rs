//! Rental item model.

use crate::error::{EngineError, EngineResult};
use crate::pricing::{Category, RuleRegistry};

/// A titled item rented for a number of days under a pricing category.
///
/// Rental items are validated on construction and immutable afterwards.
///
/// # Example
///
/// ```
/// use rental_engine::models::RentalItem;
/// use rental_engine::pricing::{Category, RuleRegistry};
///
/// let registry = RuleRegistry::standard();
/// let rental = RentalItem::new("First Movie", Category::REGULAR, 3, &registry)?;
/// assert_eq!(rental.days_rented(), 3);
/// # Ok::<(), rental_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentalItem {
    title: String,
    category: Category,
    days_rented: u32,
}

impl RentalItem {
    /// Creates a rental item.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The title is empty (`InvalidRentalItem`)
    /// - `days_rented` is zero (`InvalidDuration`)
    /// - The category has no rule in `registry` (`UnknownCategory`)
    pub fn new(
        title: impl Into<String>,
        category: Category,
        days_rented: u32,
        registry: &RuleRegistry,
    ) -> EngineResult<Self> {
        let title = title.into();

        if title.trim().is_empty() {
            return Err(EngineError::InvalidRentalItem {
                field: "title".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if days_rented == 0 {
            return Err(EngineError::InvalidDuration { title, days_rented });
        }

        registry.lookup(&category)?;

        Ok(Self {
            title,
            category,
            days_rented,
        })
    }

    /// The title of the rented item.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The pricing category.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// The number of days rented.
    pub fn days_rented(&self) -> u32 {
        self.days_rented
    }
}
