//! Customer model.

use super::RentalItem;

/// A customer and the items they have rented, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    name: String,
    rentals: Vec<RentalItem>,
}

impl Customer {
    /// Creates a customer with no rentals.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rentals: Vec::new(),
        }
    }

    /// The customer's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a rental to the end of the customer's rental list.
    pub fn add_rental(&mut self, rental: RentalItem) {
        self.rentals.push(rental);
    }

    /// The customer's rentals in insertion order.
    pub fn rentals(&self) -> &[RentalItem] {
        &self.rentals
    }
}
