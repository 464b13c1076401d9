//! Request types for the rental pricing engine API.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Customer, RentalItem};
use crate::pricing::{Category, RuleRegistry};

/// Request body for the `/statement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementRequest {
    /// The customer's name.
    pub customer: String,
    /// The customer's rentals, in the order they were made.
    #[serde(default)]
    pub rentals: Vec<RentalRequest>,
}

/// A rental in a statement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RentalRequest {
    /// The title of the rented item.
    pub title: String,
    /// The pricing category.
    pub category: Category,
    /// The number of days rented.
    pub days_rented: u32,
}

impl StatementRequest {
    /// Builds a customer from this request, validating every rental against
    /// `registry`.
    ///
    /// The first invalid rental aborts the conversion.
    pub fn into_customer(self, registry: &RuleRegistry) -> EngineResult<Customer> {
        let mut customer = Customer::new(self.customer);
        for rental in self.rentals {
            customer.add_rental(RentalItem::new(
                rental.title,
                rental.category,
                rental.days_rented,
                registry,
            )?);
        }
        Ok(customer)
    }
}
