//! Core data models for the rental pricing engine.
//!
//! This module contains the rentals a customer builds up and the statement
//! types produced from them.

mod customer;
mod rental;
mod statement;

pub use customer::Customer;
pub use rental::RentalItem;
pub use statement::{Statement, StatementLine, StatementTotals};
