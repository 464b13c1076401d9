//! Calculation logic for the rental pricing engine.
//!
//! This module turns a customer's rentals into a statement by pricing each
//! rental with the rule registered for its category.

mod statement;

pub use statement::{StatementCalculator, price_rental};
