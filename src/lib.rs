//! Pricing policy engine for movie rental statements.
//!
//! This crate maps each rental category to a pricing rule, computes the
//! per-rental amount due and frequent-renter points for a customer, and
//! aggregates them into a statement. New categories are added by registering
//! a rule; the statement calculation itself never branches on a category.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod report;
