//! HTTP API module for the rental pricing engine.
//!
//! This module provides the REST endpoints for computing rental statements
//! and listing the registered pricing rules.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RentalRequest, StatementRequest};
pub use response::{ApiError, RulesResponse, StatementResponse};
pub use state::AppState;
