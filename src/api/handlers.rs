//! HTTP request handlers for the rental pricing engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::StatementCalculator;
use crate::error::EngineError;
use crate::pricing::RuleRegistry;
use crate::report::render_statement;

use super::request::StatementRequest;
use super::response::{ApiError, ApiErrorResponse, RulesResponse, StatementResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/statement", post(statement_handler))
        .route("/rules", get(rules_handler))
        .with_state(state)
}

/// Handler for POST /statement endpoint.
///
/// Accepts a customer with their rentals and returns the computed statement.
async fn statement_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse::bad_request(error).into_response();
        }
    };

    let customer_name = request.customer.clone();
    let rentals_count = request.rentals.len();
    let start_time = Instant::now();

    match build_statement(request, state.registry()) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                customer = %customer_name,
                rentals_count,
                total_due = %response.statement.totals.total_due,
                total_points = response.statement.totals.total_points,
                duration_us = start_time.elapsed().as_micros(),
                "Statement computed successfully"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                customer = %customer_name,
                error = %err,
                "Statement failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /rules endpoint.
///
/// Lists the registered pricing rules ordered by category.
async fn rules_handler(State(state): State<AppState>) -> Response {
    let rules = state.registry().rules().into_iter().cloned().collect();
    json_response(StatusCode::OK, RulesResponse { rules })
}

/// Validates the request's rentals, computes the statement and renders it.
fn build_statement(
    request: StatementRequest,
    registry: &RuleRegistry,
) -> Result<StatementResponse, EngineError> {
    let customer = request.into_customer(registry)?;
    let statement = StatementCalculator::new(registry).compute(&customer)?;
    let report = render_statement(&statement);

    Ok(StatementResponse {
        statement_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        statement,
        report,
    })
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
