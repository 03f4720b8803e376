//! Pricing route handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::AppState;

use super::engine;
use super::models::PricingRequest;
use super::requests::CalculatePriceRequest;
use super::responses::{PriceBreakdownResponse, PriceResponse};

/// Routes served by the pricing service
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api", post(calculate_price))
        .route("/api/breakdown", post(calculate_price_breakdown))
}

/// Landing page
async fn index() -> Html<&'static str> {
    Html("<p>Access api with /api</p>")
}

/// Total price for a customer over a date range
async fn calculate_price(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CalculatePriceRequest>, JsonRejection>,
) -> Result<Json<PriceResponse>> {
    let request = accept(payload)?;
    let total = tokio::task::spawn_blocking(move || engine::calculate(&request)).await?;

    Ok(Json(PriceResponse::from_total(total, &state.config.currency)))
}

/// Same walk as `/api`, returning the per-service split and free days used
async fn calculate_price_breakdown(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CalculatePriceRequest>, JsonRejection>,
) -> Result<Json<PriceBreakdownResponse>> {
    let request = accept(payload)?;
    let breakdown =
        tokio::task::spawn_blocking(move || engine::calculate_breakdown(&request)).await?;

    Ok(Json(PriceBreakdownResponse::from_breakdown(
        breakdown,
        &state.config.currency,
    )))
}

/// Parse and check a request body; nothing invalid reaches the engine
fn accept(
    payload: std::result::Result<Json<CalculatePriceRequest>, JsonRejection>,
) -> Result<PricingRequest> {
    let Json(body) = payload?;
    body.validate().map_err(AppError::invalid)?;

    tracing::debug!(
        customer_id = ?body.id,
        start_date = %body.start_date,
        end_date = %body.end_date,
        free_days = body.free_days,
        "Pricing request accepted"
    );

    Ok(body.into_pricing_request())
}
