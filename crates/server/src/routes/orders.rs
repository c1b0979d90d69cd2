//! Order route handler: checkout creation with total verification.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use campus_market_core::Order;

use crate::db;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create a checkout order.
///
/// The declared `total_amount` is checked against the total recomputed from
/// the items before any persistence attempt; a mismatch beyond the tolerance
/// is a client error, guarding against a tampered total. Status and payment
/// method are client-declared and stored verbatim.
pub async fn create(State(state): State<AppState>, Json(order): Json<Order>) -> Result<Json<Value>> {
    order.validate()?;
    if !order.total_matches() {
        return Err(AppError::InvalidTotal);
    }

    let id = db::create_document(state.store(), &order).await?;
    Ok(Json(json!({ "id": id })))
}
