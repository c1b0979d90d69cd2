//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /          - Liveness message
//! POST /products  - Create a product listing
//! GET  /products  - List products (category / q / limit query params)
//! POST /seed      - Insert demo products if the collection is empty
//! POST /orders    - Create a checkout order
//! GET  /test      - Store diagnostics (never fails the request)
//! ```
//!
//! Handlers are stateless; everything they need comes from
//! [`AppState`](crate::state::AppState) per request.

pub mod diagnostics;
pub mod orders;
pub mod products;

use axum::{
    Json,
    Router,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::state::AppState;

/// Liveness message for the root path.
async fn root() -> Json<Value> {
    Json(json!({ "message": "Campus commerce backend running" }))
}

/// Create all routes for the server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/products", get(products::list).post(products::create))
        .route("/seed", post(products::seed))
        .route("/orders", post(orders::create))
        .route("/test", get(diagnostics::status))
}
