//! Product route handlers: create, list, and demo-data seeding.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use campus_market_core::{Condition, Filter, Product};

use crate::db::{self, serialize_document};
use crate::error::Result;
use crate::state::AppState;

/// Listing limit when the client does not supply one.
const DEFAULT_LIMIT: i64 = 50;

/// Query parameters for product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Exact category match.
    pub category: Option<String>,
    /// Free-text search across title, description, and category.
    pub q: Option<String>,
    /// Maximum number of results (default 50, no upper bound).
    pub limit: Option<i64>,
}

/// Create a product listing.
///
/// Returns `{"id": "<string>"}` with the store-assigned identifier.
pub async fn create(
    State(state): State<AppState>,
    Json(product): Json<Product>,
) -> Result<Json<Value>> {
    product.validate()?;
    let id = db::create_document(state.store(), &product).await?;
    Ok(Json(json!({ "id": id })))
}

/// List products, optionally narrowed by category and free-text search.
///
/// When both `category` and `q` are present, the category equality and the
/// free-text OR-group must both hold.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Value>>> {
    let mut filter = Filter::all();
    if let Some(category) = query.category.filter(|c| !c.is_empty()) {
        filter = filter.and(Condition::eq("category", category));
    }
    if let Some(q) = query.q.filter(|q| !q.is_empty()) {
        filter = filter.any_of([
            Condition::contains("title", q.clone()),
            Condition::contains("description", q.clone()),
            Condition::contains("category", q),
        ]);
    }

    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    let documents = db::get_documents::<Product>(state.store(), &filter, limit).await?;
    Ok(Json(documents.into_iter().map(serialize_document).collect()))
}

/// Insert demo products if the collection is empty.
///
/// Idempotent as long as the collection stays non-empty. The check and the
/// inserts are separate store calls, so two concurrent seeds against an
/// empty collection can both insert; accepted for demo data.
pub async fn seed(State(state): State<AppState>) -> Result<Json<Value>> {
    let existing = db::get_documents::<Product>(state.store(), &Filter::all(), 1).await?;
    if !existing.is_empty() {
        return Ok(Json(
            json!({ "status": "ok", "message": "Products already exist" }),
        ));
    }

    let demo = demo_products();
    for product in &demo {
        db::create_document(state.store(), product).await?;
    }
    Ok(Json(json!({ "status": "ok", "inserted": demo.len() })))
}

/// The fixed demo catalog.
fn demo_products() -> Vec<Product> {
    let entries = [
        (
            "Maggi Bowl (Hot & Fresh)",
            "Cooked to order at the canteen. Pickup in 10 mins.",
            45.0,
            "Food",
            "https://images.unsplash.com/photo-1526318472351-c75fcf070305?q=80&w=1200&auto=format&fit=crop",
            "Campus Canteen",
        ),
        (
            "Data Structures Notes (PDF)",
            "Second-year topper notes. Clean and concise.",
            79.0,
            "Notes",
            "https://images.unsplash.com/photo-1524995997946-a1c2e315a42f?q=80&w=1200&auto=format&fit=crop",
            "Ananya (CSE)",
        ),
        (
            "College Hoodie (Navy)",
            "Official club merchandise. Sizes S-XL.",
            999.0,
            "Merch",
            "https://images.unsplash.com/photo-1548883354-7622d03aca27?q=80&w=1200&auto=format&fit=crop",
            "Design Club",
        ),
        (
            "Event Pass - Battle of Bands",
            "Entry ticket for Saturday 7 PM, Auditorium.",
            199.0,
            "Events",
            "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?q=80&w=1200&auto=format&fit=crop",
            "Music Club",
        ),
        (
            "Exam Kit (Pens + Highlighter)",
            "Everything you need for finals week.",
            129.0,
            "Stationery",
            "https://images.unsplash.com/photo-1481070555726-e2fe8357725c?q=80&w=1200&auto=format&fit=crop",
            "Stationery Shop",
        ),
    ];

    entries
        .into_iter()
        .map(
            |(title, description, price, category, image, seller_name)| Product {
                title: title.to_string(),
                description: Some(description.to_string()),
                price,
                category: category.to_string(),
                in_stock: true,
                image: Some(image.to_string()),
                seller_name: Some(seller_name.to_string()),
            },
        )
        .collect()
}
