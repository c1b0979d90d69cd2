//! Store diagnostics probe.
//!
//! Unlike every other route, this one never fails the request: all store
//! failures are caught and folded into descriptive strings in the body, so
//! the probe stays usable exactly when things are broken.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

/// Collection names reported at most.
const MAX_COLLECTIONS: usize = 10;

/// Store error messages are truncated to this many characters.
const MAX_ERROR_CHARS: usize = 50;

/// Diagnostic status body.
#[derive(Debug, Serialize)]
pub struct DiagnosticsReport {
    /// Backend liveness.
    pub backend: String,
    /// Store status, with any failure folded into the string.
    pub database: String,
    /// Whether `DATABASE_URL` is set (presence only, value never revealed).
    pub database_url: String,
    /// Whether `DATABASE_NAME` is set (presence only).
    pub database_name: String,
    /// Connection status.
    pub connection_status: String,
    /// Up to 10 collection names visible in the store.
    pub collections: Vec<String>,
}

/// Report backend liveness, store connectivity, configuration presence, and
/// visible collections.
pub async fn status(State(state): State<AppState>) -> Json<DiagnosticsReport> {
    let mut report = DiagnosticsReport {
        backend: "running".to_string(),
        database: "not available".to_string(),
        database_url: env_presence("DATABASE_URL"),
        database_name: env_presence("DATABASE_NAME"),
        connection_status: "not connected".to_string(),
        collections: Vec::new(),
    };

    match state.store().ping().await {
        Ok(()) => {
            report.database = "connected".to_string();
            report.connection_status = "connected".to_string();

            match state.store().collection_names().await {
                Ok(mut names) => {
                    names.truncate(MAX_COLLECTIONS);
                    report.collections = names;
                    report.database = "connected and working".to_string();
                }
                Err(e) => {
                    report.database = format!("connected but error: {}", truncate(&e.to_string()));
                }
            }
        }
        Err(e) => {
            report.database = format!("error: {}", truncate(&e.to_string()));
        }
    }

    Json(report)
}

/// Report whether an environment variable is set, without its value.
fn env_presence(key: &str) -> String {
    if std::env::var(key).is_ok() {
        "set".to_string()
    } else {
        "not set".to_string()
    }
}

/// Truncate an error message for the report body.
fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use mongodb::bson::doc;
    use serde_json::json;

    use super::truncate;
    use crate::db::DocumentStore;
    use crate::db::memory::MemoryStore;
    use crate::routes::testing::{app, get, send};

    #[tokio::test]
    async fn healthy_store_is_reported_with_collections() {
        let store = Arc::new(MemoryStore::new());
        store
            .insert("product", doc! { "title": "Exam Kit" })
            .await
            .unwrap();
        let app = app(Arc::clone(&store));

        let (status, body) = send(&app, get("/test")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], json!("running"));
        assert_eq!(body["database"], json!("connected and working"));
        assert_eq!(body["connection_status"], json!("connected"));
        assert_eq!(body["collections"], json!(["product"]));
    }

    #[tokio::test]
    async fn store_failure_never_fails_the_request() {
        let app = app(Arc::new(MemoryStore::failing()));

        let (status, body) = send(&app, get("/test")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], json!("running"));
        assert!(body["database"].as_str().unwrap().starts_with("error:"));
        assert_eq!(body["connection_status"], json!("not connected"));
        assert_eq!(body["collections"], json!([]));
    }

    #[tokio::test]
    async fn env_presence_is_reported_without_values() {
        let app = app(Arc::new(MemoryStore::new()));
        let (_, body) = send(&app, get("/test")).await;

        for key in ["database_url", "database_name"] {
            let value = body[key].as_str().unwrap();
            assert!(value == "set" || value == "not set");
        }
        // The connection string itself must never leak.
        assert!(!body.to_string().contains("mongodb://"));
    }

    #[test]
    fn truncate_caps_long_messages() {
        let long = "x".repeat(200);
        assert_eq!(truncate(&long).chars().count(), 50);
        assert_eq!(truncate("short"), "short");
    }
}
