//! Mock customer endpoints.
//!
//! DESIGN
//! ======
//! `GET` serves the fixture document loaded at startup exactly as written. `POST` parses the raw body as
//! JSON regardless of `Content-Type` and echoes it back inside the
//! `{err, body}` envelope; nothing is assigned or stored.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::state::AppState;

/// Envelope returned by `POST /api/v1/customers`.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub err: Option<String>,
    pub body: Option<Value>,
}

/// `GET /api/v1/customers` — list the fixture customers.
pub async fn list_customers(State(state): State<AppState>) -> impl IntoResponse {
    ([(CONTENT_TYPE, "application/json")], state.fixtures.to_string())
}

/// `POST /api/v1/customers` — echo the submitted customer.
pub async fn create_customer(body: Bytes) -> (StatusCode, Json<EchoResponse>) {
    match serde_json::from_slice::<Value>(&body) {
        Ok(parsed) => {
            let name = parsed.get("name").and_then(Value::as_str).unwrap_or_default();
            info!(%name, "customer create echoed");
            (StatusCode::OK, Json(EchoResponse { err: None, body: Some(parsed) }))
        }
        Err(e) => {
            warn!(error = %e, "customer create body is not valid JSON");
            (StatusCode::BAD_REQUEST, Json(EchoResponse { err: Some(e.to_string()), body: None }))
        }
    }
}

#[cfg(test)]
#[path = "customers_test.rs"]
mod tests;
