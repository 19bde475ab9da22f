use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router,
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OrderAccrualResult {
    pub order: String,
    pub status: String,
    pub accrual: i64,
}

pub fn routes() -> Router<AppState> {
    // any() instead of get(): a non-GET method on this path must fall
    // through to the empty 204, not axum's default 405.
    Router::new().route("/api/orders/{number}", any(get_order_accrual))
}

/// GET /api/orders/:number
/// Canned accrual for an order, delayed to simulate upstream latency.
async fn get_order_accrual(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    // The segment is taken raw, without percent-decoding: `%31` is not an
    // order number, and bytes that decode to invalid UTF-8 must still get
    // the 204 rather than an extractor rejection.
    let number = uri.path().strip_prefix("/api/orders/").unwrap_or_default();
    if method != Method::GET || !is_order_number(number) {
        return StatusCode::NO_CONTENT.into_response();
    }

    tokio::time::sleep(state.delay).await;

    tracing::debug!("accrual for order {}", number);
    Json(OrderAccrualResult {
        order: number.to_string(),
        status: state.status.to_string(),
        accrual: state.accrual,
    })
    .into_response()
}

fn is_order_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
