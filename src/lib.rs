use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

pub mod orders;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(orders::routes())
        .fallback(no_content)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Anything the mock does not recognize gets an empty 204.
async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
