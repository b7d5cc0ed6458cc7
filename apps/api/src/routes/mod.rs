pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/analyze-member", post(handlers::handle_analyze_member))
        .route("/api/match-analysis", post(handlers::handle_match_analysis))
        .with_state(state)
}
