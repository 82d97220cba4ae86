mod dto;
pub mod handlers;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/submissions",
            get(handlers::list_submissions).post(handlers::create_submission),
        )
        .route("/submissions/:id/feedback", post(handlers::record_feedback))
}
