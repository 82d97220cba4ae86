mod dto;
pub mod handlers;

use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/assignments",
            get(handlers::list_assignments).post(handlers::create_assignment),
        )
        .route("/assignments/:id", put(handlers::update_assignment))
}
