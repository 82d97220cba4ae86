pub mod handlers;

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/plans", get(handlers::list_plans))
        .route("/plans/:id", get(handlers::get_plan))
}
