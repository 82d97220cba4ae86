mod dto;
pub mod handlers;
mod services;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/users", get(handlers::list_users))
        .route("/users/:id/plan", post(handlers::select_plan))
}
