pub mod handlers;

use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/lessons", get(handlers::list_lessons).post(handlers::create_lesson))
        .route("/lessons/:id", put(handlers::update_lesson))
}
