mod dto;
pub mod handlers;

use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/timetables/:track", get(handlers::get_track))
        .route("/timetables/:track/schedule", get(handlers::get_schedule))
}
