use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::domain::Lesson;
use crate::state::AppState;
use crate::store::{NewLesson, StoreError};

#[instrument(skip(state))]
pub async fn list_lessons(
    State(state): State<AppState>,
) -> Result<Json<Vec<Lesson>>, (StatusCode, String)> {
    let lessons = state.store.lessons().await.map_err(store_err)?;
    Ok(Json(lessons))
}

#[instrument(skip(state, body))]
pub async fn create_lesson(
    State(state): State<AppState>,
    Json(body): Json<NewLesson>,
) -> Result<(StatusCode, Json<Lesson>), (StatusCode, String)> {
    let lesson = state.store.create_lesson(body).await.map_err(store_err)?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

/// Full replacement of the lesson under `id`; the body carries the new
/// field values. An unknown id is accepted and changes nothing, matching
/// the store's per-record no-op semantics.
#[instrument(skip(state, body))]
pub async fn update_lesson(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<NewLesson>,
) -> Result<Json<Lesson>, (StatusCode, String)> {
    let lesson = Lesson {
        id,
        title: body.title,
        subject: body.subject,
        format: body.format,
        content: body.content,
        content_type: body.content_type,
        file_name: body.file_name,
    };
    state
        .store
        .update_lesson(lesson.clone())
        .await
        .map_err(store_err)?;
    Ok(Json(lesson))
}

fn store_err(e: StoreError) -> (StatusCode, String) {
    match e {
        StoreError::NotLoaded => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
