use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};

use crate::domain::Submission;
use crate::state::AppState;
use crate::store::{NewSubmission, StoreError};

use super::dto::{FeedbackRequest, SubmissionFilter};

#[instrument(skip(state))]
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(filter): Query<SubmissionFilter>,
) -> Result<Json<Vec<Submission>>, (StatusCode, String)> {
    let submissions = state.store.submissions().await.map_err(store_err)?;
    let filtered = submissions
        .into_iter()
        .filter(|s| {
            filter
                .student_id
                .as_ref()
                .map_or(true, |id| &s.student_id == id)
        })
        .filter(|s| {
            filter
                .assignment_id
                .as_ref()
                .map_or(true, |id| &s.assignment_id == id)
        })
        .collect();
    Ok(Json(filtered))
}

#[instrument(skip(state, body), fields(assignment_id = %body.assignment_id))]
pub async fn create_submission(
    State(state): State<AppState>,
    Json(body): Json<NewSubmission>,
) -> Result<(StatusCode, Json<Submission>), (StatusCode, String)> {
    let submission = state
        .store
        .create_submission(body)
        .await
        .map_err(store_err)?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// Grades a submission once: status flips to `graded` and the feedback is
/// attached. There is no path back to `submitted` and no edit path for
/// existing feedback.
#[instrument(skip(state, body))]
pub async fn record_feedback(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<FeedbackRequest>,
) -> Result<Json<Submission>, (StatusCode, String)> {
    match state
        .store
        .record_feedback(&id, body.grade, body.comments)
        .await
        .map_err(store_err)?
    {
        Some(submission) => {
            info!(submission_id = %submission.id, "submission graded");
            Ok(Json(submission))
        }
        None => Err((StatusCode::NOT_FOUND, "submission not found".into())),
    }
}

fn store_err(e: StoreError) -> (StatusCode, String) {
    match e {
        StoreError::NotLoaded => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}
