use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::domain::Assignment;
use crate::state::AppState;
use crate::store::StoreError;

use super::dto::AssignmentRequest;

#[instrument(skip(state))]
pub async fn list_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assignment>>, (StatusCode, String)> {
    let assignments = state.store.assignments().await.map_err(store_err)?;
    Ok(Json(assignments))
}

#[instrument(skip(state, body), fields(day = body.day))]
pub async fn create_assignment(
    State(state): State<AppState>,
    Json(body): Json<AssignmentRequest>,
) -> Result<(StatusCode, Json<Assignment>), (StatusCode, String)> {
    let assignment = state
        .store
        .create_assignment(body.assignment, body.day)
        .await
        .map_err(store_err)?;
    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Replaces the assignment and moves it to `day` on every schedulable
/// timetable track.
#[instrument(skip(state, body), fields(day = body.day))]
pub async fn update_assignment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AssignmentRequest>,
) -> Result<Json<Assignment>, (StatusCode, String)> {
    let new = body.assignment;
    let assignment = Assignment {
        id,
        lesson_id: new.lesson_id,
        title: new.title,
        subject: new.subject,
        kind: new.kind,
        description: new.description,
    };
    state
        .store
        .update_assignment(assignment.clone(), body.day)
        .await
        .map_err(store_err)?;
    Ok(Json(assignment))
}

fn store_err(e: StoreError) -> (StatusCode, String) {
    match e {
        StoreError::NotLoaded => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_flattens_record_fields() {
        let body: AssignmentRequest = serde_json::from_str(
            r#"{
                "lessonId": "l-c3",
                "title": "Submit MBE Answers",
                "subject": "Contracts",
                "type": "Timed Quiz (MBE)",
                "description": "45 minutes, closed book.",
                "day": 21
            }"#,
        )
        .unwrap();
        assert_eq!(body.day, 21);
        assert_eq!(body.assignment.lesson_id, "l-c3");
    }

    #[tokio::test]
    async fn create_places_assignment_on_requested_day() {
        let state = AppState::fake().await;
        let body: AssignmentRequest = serde_json::from_str(
            r#"{
                "lessonId": "l-t2",
                "title": "Intentional Torts Drill",
                "subject": "Torts",
                "type": "Short Answer Q&A",
                "description": "Ten short answers.",
                "day": 33
            }"#,
        )
        .unwrap();
        let (status, Json(created)) = create_assignment(State(state.clone()), Json(body))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let tt = state
            .store
            .timetable(crate::store::TimetableTrack::Full)
            .await
            .unwrap();
        let entry = tt.iter().find(|e| e.day == 33).unwrap();
        assert!(entry.assignment_ids.contains(&created.id));
    }
}
