use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::domain::TimetableEntry;
use crate::state::AppState;
use crate::store::{StoreError, TimetableTrack};

use super::dto::DaySchedule;

#[instrument(skip(state))]
pub async fn get_track(
    State(state): State<AppState>,
    Path(track): Path<TimetableTrack>,
) -> Result<Json<Vec<TimetableEntry>>, (StatusCode, String)> {
    let entries = state.store.timetable(track).await.map_err(store_err)?;
    Ok(Json(entries))
}

/// Track entries with lesson/assignment ids resolved to records. Ids that
/// no longer resolve are dropped here instead of being rejected when
/// written.
#[instrument(skip(state))]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(track): Path<TimetableTrack>,
) -> Result<Json<Vec<DaySchedule>>, (StatusCode, String)> {
    let entries = state.store.timetable(track).await.map_err(store_err)?;
    let lessons = state.store.lessons().await.map_err(store_err)?;
    let assignments = state.store.assignments().await.map_err(store_err)?;

    let schedule = entries
        .into_iter()
        .map(|entry| DaySchedule {
            day: entry.day,
            lessons: entry
                .lesson_ids
                .iter()
                .filter_map(|id| lessons.iter().find(|l| &l.id == id).cloned())
                .collect(),
            assignments: entry
                .assignment_ids
                .iter()
                .filter_map(|id| assignments.iter().find(|a| &a.id == id).cloned())
                .collect(),
        })
        .collect();
    Ok(Json(schedule))
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
    use crate::store::{NewAssignment, TimetableTrack};
    use crate::domain::{AssignmentType, Subject};

    #[tokio::test]
    async fn raw_track_matches_seed() {
        let state = AppState::fake().await;
        let Json(entries) = get_track(State(state), Path(TimetableTrack::Crash))
            .await
            .unwrap();
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].day, 1);
    }

    #[tokio::test]
    async fn schedule_resolves_seed_records() {
        let state = AppState::fake().await;
        let Json(schedule) = get_schedule(State(state.clone()), Path(TimetableTrack::Intensive))
            .await
            .unwrap();
        let day2 = schedule.iter().find(|d| d.day == 2).unwrap();
        assert_eq!(day2.lessons.len(), 1);
        assert_eq!(day2.lessons[0].id, "l-c3");
        assert_eq!(day2.assignments.len(), 1);
        assert_eq!(day2.assignments[0].id, "a-c1");

        // a freshly created assignment shows up even when its lesson link
        // dangles; that reference is only resolved by its own readers
        state
            .store
            .create_assignment(
                NewAssignment {
                    lesson_id: "l-deleted".into(),
                    title: "Orphaned drill".into(),
                    subject: Subject::Evidence,
                    kind: AssignmentType::ShortAnswer,
                    description: "lesson no longer in the catalog".into(),
                },
                2,
            )
            .await
            .unwrap();
        let Json(schedule) = get_schedule(State(state), Path(TimetableTrack::Intensive))
            .await
            .unwrap();
        let day2 = schedule.iter().find(|d| d.day == 2).unwrap();
        assert!(day2.assignments.iter().any(|a| a.title == "Orphaned drill"));
    }

    #[tokio::test]
    async fn schedule_drops_ids_that_no_longer_resolve() {
        use crate::config::AppConfig;
        use crate::storage::{BlobStore, MemoryStore};
        use crate::store::DataStore;
        use std::sync::Arc;

        // a persisted timetable referencing records missing from the blob,
        // the shape a seed-data mismatch produces
        let mut data = crate::store::seed::initial_data();
        data.timetable_intensive.push(crate::domain::TimetableEntry {
            day: 99,
            lesson_ids: vec!["l-gone".into(), "l-c1".into()],
            assignment_ids: vec!["a-gone".into()],
        });
        let blob = Arc::new(MemoryStore::empty());
        blob.save(bytes::Bytes::from(serde_json::to_vec(&data).unwrap()))
            .await
            .unwrap();
        let store = Arc::new(DataStore::new(blob));
        store.load().await.unwrap();
        let state = AppState::from_parts(
            Arc::new(AppConfig {
                data_path: "unused".into(),
                host: "127.0.0.1".into(),
                port: 0,
            }),
            store,
        );

        let Json(schedule) = get_schedule(State(state), Path(TimetableTrack::Intensive))
            .await
            .unwrap();
        let day99 = schedule.iter().find(|d| d.day == 99).unwrap();
        assert_eq!(day99.lessons.len(), 1);
        assert_eq!(day99.lessons[0].id, "l-c1");
        assert!(day99.assignments.is_empty());
    }
}
