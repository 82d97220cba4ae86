use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::domain::{Plan, PlanType};
use crate::state::AppState;
use crate::store::StoreError;

#[instrument(skip(state))]
pub async fn list_plans(
    State(state): State<AppState>,
) -> Result<Json<Vec<Plan>>, (StatusCode, String)> {
    let plans = state.store.plans().await.map_err(store_err)?;
    Ok(Json(plans))
}

#[instrument(skip(state))]
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<PlanType>,
) -> Result<Json<Plan>, (StatusCode, String)> {
    let plans = state.store.plans().await.map_err(store_err)?;
    plans
        .into_iter()
        .find(|p| p.id == id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "plan not found".into()))
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

    #[tokio::test]
    async fn catalog_lists_all_four_plans() {
        let state = AppState::fake().await;
        let Json(plans) = list_plans(State(state)).await.unwrap();
        assert_eq!(plans.len(), 4);
        assert!(plans.iter().any(|p| p.id == PlanType::Full));
    }

    #[tokio::test]
    async fn get_plan_by_wire_id() {
        let state = AppState::fake().await;
        let Json(plan) = get_plan(State(state), Path(PlanType::CrashCourse))
            .await
            .unwrap();
        assert_eq!(plan.duration, 30);
        assert_eq!(plan.price, 1000);
    }
}
