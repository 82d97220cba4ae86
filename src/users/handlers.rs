use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};

use crate::domain::User;
use crate::state::AppState;
use crate::store::StoreError;

use super::dto::{LoginRequest, RegisterRequest, SelectPlanRequest};
use super::services::is_valid_email;

#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), (StatusCode, String)> {
    let name = body.name.trim().to_string();
    if name.is_empty() {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, "name is required".into()));
    }
    if !is_valid_email(&body.email) {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, "invalid email".into()));
    }

    match state
        .store
        .register_user(name, body.email.clone())
        .await
        .map_err(store_err)?
    {
        Some(user) => {
            info!(user_id = %user.id, "user registered");
            Ok((StatusCode::CREATED, Json(user)))
        }
        None => {
            warn!("registration rejected: email already taken");
            Err((
                StatusCode::CONFLICT,
                "an account with this email already exists".into(),
            ))
        }
    }
}

/// Demo-account login: a case-insensitive email lookup, nothing more.
#[instrument(skip(state, body), fields(email = %body.email))]
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<User>, (StatusCode, String)> {
    match state
        .store
        .find_user_by_email(&body.email)
        .await
        .map_err(store_err)?
    {
        Some(user) => Ok(Json(user)),
        None => Err((StatusCode::NOT_FOUND, "user not found".into())),
    }
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, (StatusCode, String)> {
    let users = state.store.users().await.map_err(store_err)?;
    Ok(Json(users))
}

/// Purchase completion: records the bought plan on the user.
#[instrument(skip(state, body))]
pub async fn select_plan(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SelectPlanRequest>,
) -> Result<Json<User>, (StatusCode, String)> {
    match state
        .store
        .assign_plan(&id, body.plan)
        .await
        .map_err(store_err)?
    {
        Some(user) => {
            info!(user_id = %user.id, plan = ?body.plan, "plan assigned");
            Ok(Json(user))
        }
        None => Err((StatusCode::NOT_FOUND, "user not found".into())),
    }
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
    use axum::extract::State;

    #[tokio::test]
    async fn register_rejects_invalid_email() {
        let state = AppState::fake().await;
        let result = register(
            State(state),
            Json(RegisterRequest {
                name: "Eve".into(),
                email: "not-an-email".into(),
            }),
        )
        .await;
        assert_eq!(result.unwrap_err().0, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn register_conflicts_on_known_email() {
        let state = AppState::fake().await;
        let result = register(
            State(state),
            Json(RegisterRequest {
                name: "Imposter".into(),
                email: "Student@Example.com".into(),
            }),
        )
        .await;
        assert_eq!(result.unwrap_err().0, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn register_then_login_round_trip() {
        let state = AppState::fake().await;
        let (status, Json(user)) = register(
            State(state.clone()),
            Json(RegisterRequest {
                name: "Dana Candidate".into(),
                email: "dana@example.com".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let Json(found) = login(
            State(state),
            Json(LoginRequest {
                email: "DANA@example.com".into(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(found.id, user.id);
    }
}
