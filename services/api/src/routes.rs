//! API service routes

use axum::{
    Extension, Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use chrono::Utc;
use serde_json::{Value, json};

use crate::{
    error::ApiResult,
    meetups,
    middleware::{AuthUser, auth_middleware},
    state::AppState,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/meetups", get(list_meetups).post(create_meetup))
        .route("/meetups/:id", put(update_meetup).delete(delete_meetup))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "meetup-api"
    }))
}

/// List the caller's meetups
pub async fn list_meetups(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let items = meetups::list_meetups(state.meetup_repository.as_ref(), user.id).await?;

    Ok(Json(items))
}

/// Create a meetup
pub async fn create_meetup(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(body) = body?;
    let summary =
        meetups::create_meetup(state.meetup_repository.as_ref(), user.id, &body, Utc::now())
            .await?;

    Ok(Json(summary))
}

/// Update a meetup
pub async fn update_meetup(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id?;
    let Json(body) = body?;
    let summary = meetups::update_meetup(
        state.meetup_repository.as_ref(),
        user.id,
        id,
        &body,
        Utc::now(),
    )
    .await?;

    Ok(Json(summary))
}

/// Delete a meetup
pub async fn delete_meetup(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    id: Result<Path<i32>, PathRejection>,
) -> ApiResult<impl IntoResponse> {
    let Path(id) = id?;
    meetups::delete_meetup(state.meetup_repository.as_ref(), user.id, id, Utc::now()).await?;

    Ok(StatusCode::OK)
}
