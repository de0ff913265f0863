use crate::{
    errors::ServiceError,
    services::estimates::{CreateEstimateRequest, UpdateEstimateRequest},
    tenant::TenantContext,
    AppState,
};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Router,
};
use uuid::Uuid;

async fn list_estimates(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ServiceError> {
    let estimates = state.services.estimates.list(tenant).await?;
    Ok(Json(estimates))
}

async fn get_estimate(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let estimate = state.services.estimates.get(tenant, id).await?;
    Ok(Json(estimate))
}

async fn create_estimate(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(request): Json<CreateEstimateRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let estimate = state.services.estimates.create(tenant, request).await?;
    Ok((StatusCode::CREATED, Json(estimate)))
}

async fn update_estimate(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateEstimateRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let estimate = state.services.estimates.update(tenant, id, request).await?;
    Ok(Json(estimate))
}

async fn delete_estimate(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.estimates.delete(tenant, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_estimates))
        .route("/", post(create_estimate))
        .route("/:id", get(get_estimate))
        .route("/:id", put(update_estimate))
        .route("/:id", delete(delete_estimate))
}
