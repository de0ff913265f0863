use crate::{
    errors::ServiceError,
    services::reminders::{CreateReminderRequest, UpdateReminderRequest},
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

async fn list_reminders(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ServiceError> {
    let reminders = state.services.reminders.list(tenant).await?;
    Ok(Json(reminders))
}

async fn get_reminder(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let reminder = state.services.reminders.get(tenant, id).await?;
    Ok(Json(reminder))
}

async fn create_reminder(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(request): Json<CreateReminderRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let reminder = state.services.reminders.create(tenant, request).await?;
    Ok((StatusCode::CREATED, Json(reminder)))
}

async fn update_reminder(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReminderRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let reminder = state.services.reminders.update(tenant, id, request).await?;
    Ok(Json(reminder))
}

async fn delete_reminder(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.reminders.delete(tenant, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reminders))
        .route("/", post(create_reminder))
        .route("/:id", get(get_reminder))
        .route("/:id", put(update_reminder))
        .route("/:id", delete(delete_reminder))
}
