use crate::{
    errors::ServiceError,
    services::payments::{CreatePaymentRequest, UpdatePaymentRequest},
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

async fn list_payments(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ServiceError> {
    let payments = state.services.payments.list(tenant).await?;
    Ok(Json(payments))
}

async fn get_payment(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let payment = state.services.payments.get(tenant, id).await?;
    Ok(Json(payment))
}

async fn create_payment(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(request): Json<CreatePaymentRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let payment = state.services.payments.create(tenant, request).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

async fn update_payment(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePaymentRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let payment = state.services.payments.update(tenant, id, request).await?;
    Ok(Json(payment))
}

async fn delete_payment(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.payments.delete(tenant, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_payments))
        .route("/", post(create_payment))
        .route("/:id", get(get_payment))
        .route("/:id", put(update_payment))
        .route("/:id", delete(delete_payment))
}
