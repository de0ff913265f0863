use crate::{
    errors::ServiceError,
    services::taxes::{CreateTaxRequest, UpdateTaxRequest},
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

async fn list_taxes(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ServiceError> {
    let taxes = state.services.taxes.list(tenant).await?;
    Ok(Json(taxes))
}

async fn get_tax(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let tax = state.services.taxes.get(tenant, id).await?;
    Ok(Json(tax))
}

async fn create_tax(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(request): Json<CreateTaxRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let tax = state.services.taxes.create(tenant, request).await?;
    Ok((StatusCode::CREATED, Json(tax)))
}

async fn update_tax(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTaxRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let tax = state.services.taxes.update(tenant, id, request).await?;
    Ok(Json(tax))
}

async fn delete_tax(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.taxes.delete(tenant, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_taxes))
        .route("/", post(create_tax))
        .route("/:id", get(get_tax))
        .route("/:id", put(update_tax))
        .route("/:id", delete(delete_tax))
}
