use crate::{
    errors::ServiceError,
    services::suppliers::{CreateSupplierRequest, UpdateSupplierRequest},
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

async fn list_suppliers(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ServiceError> {
    let suppliers = state.services.suppliers.list(tenant).await?;
    Ok(Json(suppliers))
}

async fn get_supplier(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let supplier = state.services.suppliers.get(tenant, id).await?;
    Ok(Json(supplier))
}

async fn create_supplier(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(request): Json<CreateSupplierRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let supplier = state.services.suppliers.create(tenant, request).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

async fn update_supplier(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateSupplierRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let supplier = state.services.suppliers.update(tenant, id, request).await?;
    Ok(Json(supplier))
}

async fn delete_supplier(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.suppliers.delete(tenant, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers))
        .route("/", post(create_supplier))
        .route("/:id", get(get_supplier))
        .route("/:id", put(update_supplier))
        .route("/:id", delete(delete_supplier))
}
