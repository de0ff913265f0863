use crate::{
    errors::ServiceError,
    services::purchase_orders::{CreatePurchaseOrderRequest, UpdatePurchaseOrderRequest},
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

async fn list_purchase_orders(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ServiceError> {
    let orders = state.services.purchase_orders.list(tenant).await?;
    Ok(Json(orders))
}

async fn get_purchase_order(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let order = state.services.purchase_orders.get(tenant, id).await?;
    Ok(Json(order))
}

async fn create_purchase_order(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(request): Json<CreatePurchaseOrderRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let order = state.services.purchase_orders.create(tenant, request).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn update_purchase_order(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePurchaseOrderRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let order = state
        .services
        .purchase_orders
        .update(tenant, id, request)
        .await?;
    Ok(Json(order))
}

async fn receive_purchase_order(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let order = state.services.purchase_orders.receive(tenant, id).await?;
    Ok(Json(order))
}

async fn delete_purchase_order(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.purchase_orders.delete(tenant, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_purchase_orders))
        .route("/", post(create_purchase_order))
        .route("/:id", get(get_purchase_order))
        .route("/:id", put(update_purchase_order))
        .route("/:id", delete(delete_purchase_order))
        .route("/:id/receive", post(receive_purchase_order))
}
