use crate::{
    errors::ServiceError,
    services::invoices::{CreateInvoiceRequest, UpdateInvoiceRequest},
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

async fn list_invoices(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ServiceError> {
    let invoices = state.services.invoices.list(tenant).await?;
    Ok(Json(invoices))
}

async fn get_invoice(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let invoice = state.services.invoices.get(tenant, id).await?;
    Ok(Json(invoice))
}

async fn get_receipt(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let receipt = state.services.invoices.receipt(tenant, id).await?;
    Ok(Json(receipt))
}

async fn create_invoice(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(request): Json<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let invoice = state.services.invoices.create(tenant, request).await?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

async fn update_invoice(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let invoice = state.services.invoices.update(tenant, id, request).await?;
    Ok(Json(invoice))
}

async fn delete_invoice(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.invoices.delete(tenant, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_invoices))
        .route("/", post(create_invoice))
        .route("/:id", get(get_invoice))
        .route("/:id", put(update_invoice))
        .route("/:id", delete(delete_invoice))
        .route("/:id/receipt", get(get_receipt))
}
