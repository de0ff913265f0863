use crate::{
    errors::ServiceError,
    services::customers::{CreateCustomerRequest, UpdateCustomerRequest},
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

async fn list_customers(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ServiceError> {
    let customers = state.services.customers.list(tenant).await?;
    Ok(Json(customers))
}

async fn get_customer(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let customer = state.services.customers.get(tenant, id).await?;
    Ok(Json(customer))
}

async fn create_customer(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(request): Json<CreateCustomerRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let customer = state.services.customers.create(tenant, request).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

async fn update_customer(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let customer = state.services.customers.update(tenant, id, request).await?;
    Ok(Json(customer))
}

async fn delete_customer(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.customers.delete(tenant, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers))
        .route("/", post(create_customer))
        .route("/:id", get(get_customer))
        .route("/:id", put(update_customer))
        .route("/:id", delete(delete_customer))
}
