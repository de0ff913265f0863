use crate::{
    errors::ServiceError,
    services::products::{CreateProductRequest, UpdateProductRequest},
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

async fn list_products(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ServiceError> {
    let products = state.services.products.list(tenant).await?;
    Ok(Json(products))
}

async fn get_product(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state.services.products.get(tenant, id).await?;
    Ok(Json(product))
}

async fn create_product(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(request): Json<CreateProductRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state.services.products.create(tenant, request).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateProductRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let product = state.services.products.update(tenant, id, request).await?;
    Ok(Json(product))
}

async fn delete_product(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.products.delete(tenant, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/", post(create_product))
        .route("/:id", get(get_product))
        .route("/:id", put(update_product))
        .route("/:id", delete(delete_product))
}
