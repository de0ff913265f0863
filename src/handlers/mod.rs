pub mod customers;
pub mod estimates;
pub mod invoices;
pub mod payments;
pub mod products;
pub mod purchase_orders;
pub mod reminders;
pub mod reports;
pub mod status;
pub mod suppliers;
pub mod taxes;

use crate::AppState;
use axum::{routing::get, Router};

/// Everything under `/api/v1`. All routes are tenant-scoped through the
/// `TenantContext` extractor except health and status.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(status::health_check))
        .route("/status", get(status::app_status))
        .nest("/customers", customers::routes())
        .nest("/suppliers", suppliers::routes())
        .nest("/products", products::routes())
        .nest("/taxes", taxes::routes())
        .nest("/estimates", estimates::routes())
        .nest("/invoices", invoices::routes())
        .nest("/purchase-orders", purchase_orders::routes())
        .nest("/payments", payments::routes())
        .nest("/reminders", reminders::routes())
        .nest("/reports", reports::routes())
}
