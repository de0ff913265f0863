pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod migrator;
pub mod services;
pub mod tax_engine;
pub mod tenant;

use axum::{http::HeaderValue, routing::get, Router};
use config::AppConfig;
use events::EventSender;
use sea_orm::DatabaseConnection;
use services::{
    CustomerService, EstimateService, InvoiceService, PaymentService, ProductService,
    PurchaseOrderService, ReminderService, ReportService, SupplierService, TaxService,
};
use std::{sync::Arc, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// All domain services, constructed once at startup and shared by handlers.
#[derive(Clone)]
pub struct AppServices {
    pub customers: CustomerService,
    pub suppliers: SupplierService,
    pub products: ProductService,
    pub taxes: TaxService,
    pub estimates: EstimateService,
    pub invoices: InvoiceService,
    pub purchase_orders: PurchaseOrderService,
    pub payments: PaymentService,
    pub reminders: ReminderService,
    pub reports: ReportService,
}

impl AppServices {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: EventSender) -> Self {
        Self {
            customers: CustomerService::new(db.clone()),
            suppliers: SupplierService::new(db.clone()),
            products: ProductService::new(db.clone()),
            taxes: TaxService::new(db.clone()),
            estimates: EstimateService::new(db.clone(), event_sender.clone()),
            invoices: InvoiceService::new(db.clone(), event_sender.clone()),
            purchase_orders: PurchaseOrderService::new(db.clone(), event_sender.clone()),
            payments: PaymentService::new(db.clone(), event_sender),
            reminders: ReminderService::new(db.clone()),
            reports: ReportService::new(db),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
    pub services: AppServices,
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    match config.cors_allowed_origins.as_deref() {
        Some(origins) if !origins.trim().is_empty() => {
            let origins: Vec<HeaderValue> = origins
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        _ => CorsLayer::permissive(),
    }
}

/// Builds the full application router.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/health", get(handlers::status::health_check))
        .nest("/api/v1", handlers::api_v1_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .with_state(state)
}
