use crate::{errors::ServiceError, tenant::TenantContext, AppState};
use axum::{
    extract::{Json, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct GstReportParams {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

async fn stock_report(
    State(state): State<AppState>,
    tenant: TenantContext,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state.services.reports.stock_report(tenant).await?;
    Ok(Json(report))
}

async fn gst_report(
    State(state): State<AppState>,
    tenant: TenantContext,
    Query(params): Query<GstReportParams>,
) -> Result<impl IntoResponse, ServiceError> {
    let report = state
        .services
        .reports
        .gst_report(tenant, params.start_date, params.end_date)
        .await?;
    Ok(Json(report))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stock", get(stock_report))
        .route("/gst", get(gst_report))
}
