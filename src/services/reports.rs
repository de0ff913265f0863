//! Read-only aggregations over products and invoices.

use crate::{
    entities::{customer, invoice, product},
    errors::ServiceError,
    tax_engine,
    tenant::TenantContext,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct StockReportRow {
    pub product_id: Uuid,
    pub name: String,
    pub sku: Option<String>,
    pub stock_quantity: i32,
    pub purchase_price: Decimal,
    /// stock_quantity x purchase_price, 2 dp.
    pub stock_value: Decimal,
}

#[derive(Debug, Serialize)]
pub struct StockReport {
    pub rows: Vec<StockReportRow>,
    pub total_stock_value: Decimal,
}

#[derive(Debug, Serialize)]
pub struct GstReportRow {
    pub invoice_id: Uuid,
    pub invoice_date: NaiveDate,
    pub customer_name: String,
    pub taxable_amount: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,
    pub total_tax: Decimal,
    pub total_amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct GstReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rows: Vec<GstReportRow>,
    pub taxable_total: Decimal,
    pub cgst_total: Decimal,
    pub sgst_total: Decimal,
    pub igst_total: Decimal,
    pub tax_total: Decimal,
}

#[derive(Clone)]
pub struct ReportService {
    db: Arc<DatabaseConnection>,
}

impl ReportService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn stock_report(&self, tenant: TenantContext) -> Result<StockReport, ServiceError> {
        let products = product::Entity::find()
            .filter(product::Column::OrganizationId.eq(tenant.organization_id))
            .order_by_asc(product::Column::Name)
            .all(&*self.db)
            .await?;

        let mut total_stock_value = Decimal::ZERO;
        let rows = products
            .into_iter()
            .map(|p| {
                let stock_value =
                    tax_engine::round_money(Decimal::from(p.stock_quantity) * p.purchase_price);
                total_stock_value += stock_value;
                StockReportRow {
                    product_id: p.id,
                    name: p.name,
                    sku: p.sku,
                    stock_quantity: p.stock_quantity,
                    purchase_price: p.purchase_price,
                    stock_value,
                }
            })
            .collect();

        Ok(StockReport {
            rows,
            total_stock_value,
        })
    }

    /// Outward supplies in the closed date range, one row per invoice.
    #[instrument(skip(self))]
    pub async fn gst_report(
        &self,
        tenant: TenantContext,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<GstReport, ServiceError> {
        if start_date > end_date {
            return Err(ServiceError::ValidationError(
                "start_date must not be after end_date".to_string(),
            ));
        }

        let invoices = invoice::Entity::find()
            .find_also_related(customer::Entity)
            .filter(invoice::Column::OrganizationId.eq(tenant.organization_id))
            .filter(invoice::Column::InvoiceDate.gte(start_date))
            .filter(invoice::Column::InvoiceDate.lte(end_date))
            .order_by_asc(invoice::Column::InvoiceDate)
            .all(&*self.db)
            .await?;

        let mut report = GstReport {
            start_date,
            end_date,
            rows: Vec::with_capacity(invoices.len()),
            taxable_total: Decimal::ZERO,
            cgst_total: Decimal::ZERO,
            sgst_total: Decimal::ZERO,
            igst_total: Decimal::ZERO,
            tax_total: Decimal::ZERO,
        };

        for (inv, cust) in invoices {
            let total_tax = inv.cgst_amount + inv.sgst_amount + inv.igst_amount;
            report.taxable_total += inv.subtotal;
            report.cgst_total += inv.cgst_amount;
            report.sgst_total += inv.sgst_amount;
            report.igst_total += inv.igst_amount;
            report.tax_total += total_tax;

            report.rows.push(GstReportRow {
                invoice_id: inv.id,
                invoice_date: inv.invoice_date,
                customer_name: cust.map(|c| c.name).unwrap_or_default(),
                taxable_amount: inv.subtotal,
                cgst_amount: inv.cgst_amount,
                sgst_amount: inv.sgst_amount,
                igst_amount: inv.igst_amount,
                total_tax,
                total_amount: inv.total_amount,
            });
        }

        Ok(report)
    }
}
