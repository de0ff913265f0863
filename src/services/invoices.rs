use crate::{
    entities::{
        customer,
        invoice::{self, InvoiceStatus},
        invoice_item, organization, payment,
    },
    errors::ServiceError,
    events::{Event, EventSender},
    services::{
        payments,
        pricing::{self, LineInput, PriceBasis, PricedLine},
        stock,
    },
    tax_engine::{self, DocumentTotals},
    tenant::TenantContext,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{instrument, warn};
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateInvoiceRequest {
    pub customer_id: Uuid,
    pub invoice_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub status: Option<InvoiceStatus>,
    pub round_off_amount: Option<Decimal>,
    pub items: Vec<LineInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub customer_id: Option<Uuid>,
    pub invoice_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub status: Option<InvoiceStatus>,
    pub round_off_amount: Option<Decimal>,
    /// When present, replaces the full line set: old-line stock is restored
    /// first, then the new set is priced and reserved.
    pub items: Option<Vec<LineInput>>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse {
    #[serde(flatten)]
    pub invoice: invoice::Model,
    /// Derived at read time from paid amount, total and due date.
    pub display_status: InvoiceStatus,
    pub items: Vec<invoice_item::Model>,
}

/// Full receipt payload: the invoice with its parties and payment history.
#[derive(Debug, Serialize)]
pub struct ReceiptResponse {
    pub organization: organization::Model,
    pub customer: customer::Model,
    pub invoice: invoice::Model,
    pub display_status: InvoiceStatus,
    pub items: Vec<invoice_item::Model>,
    pub payments: Vec<payment::Model>,
}

#[derive(Clone)]
pub struct InvoiceService {
    db: Arc<DatabaseConnection>,
    event_sender: EventSender,
}

impl InvoiceService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: EventSender) -> Self {
        Self { db, event_sender }
    }

    async fn load_parties<C: ConnectionTrait>(
        conn: &C,
        tenant: TenantContext,
        customer_id: Uuid,
    ) -> Result<(organization::Model, customer::Model), ServiceError> {
        let org = organization::Entity::find_by_id(tenant.organization_id)
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Organization not found".to_string()))?;
        let cust = customer::Entity::find_by_id(customer_id)
            .filter(customer::Column::OrganizationId.eq(tenant.organization_id))
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Customer not found".to_string()))?;
        Ok((org, cust))
    }

    /// Reserves stock for every product-backed line. Runs inside the
    /// document transaction so a shortage on any line rolls everything back.
    async fn reserve_stock<C: ConnectionTrait>(
        conn: &C,
        tenant: TenantContext,
        lines: &[PricedLine],
    ) -> Result<(), ServiceError> {
        for line in lines {
            if let Some(product) = &line.product {
                stock::check_and_decrement(
                    conn,
                    tenant.organization_id,
                    product.id,
                    &product.name,
                    line.quantity,
                )
                .await?;
            }
        }
        Ok(())
    }

    /// Returns reserved stock to the products referenced by stored lines.
    async fn restore_stock<C: ConnectionTrait>(
        conn: &C,
        tenant: TenantContext,
        items: &[invoice_item::Model],
    ) -> Result<(), ServiceError> {
        for item in items {
            if let Some(product_id) = item.product_id {
                stock::increment(conn, tenant.organization_id, product_id, item.quantity).await?;
            }
        }
        Ok(())
    }

    async fn insert_items<C: ConnectionTrait>(
        conn: &C,
        invoice_id: Uuid,
        lines: &[PricedLine],
    ) -> Result<Vec<invoice_item::Model>, ServiceError> {
        let now = Utc::now();
        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let item = invoice_item::ActiveModel {
                id: Set(Uuid::new_v4()),
                invoice_id: Set(invoice_id),
                product_id: Set(line.product_id()),
                tax_id: Set(line.tax_id),
                item_name: Set(line.item_name.clone()),
                unit_price: Set(line.unit_price),
                quantity: Set(line.quantity),
                sub_total_price: Set(line.amounts.sub_total),
                cgst_rate: Set(line.amounts.cgst_rate),
                sgst_rate: Set(line.amounts.sgst_rate),
                igst_rate: Set(line.amounts.igst_rate),
                cgst_amount: Set(line.amounts.cgst_amount),
                sgst_amount: Set(line.amounts.sgst_amount),
                igst_amount: Set(line.amounts.igst_amount),
                total_price: Set(line.amounts.total),
                created_at: Set(now),
                updated_at: Set(now),
            };
            items.push(item.insert(conn).await?);
        }
        Ok(items)
    }

    fn totals(lines: &[PricedLine], round_off: Decimal) -> DocumentTotals {
        let amounts: Vec<_> = lines.iter().map(|l| l.amounts.clone()).collect();
        tax_engine::aggregate(&amounts, round_off)
    }

    fn display_status_of(model: &invoice::Model) -> InvoiceStatus {
        let stored = model.status.parse().unwrap_or_default();
        payments::display_status(
            stored,
            model.paid_amount,
            model.total_amount,
            model.due_date,
            Utc::now().date_naive(),
        )
    }

    async fn publish(&self, event: Event) {
        if let Err(e) = self.event_sender.send(event).await {
            warn!(error = %e, "failed to publish invoice event");
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        tenant: TenantContext,
        request: CreateInvoiceRequest,
    ) -> Result<InvoiceResponse, ServiceError> {
        let txn = self.db.begin().await?;

        let (org, cust) = Self::load_parties(&txn, tenant, request.customer_id).await?;
        let inter_state = tax_engine::is_inter_state(org.state.as_deref(), cust.state.as_deref());

        let lines = pricing::price_lines(
            &txn,
            tenant.organization_id,
            inter_state,
            PriceBasis::Selling,
            &request.items,
        )
        .await?;
        Self::reserve_stock(&txn, tenant, &lines).await?;

        let round_off = request.round_off_amount.unwrap_or(Decimal::ZERO);
        let totals = Self::totals(&lines, round_off);

        let now = Utc::now();
        let model = invoice::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(tenant.organization_id),
            customer_id: Set(request.customer_id),
            invoice_date: Set(request.invoice_date),
            due_date: Set(request.due_date),
            status: Set(request.status.unwrap_or_default().to_string()),
            subtotal: Set(totals.subtotal),
            cgst_amount: Set(totals.cgst_total),
            sgst_amount: Set(totals.sgst_total),
            igst_amount: Set(totals.igst_total),
            round_off_amount: Set(totals.round_off),
            total_amount: Set(totals.total_amount),
            paid_amount: Set(Decimal::ZERO),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = model.insert(&txn).await?;
        let items = Self::insert_items(&txn, saved.id, &lines).await?;

        txn.commit().await?;

        self.publish(Event::InvoiceCreated(saved.id)).await;
        for line in &lines {
            if let Some(product) = &line.product {
                self.publish(Event::StockAdjusted {
                    product_id: product.id,
                    delta: -line.quantity,
                })
                .await;
            }
        }

        let display_status = Self::display_status_of(&saved);
        Ok(InvoiceResponse {
            invoice: saved,
            display_status,
            items,
        })
    }

    #[instrument(skip(self))]
    pub async fn list(&self, tenant: TenantContext) -> Result<Vec<InvoiceResponse>, ServiceError> {
        let invoices = invoice::Entity::find()
            .filter(invoice::Column::OrganizationId.eq(tenant.organization_id))
            .order_by_desc(invoice::Column::InvoiceDate)
            .all(&*self.db)
            .await?;

        Ok(invoices
            .into_iter()
            .map(|inv| {
                let display_status = Self::display_status_of(&inv);
                InvoiceResponse {
                    invoice: inv,
                    display_status,
                    items: Vec::new(),
                }
            })
            .collect())
    }

    async fn find_scoped<C: ConnectionTrait>(
        conn: &C,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<invoice::Model, ServiceError> {
        invoice::Entity::find_by_id(id)
            .filter(invoice::Column::OrganizationId.eq(tenant.organization_id))
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Invoice not found".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<InvoiceResponse, ServiceError> {
        let inv = Self::find_scoped(&*self.db, tenant, id).await?;
        let items = invoice_item::Entity::find()
            .filter(invoice_item::Column::InvoiceId.eq(inv.id))
            .all(&*self.db)
            .await?;

        let display_status = Self::display_status_of(&inv);
        Ok(InvoiceResponse {
            invoice: inv,
            display_status,
            items,
        })
    }

    #[instrument(skip(self))]
    pub async fn receipt(
        &self,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<ReceiptResponse, ServiceError> {
        let inv = Self::find_scoped(&*self.db, tenant, id).await?;
        let (org, cust) = Self::load_parties(&*self.db, tenant, inv.customer_id).await?;

        let items = invoice_item::Entity::find()
            .filter(invoice_item::Column::InvoiceId.eq(inv.id))
            .all(&*self.db)
            .await?;
        let payment_history = payment::Entity::find()
            .filter(payment::Column::InvoiceId.eq(inv.id))
            .order_by_asc(payment::Column::PaymentDate)
            .all(&*self.db)
            .await?;

        let display_status = Self::display_status_of(&inv);
        Ok(ReceiptResponse {
            organization: org,
            customer: cust,
            invoice: inv,
            display_status,
            items,
            payments: payment_history,
        })
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        tenant: TenantContext,
        id: Uuid,
        request: UpdateInvoiceRequest,
    ) -> Result<InvoiceResponse, ServiceError> {
        let txn = self.db.begin().await?;

        let existing = Self::find_scoped(&txn, tenant, id).await?;
        let customer_id = request.customer_id.unwrap_or(existing.customer_id);

        let mut model: invoice::ActiveModel = existing.clone().into();
        model.customer_id = Set(customer_id);
        if let Some(invoice_date) = request.invoice_date {
            model.invoice_date = Set(invoice_date);
        }
        if request.due_date.is_some() {
            model.due_date = Set(request.due_date);
        }
        if let Some(status) = request.status {
            model.status = Set(status.to_string());
        }

        let mut adjustments: Vec<(Uuid, i32)> = Vec::new();

        let replaced_lines = match request.items {
            Some(items) => {
                // Full replace: give back stock held by the old lines before
                // pricing and reserving the new set.
                let old_items = invoice_item::Entity::find()
                    .filter(invoice_item::Column::InvoiceId.eq(id))
                    .all(&txn)
                    .await?;
                Self::restore_stock(&txn, tenant, &old_items).await?;
                for item in &old_items {
                    if let Some(product_id) = item.product_id {
                        adjustments.push((product_id, item.quantity));
                    }
                }
                invoice_item::Entity::delete_many()
                    .filter(invoice_item::Column::InvoiceId.eq(id))
                    .exec(&txn)
                    .await?;

                let (org, cust) = Self::load_parties(&txn, tenant, customer_id).await?;
                let inter_state =
                    tax_engine::is_inter_state(org.state.as_deref(), cust.state.as_deref());
                let lines = pricing::price_lines(
                    &txn,
                    tenant.organization_id,
                    inter_state,
                    PriceBasis::Selling,
                    &items,
                )
                .await?;
                Self::reserve_stock(&txn, tenant, &lines).await?;
                for line in &lines {
                    if let Some(product) = &line.product {
                        adjustments.push((product.id, -line.quantity));
                    }
                }

                let round_off = request
                    .round_off_amount
                    .unwrap_or(existing.round_off_amount);
                let totals = Self::totals(&lines, round_off);

                model.subtotal = Set(totals.subtotal);
                model.cgst_amount = Set(totals.cgst_total);
                model.sgst_amount = Set(totals.sgst_total);
                model.igst_amount = Set(totals.igst_total);
                model.round_off_amount = Set(totals.round_off);
                model.total_amount = Set(totals.total_amount);

                Some(lines)
            }
            None => {
                // Header-only update; a new round-off still moves the total.
                if let Some(round_off) = request.round_off_amount {
                    let round_off = tax_engine::round_money(round_off);
                    model.round_off_amount = Set(round_off);
                    model.total_amount = Set(existing.subtotal
                        + existing.cgst_amount
                        + existing.sgst_amount
                        + existing.igst_amount
                        + round_off);
                }
                None
            }
        };

        model.updated_at = Set(Utc::now());
        let saved = model.update(&txn).await?;

        let items = match replaced_lines {
            Some(lines) => Self::insert_items(&txn, saved.id, &lines).await?,
            None => {
                invoice_item::Entity::find()
                    .filter(invoice_item::Column::InvoiceId.eq(saved.id))
                    .all(&txn)
                    .await?
            }
        };

        txn.commit().await?;

        self.publish(Event::InvoiceUpdated(saved.id)).await;
        for (product_id, delta) in adjustments {
            self.publish(Event::StockAdjusted { product_id, delta }).await;
        }

        let display_status = Self::display_status_of(&saved);
        Ok(InvoiceResponse {
            invoice: saved,
            display_status,
            items,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, tenant: TenantContext, id: Uuid) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;

        let existing = Self::find_scoped(&txn, tenant, id).await?;
        let items = invoice_item::Entity::find()
            .filter(invoice_item::Column::InvoiceId.eq(existing.id))
            .all(&txn)
            .await?;
        Self::restore_stock(&txn, tenant, &items).await?;

        invoice::Entity::delete_by_id(existing.id).exec(&txn).await?;

        txn.commit().await?;

        self.publish(Event::InvoiceDeleted(id)).await;
        for item in &items {
            if let Some(product_id) = item.product_id {
                self.publish(Event::StockAdjusted {
                    product_id,
                    delta: item.quantity,
                })
                .await;
            }
        }

        Ok(())
    }
}
