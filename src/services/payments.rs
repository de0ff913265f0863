//! Payment recording and reconciliation. Every mutation keeps the invariant
//! that an invoice's `paid_amount` equals the sum of its payment amounts and
//! never exceeds `total_amount` beyond the rounding tolerance.

use crate::{
    entities::{
        invoice::{self, InvoiceStatus},
        payment,
    },
    errors::ServiceError,
    events::{Event, EventSender},
    tenant::TenantContext,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{instrument, warn};
use uuid::Uuid;

/// Tolerance absorbing round-off differences between the invoice total and
/// the amounts a customer actually pays.
pub const PAYMENT_EPSILON: Decimal = dec!(0.001);

/// Externally visible invoice status, derived on every read. A cancelled
/// invoice stays cancelled; a settled balance shows paid regardless of the
/// stored status; an open balance past the due date shows overdue.
pub fn display_status(
    stored: InvoiceStatus,
    paid_amount: Decimal,
    total_amount: Decimal,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
) -> InvoiceStatus {
    if stored == InvoiceStatus::Cancelled {
        return InvoiceStatus::Cancelled;
    }
    if stored == InvoiceStatus::Paid || total_amount - paid_amount <= PAYMENT_EPSILON {
        return InvoiceStatus::Paid;
    }
    if let Some(due) = due_date {
        if due < today {
            return InvoiceStatus::Overdue;
        }
    }
    stored
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePaymentRequest {
    pub invoice_id: Uuid,
    pub amount: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePaymentRequest {
    pub amount: Option<Decimal>,
    pub payment_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

#[derive(Clone)]
pub struct PaymentService {
    db: Arc<DatabaseConnection>,
    event_sender: EventSender,
}

impl PaymentService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: EventSender) -> Self {
        Self { db, event_sender }
    }

    fn check_amount(amount: Decimal) -> Result<(), ServiceError> {
        if amount <= Decimal::ZERO {
            return Err(ServiceError::ValidationError(
                "payment amount must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn check_ceiling(new_paid: Decimal, total: Decimal) -> Result<(), ServiceError> {
        if new_paid > total + PAYMENT_EPSILON {
            return Err(ServiceError::PaymentExceedsBalance);
        }
        Ok(())
    }

    async fn find_invoice<C: ConnectionTrait>(
        conn: &C,
        tenant: TenantContext,
        invoice_id: Uuid,
    ) -> Result<invoice::Model, ServiceError> {
        invoice::Entity::find_by_id(invoice_id)
            .filter(invoice::Column::OrganizationId.eq(tenant.organization_id))
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Invoice not found".to_string()))
    }

    async fn find_scoped<C: ConnectionTrait>(
        conn: &C,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<payment::Model, ServiceError> {
        payment::Entity::find_by_id(id)
            .filter(payment::Column::OrganizationId.eq(tenant.organization_id))
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Payment not found".to_string()))
    }

    async fn set_paid_amount<C: ConnectionTrait>(
        conn: &C,
        inv: invoice::Model,
        paid_amount: Decimal,
    ) -> Result<(), ServiceError> {
        let mut model: invoice::ActiveModel = inv.into();
        model.paid_amount = Set(paid_amount);
        model.updated_at = Set(Utc::now());
        model.update(conn).await?;
        Ok(())
    }

    async fn publish(&self, event: Event) {
        if let Err(e) = self.event_sender.send(event).await {
            warn!(error = %e, "failed to publish payment event");
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        tenant: TenantContext,
        request: CreatePaymentRequest,
    ) -> Result<payment::Model, ServiceError> {
        Self::check_amount(request.amount)?;

        let txn = self.db.begin().await?;

        let inv = Self::find_invoice(&txn, tenant, request.invoice_id).await?;
        let new_paid = inv.paid_amount + request.amount;
        Self::check_ceiling(new_paid, inv.total_amount)?;

        let now = Utc::now();
        let model = payment::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(tenant.organization_id),
            invoice_id: Set(request.invoice_id),
            amount: Set(request.amount),
            payment_date: Set(request.payment_date),
            payment_method: Set(request.payment_method),
            notes: Set(request.notes),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = model.insert(&txn).await?;
        Self::set_paid_amount(&txn, inv, new_paid).await?;

        txn.commit().await?;

        self.publish(Event::PaymentRecorded {
            payment_id: saved.id,
            invoice_id: saved.invoice_id,
        })
        .await;

        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn list(&self, tenant: TenantContext) -> Result<Vec<payment::Model>, ServiceError> {
        let payments = payment::Entity::find()
            .filter(payment::Column::OrganizationId.eq(tenant.organization_id))
            .order_by_desc(payment::Column::PaymentDate)
            .all(&*self.db)
            .await?;
        Ok(payments)
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<payment::Model, ServiceError> {
        Self::find_scoped(&*self.db, tenant, id).await
    }

    /// Applies the amount delta to the invoice and re-validates the new net
    /// against the invoice total, so an edit cannot sneak past the ceiling.
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        tenant: TenantContext,
        id: Uuid,
        request: UpdatePaymentRequest,
    ) -> Result<payment::Model, ServiceError> {
        if let Some(amount) = request.amount {
            Self::check_amount(amount)?;
        }

        let txn = self.db.begin().await?;

        let existing = Self::find_scoped(&txn, tenant, id).await?;
        let inv = Self::find_invoice(&txn, tenant, existing.invoice_id).await?;

        let new_amount = request.amount.unwrap_or(existing.amount);
        let new_paid = inv.paid_amount - existing.amount + new_amount;
        Self::check_ceiling(new_paid, inv.total_amount)?;

        let mut model: payment::ActiveModel = existing.into();
        model.amount = Set(new_amount);
        if let Some(payment_date) = request.payment_date {
            model.payment_date = Set(payment_date);
        }
        if request.payment_method.is_some() {
            model.payment_method = Set(request.payment_method);
        }
        if request.notes.is_some() {
            model.notes = Set(request.notes);
        }
        model.updated_at = Set(Utc::now());
        let saved = model.update(&txn).await?;

        Self::set_paid_amount(&txn, inv, new_paid).await?;

        txn.commit().await?;

        self.publish(Event::PaymentUpdated {
            payment_id: saved.id,
            invoice_id: saved.invoice_id,
        })
        .await;

        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, tenant: TenantContext, id: Uuid) -> Result<(), ServiceError> {
        let txn = self.db.begin().await?;

        let existing = Self::find_scoped(&txn, tenant, id).await?;
        let inv = Self::find_invoice(&txn, tenant, existing.invoice_id).await?;
        let new_paid = inv.paid_amount - existing.amount;

        payment::Entity::delete_by_id(existing.id).exec(&txn).await?;
        Self::set_paid_amount(&txn, inv, new_paid).await?;

        txn.commit().await?;

        self.publish(Event::PaymentDeleted {
            payment_id: id,
            invoice_id: existing.invoice_id,
        })
        .await;

        Ok(())
    }
}
