use crate::{
    entities::{
        customer,
        estimate::{self, EstimateStatus},
        estimate_item, organization,
    },
    errors::ServiceError,
    events::{Event, EventSender},
    services::pricing::{self, LineInput, PriceBasis, PricedLine},
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
pub struct CreateEstimateRequest {
    pub customer_id: Uuid,
    pub estimate_date: NaiveDate,
    pub expiry_date: Option<NaiveDate>,
    pub status: Option<EstimateStatus>,
    pub items: Vec<LineInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEstimateRequest {
    pub customer_id: Option<Uuid>,
    pub estimate_date: Option<NaiveDate>,
    pub expiry_date: Option<NaiveDate>,
    pub status: Option<EstimateStatus>,
    /// When present, replaces the full line set and recomputes totals.
    pub items: Option<Vec<LineInput>>,
}

#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    #[serde(flatten)]
    pub estimate: estimate::Model,
    pub items: Vec<estimate_item::Model>,
}

#[derive(Clone)]
pub struct EstimateService {
    db: Arc<DatabaseConnection>,
    event_sender: EventSender,
}

impl EstimateService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: EventSender) -> Self {
        Self { db, event_sender }
    }

    async fn jurisdiction<C: ConnectionTrait>(
        conn: &C,
        tenant: TenantContext,
        customer_id: Uuid,
    ) -> Result<bool, ServiceError> {
        let org = organization::Entity::find_by_id(tenant.organization_id)
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Organization not found".to_string()))?;
        let cust = customer::Entity::find_by_id(customer_id)
            .filter(customer::Column::OrganizationId.eq(tenant.organization_id))
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Customer not found".to_string()))?;

        Ok(tax_engine::is_inter_state(
            org.state.as_deref(),
            cust.state.as_deref(),
        ))
    }

    async fn insert_items<C: ConnectionTrait>(
        conn: &C,
        estimate_id: Uuid,
        lines: &[PricedLine],
    ) -> Result<Vec<estimate_item::Model>, ServiceError> {
        let now = Utc::now();
        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let item = estimate_item::ActiveModel {
                id: Set(Uuid::new_v4()),
                estimate_id: Set(estimate_id),
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

    fn totals(lines: &[PricedLine]) -> DocumentTotals {
        let amounts: Vec<_> = lines.iter().map(|l| l.amounts.clone()).collect();
        tax_engine::aggregate(&amounts, Decimal::ZERO)
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        tenant: TenantContext,
        request: CreateEstimateRequest,
    ) -> Result<EstimateResponse, ServiceError> {
        let txn = self.db.begin().await?;

        let inter_state = Self::jurisdiction(&txn, tenant, request.customer_id).await?;
        let lines = pricing::price_lines(
            &txn,
            tenant.organization_id,
            inter_state,
            PriceBasis::Selling,
            &request.items,
        )
        .await?;
        let totals = Self::totals(&lines);

        let now = Utc::now();
        let model = estimate::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(tenant.organization_id),
            customer_id: Set(request.customer_id),
            estimate_date: Set(request.estimate_date),
            expiry_date: Set(request.expiry_date),
            status: Set(request.status.unwrap_or_default().to_string()),
            subtotal: Set(totals.subtotal),
            cgst_amount: Set(totals.cgst_total),
            sgst_amount: Set(totals.sgst_total),
            igst_amount: Set(totals.igst_total),
            total_amount: Set(totals.total_amount),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = model.insert(&txn).await?;
        let items = Self::insert_items(&txn, saved.id, &lines).await?;

        txn.commit().await?;

        if let Err(e) = self.event_sender.send(Event::EstimateCreated(saved.id)).await {
            warn!(error = %e, "failed to publish estimate event");
        }

        Ok(EstimateResponse {
            estimate: saved,
            items,
        })
    }

    #[instrument(skip(self))]
    pub async fn list(&self, tenant: TenantContext) -> Result<Vec<estimate::Model>, ServiceError> {
        let estimates = estimate::Entity::find()
            .filter(estimate::Column::OrganizationId.eq(tenant.organization_id))
            .order_by_desc(estimate::Column::EstimateDate)
            .all(&*self.db)
            .await?;
        Ok(estimates)
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<EstimateResponse, ServiceError> {
        let estimate = estimate::Entity::find_by_id(id)
            .filter(estimate::Column::OrganizationId.eq(tenant.organization_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Estimate not found".to_string()))?;

        let items = estimate_item::Entity::find()
            .filter(estimate_item::Column::EstimateId.eq(estimate.id))
            .all(&*self.db)
            .await?;

        Ok(EstimateResponse { estimate, items })
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        tenant: TenantContext,
        id: Uuid,
        request: UpdateEstimateRequest,
    ) -> Result<EstimateResponse, ServiceError> {
        let txn = self.db.begin().await?;

        let existing = estimate::Entity::find_by_id(id)
            .filter(estimate::Column::OrganizationId.eq(tenant.organization_id))
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Estimate not found".to_string()))?;

        let customer_id = request.customer_id.unwrap_or(existing.customer_id);
        let mut model: estimate::ActiveModel = existing.into();
        model.customer_id = Set(customer_id);
        if let Some(estimate_date) = request.estimate_date {
            model.estimate_date = Set(estimate_date);
        }
        if request.expiry_date.is_some() {
            model.expiry_date = Set(request.expiry_date);
        }
        if let Some(status) = request.status {
            model.status = Set(status.to_string());
        }

        let replaced_lines = match request.items {
            Some(items) => {
                estimate_item::Entity::delete_many()
                    .filter(estimate_item::Column::EstimateId.eq(id))
                    .exec(&txn)
                    .await?;

                let inter_state = Self::jurisdiction(&txn, tenant, customer_id).await?;
                let lines = pricing::price_lines(
                    &txn,
                    tenant.organization_id,
                    inter_state,
                    PriceBasis::Selling,
                    &items,
                )
                .await?;
                let totals = Self::totals(&lines);

                model.subtotal = Set(totals.subtotal);
                model.cgst_amount = Set(totals.cgst_total);
                model.sgst_amount = Set(totals.sgst_total);
                model.igst_amount = Set(totals.igst_total);
                model.total_amount = Set(totals.total_amount);

                Some(lines)
            }
            None => None,
        };

        model.updated_at = Set(Utc::now());
        let saved = model.update(&txn).await?;

        let items = match replaced_lines {
            Some(lines) => Self::insert_items(&txn, saved.id, &lines).await?,
            None => {
                estimate_item::Entity::find()
                    .filter(estimate_item::Column::EstimateId.eq(saved.id))
                    .all(&txn)
                    .await?
            }
        };

        txn.commit().await?;

        if let Err(e) = self.event_sender.send(Event::EstimateUpdated(saved.id)).await {
            warn!(error = %e, "failed to publish estimate event");
        }

        Ok(EstimateResponse {
            estimate: saved,
            items,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, tenant: TenantContext, id: Uuid) -> Result<(), ServiceError> {
        let existing = estimate::Entity::find_by_id(id)
            .filter(estimate::Column::OrganizationId.eq(tenant.organization_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Estimate not found".to_string()))?;

        estimate::Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await?;

        if let Err(e) = self.event_sender.send(Event::EstimateDeleted(id)).await {
            warn!(error = %e, "failed to publish estimate event");
        }

        Ok(())
    }
}
