use crate::{
    entities::{
        organization,
        purchase_order::{self, PurchaseOrderStatus},
        purchase_order_item, supplier,
    },
    errors::ServiceError,
    events::{Event, EventSender},
    services::{
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
pub struct CreatePurchaseOrderRequest {
    pub supplier_id: Uuid,
    pub order_date: NaiveDate,
    pub expected_delivery_date: Option<NaiveDate>,
    pub status: Option<PurchaseOrderStatus>,
    pub items: Vec<LineInput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePurchaseOrderRequest {
    pub supplier_id: Option<Uuid>,
    pub order_date: Option<NaiveDate>,
    pub expected_delivery_date: Option<NaiveDate>,
    pub status: Option<PurchaseOrderStatus>,
    pub items: Option<Vec<LineInput>>,
}

#[derive(Debug, Serialize)]
pub struct PurchaseOrderResponse {
    #[serde(flatten)]
    pub purchase_order: purchase_order::Model,
    pub items: Vec<purchase_order_item::Model>,
}

#[derive(Clone)]
pub struct PurchaseOrderService {
    db: Arc<DatabaseConnection>,
    event_sender: EventSender,
}

impl PurchaseOrderService {
    pub fn new(db: Arc<DatabaseConnection>, event_sender: EventSender) -> Self {
        Self { db, event_sender }
    }

    /// The received state is reserved for the receive action, which is the
    /// only path that moves stock.
    fn check_status(status: Option<PurchaseOrderStatus>) -> Result<(), ServiceError> {
        if status == Some(PurchaseOrderStatus::Received) {
            return Err(ServiceError::ValidationError(
                "status 'received' is set by the receive action".to_string(),
            ));
        }
        Ok(())
    }

    async fn jurisdiction<C: ConnectionTrait>(
        conn: &C,
        tenant: TenantContext,
        supplier_id: Uuid,
    ) -> Result<bool, ServiceError> {
        let org = organization::Entity::find_by_id(tenant.organization_id)
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Organization not found".to_string()))?;
        let supp = supplier::Entity::find_by_id(supplier_id)
            .filter(supplier::Column::OrganizationId.eq(tenant.organization_id))
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Supplier not found".to_string()))?;

        Ok(tax_engine::is_inter_state(
            org.state.as_deref(),
            supp.state.as_deref(),
        ))
    }

    async fn insert_items<C: ConnectionTrait>(
        conn: &C,
        purchase_order_id: Uuid,
        lines: &[PricedLine],
    ) -> Result<Vec<purchase_order_item::Model>, ServiceError> {
        let now = Utc::now();
        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            let item = purchase_order_item::ActiveModel {
                id: Set(Uuid::new_v4()),
                purchase_order_id: Set(purchase_order_id),
                product_id: Set(line.product_id()),
                tax_id: Set(line.tax_id),
                item_name: Set(line.item_name.clone()),
                purchase_price: Set(line.unit_price),
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

    async fn find_scoped<C: ConnectionTrait>(
        conn: &C,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<purchase_order::Model, ServiceError> {
        purchase_order::Entity::find_by_id(id)
            .filter(purchase_order::Column::OrganizationId.eq(tenant.organization_id))
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Purchase order not found".to_string()))
    }

    async fn publish(&self, event: Event) {
        if let Err(e) = self.event_sender.send(event).await {
            warn!(error = %e, "failed to publish purchase order event");
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        tenant: TenantContext,
        request: CreatePurchaseOrderRequest,
    ) -> Result<PurchaseOrderResponse, ServiceError> {
        Self::check_status(request.status)?;

        let txn = self.db.begin().await?;

        let inter_state = Self::jurisdiction(&txn, tenant, request.supplier_id).await?;
        let lines = pricing::price_lines(
            &txn,
            tenant.organization_id,
            inter_state,
            PriceBasis::Purchase,
            &request.items,
        )
        .await?;
        let totals = Self::totals(&lines);

        let now = Utc::now();
        let model = purchase_order::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(tenant.organization_id),
            supplier_id: Set(request.supplier_id),
            order_date: Set(request.order_date),
            expected_delivery_date: Set(request.expected_delivery_date),
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

        self.publish(Event::PurchaseOrderCreated(saved.id)).await;

        Ok(PurchaseOrderResponse {
            purchase_order: saved,
            items,
        })
    }

    #[instrument(skip(self))]
    pub async fn list(
        &self,
        tenant: TenantContext,
    ) -> Result<Vec<purchase_order::Model>, ServiceError> {
        let orders = purchase_order::Entity::find()
            .filter(purchase_order::Column::OrganizationId.eq(tenant.organization_id))
            .order_by_desc(purchase_order::Column::OrderDate)
            .all(&*self.db)
            .await?;
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<PurchaseOrderResponse, ServiceError> {
        let order = Self::find_scoped(&*self.db, tenant, id).await?;
        let items = purchase_order_item::Entity::find()
            .filter(purchase_order_item::Column::PurchaseOrderId.eq(order.id))
            .all(&*self.db)
            .await?;

        Ok(PurchaseOrderResponse {
            purchase_order: order,
            items,
        })
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        tenant: TenantContext,
        id: Uuid,
        request: UpdatePurchaseOrderRequest,
    ) -> Result<PurchaseOrderResponse, ServiceError> {
        Self::check_status(request.status)?;

        let txn = self.db.begin().await?;

        let existing = Self::find_scoped(&txn, tenant, id).await?;
        if existing.status == PurchaseOrderStatus::Received.to_string()
            && request.items.is_some()
        {
            return Err(ServiceError::InvalidState(
                "cannot replace lines of a received purchase order".to_string(),
            ));
        }

        let supplier_id = request.supplier_id.unwrap_or(existing.supplier_id);
        let mut model: purchase_order::ActiveModel = existing.into();
        model.supplier_id = Set(supplier_id);
        if let Some(order_date) = request.order_date {
            model.order_date = Set(order_date);
        }
        if request.expected_delivery_date.is_some() {
            model.expected_delivery_date = Set(request.expected_delivery_date);
        }
        if let Some(status) = request.status {
            model.status = Set(status.to_string());
        }

        let replaced_lines = match request.items {
            Some(items) => {
                purchase_order_item::Entity::delete_many()
                    .filter(purchase_order_item::Column::PurchaseOrderId.eq(id))
                    .exec(&txn)
                    .await?;

                let inter_state = Self::jurisdiction(&txn, tenant, supplier_id).await?;
                let lines = pricing::price_lines(
                    &txn,
                    tenant.organization_id,
                    inter_state,
                    PriceBasis::Purchase,
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
                purchase_order_item::Entity::find()
                    .filter(purchase_order_item::Column::PurchaseOrderId.eq(saved.id))
                    .all(&txn)
                    .await?
            }
        };

        txn.commit().await?;

        self.publish(Event::PurchaseOrderUpdated(saved.id)).await;

        Ok(PurchaseOrderResponse {
            purchase_order: saved,
            items,
        })
    }

    /// Marks the order received and adds every product-backed line's
    /// quantity to stock, exactly once.
    #[instrument(skip(self))]
    pub async fn receive(
        &self,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<PurchaseOrderResponse, ServiceError> {
        let txn = self.db.begin().await?;

        let existing = Self::find_scoped(&txn, tenant, id).await?;
        if existing.status == PurchaseOrderStatus::Received.to_string() {
            return Err(ServiceError::InvalidState(
                "purchase order already received".to_string(),
            ));
        }
        if existing.status == PurchaseOrderStatus::Cancelled.to_string() {
            return Err(ServiceError::InvalidState(
                "cannot receive a cancelled purchase order".to_string(),
            ));
        }

        let items = purchase_order_item::Entity::find()
            .filter(purchase_order_item::Column::PurchaseOrderId.eq(existing.id))
            .all(&txn)
            .await?;

        for item in &items {
            if let Some(product_id) = item.product_id {
                stock::increment(&txn, tenant.organization_id, product_id, item.quantity).await?;
            }
        }

        let mut model: purchase_order::ActiveModel = existing.into();
        model.status = Set(PurchaseOrderStatus::Received.to_string());
        model.updated_at = Set(Utc::now());
        let saved = model.update(&txn).await?;

        txn.commit().await?;

        self.publish(Event::PurchaseOrderReceived(saved.id)).await;
        for item in &items {
            if let Some(product_id) = item.product_id {
                self.publish(Event::StockAdjusted {
                    product_id,
                    delta: item.quantity,
                })
                .await;
            }
        }

        Ok(PurchaseOrderResponse {
            purchase_order: saved,
            items,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, tenant: TenantContext, id: Uuid) -> Result<(), ServiceError> {
        let existing = Self::find_scoped(&*self.db, tenant, id).await?;
        purchase_order::Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await?;

        self.publish(Event::PurchaseOrderDeleted(id)).await;
        Ok(())
    }
}
