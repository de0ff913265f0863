use crate::{
    entities::{product, tax},
    errors::ServiceError,
    tenant::TenantContext,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub selling_price: Decimal,
    pub purchase_price: Decimal,
    #[serde(default)]
    pub stock_quantity: i32,
    pub tax_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub selling_price: Option<Decimal>,
    pub purchase_price: Option<Decimal>,
    pub stock_quantity: Option<i32>,
    pub tax_id: Option<Uuid>,
}

#[derive(Clone)]
pub struct ProductService {
    db: Arc<DatabaseConnection>,
}

impl ProductService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// The validator derive cannot range-check Decimal fields, so prices and
    /// stock are checked by hand.
    fn check_amounts(
        selling_price: Option<Decimal>,
        purchase_price: Option<Decimal>,
        stock_quantity: Option<i32>,
    ) -> Result<(), ServiceError> {
        for price in [selling_price, purchase_price].into_iter().flatten() {
            if price < Decimal::ZERO {
                return Err(ServiceError::ValidationError(
                    "prices must not be negative".to_string(),
                ));
            }
        }
        if let Some(stock) = stock_quantity {
            if stock < 0 {
                return Err(ServiceError::ValidationError(
                    "stock quantity must not be negative".to_string(),
                ));
            }
        }
        Ok(())
    }

    async fn check_tax_reference(
        &self,
        tenant: TenantContext,
        tax_id: Uuid,
    ) -> Result<(), ServiceError> {
        tax::Entity::find_by_id(tax_id)
            .filter(tax::Column::OrganizationId.eq(tenant.organization_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Tax not found".to_string()))?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list(&self, tenant: TenantContext) -> Result<Vec<product::Model>, ServiceError> {
        let products = product::Entity::find()
            .filter(product::Column::OrganizationId.eq(tenant.organization_id))
            .order_by_asc(product::Column::Name)
            .all(&*self.db)
            .await?;
        Ok(products)
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<product::Model, ServiceError> {
        product::Entity::find_by_id(id)
            .filter(product::Column::OrganizationId.eq(tenant.organization_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product not found".to_string()))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        tenant: TenantContext,
        request: CreateProductRequest,
    ) -> Result<product::Model, ServiceError> {
        request.validate()?;
        Self::check_amounts(
            Some(request.selling_price),
            Some(request.purchase_price),
            Some(request.stock_quantity),
        )?;
        if let Some(tax_id) = request.tax_id {
            self.check_tax_reference(tenant, tax_id).await?;
        }

        let now = Utc::now();
        let model = product::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(tenant.organization_id),
            name: Set(request.name),
            description: Set(request.description),
            sku: Set(request.sku),
            selling_price: Set(request.selling_price),
            purchase_price: Set(request.purchase_price),
            stock_quantity: Set(request.stock_quantity),
            tax_id: Set(request.tax_id),
            created_at: Set(now),
            updated_at: Set(now),
        };

        Ok(model.insert(&*self.db).await?)
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        tenant: TenantContext,
        id: Uuid,
        request: UpdateProductRequest,
    ) -> Result<product::Model, ServiceError> {
        request.validate()?;
        Self::check_amounts(
            request.selling_price,
            request.purchase_price,
            request.stock_quantity,
        )?;
        if let Some(tax_id) = request.tax_id {
            self.check_tax_reference(tenant, tax_id).await?;
        }

        let existing = self.get(tenant, id).await?;
        let mut model: product::ActiveModel = existing.into();

        if let Some(name) = request.name {
            model.name = Set(name);
        }
        if request.description.is_some() {
            model.description = Set(request.description);
        }
        if request.sku.is_some() {
            model.sku = Set(request.sku);
        }
        if let Some(selling_price) = request.selling_price {
            model.selling_price = Set(selling_price);
        }
        if let Some(purchase_price) = request.purchase_price {
            model.purchase_price = Set(purchase_price);
        }
        if let Some(stock_quantity) = request.stock_quantity {
            model.stock_quantity = Set(stock_quantity);
        }
        if request.tax_id.is_some() {
            model.tax_id = Set(request.tax_id);
        }
        model.updated_at = Set(Utc::now());

        Ok(model.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, tenant: TenantContext, id: Uuid) -> Result<(), ServiceError> {
        let existing = self.get(tenant, id).await?;
        product::Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}
