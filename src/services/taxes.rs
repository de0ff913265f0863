use crate::{entities::tax, errors::ServiceError, tenant::TenantContext};
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaxRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Percentage form: 18 means 18%.
    pub rate: Decimal,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTaxRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub rate: Option<Decimal>,
}

#[derive(Clone)]
pub struct TaxService {
    db: Arc<DatabaseConnection>,
}

impl TaxService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn check_rate(rate: Decimal) -> Result<(), ServiceError> {
        if rate < Decimal::ZERO || rate > dec!(100) {
            return Err(ServiceError::ValidationError(
                "tax rate must be between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list(&self, tenant: TenantContext) -> Result<Vec<tax::Model>, ServiceError> {
        let taxes = tax::Entity::find()
            .filter(tax::Column::OrganizationId.eq(tenant.organization_id))
            .order_by_asc(tax::Column::Name)
            .all(&*self.db)
            .await?;
        Ok(taxes)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, tenant: TenantContext, id: Uuid) -> Result<tax::Model, ServiceError> {
        tax::Entity::find_by_id(id)
            .filter(tax::Column::OrganizationId.eq(tenant.organization_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Tax not found".to_string()))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        tenant: TenantContext,
        request: CreateTaxRequest,
    ) -> Result<tax::Model, ServiceError> {
        request.validate()?;
        Self::check_rate(request.rate)?;

        let now = Utc::now();
        let model = tax::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(tenant.organization_id),
            name: Set(request.name),
            rate: Set(request.rate),
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
        request: UpdateTaxRequest,
    ) -> Result<tax::Model, ServiceError> {
        request.validate()?;
        if let Some(rate) = request.rate {
            Self::check_rate(rate)?;
        }

        let existing = self.get(tenant, id).await?;
        let mut model: tax::ActiveModel = existing.into();

        if let Some(name) = request.name {
            model.name = Set(name);
        }
        if let Some(rate) = request.rate {
            model.rate = Set(rate);
        }
        model.updated_at = Set(Utc::now());

        Ok(model.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, tenant: TenantContext, id: Uuid) -> Result<(), ServiceError> {
        let existing = self.get(tenant, id).await?;
        tax::Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}
