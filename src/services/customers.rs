use crate::{entities::customer, errors::ServiceError, tenant::TenantContext};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub gst_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub state: Option<String>,
    pub gst_number: Option<String>,
}

#[derive(Clone)]
pub struct CustomerService {
    db: Arc<DatabaseConnection>,
}

impl CustomerService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, tenant: TenantContext) -> Result<Vec<customer::Model>, ServiceError> {
        let customers = customer::Entity::find()
            .filter(customer::Column::OrganizationId.eq(tenant.organization_id))
            .order_by_asc(customer::Column::Name)
            .all(&*self.db)
            .await?;
        Ok(customers)
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<customer::Model, ServiceError> {
        customer::Entity::find_by_id(id)
            .filter(customer::Column::OrganizationId.eq(tenant.organization_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Customer not found".to_string()))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        tenant: TenantContext,
        request: CreateCustomerRequest,
    ) -> Result<customer::Model, ServiceError> {
        request.validate()?;

        let now = Utc::now();
        let model = customer::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(tenant.organization_id),
            name: Set(request.name),
            email: Set(request.email),
            phone: Set(request.phone),
            address: Set(request.address),
            state: Set(request.state),
            gst_number: Set(request.gst_number),
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
        request: UpdateCustomerRequest,
    ) -> Result<customer::Model, ServiceError> {
        request.validate()?;

        let existing = self.get(tenant, id).await?;
        let mut model: customer::ActiveModel = existing.into();

        if let Some(name) = request.name {
            model.name = Set(name);
        }
        if request.email.is_some() {
            model.email = Set(request.email);
        }
        if request.phone.is_some() {
            model.phone = Set(request.phone);
        }
        if request.address.is_some() {
            model.address = Set(request.address);
        }
        if request.state.is_some() {
            model.state = Set(request.state);
        }
        if request.gst_number.is_some() {
            model.gst_number = Set(request.gst_number);
        }
        model.updated_at = Set(Utc::now());

        Ok(model.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, tenant: TenantContext, id: Uuid) -> Result<(), ServiceError> {
        let existing = self.get(tenant, id).await?;
        customer::Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}
