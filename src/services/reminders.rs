use crate::{
    entities::{
        customer, estimate, invoice, purchase_order,
        reminder::{self, ReminderTarget},
        supplier,
    },
    errors::ServiceError,
    tenant::TenantContext,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReminderRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
    pub remind_at: DateTime<Utc>,
    pub related_to_type: Option<ReminderTarget>,
    pub related_to_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReminderRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub remind_at: Option<DateTime<Utc>>,
    pub related_to_type: Option<ReminderTarget>,
    pub related_to_id: Option<Uuid>,
}

#[derive(Clone)]
pub struct ReminderService {
    db: Arc<DatabaseConnection>,
}

impl ReminderService {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// A target is either fully present or fully absent, and must point at a
    /// record the tenant owns.
    async fn check_target(
        &self,
        tenant: TenantContext,
        target: Option<ReminderTarget>,
        related_to_id: Option<Uuid>,
    ) -> Result<(), ServiceError> {
        let (target, id) = match (target, related_to_id) {
            (None, None) => return Ok(()),
            (Some(target), Some(id)) => (target, id),
            _ => {
                return Err(ServiceError::ValidationError(
                    "related_to_type and related_to_id must be set together".to_string(),
                ))
            }
        };

        let org_id = tenant.organization_id;
        let found = match target {
            ReminderTarget::Customer => customer::Entity::find_by_id(id)
                .filter(customer::Column::OrganizationId.eq(org_id))
                .one(&*self.db)
                .await?
                .is_some(),
            ReminderTarget::Supplier => supplier::Entity::find_by_id(id)
                .filter(supplier::Column::OrganizationId.eq(org_id))
                .one(&*self.db)
                .await?
                .is_some(),
            ReminderTarget::Invoice => invoice::Entity::find_by_id(id)
                .filter(invoice::Column::OrganizationId.eq(org_id))
                .one(&*self.db)
                .await?
                .is_some(),
            ReminderTarget::Estimate => estimate::Entity::find_by_id(id)
                .filter(estimate::Column::OrganizationId.eq(org_id))
                .one(&*self.db)
                .await?
                .is_some(),
            ReminderTarget::PurchaseOrder => purchase_order::Entity::find_by_id(id)
                .filter(purchase_order::Column::OrganizationId.eq(org_id))
                .one(&*self.db)
                .await?
                .is_some(),
        };

        if !found {
            return Err(ServiceError::NotFound(format!(
                "Reminder target {} not found",
                target
            )));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn list(&self, tenant: TenantContext) -> Result<Vec<reminder::Model>, ServiceError> {
        let reminders = reminder::Entity::find()
            .filter(reminder::Column::OrganizationId.eq(tenant.organization_id))
            .order_by_asc(reminder::Column::RemindAt)
            .all(&*self.db)
            .await?;
        Ok(reminders)
    }

    #[instrument(skip(self))]
    pub async fn get(
        &self,
        tenant: TenantContext,
        id: Uuid,
    ) -> Result<reminder::Model, ServiceError> {
        reminder::Entity::find_by_id(id)
            .filter(reminder::Column::OrganizationId.eq(tenant.organization_id))
            .one(&*self.db)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Reminder not found".to_string()))
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        tenant: TenantContext,
        request: CreateReminderRequest,
    ) -> Result<reminder::Model, ServiceError> {
        request.validate()?;
        self.check_target(tenant, request.related_to_type, request.related_to_id)
            .await?;

        let now = Utc::now();
        let model = reminder::ActiveModel {
            id: Set(Uuid::new_v4()),
            organization_id: Set(tenant.organization_id),
            title: Set(request.title),
            description: Set(request.description),
            remind_at: Set(request.remind_at),
            related_to_type: Set(request.related_to_type.map(|t| t.to_string())),
            related_to_id: Set(request.related_to_id),
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
        request: UpdateReminderRequest,
    ) -> Result<reminder::Model, ServiceError> {
        request.validate()?;

        let existing = self.get(tenant, id).await?;

        // Re-validate the target whenever either half changes.
        if request.related_to_type.is_some() || request.related_to_id.is_some() {
            self.check_target(tenant, request.related_to_type, request.related_to_id)
                .await?;
        }

        let mut model: reminder::ActiveModel = existing.into();
        if let Some(title) = request.title {
            model.title = Set(title);
        }
        if request.description.is_some() {
            model.description = Set(request.description);
        }
        if let Some(remind_at) = request.remind_at {
            model.remind_at = Set(remind_at);
        }
        if request.related_to_type.is_some() || request.related_to_id.is_some() {
            model.related_to_type = Set(request.related_to_type.map(|t| t.to_string()));
            model.related_to_id = Set(request.related_to_id);
        }
        model.updated_at = Set(Utc::now());

        Ok(model.update(&*self.db).await?)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, tenant: TenantContext, id: Uuid) -> Result<(), ServiceError> {
        let existing = self.get(tenant, id).await?;
        reminder::Entity::delete_by_id(existing.id)
            .exec(&*self.db)
            .await?;
        Ok(())
    }
}
