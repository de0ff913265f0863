use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tenant root. Every other entity is owned by an organization and all
/// lookups filter by `organization_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "organizations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    /// Home jurisdiction used for CGST/SGST vs IGST classification.
    pub state: Option<String>,
    pub gst_number: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
