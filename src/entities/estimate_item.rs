use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One estimate line. All pricing and tax fields are snapshots captured when
/// the line is created; rates are percentage-form (9 means 9%). Exactly one
/// of the CGST/SGST pair or IGST is non-zero, or all are zero (tax-exempt).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "estimate_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub estimate_id: Uuid,
    pub product_id: Option<Uuid>,
    pub tax_id: Option<Uuid>,
    pub item_name: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub unit_price: Decimal,
    pub quantity: i32,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub sub_total_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((8, 4)))")]
    pub cgst_rate: Decimal,
    #[sea_orm(column_type = "Decimal(Some((8, 4)))")]
    pub sgst_rate: Decimal,
    #[sea_orm(column_type = "Decimal(Some((8, 4)))")]
    pub igst_rate: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub cgst_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub sgst_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub igst_amount: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub total_price: Decimal,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::estimate::Entity",
        from = "Column::EstimateId",
        to = "super::estimate::Column::Id",
        on_delete = "Cascade"
    )]
    Estimate,
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,
}

impl Related<super::estimate::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Estimate.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
