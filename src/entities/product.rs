use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub organization_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub sku: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub selling_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub purchase_price: Decimal,
    /// Mutated by stock reconciliation on invoice mutations and purchase
    /// order receipt.
    pub stock_quantity: i32,
    /// Default tax applied to lines referencing this product, unless the
    /// line carries an explicit tax override.
    pub tax_id: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tax::Entity",
        from = "Column::TaxId",
        to = "super::tax::Column::Id"
    )]
    Tax,
}

impl Related<super::tax::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tax.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
