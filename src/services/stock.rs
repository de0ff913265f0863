//! Stock reconciliation primitives. All mutations are single-statement
//! read-modify-writes so concurrent document transactions cannot interleave
//! between the availability check and the decrement.

use crate::{entities::product, errors::ServiceError};
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
};
use uuid::Uuid;

/// Decrements a product's stock if and only if enough is available.
/// The quantity guard lives in the UPDATE's WHERE clause; zero rows affected
/// means the product either vanished or lacks stock.
pub async fn check_and_decrement<C: ConnectionTrait>(
    conn: &C,
    organization_id: Uuid,
    product_id: Uuid,
    product_name: &str,
    quantity: i32,
) -> Result<(), ServiceError> {
    let result = product::Entity::update_many()
        .col_expr(
            product::Column::StockQuantity,
            Expr::col(product::Column::StockQuantity).sub(quantity),
        )
        .col_expr(product::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(product::Column::Id.eq(product_id))
        .filter(product::Column::OrganizationId.eq(organization_id))
        .filter(product::Column::StockQuantity.gte(quantity))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::InsufficientStock(product_name.to_string()));
    }

    Ok(())
}

/// Increments a product's stock. Used when restoring invoice lines and when
/// receiving a purchase order.
pub async fn increment<C: ConnectionTrait>(
    conn: &C,
    organization_id: Uuid,
    product_id: Uuid,
    quantity: i32,
) -> Result<(), ServiceError> {
    let result = product::Entity::update_many()
        .col_expr(
            product::Column::StockQuantity,
            Expr::col(product::Column::StockQuantity).add(quantity),
        )
        .col_expr(product::Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(product::Column::Id.eq(product_id))
        .filter(product::Column::OrganizationId.eq(organization_id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::NotFound("Product not found".to_string()));
    }

    Ok(())
}
