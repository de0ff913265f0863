//! Turns raw request lines into fully priced lines: resolves products and
//! tax rates within the tenant, snapshots names and prices, and runs the
//! per-line tax computation.

use crate::{
    entities::{product, tax},
    errors::ServiceError,
    tax_engine::{self, LineAmounts},
};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};
use serde::Deserialize;
use uuid::Uuid;

/// One line as submitted by the client. Everything optional here is filled
/// from the referenced product where possible.
#[derive(Debug, Clone, Deserialize)]
pub struct LineInput {
    pub product_id: Option<Uuid>,
    /// Explicit tax override; wins over the product's default tax.
    pub tax_id: Option<Uuid>,
    pub item_name: Option<String>,
    pub unit_price: Option<Decimal>,
    pub quantity: i32,
}

/// Which product price backs a line when the client omits `unit_price`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBasis {
    Selling,
    Purchase,
}

/// A line after resolution and tax computation, ready to be persisted.
/// Carries the resolved product so callers can reconcile stock and report
/// shortages by product name.
#[derive(Debug, Clone)]
pub struct PricedLine {
    pub product: Option<product::Model>,
    pub tax_id: Option<Uuid>,
    pub item_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub amounts: LineAmounts,
}

impl PricedLine {
    pub fn product_id(&self) -> Option<Uuid> {
        self.product.as_ref().map(|p| p.id)
    }
}

/// Resolves the applicable tax rate for a line. An explicit `tax_id` must
/// exist within the tenant; the product's default tax is best-effort and a
/// dangling reference degrades to tax-exempt.
async fn resolve_tax<C: ConnectionTrait>(
    conn: &C,
    organization_id: Uuid,
    explicit_tax_id: Option<Uuid>,
    product: Option<&product::Model>,
) -> Result<(Decimal, Option<Uuid>), ServiceError> {
    if let Some(tax_id) = explicit_tax_id {
        let tax = tax::Entity::find_by_id(tax_id)
            .filter(tax::Column::OrganizationId.eq(organization_id))
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Tax not found".to_string()))?;
        return Ok((tax.rate, Some(tax.id)));
    }

    if let Some(default_tax_id) = product.and_then(|p| p.tax_id) {
        if let Some(tax) = tax::Entity::find_by_id(default_tax_id)
            .filter(tax::Column::OrganizationId.eq(organization_id))
            .one(conn)
            .await?
        {
            return Ok((tax.rate, Some(tax.id)));
        }
    }

    Ok((Decimal::ZERO, None))
}

/// Prices a full line set. Fails on an empty set, on any reference that does
/// not resolve within the tenant, and on custom lines missing a name or
/// price.
pub async fn price_lines<C: ConnectionTrait>(
    conn: &C,
    organization_id: Uuid,
    inter_state: bool,
    basis: PriceBasis,
    inputs: &[LineInput],
) -> Result<Vec<PricedLine>, ServiceError> {
    if inputs.is_empty() {
        return Err(ServiceError::ValidationError(
            "at least one line item is required".to_string(),
        ));
    }

    let mut priced = Vec::with_capacity(inputs.len());

    for input in inputs {
        let product = match input.product_id {
            Some(product_id) => Some(
                product::Entity::find_by_id(product_id)
                    .filter(product::Column::OrganizationId.eq(organization_id))
                    .one(conn)
                    .await?
                    .ok_or_else(|| {
                        ServiceError::NotFound("Product not found".to_string())
                    })?,
            ),
            None => None,
        };

        let item_name = match input.item_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name.to_string(),
            _ => match &product {
                Some(p) => p.name.clone(),
                None => {
                    return Err(ServiceError::ValidationError(
                        "item name is required for custom lines".to_string(),
                    ))
                }
            },
        };

        let unit_price = match input.unit_price {
            Some(price) => price,
            None => match &product {
                Some(p) => match basis {
                    PriceBasis::Selling => p.selling_price,
                    PriceBasis::Purchase => p.purchase_price,
                },
                None => {
                    return Err(ServiceError::ValidationError(
                        "unit price is required for custom lines".to_string(),
                    ))
                }
            },
        };

        let (rate, tax_id) =
            resolve_tax(conn, organization_id, input.tax_id, product.as_ref()).await?;

        let amounts = tax_engine::compute_line(unit_price, input.quantity, rate, inter_state)?;

        priced.push(PricedLine {
            product,
            tax_id,
            item_name,
            unit_price,
            quantity: input.quantity,
            amounts,
        });
    }

    Ok(priced)
}
