//! Pure GST computation: jurisdiction classification, per-line tax split and
//! document totals aggregation.
//!
//! Conventions: tax rates are percentage-form throughout (a rate of 18 means
//! 18%). Monetary amounts are rounded to 2 decimal places, rates carry 4
//! decimal places so halving an odd rate for the CGST/SGST split loses
//! nothing (e.g. 4.75 -> 2.375 each).

use crate::errors::ServiceError;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

const MONEY_DP: u32 = 2;
const RATE_DP: u32 = 4;

pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DP, RoundingStrategy::MidpointAwayFromZero)
}

fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATE_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Classifies a transaction as inter-state (IGST) or intra-state
/// (CGST + SGST). Inter-state only when both jurisdictions are known and
/// differ; a missing state on either side falls back to the intra-state
/// split. Case-sensitive comparison, computed once per document mutation.
pub fn is_inter_state(org_state: Option<&str>, counterparty_state: Option<&str>) -> bool {
    match (org_state, counterparty_state) {
        (Some(org), Some(other)) => !org.is_empty() && !other.is_empty() && org != other,
        _ => false,
    }
}

/// Per-line computation result. Exactly one of the CGST/SGST pair or IGST is
/// populated, or all are zero for tax-exempt lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineAmounts {
    pub sub_total: Decimal,
    pub cgst_rate: Decimal,
    pub sgst_rate: Decimal,
    pub igst_rate: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_amount: Decimal,
    pub igst_amount: Decimal,
    pub total: Decimal,
}

impl LineAmounts {
    pub fn tax_amount(&self) -> Decimal {
        self.cgst_amount + self.sgst_amount + self.igst_amount
    }
}

/// Computes one line: subtotal, tax split and tax-inclusive total.
pub fn compute_line(
    unit_price: Decimal,
    quantity: i32,
    tax_rate: Decimal,
    inter_state: bool,
) -> Result<LineAmounts, ServiceError> {
    if unit_price < Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "unit price must not be negative".to_string(),
        ));
    }
    if quantity < 1 {
        return Err(ServiceError::ValidationError(
            "quantity must be at least 1".to_string(),
        ));
    }

    let sub_total = round_money(unit_price * Decimal::from(quantity));

    let mut line = LineAmounts {
        sub_total,
        cgst_rate: Decimal::ZERO,
        sgst_rate: Decimal::ZERO,
        igst_rate: Decimal::ZERO,
        cgst_amount: Decimal::ZERO,
        sgst_amount: Decimal::ZERO,
        igst_amount: Decimal::ZERO,
        total: sub_total,
    };

    if tax_rate <= Decimal::ZERO {
        return Ok(line);
    }

    if inter_state {
        line.igst_rate = round_rate(tax_rate);
        line.igst_amount = round_money(sub_total * line.igst_rate / dec!(100));
    } else {
        let half = round_rate(tax_rate / dec!(2));
        line.cgst_rate = half;
        line.sgst_rate = half;
        line.cgst_amount = round_money(sub_total * half / dec!(100));
        line.sgst_amount = round_money(sub_total * half / dec!(100));
    }

    line.total = sub_total + line.tax_amount();

    Ok(line)
}

/// Document-level totals. Always derived from the full line set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub subtotal: Decimal,
    pub cgst_total: Decimal,
    pub sgst_total: Decimal,
    pub igst_total: Decimal,
    pub round_off: Decimal,
    pub total_amount: Decimal,
}

/// Sums line results into document totals. Idempotent: the same line set
/// always yields identical decimals.
pub fn aggregate(lines: &[LineAmounts], round_off: Decimal) -> DocumentTotals {
    let mut totals = DocumentTotals {
        subtotal: Decimal::ZERO,
        cgst_total: Decimal::ZERO,
        sgst_total: Decimal::ZERO,
        igst_total: Decimal::ZERO,
        round_off: round_money(round_off),
        total_amount: Decimal::ZERO,
    };

    for line in lines {
        totals.subtotal += line.sub_total;
        totals.cgst_total += line.cgst_amount;
        totals.sgst_total += line.sgst_amount;
        totals.igst_total += line.igst_amount;
    }

    totals.total_amount = totals.subtotal
        + totals.cgst_total
        + totals.sgst_total
        + totals.igst_total
        + totals.round_off;

    totals
}
