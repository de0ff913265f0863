mod common;

use billcraft_api::services::{
    estimates::{CreateEstimateRequest, UpdateEstimateRequest},
    invoices::CreateInvoiceRequest,
    pricing::LineInput,
};
use billcraft_api::entities::estimate::EstimateStatus;
use chrono::Utc;
use common::{seed_customer, seed_product, seed_tax, spawn_app};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn line(product_id: uuid::Uuid, quantity: i32) -> LineInput {
    LineInput {
        product_id: Some(product_id),
        tax_id: None,
        item_name: None,
        unit_price: None,
        quantity,
    }
}

#[tokio::test]
async fn estimates_compute_totals_but_never_touch_stock() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Prospect", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let created = app
        .services
        .estimates
        .create(
            app.tenant,
            CreateEstimateRequest {
                customer_id: customer.id,
                estimate_date: Utc::now().date_naive(),
                expiry_date: None,
                status: None,
                items: vec![line(widget.id, 3)],
            },
        )
        .await
        .unwrap();

    assert_eq!(created.estimate.subtotal, dec!(300.00));
    assert_eq!(created.estimate.cgst_amount, dec!(27.00));
    assert_eq!(created.estimate.sgst_amount, dec!(27.00));
    assert_eq!(created.estimate.total_amount, dec!(354.00));
    assert_eq!(created.estimate.status, EstimateStatus::Draft.to_string());

    assert_eq!(common::stock_of(&app, widget.id).await, 10);

    app.services
        .estimates
        .delete(app.tenant, created.estimate.id)
        .await
        .unwrap();
    assert_eq!(common::stock_of(&app, widget.id).await, 10);
}

#[tokio::test]
async fn estimate_update_replaces_lines_and_recomputes() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Prospect", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let created = app
        .services
        .estimates
        .create(
            app.tenant,
            CreateEstimateRequest {
                customer_id: customer.id,
                estimate_date: Utc::now().date_naive(),
                expiry_date: None,
                status: None,
                items: vec![line(widget.id, 3)],
            },
        )
        .await
        .unwrap();

    let updated = app
        .services
        .estimates
        .update(
            app.tenant,
            created.estimate.id,
            UpdateEstimateRequest {
                customer_id: None,
                estimate_date: None,
                expiry_date: None,
                status: Some(EstimateStatus::Sent),
                items: Some(vec![line(widget.id, 1)]),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.estimate.total_amount, dec!(118.00));
    assert_eq!(updated.estimate.status, EstimateStatus::Sent.to_string());
    assert_eq!(updated.items.len(), 1);
}

#[tokio::test]
async fn stock_report_values_inventory_at_purchase_price() {
    let app = spawn_app(Some("KA")).await;
    seed_product(&app, "Widget", dec!(100), dec!(60), 10, None).await;
    seed_product(&app, "Gadget", dec!(250), dec!(150.50), 4, None).await;

    let report = app.services.reports.stock_report(app.tenant).await.unwrap();

    assert_eq!(report.rows.len(), 2);
    let gadget = report.rows.iter().find(|r| r.name == "Gadget").unwrap();
    assert_eq!(gadget.stock_value, dec!(602.00));
    assert_eq!(report.total_stock_value, dec!(600.00) + dec!(602.00));
}

#[tokio::test]
async fn gst_report_aggregates_invoices_in_range() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("MH")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 50, Some(gst.id)).await;

    let today = Utc::now().date_naive();
    for quantity in [1, 2] {
        app.services
            .invoices
            .create(
                app.tenant,
                CreateInvoiceRequest {
                    customer_id: customer.id,
                    invoice_date: today,
                    due_date: None,
                    status: None,
                    round_off_amount: None,
                    items: vec![line(widget.id, quantity)],
                },
            )
            .await
            .unwrap();
    }

    let report = app
        .services
        .reports
        .gst_report(app.tenant, today, today)
        .await
        .unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.taxable_total, dec!(300.00));
    assert_eq!(report.igst_total, dec!(54.00));
    assert_eq!(report.cgst_total, Decimal::ZERO);
    assert_eq!(report.tax_total, dec!(54.00));
    assert!(report.rows.iter().all(|r| r.customer_name == "Retail"));

    // A window before the invoice date is empty.
    let empty = app
        .services
        .reports
        .gst_report(
            app.tenant,
            today - chrono::Duration::days(30),
            today - chrono::Duration::days(1),
        )
        .await
        .unwrap();
    assert!(empty.rows.is_empty());
    assert_eq!(empty.tax_total, Decimal::ZERO);
}
