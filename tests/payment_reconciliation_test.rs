mod common;

use billcraft_api::{
    entities::{invoice::InvoiceStatus, payment},
    errors::ServiceError,
    services::{
        invoices::CreateInvoiceRequest,
        payments::{CreatePaymentRequest, UpdatePaymentRequest},
        pricing::LineInput,
    },
};
use chrono::{Duration, Utc};
use common::{seed_customer, seed_product, seed_tax, spawn_app, TestApp};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;
use uuid::Uuid;

/// Seeds one intra-state invoice worth 236.00 (200 + 18 + 18).
async fn seed_invoice(app: &TestApp, due_in_days: i64) -> Uuid {
    let customer = seed_customer(app, "Retail", Some("KA")).await;
    let gst = seed_tax(app, "GST 18%", dec!(18)).await;
    let widget = seed_product(app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let today = Utc::now().date_naive();
    let created = app
        .services
        .invoices
        .create(
            app.tenant,
            CreateInvoiceRequest {
                customer_id: customer.id,
                invoice_date: today,
                due_date: Some(today + Duration::days(due_in_days)),
                status: Some(InvoiceStatus::Sent),
                round_off_amount: None,
                items: vec![LineInput {
                    product_id: Some(widget.id),
                    tax_id: None,
                    item_name: None,
                    unit_price: None,
                    quantity: 2,
                }],
            },
        )
        .await
        .unwrap();

    created.invoice.id
}

fn pay(invoice_id: Uuid, amount: Decimal) -> CreatePaymentRequest {
    CreatePaymentRequest {
        invoice_id,
        amount,
        payment_date: Utc::now().date_naive(),
        payment_method: Some("bank_transfer".to_string()),
        notes: None,
    }
}

#[tokio::test]
async fn partial_then_full_payment_settles_the_invoice() {
    let app = spawn_app(Some("KA")).await;
    let invoice_id = seed_invoice(&app, 30).await;

    app.services
        .payments
        .create(app.tenant, pay(invoice_id, dec!(100)))
        .await
        .unwrap();

    let after_partial = app.services.invoices.get(app.tenant, invoice_id).await.unwrap();
    assert_eq!(after_partial.invoice.paid_amount, dec!(100.00));
    assert_eq!(after_partial.display_status, InvoiceStatus::Sent);

    app.services
        .payments
        .create(app.tenant, pay(invoice_id, dec!(136)))
        .await
        .unwrap();

    let settled = app.services.invoices.get(app.tenant, invoice_id).await.unwrap();
    assert_eq!(settled.invoice.paid_amount, dec!(236.00));
    assert_eq!(settled.display_status, InvoiceStatus::Paid);
}

#[tokio::test]
async fn overpayment_is_rejected_and_nothing_is_recorded() {
    let app = spawn_app(Some("KA")).await;
    let invoice_id = seed_invoice(&app, 30).await;

    app.services
        .payments
        .create(app.tenant, pay(invoice_id, dec!(200)))
        .await
        .unwrap();

    let err = app
        .services
        .payments
        .create(app.tenant, pay(invoice_id, dec!(36.01)))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::PaymentExceedsBalance));

    let inv = app.services.invoices.get(app.tenant, invoice_id).await.unwrap();
    assert_eq!(inv.invoice.paid_amount, dec!(200.00));

    let payments = payment::Entity::find().all(&*app.db).await.unwrap();
    assert_eq!(payments.len(), 1);
}

#[tokio::test]
async fn past_due_open_balance_shows_overdue() {
    let app = spawn_app(Some("KA")).await;
    let invoice_id = seed_invoice(&app, -5).await;

    app.services
        .payments
        .create(app.tenant, pay(invoice_id, dec!(50)))
        .await
        .unwrap();

    let inv = app.services.invoices.get(app.tenant, invoice_id).await.unwrap();
    assert_eq!(inv.display_status, InvoiceStatus::Overdue);
    // The stored status stays what the client set.
    assert_eq!(inv.invoice.status, InvoiceStatus::Sent.to_string());
}

#[tokio::test]
async fn settling_a_past_due_invoice_shows_paid() {
    let app = spawn_app(Some("KA")).await;
    let invoice_id = seed_invoice(&app, -5).await;

    app.services
        .payments
        .create(app.tenant, pay(invoice_id, dec!(236)))
        .await
        .unwrap();

    let inv = app.services.invoices.get(app.tenant, invoice_id).await.unwrap();
    assert_eq!(inv.display_status, InvoiceStatus::Paid);
}

#[tokio::test]
async fn payment_update_applies_the_delta_and_revalidates() {
    let app = spawn_app(Some("KA")).await;
    let invoice_id = seed_invoice(&app, 30).await;

    let first = app
        .services
        .payments
        .create(app.tenant, pay(invoice_id, dec!(100)))
        .await
        .unwrap();
    app.services
        .payments
        .create(app.tenant, pay(invoice_id, dec!(100)))
        .await
        .unwrap();

    // 100 -> 136 brings the net to exactly the invoice total.
    app.services
        .payments
        .update(
            app.tenant,
            first.id,
            UpdatePaymentRequest {
                amount: Some(dec!(136)),
                payment_date: None,
                payment_method: None,
                notes: None,
            },
        )
        .await
        .unwrap();

    let inv = app.services.invoices.get(app.tenant, invoice_id).await.unwrap();
    assert_eq!(inv.invoice.paid_amount, dec!(236.00));
    assert_eq!(inv.display_status, InvoiceStatus::Paid);

    // A further raise must now fail the ceiling check.
    let err = app
        .services
        .payments
        .update(
            app.tenant,
            first.id,
            UpdatePaymentRequest {
                amount: Some(dec!(150)),
                payment_date: None,
                payment_method: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::PaymentExceedsBalance));
}

#[tokio::test]
async fn deleting_a_payment_reopens_the_balance() {
    let app = spawn_app(Some("KA")).await;
    let invoice_id = seed_invoice(&app, 30).await;

    let p1 = app
        .services
        .payments
        .create(app.tenant, pay(invoice_id, dec!(236)))
        .await
        .unwrap();

    let settled = app.services.invoices.get(app.tenant, invoice_id).await.unwrap();
    assert_eq!(settled.display_status, InvoiceStatus::Paid);

    app.services.payments.delete(app.tenant, p1.id).await.unwrap();

    let reopened = app.services.invoices.get(app.tenant, invoice_id).await.unwrap();
    assert_eq!(reopened.invoice.paid_amount, Decimal::ZERO);
    assert_eq!(reopened.display_status, InvoiceStatus::Sent);
}

#[tokio::test]
async fn paid_amount_always_equals_the_sum_of_payments() {
    let app = spawn_app(Some("KA")).await;
    let invoice_id = seed_invoice(&app, 30).await;

    for amount in [dec!(36), dec!(50), dec!(150)] {
        app.services
            .payments
            .create(app.tenant, pay(invoice_id, amount))
            .await
            .unwrap();
    }

    let payments = payment::Entity::find().all(&*app.db).await.unwrap();
    let total: Decimal = payments.iter().map(|p| p.amount).sum();

    let inv = app.services.invoices.get(app.tenant, invoice_id).await.unwrap();
    assert_eq!(inv.invoice.paid_amount, total);
    assert_eq!(total, dec!(236));
}

#[tokio::test]
async fn non_positive_amounts_are_rejected() {
    let app = spawn_app(Some("KA")).await;
    let invoice_id = seed_invoice(&app, 30).await;

    let err = app
        .services
        .payments
        .create(app.tenant, pay(invoice_id, Decimal::ZERO))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::ValidationError(_)));
}

#[tokio::test]
async fn receipt_bundles_invoice_items_and_payments() {
    let app = spawn_app(Some("KA")).await;
    let invoice_id = seed_invoice(&app, 30).await;

    app.services
        .payments
        .create(app.tenant, pay(invoice_id, dec!(100)))
        .await
        .unwrap();

    let receipt = app
        .services
        .invoices
        .receipt(app.tenant, invoice_id)
        .await
        .unwrap();

    assert_eq!(receipt.organization.id, app.tenant.organization_id);
    assert_eq!(receipt.items.len(), 1);
    assert_eq!(receipt.payments.len(), 1);
    assert_eq!(receipt.payments[0].amount, dec!(100.00));
    assert_eq!(receipt.invoice.total_amount, dec!(236.00));
}
