mod common;

use billcraft_api::{
    entities::{invoice, invoice_item},
    errors::ServiceError,
    services::{
        invoices::{CreateInvoiceRequest, UpdateInvoiceRequest},
        pricing::LineInput,
    },
};
use chrono::Utc;
use common::{seed_customer, seed_product, seed_tax, spawn_app};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::EntityTrait;

fn line(product_id: uuid::Uuid, quantity: i32) -> LineInput {
    LineInput {
        product_id: Some(product_id),
        tax_id: None,
        item_name: None,
        unit_price: None,
        quantity,
    }
}

fn create_request(customer_id: uuid::Uuid, items: Vec<LineInput>) -> CreateInvoiceRequest {
    CreateInvoiceRequest {
        customer_id,
        invoice_date: Utc::now().date_naive(),
        due_date: None,
        status: None,
        round_off_amount: None,
        items,
    }
}

#[tokio::test]
async fn intra_state_invoice_splits_gst_and_decrements_stock() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Bangalore Retail", Some("KA")).await;
    let gst18 = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst18.id)).await;

    let created = app
        .services
        .invoices
        .create(app.tenant, create_request(customer.id, vec![line(widget.id, 2)]))
        .await
        .unwrap();

    assert_eq!(created.invoice.subtotal, dec!(200.00));
    assert_eq!(created.invoice.cgst_amount, dec!(18.00));
    assert_eq!(created.invoice.sgst_amount, dec!(18.00));
    assert_eq!(created.invoice.igst_amount, Decimal::ZERO);
    assert_eq!(created.invoice.total_amount, dec!(236.00));
    assert_eq!(created.items.len(), 1);
    assert_eq!(created.items[0].cgst_rate, dec!(9.0000));
    assert_eq!(created.items[0].item_name, "Widget");

    assert_eq!(common::stock_of(&app, widget.id).await, 8);
}

#[tokio::test]
async fn inter_state_invoice_carries_igst_only() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Mumbai Wholesale", Some("MH")).await;
    let gst18 = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst18.id)).await;

    let created = app
        .services
        .invoices
        .create(app.tenant, create_request(customer.id, vec![line(widget.id, 2)]))
        .await
        .unwrap();

    assert_eq!(created.invoice.igst_amount, dec!(36.00));
    assert_eq!(created.invoice.cgst_amount, Decimal::ZERO);
    assert_eq!(created.invoice.sgst_amount, Decimal::ZERO);
    assert_eq!(created.invoice.total_amount, dec!(236.00));
}

#[tokio::test]
async fn insufficient_stock_rejects_and_rolls_back() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("KA")).await;
    let gst = seed_tax(&app, "GST 5%", dec!(5)).await;
    let scarce = seed_product(&app, "Scarce Part", dec!(50), dec!(30), 3, Some(gst.id)).await;
    let plenty = seed_product(&app, "Common Part", dec!(20), dec!(10), 100, Some(gst.id)).await;

    // The first line would succeed on its own; the second must roll it back.
    let err = app
        .services
        .invoices
        .create(
            app.tenant,
            create_request(customer.id, vec![line(plenty.id, 5), line(scarce.id, 4)]),
        )
        .await
        .unwrap_err();

    match err {
        ServiceError::InsufficientStock(name) => assert_eq!(name, "Scarce Part"),
        other => panic!("expected InsufficientStock, got {:?}", other),
    }

    assert_eq!(common::stock_of(&app, plenty.id).await, 100);
    assert_eq!(common::stock_of(&app, scarce.id).await, 3);

    let invoices = invoice::Entity::find().all(&*app.db).await.unwrap();
    assert!(invoices.is_empty());
}

#[tokio::test]
async fn update_with_items_restores_then_reserves_stock() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let created = app
        .services
        .invoices
        .create(app.tenant, create_request(customer.id, vec![line(widget.id, 2)]))
        .await
        .unwrap();
    assert_eq!(common::stock_of(&app, widget.id).await, 8);

    let updated = app
        .services
        .invoices
        .update(
            app.tenant,
            created.invoice.id,
            UpdateInvoiceRequest {
                customer_id: None,
                invoice_date: None,
                due_date: None,
                status: None,
                round_off_amount: None,
                items: Some(vec![line(widget.id, 5)]),
            },
        )
        .await
        .unwrap();

    // 10 on hand, old 2 restored, new 5 reserved.
    assert_eq!(common::stock_of(&app, widget.id).await, 5);
    assert_eq!(updated.invoice.subtotal, dec!(500.00));
    assert_eq!(updated.invoice.total_amount, dec!(590.00));
    assert_eq!(updated.items.len(), 1);

    let stored_items = invoice_item::Entity::find().all(&*app.db).await.unwrap();
    assert_eq!(stored_items.len(), 1);
    assert_eq!(stored_items[0].quantity, 5);
}

#[tokio::test]
async fn update_rejecting_new_lines_keeps_old_state() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let created = app
        .services
        .invoices
        .create(app.tenant, create_request(customer.id, vec![line(widget.id, 4)]))
        .await
        .unwrap();
    assert_eq!(common::stock_of(&app, widget.id).await, 6);

    // 6 left + 4 restored = 10 available; asking for 11 must fail and the
    // restore must roll back with everything else.
    let err = app
        .services
        .invoices
        .update(
            app.tenant,
            created.invoice.id,
            UpdateInvoiceRequest {
                customer_id: None,
                invoice_date: None,
                due_date: None,
                status: None,
                round_off_amount: None,
                items: Some(vec![line(widget.id, 11)]),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InsufficientStock(_)));

    assert_eq!(common::stock_of(&app, widget.id).await, 6);
    let fetched = app
        .services
        .invoices
        .get(app.tenant, created.invoice.id)
        .await
        .unwrap();
    assert_eq!(fetched.items[0].quantity, 4);
    assert_eq!(fetched.invoice.total_amount, dec!(472.00));
}

#[tokio::test]
async fn delete_restores_stock() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let created = app
        .services
        .invoices
        .create(app.tenant, create_request(customer.id, vec![line(widget.id, 7)]))
        .await
        .unwrap();
    assert_eq!(common::stock_of(&app, widget.id).await, 3);

    app.services
        .invoices
        .delete(app.tenant, created.invoice.id)
        .await
        .unwrap();

    assert_eq!(common::stock_of(&app, widget.id).await, 10);
    let items = invoice_item::Entity::find().all(&*app.db).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn custom_lines_need_name_and_price_but_never_touch_stock() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;

    let nameless = LineInput {
        product_id: None,
        tax_id: Some(gst.id),
        item_name: None,
        unit_price: Some(dec!(500)),
        quantity: 1,
    };
    let err = app
        .services
        .invoices
        .create(app.tenant, create_request(customer.id, vec![nameless]))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::ValidationError(_)));

    let service_fee = LineInput {
        product_id: None,
        tax_id: Some(gst.id),
        item_name: Some("Installation service".to_string()),
        unit_price: Some(dec!(500)),
        quantity: 1,
    };
    let created = app
        .services
        .invoices
        .create(app.tenant, create_request(customer.id, vec![service_fee]))
        .await
        .unwrap();

    assert_eq!(created.invoice.subtotal, dec!(500.00));
    assert_eq!(created.invoice.cgst_amount, dec!(45.00));
    assert_eq!(created.invoice.total_amount, dec!(590.00));
    assert_eq!(created.items[0].product_id, None);
}

#[tokio::test]
async fn round_off_moves_the_total() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(33.33), dec!(20), 50, Some(gst.id)).await;

    let mut request = create_request(customer.id, vec![line(widget.id, 1)]);
    request.round_off_amount = Some(dec!(-0.33));

    let created = app
        .services
        .invoices
        .create(app.tenant, request)
        .await
        .unwrap();

    // 33.33 + 3.00 + 3.00 - 0.33
    assert_eq!(created.invoice.round_off_amount, dec!(-0.33));
    assert_eq!(created.invoice.total_amount, dec!(39.00));
}

#[tokio::test]
async fn explicit_tax_override_wins_over_product_default() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("KA")).await;
    let gst18 = seed_tax(&app, "GST 18%", dec!(18)).await;
    let gst5 = seed_tax(&app, "GST 5%", dec!(5)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst18.id)).await;

    let override_line = LineInput {
        product_id: Some(widget.id),
        tax_id: Some(gst5.id),
        item_name: None,
        unit_price: None,
        quantity: 1,
    };
    let created = app
        .services
        .invoices
        .create(app.tenant, create_request(customer.id, vec![override_line]))
        .await
        .unwrap();

    assert_eq!(created.items[0].tax_id, Some(gst5.id));
    assert_eq!(created.items[0].cgst_rate, dec!(2.5000));
    assert_eq!(created.invoice.total_amount, dec!(105.00));
}

#[tokio::test]
async fn foreign_tenant_cannot_see_the_invoice() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let created = app
        .services
        .invoices
        .create(app.tenant, create_request(customer.id, vec![line(widget.id, 1)]))
        .await
        .unwrap();

    let stranger = billcraft_api::tenant::TenantContext::new(uuid::Uuid::new_v4());
    let err = app
        .services
        .invoices
        .get(stranger, created.invoice.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
