mod common;

use billcraft_api::{
    entities::purchase_order::PurchaseOrderStatus,
    errors::ServiceError,
    services::{
        pricing::LineInput,
        purchase_orders::{CreatePurchaseOrderRequest, UpdatePurchaseOrderRequest},
    },
};
use chrono::Utc;
use common::{seed_product, seed_supplier, seed_tax, spawn_app};
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

fn create_request(
    supplier_id: uuid::Uuid,
    items: Vec<LineInput>,
) -> CreatePurchaseOrderRequest {
    CreatePurchaseOrderRequest {
        supplier_id,
        order_date: Utc::now().date_naive(),
        expected_delivery_date: None,
        status: None,
        items,
    }
}

#[tokio::test]
async fn create_prices_at_purchase_cost_without_touching_stock() {
    let app = spawn_app(Some("KA")).await;
    let supplier = seed_supplier(&app, "Chennai Components", Some("TN")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let created = app
        .services
        .purchase_orders
        .create(app.tenant, create_request(supplier.id, vec![line(widget.id, 5)]))
        .await
        .unwrap();

    // Inter-state supplier: IGST, priced at purchase cost.
    assert_eq!(created.purchase_order.subtotal, dec!(300.00));
    assert_eq!(created.purchase_order.igst_amount, dec!(54.00));
    assert_eq!(created.purchase_order.total_amount, dec!(354.00));
    assert_eq!(created.items[0].purchase_price, dec!(60.00));

    assert_eq!(common::stock_of(&app, widget.id).await, 10);
}

#[tokio::test]
async fn receive_increments_stock_exactly_once() {
    let app = spawn_app(Some("KA")).await;
    let supplier = seed_supplier(&app, "Local Supplies", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let created = app
        .services
        .purchase_orders
        .create(app.tenant, create_request(supplier.id, vec![line(widget.id, 5)]))
        .await
        .unwrap();

    let received = app
        .services
        .purchase_orders
        .receive(app.tenant, created.purchase_order.id)
        .await
        .unwrap();
    assert_eq!(
        received.purchase_order.status,
        PurchaseOrderStatus::Received.to_string()
    );
    assert_eq!(common::stock_of(&app, widget.id).await, 15);

    let err = app
        .services
        .purchase_orders
        .receive(app.tenant, created.purchase_order.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidState(_)));
    assert_eq!(common::stock_of(&app, widget.id).await, 15);
}

#[tokio::test]
async fn cancelled_orders_cannot_be_received() {
    let app = spawn_app(Some("KA")).await;
    let supplier = seed_supplier(&app, "Local Supplies", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let created = app
        .services
        .purchase_orders
        .create(app.tenant, create_request(supplier.id, vec![line(widget.id, 5)]))
        .await
        .unwrap();

    app.services
        .purchase_orders
        .update(
            app.tenant,
            created.purchase_order.id,
            UpdatePurchaseOrderRequest {
                supplier_id: None,
                order_date: None,
                expected_delivery_date: None,
                status: Some(PurchaseOrderStatus::Cancelled),
                items: None,
            },
        )
        .await
        .unwrap();

    let err = app
        .services
        .purchase_orders
        .receive(app.tenant, created.purchase_order.id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidState(_)));
    assert_eq!(common::stock_of(&app, widget.id).await, 10);
}

#[tokio::test]
async fn received_status_is_reserved_for_the_receive_action() {
    let app = spawn_app(Some("KA")).await;
    let supplier = seed_supplier(&app, "Local Supplies", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let mut request = create_request(supplier.id, vec![line(widget.id, 5)]);
    request.status = Some(PurchaseOrderStatus::Received);

    let err = app
        .services
        .purchase_orders
        .create(app.tenant, request)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::ValidationError(_)));
}

#[tokio::test]
async fn received_orders_refuse_line_replacement() {
    let app = spawn_app(Some("KA")).await;
    let supplier = seed_supplier(&app, "Local Supplies", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;

    let created = app
        .services
        .purchase_orders
        .create(app.tenant, create_request(supplier.id, vec![line(widget.id, 5)]))
        .await
        .unwrap();
    app.services
        .purchase_orders
        .receive(app.tenant, created.purchase_order.id)
        .await
        .unwrap();

    let err = app
        .services
        .purchase_orders
        .update(
            app.tenant,
            created.purchase_order.id,
            UpdatePurchaseOrderRequest {
                supplier_id: None,
                order_date: None,
                expected_delivery_date: None,
                status: None,
                items: Some(vec![line(widget.id, 2)]),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidState(_)));
}

#[tokio::test]
async fn update_replaces_lines_and_recomputes_totals() {
    let app = spawn_app(Some("KA")).await;
    let supplier = seed_supplier(&app, "Local Supplies", Some("KA")).await;
    let gst = seed_tax(&app, "GST 18%", dec!(18)).await;
    let widget = seed_product(&app, "Widget", dec!(100), dec!(60), 10, Some(gst.id)).await;
    let gadget = seed_product(&app, "Gadget", dec!(250), dec!(150), 4, Some(gst.id)).await;

    let created = app
        .services
        .purchase_orders
        .create(app.tenant, create_request(supplier.id, vec![line(widget.id, 5)]))
        .await
        .unwrap();

    let updated = app
        .services
        .purchase_orders
        .update(
            app.tenant,
            created.purchase_order.id,
            UpdatePurchaseOrderRequest {
                supplier_id: None,
                order_date: None,
                expected_delivery_date: None,
                status: Some(PurchaseOrderStatus::Ordered),
                items: Some(vec![line(gadget.id, 2)]),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.purchase_order.subtotal, dec!(300.00));
    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].item_name, "Gadget");
    assert_eq!(
        updated.purchase_order.status,
        PurchaseOrderStatus::Ordered.to_string()
    );
}
