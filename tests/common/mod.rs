use billcraft_api::{
    entities::{customer, organization, product, supplier, tax},
    events::{self, EventSender},
    migrator::Migrator,
    tenant::TenantContext,
    AppServices,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

pub struct TestApp {
    pub db: Arc<DatabaseConnection>,
    pub services: AppServices,
    pub tenant: TenantContext,
}

/// Fresh in-memory database with migrations applied and one organization
/// seeded. A single pooled connection keeps every query on the same
/// in-memory SQLite instance.
pub async fn spawn_app(org_state: Option<&str>) -> TestApp {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.max_connections(1);

    let db = Arc::new(Database::connect(options).await.unwrap());
    Migrator::up(&*db, None).await.unwrap();

    let (tx, rx) = mpsc::channel(64);
    tokio::spawn(events::process_events(rx));
    let services = AppServices::new(db.clone(), EventSender::new(tx));

    let org_id = Uuid::new_v4();
    let now = Utc::now();
    organization::ActiveModel {
        id: Set(org_id),
        name: Set("Acme Traders".to_string()),
        state: Set(org_state.map(str::to_string)),
        gst_number: Set(Some("29ABCDE1234F1Z5".to_string())),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&*db)
    .await
    .unwrap();

    TestApp {
        db,
        services,
        tenant: TenantContext::new(org_id),
    }
}

pub async fn seed_customer(
    app: &TestApp,
    name: &str,
    state: Option<&str>,
) -> customer::Model {
    let now = Utc::now();
    customer::ActiveModel {
        id: Set(Uuid::new_v4()),
        organization_id: Set(app.tenant.organization_id),
        name: Set(name.to_string()),
        email: Set(None),
        phone: Set(None),
        address: Set(None),
        state: Set(state.map(str::to_string)),
        gst_number: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&*app.db)
    .await
    .unwrap()
}

pub async fn seed_supplier(
    app: &TestApp,
    name: &str,
    state: Option<&str>,
) -> supplier::Model {
    let now = Utc::now();
    supplier::ActiveModel {
        id: Set(Uuid::new_v4()),
        organization_id: Set(app.tenant.organization_id),
        name: Set(name.to_string()),
        email: Set(None),
        phone: Set(None),
        address: Set(None),
        state: Set(state.map(str::to_string)),
        gst_number: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&*app.db)
    .await
    .unwrap()
}

pub async fn seed_tax(app: &TestApp, name: &str, rate: Decimal) -> tax::Model {
    let now = Utc::now();
    tax::ActiveModel {
        id: Set(Uuid::new_v4()),
        organization_id: Set(app.tenant.organization_id),
        name: Set(name.to_string()),
        rate: Set(rate),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&*app.db)
    .await
    .unwrap()
}

pub async fn seed_product(
    app: &TestApp,
    name: &str,
    selling_price: Decimal,
    purchase_price: Decimal,
    stock_quantity: i32,
    tax_id: Option<Uuid>,
) -> product::Model {
    let now = Utc::now();
    product::ActiveModel {
        id: Set(Uuid::new_v4()),
        organization_id: Set(app.tenant.organization_id),
        name: Set(name.to_string()),
        description: Set(None),
        sku: Set(None),
        selling_price: Set(selling_price),
        purchase_price: Set(purchase_price),
        stock_quantity: Set(stock_quantity),
        tax_id: Set(tax_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(&*app.db)
    .await
    .unwrap()
}

pub async fn stock_of(app: &TestApp, product_id: Uuid) -> i32 {
    use sea_orm::EntityTrait;
    product::Entity::find_by_id(product_id)
        .one(&*app.db)
        .await
        .unwrap()
        .unwrap()
        .stock_quantity
}
