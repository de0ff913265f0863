mod common;

use billcraft_api::{
    entities::reminder::ReminderTarget,
    errors::ServiceError,
    services::reminders::{CreateReminderRequest, UpdateReminderRequest},
};
use chrono::{Duration, Utc};
use common::{seed_customer, spawn_app};
use uuid::Uuid;

fn request(target: Option<ReminderTarget>, id: Option<Uuid>) -> CreateReminderRequest {
    CreateReminderRequest {
        title: "Follow up".to_string(),
        description: None,
        remind_at: Utc::now() + Duration::days(3),
        related_to_type: target,
        related_to_id: id,
    }
}

#[tokio::test]
async fn untargeted_reminders_are_fine() {
    let app = spawn_app(Some("KA")).await;

    let reminder = app
        .services
        .reminders
        .create(app.tenant, request(None, None))
        .await
        .unwrap();
    assert_eq!(reminder.related_to_type, None);
    assert_eq!(reminder.related_to_id, None);
}

#[tokio::test]
async fn target_halves_must_come_together() {
    let app = spawn_app(Some("KA")).await;

    let err = app
        .services
        .reminders
        .create(app.tenant, request(Some(ReminderTarget::Customer), None))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::ValidationError(_)));

    let err = app
        .services
        .reminders
        .create(app.tenant, request(None, Some(Uuid::new_v4())))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::ValidationError(_)));
}

#[tokio::test]
async fn target_must_exist_within_the_tenant() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("KA")).await;

    let reminder = app
        .services
        .reminders
        .create(
            app.tenant,
            request(Some(ReminderTarget::Customer), Some(customer.id)),
        )
        .await
        .unwrap();
    assert_eq!(
        reminder.related_to_type.as_deref(),
        Some("customer")
    );

    let err = app
        .services
        .reminders
        .create(
            app.tenant,
            request(Some(ReminderTarget::Invoice), Some(Uuid::new_v4())),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn retargeting_revalidates() {
    let app = spawn_app(Some("KA")).await;
    let customer = seed_customer(&app, "Retail", Some("KA")).await;

    let reminder = app
        .services
        .reminders
        .create(
            app.tenant,
            request(Some(ReminderTarget::Customer), Some(customer.id)),
        )
        .await
        .unwrap();

    let err = app
        .services
        .reminders
        .update(
            app.tenant,
            reminder.id,
            UpdateReminderRequest {
                title: None,
                description: None,
                remind_at: None,
                related_to_type: Some(ReminderTarget::Estimate),
                related_to_id: Some(Uuid::new_v4()),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}
