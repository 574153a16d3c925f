//! Facade-level integration tests against the mock provider.

use std::sync::Arc;

use checkout_facade::adapters::stripe::MockPaymentProvider;
use checkout_facade::application::{Checkout, CheckoutError, CustomerDirectory};
use checkout_facade::config::{DuplicateCustomerPolicy, StripeConfig};
use checkout_facade::domain::checkout::{
    CheckoutFlags, CheckoutLocale, CheckoutMode, CheckoutSessionObject, CheckoutSessionRequest,
    LineItem,
};
use checkout_facade::domain::customer::{CustomerIdentity, CustomerObject};
use checkout_facade::ports::{CreatedSession, PaymentProvider};

fn config() -> StripeConfig {
    StripeConfig::new("sk_test_abc", "whsec_session", "whsec_subscription")
}

fn flags_off() -> CheckoutFlags {
    CheckoutFlags {
        automatic_tax: false,
        allow_promotion_codes: false,
        billing_address_required: false,
    }
}

fn session_object(json: serde_json::Value) -> CheckoutSessionObject {
    serde_json::from_value(json).unwrap()
}

fn customer(id: &str, email: &str) -> CustomerObject {
    CustomerObject {
        id: id.to_string(),
        email: Some(email.to_string()),
        name: None,
        metadata: Default::default(),
    }
}

#[tokio::test]
async fn returning_customer_checks_out_under_their_existing_customer_id() {
    let mock = Arc::new(MockPaymentProvider::new());
    mock.add_customer(customer("cus_7", "returning@example.com"));
    mock.set_created_session(CreatedSession {
        client_secret: "secret_1".to_string(),
        session: session_object(serde_json::json!({
            "id": "cs_1",
            "status": "open",
            "payment_status": "unpaid",
            "mode": "subscription",
            "client_secret": "secret_1"
        })),
    });

    let directory = CustomerDirectory::new(
        Arc::clone(&mock) as Arc<dyn PaymentProvider>,
        DuplicateCustomerPolicy::WarnAndUseFirst,
    );
    let checkout = Checkout::new(&config(), Arc::clone(&mock) as Arc<dyn PaymentProvider>);

    let identity = directory.identify("returning@example.com").await.unwrap();
    assert_eq!(identity, CustomerIdentity::customer_id("cus_7").unwrap());

    let mut request = CheckoutSessionRequest::new(
        identity,
        CheckoutMode::SubscriptionOrMixed,
        "https://shop.example.com/r?s={CHECKOUT_SESSION_ID}",
        CheckoutLocale::EnGb,
        flags_off(),
    )
    .unwrap();
    request.add_line_item(LineItem::new("price_monthly", 1).unwrap());

    let created = checkout.create_session(&request).await.unwrap();
    assert_eq!(created.client_secret, "secret_1");
    assert!(mock.was_called("search_customers"));
    assert!(mock.was_called("create_checkout_session"));
}

#[tokio::test]
async fn return_page_flow_resolves_fulfilment_readiness() {
    let mock = Arc::new(MockPaymentProvider::new());
    mock.seed_session(session_object(serde_json::json!({
        "id": "cs_done",
        "status": "complete",
        "payment_status": "no_payment_required",
        "mode": "subscription",
        "customer": "cus_7",
        "subscription": "sub_9"
    })));
    let checkout = Checkout::new(&config(), Arc::clone(&mock) as Arc<dyn PaymentProvider>);

    let snapshot = checkout.session_snapshot("cs_done").await.unwrap();

    assert!(snapshot.ready_for_fulfilment());
    assert_eq!(snapshot.subscription_id.as_deref(), Some("sub_9"));
}

#[tokio::test]
async fn setup_mode_session_fails_resolution_with_typed_error() {
    let mock = Arc::new(MockPaymentProvider::new());
    mock.seed_session(session_object(serde_json::json!({
        "id": "cs_setup",
        "status": "complete",
        "payment_status": "no_payment_required",
        "mode": "setup"
    })));
    let checkout = Checkout::new(&config(), Arc::clone(&mock) as Arc<dyn PaymentProvider>);

    let result = checkout.session_snapshot("cs_setup").await;

    assert!(matches!(result, Err(CheckoutError::Snapshot(_))));
}

#[tokio::test]
async fn subscription_snapshot_reports_good_standing() {
    let mock = Arc::new(MockPaymentProvider::new());
    mock.seed_subscription(
        serde_json::from_value(serde_json::json!({
            "id": "sub_9",
            "status": "trialing",
            "customer": {"id": "cus_7", "email": "returning@example.com", "name": null},
            "cancel_at_period_end": true,
            "currency": "eur",
            "current_period_start": 1704067200,
            "current_period_end": 1706745600,
            "default_payment_method": null
        }))
        .unwrap(),
    );
    let checkout = Checkout::new(&config(), Arc::clone(&mock) as Arc<dyn PaymentProvider>);

    let snapshot = checkout.subscription_snapshot("sub_9").await.unwrap().unwrap();

    assert!(snapshot.is_in_good_standing());
    assert!(snapshot.cancel_at_period_end);
    assert_eq!(snapshot.customer_id, "cus_7");
    assert!(snapshot.default_payment_method_id.is_none());
}
