//! End-to-end tests over real sockets: normalization and credential
//! injection as observed on the wire.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tokio::sync::mpsc;

use api_facade::config::FacadeConfig;
use api_facade::dispatch::error::FALLBACK_MESSAGE;
use api_facade::{
    CredentialStore, LoadingGauge, NotificationHub, NotificationKind, OutgoingCall,
    RequestDispatcher,
};

mod common;

struct Facade {
    dispatcher: RequestDispatcher,
    credentials: Arc<CredentialStore>,
    loading: Arc<LoadingGauge>,
    notifications: Arc<NotificationHub>,
}

fn facade(backend: SocketAddr) -> Facade {
    let mut config = FacadeConfig::default();
    config.api.base_url = format!("http://{backend}/");

    let credentials = Arc::new(CredentialStore::new());
    let loading = Arc::new(LoadingGauge::new());
    let notifications = Arc::new(NotificationHub::new());
    let dispatcher = RequestDispatcher::new(
        &config,
        credentials.clone(),
        loading.clone(),
        notifications.clone(),
    )
    .unwrap();

    Facade {
        dispatcher,
        credentials,
        loading,
        notifications,
    }
}

#[tokio::test]
async fn success_resolves_with_the_response_body() {
    let backend = common::start_mock_backend(200, r#"{"ok":true}"#).await;
    let f = facade(backend);

    let body = f.dispatcher.send(OutgoingCall::get("/data")).await.unwrap();

    assert_eq!(body, Some(json!({"ok": true})));
    assert!(!f.loading.is_active());
    assert!(!f.notifications.current().visible);
}

#[tokio::test]
async fn empty_body_resolves_none() {
    let backend = common::start_mock_backend(204, "").await;
    let f = facade(backend);

    let body = f.dispatcher.send(OutgoingCall::delete("/item/3")).await.unwrap();
    assert_eq!(body, None);
}

#[tokio::test]
async fn server_error_is_normalized() {
    let backend = common::start_mock_backend(404, r#"{"error":"Not found"}"#).await;
    let f = facade(backend);

    let err = f
        .dispatcher
        .send(OutgoingCall::get("/missing"))
        .await
        .unwrap_err();

    assert_eq!(err.friendly_message, "Not found");
    assert_eq!(err.http_status, 404);
    assert_eq!(err.raw_payload, Some(json!({"error": "Not found"})));
    assert!(!err.cause.is_timeout());

    let note = f.notifications.current();
    assert!(note.visible);
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.description, "Not found");
    assert!(!f.loading.is_active());
}

#[tokio::test]
async fn network_failure_is_normalized() {
    // Bind then drop so the port is (very likely) unreachable.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let dead = listener.local_addr().unwrap();
    drop(listener);

    let f = facade(dead);
    let err = f
        .dispatcher
        .send(OutgoingCall::get("/anything"))
        .await
        .unwrap_err();

    assert_eq!(err.friendly_message, FALLBACK_MESSAGE);
    assert_eq!(err.http_status, 500);
    assert_eq!(err.raw_payload, None);
    assert!(!err.cause.is_timeout());
    assert!(!f.loading.is_active());
}

#[tokio::test]
async fn slow_backend_is_hard_aborted_on_the_wire() {
    let backend = common::start_delayed_backend(Duration::from_secs(5), 200, "{}").await;
    let f = facade(backend);

    let err = f
        .dispatcher
        .send(OutgoingCall::get("/slow").timeout(Duration::from_millis(300)))
        .await
        .unwrap_err();

    assert!(err.cause.is_timeout());
    assert_eq!(err.http_status, 500);

    let note = f.notifications.current();
    assert!(note.visible);
    assert_eq!(note.kind, NotificationKind::Error);
    assert!(!f.loading.is_active());
}

#[tokio::test]
async fn credentials_are_read_fresh_per_call() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = common::start_capture_backend("authorization", tx).await;
    let f = facade(backend);

    f.credentials.store("token-one");
    f.dispatcher.send(OutgoingCall::get("/first")).await.unwrap();

    f.credentials.store("token-two");
    f.dispatcher.send(OutgoingCall::get("/second")).await.unwrap();

    assert_eq!(rx.recv().await.unwrap(), Some("Bearer token-one".into()));
    assert_eq!(rx.recv().await.unwrap(), Some("Bearer token-two".into()));
}

#[tokio::test]
async fn no_stored_credential_means_no_auth_header() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = common::start_capture_backend("authorization", tx).await;
    let f = facade(backend);

    f.dispatcher.send(OutgoingCall::get("/anon")).await.unwrap();
    assert_eq!(rx.recv().await.unwrap(), None);
}

#[tokio::test]
async fn cleared_credential_stops_being_sent() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let backend = common::start_capture_backend("authorization", tx).await;
    let f = facade(backend);

    f.credentials.store("short-lived");
    f.dispatcher.send(OutgoingCall::get("/first")).await.unwrap();

    f.credentials.clear();
    f.dispatcher.send(OutgoingCall::get("/second")).await.unwrap();

    assert_eq!(rx.recv().await.unwrap(), Some("Bearer short-lived".into()));
    assert_eq!(rx.recv().await.unwrap(), None);
}
