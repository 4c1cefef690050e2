use serde_json::json;
use tandem_core::ConnectionId;

use crate::integration::{create_registry, init_tracing};

#[tokio::test]
async fn test_signal_without_recipient_dropped() {
    init_tracing();

    let (registry, gateway) = create_registry();
    let a = ConnectionId::new();

    registry.signal(a, None, Some(json!({ "type": "offer" }))).await;

    // No delivery to anyone, no error back to the sender.
    assert_eq!(gateway.delivery_count().await, 0);
}

#[tokio::test]
async fn test_signal_without_payload_dropped() {
    init_tracing();

    let (registry, gateway) = create_registry();
    let a = ConnectionId::new();
    let b = ConnectionId::new();

    registry.signal(a, Some(b), None).await;

    assert_eq!(gateway.delivery_count().await, 0);
}
