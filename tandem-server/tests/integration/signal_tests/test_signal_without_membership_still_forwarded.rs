use serde_json::json;
use tandem_core::{ConnectionId, ServerEvent};

use crate::integration::{create_registry, init_tracing};

/// The relay performs no membership check on signal forwarding: any
/// live connection may signal any other known connection id. The trust
/// boundary is the application layer pairing connections correctly.
#[tokio::test]
async fn test_signal_without_membership_still_forwarded() {
    init_tracing();

    let (registry, gateway) = create_registry();
    let a = ConnectionId::new();
    let b = ConnectionId::new();

    // Neither connection ever joined a room.
    let payload = json!({ "type": "ice", "candidate": "host 10.0.0.1" });
    registry.signal(a, Some(b), Some(payload.clone())).await;

    assert_eq!(
        gateway.events_for(&b).await,
        vec![ServerEvent::Signal {
            from: a,
            data: payload,
        }]
    );
}
