use tandem_core::{ConnectionId, RoomId};

use crate::integration::{create_registry, init_tracing};

#[tokio::test]
async fn test_leave_unknown_connection_noop() {
    init_tracing();

    let (registry, gateway) = create_registry();
    let a = ConnectionId::new();
    let room = RoomId("stable".into());

    registry.join(a, Some(room.clone())).await;
    let deliveries_before = gateway.delivery_count().await;

    // A connection that never joined anything disconnects.
    registry.disconnect(ConnectionId::new()).await;

    // No notifications, no membership change.
    assert_eq!(gateway.delivery_count().await, deliveries_before);
    assert_eq!(registry.members(&room), Some(vec![a]));
    assert_eq!(registry.room_count(), 1);

    // Disconnecting twice is just as harmless.
    registry.disconnect(a).await;
    registry.disconnect(a).await;
    assert_eq!(registry.room_count(), 0);
}
