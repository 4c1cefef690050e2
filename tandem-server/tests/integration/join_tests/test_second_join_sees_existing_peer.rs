use tandem_core::{ConnectionId, RoomId, ServerEvent};
use tandem_server::JoinResult;

use crate::integration::{create_registry, init_tracing};

#[tokio::test]
async fn test_second_join_sees_existing_peer() {
    init_tracing();

    let (registry, gateway) = create_registry();
    let a = ConnectionId::new();
    let b = ConnectionId::new();
    let room = RoomId("duo".into());

    registry.join(a, Some(room.clone())).await;
    let result = registry.join(b, Some(room.clone())).await;

    // B learns that A was already there, in join order.
    assert_eq!(
        result,
        JoinResult::Joined {
            room_id: room.clone(),
            peers: vec![a],
        }
    );

    // A is told about B joining.
    let a_events = gateway.events_for(&a).await;
    assert!(a_events.contains(&ServerEvent::PeerJoined { socket_id: b }));

    assert_eq!(registry.members(&room), Some(vec![a, b]));
}
