use tandem_core::{ConnectionId, RoomId, ServerEvent};
use tandem_server::JoinResult;

use crate::integration::{create_registry, init_tracing};

/// Two connections race to join the same empty room. Both must succeed
/// (capacity is 2), membership must end at exactly those two, and the
/// joined/peer-joined events must tell a consistent story: one joiner
/// saw an empty room, the other saw exactly one peer.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_joins_race() {
    init_tracing();

    for _ in 0..50 {
        let (registry, gateway) = create_registry();
        let a = ConnectionId::new();
        let b = ConnectionId::new();
        let room = RoomId("race".into());

        let task_a = tokio::spawn({
            let registry = registry.clone();
            let room = room.clone();
            async move { registry.join(a, Some(room)).await }
        });
        let task_b = tokio::spawn({
            let registry = registry.clone();
            let room = room.clone();
            async move { registry.join(b, Some(room)).await }
        });

        let result_a = task_a.await.unwrap();
        let result_b = task_b.await.unwrap();

        let peers_of = |result: &JoinResult| match result {
            JoinResult::Joined { peers, .. } => peers.clone(),
            JoinResult::Rejected(reject) => panic!("join rejected: {:?}", reject),
        };
        let peers_a = peers_of(&result_a);
        let peers_b = peers_of(&result_b);

        // One of them was first (empty room), the other saw the first.
        match (peers_a.as_slice(), peers_b.as_slice()) {
            ([], [peer]) => assert_eq!(*peer, a),
            ([peer], []) => assert_eq!(*peer, b),
            other => panic!("inconsistent peer lists: {:?}", other),
        }

        let members = registry.members(&room).expect("room must exist");
        assert_eq!(members.len(), 2);
        assert!(members.contains(&a));
        assert!(members.contains(&b));

        // Exactly one peer-joined notification went out, to the first
        // joiner, about the second.
        let notified: Vec<_> = gateway
            .all_deliveries()
            .await
            .into_iter()
            .filter(|(_, ev)| matches!(ev, ServerEvent::PeerJoined { .. }))
            .collect();
        assert_eq!(notified.len(), 1);
    }
}
