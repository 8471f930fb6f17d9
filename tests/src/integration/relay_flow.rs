//! # Integration Test Flows
//!
//! Tests that relay-listener, relay-bus, and relay-bridge work together
//! correctly: a platform notification signal entering the listener comes
//! out of the bridge's stream as a transaction record.
//!
//! ## Flow Tested
//!
//! 1. **Listener → Bus**: allow-list filtering and event extraction
//! 2. **Bus → Bridge**: action-matched, origin-gated delivery
//! 3. **Bridge → Consumer**: single-subscriber stream lifecycle

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::timeout;

    use relay_bridge::{BridgeError, PlatformCaps, SubscriptionBridge, TransactionStream};
    use relay_bus::{Broadcast, BroadcastBus, BroadcastOrigin, RELAY_ACTION};
    use relay_listener::{ListenerService, NotificationObserver};
    use relay_types::{NotificationEvent, NotificationPosted, SourceApp};

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    /// Wire the full pipeline over one bus.
    fn pipeline(caps: PlatformCaps) -> (Arc<BroadcastBus>, ListenerService<BroadcastBus>, SubscriptionBridge) {
        crate::init_test_logging();
        let bus = Arc::new(BroadcastBus::new());
        let listener = ListenerService::new(Arc::clone(&bus));
        let bridge = SubscriptionBridge::new(Arc::clone(&bus), caps);
        (bus, listener, bridge)
    }

    fn posted(package: &str, title: &str, text: Option<&str>, big_text: Option<&str>, post_time_ms: i64) -> NotificationPosted {
        NotificationPosted {
            package: package.to_string(),
            title: Some(title.to_string()),
            text: text.map(str::to_string),
            big_text: big_text.map(str::to_string),
            post_time_ms,
        }
    }

    async fn next_record(stream: &mut TransactionStream) -> relay_types::TransactionRecord {
        timeout(Duration::from_millis(100), stream.recv())
            .await
            .expect("timeout waiting for record")
            .expect("stream ended unexpectedly")
    }

    // =========================================================================
    // END-TO-END SCENARIOS
    // =========================================================================

    /// PhonePe notification with expanded text flows through as-is.
    #[tokio::test]
    async fn test_phonepe_expanded_text_relayed() {
        let (_bus, listener, bridge) = pipeline(PlatformCaps::default());
        let mut stream = bridge.attach().expect("attach");

        listener.handle_posted(posted(
            "com.phonepe.app",
            "Payment Sent",
            Some("short form"),
            Some("You paid \u{20b9}500 to Merchant X"),
            1_700_000_000_000,
        ));

        let record = next_record(&mut stream).await;
        assert_eq!(record.package, "com.phonepe.app");
        assert_eq!(record.title, "Payment Sent");
        assert_eq!(record.text, "You paid \u{20b9}500 to Merchant X");
        assert_eq!(record.timestamp, 1_700_000_000_000);

        // Exactly once: nothing else is pending
        assert!(stream.try_recv().is_none());
    }

    /// A non-allow-listed application never reaches the stream.
    #[tokio::test]
    async fn test_unlisted_app_is_silent() {
        let (bus, listener, bridge) = pipeline(PlatformCaps::default());
        let mut stream = bridge.attach().expect("attach");

        listener.handle_posted(posted(
            "com.instagram.android",
            "New follower",
            Some("someone followed you"),
            None,
            1,
        ));

        assert!(stream.try_recv().is_none());
        assert_eq!(bus.broadcasts_published(), 0);
    }

    /// Without expanded text the short text is forwarded.
    #[tokio::test]
    async fn test_short_text_fallback() {
        let (_bus, listener, bridge) = pipeline(PlatformCaps::default());
        let mut stream = bridge.attach().expect("attach");

        listener.handle_posted(posted(
            "com.google.android.apps.nbu.paisa.user",
            "Google Pay",
            Some("Sent \u{20b9}200"),
            None,
            2,
        ));

        let record = next_record(&mut stream).await;
        assert_eq!(record.package, "com.google.android.apps.nbu.paisa.user");
        assert_eq!(record.text, "Sent \u{20b9}200");
    }

    /// After detach, a matching notification reaches nobody.
    #[tokio::test]
    async fn test_detach_then_post_is_silent() {
        let (_bus, listener, bridge) = pipeline(PlatformCaps::default());
        let mut stream = bridge.attach().expect("attach");
        bridge.detach();

        listener.handle_posted(posted(
            "com.phonepe.app",
            "Payment Sent",
            Some("Sent \u{20b9}50"),
            None,
            3,
        ));

        assert!(timeout(Duration::from_millis(100), stream.recv())
            .await
            .expect("timeout")
            .is_none());
    }

    /// Records arrive in the order the notifications were posted,
    /// through the `Stream` surface as well.
    #[tokio::test]
    async fn test_ordering_preserved() {
        use tokio_stream::StreamExt;

        let (_bus, listener, bridge) = pipeline(PlatformCaps::default());
        let mut stream = bridge.attach().expect("attach");

        listener.handle_posted(posted("com.phonepe.app", "N1", Some("first"), None, 1));
        listener.handle_posted(posted("net.one97.paytm", "N2", Some("second"), None, 2));

        let n1 = timeout(Duration::from_millis(100), stream.next())
            .await
            .expect("timeout")
            .expect("N1");
        let n2 = timeout(Duration::from_millis(100), stream.next())
            .await
            .expect("timeout")
            .expect("N2");
        assert_eq!(n1.title, "N1");
        assert_eq!(n2.title, "N2");
    }

    /// Removal signals never produce a record.
    #[tokio::test]
    async fn test_removal_is_noop() {
        let (bus, listener, bridge) = pipeline(PlatformCaps::default());
        let mut stream = bridge.attach().expect("attach");

        listener.handle_removed("com.phonepe.app");

        assert!(stream.try_recv().is_none());
        assert_eq!(bus.broadcasts_published(), 0);
    }

    // =========================================================================
    // SUBSCRIPTION LIFECYCLE
    // =========================================================================

    /// Attach/detach cycle: Idle → Listening → Idle → Listening.
    #[tokio::test]
    async fn test_subscription_cycle() {
        let (_bus, listener, bridge) = pipeline(PlatformCaps::default());

        let first = bridge.attach().expect("first attach");
        assert!(bridge.is_listening());
        assert_eq!(bridge.attach().unwrap_err(), BridgeError::SubscriberActive);

        bridge.detach();
        bridge.detach(); // idempotent
        assert!(!bridge.is_listening());
        drop(first);

        let mut second = bridge.attach().expect("re-attach");
        listener.handle_posted(posted("com.freecharge.android", "Recharge", Some("done"), None, 4));
        assert_eq!(next_record(&mut second).await.package, "com.freecharge.android");
    }

    // =========================================================================
    // REGISTRATION SCOPING
    // =========================================================================

    /// On a current platform the receiver is restricted: broadcasts from
    /// outside the owning application are never forwarded.
    #[tokio::test]
    async fn test_restricted_receiver_drops_external_broadcast() {
        let (bus, _listener, bridge) = pipeline(PlatformCaps::default());
        let mut stream = bridge.attach().expect("attach");

        let external = Broadcast {
            action: RELAY_ACTION.to_string(),
            origin: BroadcastOrigin::External,
            event: NotificationEvent {
                source: SourceApp::PhonePe,
                title: "spoof".to_string(),
                content: "spoof".to_string(),
                timestamp_ms: 5,
            },
        };

        assert_eq!(bus.publish(&external), 0);
        assert!(stream.try_recv().is_none());
    }

    /// On a legacy platform the registration falls back to open and
    /// admits external origins.
    #[tokio::test]
    async fn test_legacy_platform_registers_open() {
        let (bus, _listener, bridge) = pipeline(PlatformCaps { api_level: 30 });
        let mut stream = bridge.attach().expect("attach");

        let external = Broadcast {
            action: RELAY_ACTION.to_string(),
            origin: BroadcastOrigin::External,
            event: NotificationEvent {
                source: SourceApp::Paytm,
                title: "legacy".to_string(),
                content: "legacy".to_string(),
                timestamp_ms: 6,
            },
        };

        assert_eq!(bus.publish(&external), 1);
        assert_eq!(next_record(&mut stream).await.title, "legacy");
    }
}
