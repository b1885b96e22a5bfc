//! End-to-end scenarios: a host-page publisher talking to listeners inside
//! an embedded frame over the in-memory channel.

use std::sync::{Arc, Mutex};

use framebus::channel::{EmbeddedFrame, Origin};
use framebus::message::{Message, ParamMapping, RecordingDisplay};
use framebus::{EventListener, ListenerConfig, ParamMapper, PublishConfig, Publisher, Result};

struct RecordingMapper {
    seen: Mutex<Vec<String>>,
}

impl RecordingMapper {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            seen: Mutex::new(Vec::new()),
        })
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

impl ParamMapper for RecordingMapper {
    fn apply(&self, message: &Message, _mappings: &[ParamMapping]) -> Result<()> {
        self.seen.lock().unwrap().push(message.event_code.clone());
        Ok(())
    }
}

fn origin(s: &str) -> Origin {
    Origin::parse(s).unwrap()
}

#[test]
fn host_publishes_and_frame_listener_accepts() {
    let frame = Arc::new(
        EmbeddedFrame::new("https://widgets.test/orders", origin("https://host.test"))
            .expect("frame source url should parse"),
    );
    let display = Arc::new(RecordingDisplay::new());
    let mapper = RecordingMapper::new();

    let mut listener = EventListener::new(
        frame.inbound().clone(),
        ListenerConfig::new("order.created"),
        display.clone(),
    )
    .with_param_mapper(mapper.clone(), Vec::new());
    listener.init(ListenerConfig::new("order.created"));

    let publisher = Publisher::new(display.clone());
    let config =
        PublishConfig::new(frame.clone()).with_target_origin(origin("https://widgets.test"));

    publisher.publish(&Message::new("order.created", "host-app"), &config);
    publisher.publish(&Message::new("order.deleted", "host-app"), &config);

    assert_eq!(mapper.seen(), vec!["order.created"]);
    assert_eq!(display.count(), 0);
}

#[test]
fn mismatched_target_origin_never_reaches_the_frame() {
    let frame = Arc::new(
        EmbeddedFrame::new("https://widgets.test/orders", origin("https://host.test"))
            .expect("frame source url should parse"),
    );
    let display = Arc::new(RecordingDisplay::new());
    let mapper = RecordingMapper::new();

    let mut listener = EventListener::new(
        frame.inbound().clone(),
        ListenerConfig::new("order.created"),
        display.clone(),
    )
    .with_param_mapper(mapper.clone(), Vec::new());
    listener.init(ListenerConfig::new("order.created"));

    let publisher = Publisher::new(display.clone());
    let config = PublishConfig::new(frame.clone()).with_target_origin(origin("https://evil.test"));
    publisher.publish(&Message::new("order.created", "host-app"), &config);

    // The receiving side discarded the post; that is not a publish error.
    assert!(mapper.seen().is_empty());
    assert_eq!(display.count(), 0);
}

#[test]
fn derived_origin_tracks_frame_source_url() {
    let frame = Arc::new(
        EmbeddedFrame::new("https://widgets.test/orders", origin("https://host.test"))
            .expect("frame source url should parse"),
    );
    let display = Arc::new(RecordingDisplay::new());
    let mapper = RecordingMapper::new();

    let mut listener = EventListener::new(
        frame.inbound().clone(),
        ListenerConfig::new("order.created"),
        display.clone(),
    )
    .with_param_mapper(mapper.clone(), Vec::new());
    listener.init(ListenerConfig::new("order.created"));

    let publisher = Publisher::new(display.clone());
    let config = PublishConfig::new(frame.clone()).with_origin_from_source();
    publisher.publish(&Message::new("order.created", "host-app"), &config);

    assert_eq!(mapper.seen(), vec!["order.created"]);
}

#[test]
fn redirected_frame_rejects_stale_derived_origin() {
    // The document navigated away from the src origin; deriving the target
    // origin from src addresses the wrong origin, and the receiving side
    // drops the post.
    let frame = Arc::new(
        EmbeddedFrame::new("https://widgets.test/orders", origin("https://host.test"))
            .expect("frame source url should parse")
            .with_document_origin(origin("https://partner.test")),
    );
    let display = Arc::new(RecordingDisplay::new());
    let mapper = RecordingMapper::new();

    let mut listener = EventListener::new(
        frame.inbound().clone(),
        ListenerConfig::new("order.created"),
        display.clone(),
    )
    .with_param_mapper(mapper.clone(), Vec::new());
    listener.init(ListenerConfig::new("order.created"));

    let publisher = Publisher::new(display.clone());

    let derived = PublishConfig::new(frame.clone()).with_origin_from_source();
    publisher.publish(&Message::new("order.created", "host-app"), &derived);
    assert!(mapper.seen().is_empty());

    let literal =
        PublishConfig::new(frame.clone()).with_target_origin(origin("https://partner.test"));
    publisher.publish(&Message::new("order.created", "host-app"), &literal);
    assert_eq!(mapper.seen(), vec!["order.created"]);
}

#[test]
fn detached_frame_reports_publish_failure() {
    let frame = Arc::new(
        EmbeddedFrame::new("https://widgets.test/orders", origin("https://host.test"))
            .expect("frame source url should parse"),
    );
    frame.detach();

    let display = Arc::new(RecordingDisplay::new());
    let publisher = Publisher::new(display.clone());
    let config =
        PublishConfig::new(frame.clone()).with_target_origin(origin("https://widgets.test"));
    publisher.publish(&Message::new("order.created", "host-app"), &config);

    assert_eq!(display.count(), 1);
    assert!(display.messages()[0].contains("failed to publish"));
}

#[test]
fn every_listener_on_the_frame_sees_the_message() {
    let frame = Arc::new(
        EmbeddedFrame::new("https://widgets.test/orders", origin("https://host.test"))
            .expect("frame source url should parse"),
    );
    let display = Arc::new(RecordingDisplay::new());
    let orders = RecordingMapper::new();
    let audit = RecordingMapper::new();

    let mut order_listener = EventListener::new(
        frame.inbound().clone(),
        ListenerConfig::new("order.created"),
        display.clone(),
    )
    .with_param_mapper(orders.clone(), Vec::new());
    let mut audit_listener = EventListener::new(
        frame.inbound().clone(),
        ListenerConfig::new("order.created"),
        display.clone(),
    )
    .with_param_mapper(audit.clone(), Vec::new());

    order_listener.init(ListenerConfig::new("order.created"));
    audit_listener.init(ListenerConfig::new("order.created"));

    let publisher = Publisher::new(display.clone());
    let config =
        PublishConfig::new(frame.clone()).with_target_origin(origin("https://widgets.test"));
    publisher.publish(&Message::new("order.created", "host-app"), &config);

    assert_eq!(orders.seen(), vec!["order.created"]);
    assert_eq!(audit.seen(), vec!["order.created"]);

    // Removing one listener leaves the other registered.
    order_listener.remove();
    publisher.publish(&Message::new("order.created", "host-app"), &config);

    assert_eq!(orders.seen(), vec!["order.created"]);
    assert_eq!(audit.seen(), vec!["order.created", "order.created"]);
}

#[test]
fn listener_allow_list_filters_by_embedder_origin() {
    let frame = Arc::new(
        EmbeddedFrame::new("https://widgets.test/orders", origin("https://host.test"))
            .expect("frame source url should parse"),
    );
    let display = Arc::new(RecordingDisplay::new());
    let mapper = RecordingMapper::new();

    // The frame only trusts messages arriving from a different host.
    let config = ListenerConfig::new("order.created")
        .with_allowed_origins(vec![origin("https://trusted.test")]);
    let mut listener = EventListener::new(frame.inbound().clone(), config.clone(), display.clone())
        .with_param_mapper(mapper.clone(), Vec::new());
    listener.init(config);

    let publisher = Publisher::new(display.clone());
    let publish_config =
        PublishConfig::new(frame.clone()).with_target_origin(origin("https://widgets.test"));
    publisher.publish(&Message::new("order.created", "host-app"), &publish_config);

    assert!(mapper.seen().is_empty());
    assert_eq!(display.count(), 0);
}
