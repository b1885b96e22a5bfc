//! Host page and embedded frame talking over the in-memory channel.
//!
//! Run with:
//!   cargo run --example host-embed

use std::sync::Arc;

use framebus::channel::{EmbeddedFrame, Origin};
use framebus::message::{ErrorDisplay, Message};
use framebus::{EventListener, ListenerConfig, PublishConfig, Publisher};

/// Error display that writes to stderr instead of a UI surface.
struct StderrDisplay;

impl ErrorDisplay for StderrDisplay {
    fn show_error(&self, message: &str) {
        eprintln!("[ui-error] {message}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    let host_origin = Origin::parse("https://host.test")?;
    let frame = Arc::new(EmbeddedFrame::new(
        "https://widgets.test/orders",
        host_origin,
    )?);
    let display = Arc::new(StderrDisplay);

    // The embedded page registers for order events.
    let mut listener = EventListener::new(
        frame.inbound().clone(),
        ListenerConfig::new("order.created"),
        display.clone(),
    );
    listener.init(ListenerConfig::new("order.created"));

    let publisher = Publisher::new(display);
    let config = PublishConfig::new(frame.clone()).with_origin_from_source();

    let mut data = serde_json::Map::new();
    data.insert("orderId".to_string(), serde_json::json!(42));
    publisher.publish(
        &Message::new("order.created", "host-app[/orders]-create-button").with_data(data),
        &config,
    );

    // A message without a source descriptor is rejected and reported.
    publisher.publish(&Message::new("order.created", ""), &config);

    listener.remove();
    Ok(())
}
