//! Validated cross-document messaging between a host page and embedded
//! frames.
//!
//! framebus is a thin helper over a cross-document messaging channel: it
//! validates and publishes structured messages to a target frame, and
//! registers inbound listeners filtered by event code.
//!
//! # Crate Structure
//!
//! - [`channel`] — channel abstraction (origins, envelopes, frame handles)
//! - [`message`] — message data model and format validation
//! - [`schema`] — optional JSON Schema payload validation (behind the
//!   `schema` feature)
//! - [`EventListener`] / [`Publisher`] — the subscribe and publish surfaces

/// Re-export channel types.
pub mod channel {
    pub use framebus_channel::*;
}

/// Re-export message types.
pub mod message {
    pub use framebus_message::*;
}

/// Re-export schema types (requires `schema` feature).
#[cfg(feature = "schema")]
pub mod schema {
    pub use framebus_schema::*;
}

pub mod config;
pub mod error;
pub mod listener;
pub mod mapping;
pub mod publisher;

pub use config::{ListenerConfig, PublishConfig};
pub use error::{BusError, Result};
pub use listener::EventListener;
pub use mapping::{ParamMapper, ParamMapperHandle};
pub use publisher::Publisher;
