//! Optional JSON Schema validation of message `data` payloads.
//!
//! Declare the expected shape of an event's `data` once, keyed by event
//! code, and catch contract violations at the messaging boundary instead of
//! deep inside UI code.
//!
//! This crate is optional — use it when you want schema-enforced payload
//! contracts between the host page and its frames.

pub mod config;
pub mod error;
pub mod registry;
pub mod validator;

pub use config::RegistryConfig;
pub use error::{Result, SchemaError};
pub use registry::{SchemaRegistry, SchemaRegistryHandle};
