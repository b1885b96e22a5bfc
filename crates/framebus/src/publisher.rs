use framebus_channel::Origin;
use framebus_message::{format_valid, ErrorDisplayHandle, Message};
use serde_json::Value;
use tracing::{debug, error};

use crate::config::PublishConfig;
use crate::error::{BusError, Result};

const ERR_SEND: &str = "failed to publish event";

/// Validates outbound messages and posts them to a target frame.
///
/// [`publish`](Self::publish) never returns an error: an invalid message is
/// dropped after the validator reports it, and any failure while resolving
/// the target origin or posting is caught, reported through the error
/// display, and logged.
pub struct Publisher {
    errors: ErrorDisplayHandle,
    #[cfg(feature = "schema")]
    schemas: Option<framebus_schema::SchemaRegistryHandle>,
}

impl Publisher {
    /// Create a publisher reporting through `errors`.
    pub fn new(errors: ErrorDisplayHandle) -> Self {
        Self {
            errors,
            #[cfg(feature = "schema")]
            schemas: None,
        }
    }

    /// Attach a shared schema registry; outbound `data` payloads are
    /// validated against the schema for their event code before sending.
    #[cfg(feature = "schema")]
    pub fn with_schema_registry(mut self, registry: framebus_schema::SchemaRegistryHandle) -> Self {
        self.schemas = Some(registry);
        self
    }

    /// Validate `message` and post it per `config`.
    ///
    /// The message need not be pre-validated by the caller. Exactly one
    /// post happens on the success path; when neither `target_origin` nor
    /// `target_origin_from_source` is configured, no origin resolves and
    /// nothing is sent — silently, by contract.
    pub fn publish(&self, message: &Message, config: &PublishConfig) {
        let wire = match message.to_wire() {
            Ok(wire) => wire,
            Err(err) => {
                self.report(err.into());
                return;
            }
        };
        if !format_valid(&wire, self.errors.as_ref()) {
            // The validator already reported what there is to report.
            return;
        }

        #[cfg(feature = "schema")]
        if let Some(registry) = &self.schemas {
            let data = Value::Object(message.data.clone());
            if let Err(err) = registry.validate(&message.event_code, &data) {
                self.report(err.into());
                return;
            }
        }

        if let Err(err) = send(wire, config) {
            self.report(err);
        }
    }

    fn report(&self, err: BusError) {
        self.errors.show_error(ERR_SEND);
        error!(error = %err, "{ERR_SEND}");
    }
}

fn send(wire: Value, config: &PublishConfig) -> Result<()> {
    if config.target_origin_from_source {
        let url = config
            .target_frame
            .source_url()
            .ok_or(BusError::NoSourceUrl)?;
        let origin = Origin::parse(&url)?;
        config.target_frame.post(wire, &origin)?;
        debug!(%origin, derived = true, "event published");
        return Ok(());
    }

    if let Some(origin) = &config.target_origin {
        config.target_frame.post(wire, origin)?;
        debug!(%origin, derived = false, "event published");
    }

    Ok(())
}
