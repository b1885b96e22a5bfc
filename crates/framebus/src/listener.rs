use std::sync::{Arc, Mutex};

use framebus_channel::{HandlerId, MessageEnvelope, MessageHub};
use framebus_message::{receive_valid, ErrorDisplayHandle, Message, ParamMappingList};
use tracing::{debug, error, info};

use crate::config::ListenerConfig;
use crate::error::Result;
use crate::mapping::ParamMapperHandle;

const ERR_AFTER_LISTEN: &str = "listener post-processing failed";

/// Subscribes to inbound messages matching an event code.
///
/// Wraps registration and removal of one handler on the ambient
/// [`MessageHub`]. Two states: *unregistered* (initial, and again after
/// [`remove`](Self::remove)) and *registered* (after
/// [`init`](Self::init)). Every listener instance registers its own
/// handler, so multiple instances on one hub all see all inbound messages.
pub struct EventListener {
    hub: MessageHub,
    config: Arc<Mutex<ListenerConfig>>,
    errors: ErrorDisplayHandle,
    mapper: Option<ParamMapperHandle>,
    mappings: Arc<ParamMappingList>,
    #[cfg(feature = "schema")]
    schemas: Option<framebus_schema::SchemaRegistryHandle>,
    registration: Option<HandlerId>,
}

impl EventListener {
    /// Create an unregistered listener.
    pub fn new(hub: MessageHub, config: ListenerConfig, errors: ErrorDisplayHandle) -> Self {
        Self {
            hub,
            config: Arc::new(Mutex::new(config)),
            errors,
            mapper: None,
            mappings: Arc::new(ParamMappingList::new()),
            #[cfg(feature = "schema")]
            schemas: None,
            registration: None,
        }
    }

    /// Install a parameter mapper and the mapping list it applies.
    ///
    /// Without a mapper the mapping step is skipped.
    pub fn with_param_mapper(mut self, mapper: ParamMapperHandle, mappings: ParamMappingList) -> Self {
        self.mapper = Some(mapper);
        self.mappings = Arc::new(mappings);
        self
    }

    /// Attach a shared schema registry; accepted messages have their `data`
    /// validated against the schema for their event code.
    #[cfg(feature = "schema")]
    pub fn with_schema_registry(mut self, registry: framebus_schema::SchemaRegistryHandle) -> Self {
        self.schemas = Some(registry);
        self
    }

    /// Register this listener's handler on the hub, filtering by `config`.
    ///
    /// Replaces the active filter config. Calling `init` while already
    /// registered updates the filter without duplicating the registration.
    pub fn init(&mut self, config: ListenerConfig) {
        *self.config.lock().expect("listener lock poisoned") = config;
        if self.registration.is_some() {
            return;
        }

        let handler = HandlerContext {
            config: Arc::clone(&self.config),
            errors: Arc::clone(&self.errors),
            mapper: self.mapper.clone(),
            mappings: Arc::clone(&self.mappings),
            #[cfg(feature = "schema")]
            schemas: self.schemas.clone(),
        };
        self.registration = Some(self.hub.register(move |envelope| handler.handle(envelope)));
    }

    /// Deregister the handler. A no-op when unregistered; idempotent.
    pub fn remove(&mut self) {
        if let Some(id) = self.registration.take() {
            self.hub.unregister(id);
        }
    }

    /// Whether the handler is currently registered.
    pub fn is_registered(&self) -> bool {
        self.registration.is_some()
    }
}

/// The state shared with the registered handler closure.
struct HandlerContext {
    config: Arc<Mutex<ListenerConfig>>,
    errors: ErrorDisplayHandle,
    mapper: Option<ParamMapperHandle>,
    mappings: Arc<ParamMappingList>,
    #[cfg(feature = "schema")]
    schemas: Option<framebus_schema::SchemaRegistryHandle>,
}

impl HandlerContext {
    fn handle(&self, envelope: &MessageEnvelope) {
        let config = self.config.lock().expect("listener lock poisoned").clone();

        if !config.origin_allowed(&envelope.origin) {
            debug!(origin = %envelope.origin, "sender origin not in allow-list, dropping");
            return;
        }
        if !receive_valid(envelope, &config.event_code, self.errors.as_ref()) {
            return;
        }

        // Failure boundary: nothing past acceptance may propagate back to
        // the hub.
        if let Err(err) = self.accept(envelope) {
            self.errors.show_error(ERR_AFTER_LISTEN);
            error!(error = %err, "{ERR_AFTER_LISTEN}");
        }
    }

    fn accept(&self, envelope: &MessageEnvelope) -> Result<()> {
        let message = Message::from_wire(envelope.payload.clone())?;

        #[cfg(feature = "schema")]
        if let Some(registry) = &self.schemas {
            let data = serde_json::Value::Object(message.data.clone());
            registry.validate(&message.event_code, &data)?;
        }

        if let Some(mapper) = &self.mapper {
            mapper.apply(&message, &self.mappings)?;
        }

        info!(
            event_code = %message.event_code,
            source = %message.source,
            origin = %envelope.origin,
            "message accepted"
        );
        Ok(())
    }
}
