use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::trace;

use crate::envelope::MessageEnvelope;

type Handler = Arc<dyn Fn(&MessageEnvelope) + Send + Sync>;

/// Token returned by [`MessageHub::register`], used to deregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerId(u64);

/// The ambient inbound-message channel.
///
/// One shared registration-slot table per document: every registered
/// handler sees every delivered message (fan-out), in registration order.
/// Cloning the hub clones the handle, not the table.
#[derive(Clone)]
pub struct MessageHub {
    inner: Arc<HubInner>,
}

struct HubInner {
    handlers: Mutex<Vec<(HandlerId, Handler)>>,
    next_id: AtomicU64,
}

impl MessageHub {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(HubInner {
                handlers: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Register a handler for all subsequent messages.
    pub fn register<F>(&self, handler: F) -> HandlerId
    where
        F: Fn(&MessageEnvelope) + Send + Sync + 'static,
    {
        let id = HandlerId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let mut handlers = self.inner.handlers.lock().expect("hub lock poisoned");
        handlers.push((id, Arc::new(handler)));
        id
    }

    /// Deregister a handler. Absent ids are a harmless no-op.
    pub fn unregister(&self, id: HandlerId) {
        let mut handlers = self.inner.handlers.lock().expect("hub lock poisoned");
        handlers.retain(|(registered, _)| *registered != id);
    }

    /// Deliver an envelope to every registered handler, in registration
    /// order.
    ///
    /// The handler set is snapshotted before dispatch: handlers registered
    /// or removed by a running handler take effect from the next delivery.
    pub fn deliver(&self, envelope: &MessageEnvelope) {
        let snapshot: Vec<Handler> = {
            let handlers = self.inner.handlers.lock().expect("hub lock poisoned");
            handlers.iter().map(|(_, h)| Arc::clone(h)).collect()
        };
        trace!(handlers = snapshot.len(), origin = %envelope.origin, "delivering message");
        for handler in snapshot {
            handler(envelope);
        }
    }

    /// Number of currently registered handlers.
    pub fn handler_count(&self) -> usize {
        self.inner.handlers.lock().expect("hub lock poisoned").len()
    }
}

impl Default for MessageHub {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MessageHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageHub")
            .field("handlers", &self.handler_count())
            .finish()
    }
}
