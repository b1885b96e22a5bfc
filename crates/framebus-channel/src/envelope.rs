use serde_json::Value;

use crate::origin::Origin;

/// The channel-delivered wrapper around an inbound message.
///
/// Carries the raw payload plus the transport-stamped sender origin. The
/// payload is untrusted at this point — shape validation happens in the
/// layers above.
#[derive(Debug, Clone)]
pub struct MessageEnvelope {
    /// Raw message payload as delivered by the channel.
    pub payload: Value,
    /// Origin of the sending document.
    pub origin: Origin,
}

impl MessageEnvelope {
    /// Create a new envelope.
    pub fn new(payload: Value, origin: Origin) -> Self {
        Self { payload, origin }
    }
}
