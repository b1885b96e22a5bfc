use framebus_channel::{FrameRef, Origin};

/// Filter criteria a registered listener uses to accept inbound messages.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Event code this listener accepts.
    pub event_code: String,
    /// Sender origins this listener accepts.
    ///
    /// `None` accepts any origin that matches the event code, which is the
    /// historical channel contract. That default trusts every embedding
    /// context on the page; production embedders should set an explicit
    /// list.
    pub allowed_origins: Option<Vec<Origin>>,
}

impl ListenerConfig {
    /// Accept `event_code` from any origin.
    pub fn new(event_code: impl Into<String>) -> Self {
        Self {
            event_code: event_code.into(),
            allowed_origins: None,
        }
    }

    /// Restrict accepted sender origins.
    pub fn with_allowed_origins(mut self, origins: Vec<Origin>) -> Self {
        self.allowed_origins = Some(origins);
        self
    }

    /// Whether a sender origin passes the allow-list.
    pub fn origin_allowed(&self, origin: &Origin) -> bool {
        match &self.allowed_origins {
            Some(allowed) => allowed.contains(origin),
            None => true,
        }
    }
}

/// Addressing configuration for a publish.
#[derive(Clone)]
pub struct PublishConfig {
    /// The frame to post to. Must reference a live frame.
    pub target_frame: FrameRef,
    /// Literal target origin. Ignored when `target_origin_from_source` is
    /// set. When neither is set, nothing is sent.
    pub target_origin: Option<Origin>,
    /// Derive the target origin from the frame's current source URL at send
    /// time. Fits frames whose documents redirect, where a configured
    /// literal origin would go stale.
    pub target_origin_from_source: bool,
}

impl PublishConfig {
    /// Address `target_frame` with no target origin configured.
    pub fn new(target_frame: FrameRef) -> Self {
        Self {
            target_frame,
            target_origin: None,
            target_origin_from_source: false,
        }
    }

    /// Set a literal target origin.
    pub fn with_target_origin(mut self, origin: Origin) -> Self {
        self.target_origin = Some(origin);
        self
    }

    /// Derive the target origin from the frame's source URL at send time.
    pub fn with_origin_from_source(mut self) -> Self {
        self.target_origin_from_source = true;
        self
    }
}

impl std::fmt::Debug for PublishConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublishConfig")
            .field("target_origin", &self.target_origin)
            .field("target_origin_from_source", &self.target_origin_from_source)
            .finish()
    }
}
