use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::envelope::MessageEnvelope;
use crate::error::{ChannelError, Result};
use crate::hub::MessageHub;
use crate::origin::Origin;

/// A reference to an embedded document capable of receiving a targeted
/// cross-document message.
///
/// This is the seam between the helper and the platform channel: real
/// embedders back it with the native primitive, tests and demos use
/// [`EmbeddedFrame`].
pub trait FrameHandle {
    /// The frame's current source URL, if known.
    fn source_url(&self) -> Option<String>;

    /// Post `payload` to the frame, addressed to `target_origin`.
    ///
    /// The receiving side enforces origin matching independently: a payload
    /// addressed to an origin other than the frame's current document origin
    /// is silently discarded, not an error. A torn-down frame returns
    /// [`ChannelError::FrameDetached`].
    fn post(&self, payload: Value, target_origin: &Origin) -> Result<()>;
}

/// Shared handle to a frame.
pub type FrameRef = Arc<dyn FrameHandle + Send + Sync>;

/// In-memory frame implementation.
///
/// Stands in for a real embedded document: holds a source URL, the
/// document's current origin (which may differ from the URL's origin after
/// a redirect), the embedder's origin stamped on delivered envelopes, and
/// an inbound [`MessageHub`] where the embedded page's listeners register.
pub struct EmbeddedFrame {
    source_url: Option<String>,
    document_origin: Origin,
    embedder_origin: Origin,
    inbound: MessageHub,
    detached: AtomicBool,
}

impl EmbeddedFrame {
    /// Create a frame from its source URL; the document origin is derived
    /// from the URL.
    pub fn new(source_url: impl Into<String>, embedder_origin: Origin) -> Result<Self> {
        let source_url = source_url.into();
        let document_origin = Origin::parse(&source_url)?;
        Ok(Self {
            source_url: Some(source_url),
            document_origin,
            embedder_origin,
            inbound: MessageHub::new(),
            detached: AtomicBool::new(false),
        })
    }

    /// Create a frame with no source URL (e.g. a programmatically written
    /// document).
    pub fn without_source(document_origin: Origin, embedder_origin: Origin) -> Self {
        Self {
            source_url: None,
            document_origin,
            embedder_origin,
            inbound: MessageHub::new(),
            detached: AtomicBool::new(false),
        }
    }

    /// Override the document origin, e.g. after a redirect away from the
    /// source URL's origin.
    pub fn with_document_origin(mut self, origin: Origin) -> Self {
        self.document_origin = origin;
        self
    }

    /// The hub carrying messages delivered into this frame.
    pub fn inbound(&self) -> &MessageHub {
        &self.inbound
    }

    /// The frame's current document origin.
    pub fn document_origin(&self) -> &Origin {
        &self.document_origin
    }

    /// Tear the frame down; subsequent posts fail.
    pub fn detach(&self) {
        self.detached.store(true, Ordering::SeqCst);
    }
}

impl FrameHandle for EmbeddedFrame {
    fn source_url(&self) -> Option<String> {
        self.source_url.clone()
    }

    fn post(&self, payload: Value, target_origin: &Origin) -> Result<()> {
        if self.detached.load(Ordering::SeqCst) {
            return Err(ChannelError::FrameDetached);
        }
        if *target_origin != self.document_origin {
            debug!(
                target = %target_origin,
                document = %self.document_origin,
                "target origin mismatch, discarding post"
            );
            return Ok(());
        }
        let envelope = MessageEnvelope::new(payload, self.embedder_origin.clone());
        self.inbound.deliver(&envelope);
        Ok(())
    }
}

impl std::fmt::Debug for EmbeddedFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddedFrame")
            .field("source_url", &self.source_url)
            .field("document_origin", &self.document_origin)
            .field("detached", &self.detached.load(Ordering::SeqCst))
            .finish()
    }
}
