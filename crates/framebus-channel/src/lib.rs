//! Cross-document messaging channel abstraction.
//!
//! Models the platform primitives a host page and an embedded frame use to
//! exchange messages: an [`Origin`] restricting delivery, a
//! [`MessageEnvelope`] wrapping each inbound payload, a [`FrameHandle`] for
//! targeted outbound posts, and a [`MessageHub`] carrying the ambient
//! inbound message events that listeners register on.
//!
//! The channel itself is policy-free — validation and event filtering live
//! in the layers above.

pub mod envelope;
pub mod error;
pub mod frame;
pub mod hub;
pub mod origin;

pub use envelope::MessageEnvelope;
pub use error::{ChannelError, Result};
pub use frame::{EmbeddedFrame, FrameHandle, FrameRef};
pub use hub::{HandlerId, MessageHub};
pub use origin::Origin;
