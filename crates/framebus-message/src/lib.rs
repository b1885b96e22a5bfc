//! Message data model and format validation.
//!
//! The [`Message`] wire model, the format/receive validators enforcing the
//! well-formedness contract at the channel boundary, and the injected
//! [`ErrorDisplay`] collaborator that failure paths report through.

pub mod display;
pub mod error;
pub mod message;
pub mod validator;

pub use display::{ErrorDisplay, ErrorDisplayHandle, NoopDisplay, RecordingDisplay};
pub use error::{Result, ValidationError};
pub use message::{Message, ParamMapping, ParamMappingList, ParamPair};
pub use validator::{format_valid, receive_valid};
