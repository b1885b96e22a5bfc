/// Errors that can occur in publish and listen operations.
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    /// Channel-level error.
    #[error("channel error: {0}")]
    Channel(#[from] framebus_channel::ChannelError),

    /// Message validation or decoding error.
    #[error("message error: {0}")]
    Message(#[from] framebus_message::ValidationError),

    /// Schema validation error.
    #[cfg(feature = "schema")]
    #[error("schema validation error: {0}")]
    Schema(#[from] framebus_schema::SchemaError),

    /// The target frame has no source URL to derive a target origin from.
    #[error("frame has no source url to derive target origin from")]
    NoSourceUrl,

    /// Parameter mapping failed.
    #[error("parameter mapping failed: {0}")]
    Mapping(String),
}

pub type Result<T> = std::result::Result<T, BusError>;
