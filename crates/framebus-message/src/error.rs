/// Errors that can occur while validating or decoding messages.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The message carries an event code but no source descriptor.
    #[error("message format invalid: missing source")]
    MissingSource,

    /// An accepted payload could not be decoded into a typed message.
    #[error("failed to decode message: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
