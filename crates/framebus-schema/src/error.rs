/// Errors that can occur during schema validation.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema could not be compiled.
    #[error("failed to compile schema for event code {event_code:?}: {message}")]
    CompileFailed { event_code: String, message: String },

    /// The data payload failed schema validation.
    #[error("data for event code {event_code:?} failed validation: {message}")]
    ValidationFailed { event_code: String, message: String },

    /// The schema is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// No schema registered for the given event code.
    #[error("no schema registered for event code {0:?}")]
    NoSchema(String),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
