/// Errors that can occur in channel operations.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// The input does not contain a usable origin component.
    #[error("invalid origin in {input:?}: {reason}")]
    InvalidOrigin { input: String, reason: &'static str },

    /// The target frame has been torn down.
    #[error("frame detached")]
    FrameDetached,
}

pub type Result<T> = std::result::Result<T, ChannelError>;
