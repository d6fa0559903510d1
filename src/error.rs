/// Coarse classification of a [`DeckError`], used by hosts to pick a
/// status code or retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Rejected locally before any request was sent.
    InvalidArgument,
    /// The deck service could not be reached or timed out.
    RemoteUnavailable,
    /// The deck service answered, but not with a usable success payload.
    RemoteProtocolError,
}

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    InvalidCardCode(String),

    #[error("{0}")]
    InvalidPileName(String),

    #[error("{0}")]
    RemoteUnavailable(String),

    #[error("{0}")]
    RemoteProtocol(String),

    #[error("Invalid tool arguments: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A typed result could not be encoded as a tool result.
    #[error("Unable to encode tool result: {0}")]
    Encode(serde_json::Error),
}

impl DeckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DeckError::InvalidArgument(_)
            | DeckError::InvalidCardCode(_)
            | DeckError::InvalidPileName(_)
            | DeckError::Serialization(_) => ErrorKind::InvalidArgument,
            DeckError::RemoteUnavailable(_) => ErrorKind::RemoteUnavailable,
            DeckError::RemoteProtocol(_) | DeckError::Encode(_) => ErrorKind::RemoteProtocolError,
        }
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
