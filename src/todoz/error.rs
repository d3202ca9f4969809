use thiserror::Error;
use uuid::Uuid;

/// Coarse classification of a failure, as reported in a failed [`crate::outcome::Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A user or todo could not be resolved.
    NotFound,
    /// The email is already bound to another account.
    Conflict,
    /// A field was missing, empty or too short.
    InvalidInput,
    /// A password comparison failed.
    Unauthorized,
    /// The store or its configuration misbehaved.
    Internal,
}

#[derive(Error, Debug)]
pub enum TodozError {
    #[error("User with ID '{0}' not found.")]
    UserNotFound(Uuid),

    #[error("User with email '{0}' not found.")]
    EmailNotFound(String),

    #[error("Todo with ID '{0}' not found.")]
    TodoNotFound(Uuid),

    #[error("Todo with ID '{0}' not found for this user.")]
    TodoNotFoundForUser(Uuid),

    #[error("Email '{0}' is already registered.")]
    DuplicateEmail(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    AuthenticationFailed(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TodozError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_)
            | Self::EmailNotFound(_)
            | Self::TodoNotFound(_)
            | Self::TodoNotFoundForUser(_) => ErrorKind::NotFound,
            Self::DuplicateEmail(_) => ErrorKind::Conflict,
            Self::InvalidArgument(_) => ErrorKind::InvalidInput,
            Self::AuthenticationFailed(_) => ErrorKind::Unauthorized,
            Self::Store(_) | Self::Io(_) | Self::Serialization(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, TodozError>;
