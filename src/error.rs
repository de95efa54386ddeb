use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// `Display` is the exact message printed in the JSON error envelope.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Username cannot be empty")]
    InvalidInput,
    #[error("Instagram profile '{0}' not found")]
    NotFound(String),
    #[error("Connection error - please try again later")]
    Connection,
    #[error("Cannot access private profile '{0}'")]
    AccessDenied(String),
    #[error("Error fetching profile: {0}")]
    Unknown(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Signals raised by the profile-lookup capability.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("profile does not exist")]
    NotFound,
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("profile is private and not followed")]
    PrivateNotFollowed,
    #[error("lookup failed: {0}")]
    Other(String),
}
