use thiserror::Error;

/// Errors raised by a lock backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The client could not be built or the target could not be reached.
    #[error("Connection failed: {0}")]
    Connection(String),
    /// Enumerating the locks failed. No partial inventory is ever returned.
    #[error("Listing locks failed: {0}")]
    List(String),
    /// A single deletion failed.
    #[error("Failed to delete '{identity}': {message}")]
    Delete { identity: String, message: String },
    /// The backend returned an entry without a usable identity.
    #[error("Invalid lock record: {0}")]
    InvalidRecord(String),
}

/// Result type for backend operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Fatal errors that end an unlock session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid cloud provider '{0}': expected 'aws' or 'azure'")]
    InvalidSelection(String),
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Failed to read input: {0}")]
    Prompt(String),
    #[error("Failed to write output: {0}")]
    Output(String),
    #[error(transparent)]
    Backend(#[from] BackendError),
}
