use crate::client::ClientError;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A client error occurred at the session boundary.
    #[error("client error: {0}")]
    Client(#[from] ClientError),
}
