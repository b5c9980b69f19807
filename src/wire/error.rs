/// Errors that can occur while framing submissions.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The order could not be serialized to JSON.
    #[error("submission encoding error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred while writing the frame.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
