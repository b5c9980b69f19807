/// Errors that can occur at the external-state boundary.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An I/O error occurred while reading or writing a spool file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON serialization or deserialization error occurred.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The submission frame could not be encoded.
    #[error("wire error: {0}")]
    Wire(#[from] crate::wire::WireError),

    /// The platform does not provide a data directory.
    #[error("could not determine XDG data directory")]
    NoDataDir,

    /// A submission is already in flight; only one may be outstanding.
    #[error("a submission is already pending")]
    SubmissionPending,
}
