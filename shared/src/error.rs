use thiserror::Error;

/// Failure taxonomy for the aggregation pipeline. Only the authentication
/// variants and `Internal` ever surface as hard errors; everything below the
/// upstream fetch is recovered locally by substituting fallback data.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing authorization header")]
    Unauthenticated,
    #[error("Identity provider rejected the credential: {0}")]
    AuthRejected(String),
    #[error("Profile lookup failed: {0}")]
    LocationLookupFailed(String),
    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),
    // The body is kept for diagnostics and is never forwarded to callers.
    #[error("Upstream returned status {status}")]
    UpstreamError { status: u16, body: String },
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
