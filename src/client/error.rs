use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server answered {status}: {message}")]
    Status { status: StatusCode, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeolocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("position unavailable")]
    PositionUnavailable,

    #[error("timed out waiting for position")]
    Timeout,
}
