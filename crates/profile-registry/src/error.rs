//! Error types for the profile registry.

use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Message returned by the operations that only take a token.
pub const INVALID_TOKEN: &str = "invalid token supplied";

/// Message returned by the operations that also take a client id.
pub const INVALID_CLIENT_OR_TOKEN: &str = "invalid clientId or token supplied";

/// Registry error types.
///
/// The `Display` text of each variant is the exact plain-text body sent to
/// the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("{0}")]
    Unauthorized(&'static str),

    #[error("clientId not supplied")]
    MissingClientId,

    #[error("client already exists")]
    AlreadyExists,

    #[error("profile of client {0} does not exist")]
    NotFound(String),

    #[error(
        "child \"profile\" fails because [child \"applications\" fails because [\"applications\" is required]]"
    )]
    MissingApplications,

    #[error("malformed profile body")]
    MalformedBody,

    /// Path or body extraction failed after authorization passed.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

impl ProfileError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ProfileError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ProfileError::MissingClientId => StatusCode::BAD_REQUEST,
            ProfileError::AlreadyExists => StatusCode::CONFLICT,
            ProfileError::NotFound(_) => StatusCode::NOT_FOUND,
            ProfileError::MissingApplications => StatusCode::CONFLICT,
            ProfileError::MalformedBody => StatusCode::BAD_REQUEST,
            ProfileError::Rejected { status, .. } => *status,
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl From<PathRejection> for ProfileError {
    fn from(e: PathRejection) -> Self {
        ProfileError::Rejected {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<BytesRejection> for ProfileError {
    fn from(e: BytesRejection) -> Self {
        ProfileError::Rejected {
            status: e.status(),
            message: e.body_text(),
        }
    }
}
