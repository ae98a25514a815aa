//! Batch updater errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },
}
