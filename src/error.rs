//! Error types for the export pipeline.

use thiserror::Error;

/// Errors that can occur while exporting a portal's document listing.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The input URL is not a public PowerDMS portal URL.
    #[error("not a public PowerDMS URL: {0}")]
    InvalidUrl(String),

    /// HTTP transport failure (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The portal refused access to the document listing.
    #[error("site appears to be private (HTTP {status}); the document listing is not public")]
    PrivateSite { status: u16 },

    /// A response was received but is not the expected document tree.
    #[error("unexpected response from the portal API: {reason}")]
    UnexpectedResponse { reason: String },

    /// A flat record is missing the data needed to emit a directive.
    #[error("document entry '{name}' has no download URL")]
    MalformedRecord { name: String },

    /// CSV encoding error.
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Filesystem error while writing an artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for export operations.
pub type Result<T> = core::result::Result<T, ExportError>;
