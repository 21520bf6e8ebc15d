use thiserror::Error;

/// Why a catalog source could not produce a catalog. Always absorbed by
/// [`crate::FallbackCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A submission that could not be handed to the sink.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("failed to reach submission sink: {0}")]
    Transport(#[from] reqwest::Error),

    /// Only produced under [`crate::AckPolicy::RequireSuccessStatus`].
    #[error("submission sink rejected the request with status {status}")]
    Rejected { status: u16 },
}
