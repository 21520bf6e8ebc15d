//! Network sources, the submission sink, and the session orchestrator for
//! the NFC tap review flow.

pub mod catalog;
pub mod error;
pub mod navigator;
pub mod session;
pub mod sink;
pub mod welcome;

pub use catalog::{
    source_for, CatalogSource, EmbeddedCatalog, FallbackCatalog, FileCatalog, HttpCatalog,
};
pub use error::{CatalogError, SubmissionError};
pub use navigator::{Navigator, RecordingNavigator};
pub use session::{
    ReviewSession, SessionTimings, SubmitOutcome, LOAD_FAILED_MESSAGE, SUBMISSION_ALERT,
};
pub use sink::{AckPolicy, SubmissionSink, WebhookSink};
pub use welcome::{WelcomeGate, WelcomeSequencer, WelcomeStage, WelcomeTimings};

/// Builds the shared `reqwest` client for catalog and webhook calls.
///
/// # Errors
///
/// Returns [`reqwest::Error`] if the client cannot be constructed.
pub fn http_client(
    user_agent: &str,
    timeout_secs: Option<u64>,
) -> Result<reqwest::Client, reqwest::Error> {
    let mut builder = reqwest::Client::builder().user_agent(user_agent);
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    builder.build()
}
