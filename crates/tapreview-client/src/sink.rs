//! Submission sink: the external endpoint that records customer details.

use async_trait::async_trait;
use reqwest::Client;
use tapreview_core::SubmissionRecord;

use crate::error::SubmissionError;

#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), SubmissionError>;
}

#[async_trait]
impl<T: SubmissionSink + ?Sized> SubmissionSink for std::sync::Arc<T> {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), SubmissionError> {
        (**self).submit(record).await
    }
}

/// How much of the sink's response counts toward success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AckPolicy {
    /// Dispatched without a transport error is success; the response is
    /// never inspected.
    #[default]
    Opaque,
    /// The sink must also answer with a 2xx status.
    RequireSuccessStatus,
}

impl AckPolicy {
    #[must_use]
    pub fn from_flag(require_ack: bool) -> Self {
        if require_ack {
            AckPolicy::RequireSuccessStatus
        } else {
            AckPolicy::Opaque
        }
    }
}

/// Posts submission records as JSON to a fixed webhook URL.
pub struct WebhookSink {
    client: Client,
    url: String,
    ack: AckPolicy,
}

impl WebhookSink {
    #[must_use]
    pub fn new(client: Client, url: &str, ack: AckPolicy) -> Self {
        Self {
            client,
            url: url.to_owned(),
            ack,
        }
    }
}

#[async_trait]
impl SubmissionSink for WebhookSink {
    async fn submit(&self, record: &SubmissionRecord) -> Result<(), SubmissionError> {
        let response = self.client.post(&self.url).json(record).send().await?;
        let status = response.status();
        tracing::debug!(
            business_id = record.business_id(),
            status = status.as_u16(),
            "submission dispatched"
        );
        if self.ack == AckPolicy::RequireSuccessStatus && !status.is_success() {
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
