use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::business::BusinessRecord;
use crate::validation::ValidatedForm;

/// Channel tag recorded on every submission.
pub const SUBMISSION_SOURCE: &str = "NFC";

/// What gets posted to the sink: customer input plus business and client
/// context. Built once per successful submit and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    business_id: String,
    business_name: String,
    business_type: String,
    customer_name: String,
    customer_email: String,
    marketing_consent: bool,
    #[serde(serialize_with = "iso_millis")]
    timestamp: DateTime<Utc>,
    user_agent: String,
    source: &'static str,
}

impl SubmissionRecord {
    #[must_use]
    pub fn new(
        business: &BusinessRecord,
        form: ValidatedForm,
        user_agent: &str,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            business_id: business.id.clone(),
            business_name: business.name.clone(),
            business_type: business.business_type.clone(),
            customer_name: form.customer_name().to_string(),
            customer_email: form.customer_email().to_string(),
            marketing_consent: form.marketing_consent(),
            timestamp: captured_at,
            user_agent: user_agent.to_string(),
            source: SUBMISSION_SOURCE,
        }
    }

    #[must_use]
    pub fn business_id(&self) -> &str {
        &self.business_id
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[must_use]
    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    #[must_use]
    pub fn marketing_consent(&self) -> bool {
        self.marketing_consent
    }

    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

fn iso_millis<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}
