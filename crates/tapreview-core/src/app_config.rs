#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for a tap session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// An `http(s)` URL or a local path to the business catalog JSON.
    pub catalog_url: String,
    pub webhook_url: String,
    /// Identifier used when the page URL carries no `id` parameter.
    pub default_business_id: String,
    /// Sent as the HTTP user agent and recorded on each submission.
    pub user_agent: String,
    /// `None` leaves network calls without a timeout.
    pub request_timeout_secs: Option<u64>,
    /// Treat non-2xx webhook responses as submission failures.
    pub webhook_require_ack: bool,
}
