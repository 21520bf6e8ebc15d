//! Domain types and pure logic for the NFC tap review flow.
//!
//! Nothing in this crate performs I/O: network sources, timing, and
//! redirects live in `tapreview-client`.

pub mod app_config;
pub mod business;
pub mod config;
pub mod display;
pub mod fallback;
pub mod resolve;
pub mod submission;
pub mod validation;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use business::{BusinessRecord, Catalog, SocialPlatform};
pub use config::{load_app_config, load_app_config_from_env};
pub use display::{
    success_message, DisplayMachine, DisplayState, DisplayView, LogoView, MainView, SocialLink,
    SocialLinks, SubmitControl, TransitionError, SOCIAL_LINK_REL, SOCIAL_LINK_TARGET,
};
pub use fallback::{default_logo, embedded_catalog, DEMO_BUSINESS_ID};
pub use resolve::{business_id_from_query, resolve, NotFound, NOT_FOUND_MESSAGE};
pub use submission::{SubmissionRecord, SUBMISSION_SOURCE};
pub use validation::{validate_email, validate_name, FieldError, FormState, ValidatedForm};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
