//! Field rules for the customer form and the form's inline error state.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Inline validation message for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter your full name")]
    NameMissing,
    #[error("Please enter a valid name")]
    NameTooShort,
    #[error("Please enter your email address")]
    EmailMissing,
    #[error("Please enter a valid email address")]
    EmailInvalid,
}

/// Checks a customer name after trimming.
///
/// # Errors
///
/// [`FieldError::NameMissing`] when blank, [`FieldError::NameTooShort`] when
/// fewer than two characters remain.
pub fn validate_name(raw: &str) -> Result<&str, FieldError> {
    let name = raw.trim();
    if name.is_empty() {
        Err(FieldError::NameMissing)
    } else if name.chars().count() < 2 {
        Err(FieldError::NameTooShort)
    } else {
        Ok(name)
    }
}

/// Checks a customer email after trimming against a `local@domain.tld` shape.
///
/// # Errors
///
/// [`FieldError::EmailMissing`] when blank, [`FieldError::EmailInvalid`] when
/// the shape does not match.
pub fn validate_email(raw: &str) -> Result<&str, FieldError> {
    let email = raw.trim();
    if email.is_empty() {
        Err(FieldError::EmailMissing)
    } else if !EMAIL_RE.is_match(email) {
        Err(FieldError::EmailInvalid)
    } else {
        Ok(email)
    }
}

/// Form input that passed both field rules. Only [`FormState::validate_for_submit`]
/// produces one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm {
    customer_name: String,
    customer_email: String,
    marketing_consent: bool,
}

impl ValidatedForm {
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
}

/// Current form values plus the inline error shown next to each field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub marketing_consent: bool,
    name_error: Option<FieldError>,
    email_error: Option<FieldError>,
}

impl FormState {
    #[must_use]
    pub fn name_error(&self) -> Option<FieldError> {
        self.name_error
    }

    #[must_use]
    pub fn email_error(&self) -> Option<FieldError> {
        self.email_error
    }

    /// Typing in the name field replaces its value and clears its error.
    pub fn input_name(&mut self, value: &str) {
        value.clone_into(&mut self.name);
        self.name_error = None;
    }

    pub fn input_email(&mut self, value: &str) {
        value.clone_into(&mut self.email);
        self.email_error = None;
    }

    pub fn set_consent(&mut self, consent: bool) {
        self.marketing_consent = consent;
    }

    /// Runs the name rule, recording or clearing its inline error.
    pub fn blur_name(&mut self) -> bool {
        self.name_error = validate_name(&self.name).err();
        self.name_error.is_none()
    }

    pub fn blur_email(&mut self) -> bool {
        self.email_error = validate_email(&self.email).err();
        self.email_error.is_none()
    }

    /// Clears both errors and re-runs both rules regardless of prior blur
    /// state. Returns the trimmed values only when both pass.
    pub fn validate_for_submit(&mut self) -> Option<ValidatedForm> {
        self.name_error = None;
        self.email_error = None;
        let name_ok = self.blur_name();
        let email_ok = self.blur_email();
        if !(name_ok && email_ok) {
            return None;
        }
        Some(ValidatedForm {
            customer_name: self.name.trim().to_string(),
            customer_email: self.email.trim().to_string(),
            marketing_consent: self.marketing_consent,
        })
    }
}
