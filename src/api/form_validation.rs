use regex::Regex;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::error::MotionResult;

use super::config_validation::{compile_email_pattern, validate_form_validation_config};

pub const CONTACT_SENDING: &str = "Sending...";
pub const CONTACT_SENT: &str = "Message sent! We'll get back to you as soon as possible.";
pub const NEWSLETTER_PENDING: &str = "Subscribing...";
pub const NEWSLETTER_DONE: &str = "Thank you for subscribing!";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValidationConfig {
    pub name_min_chars: usize,
    pub message_min_chars: usize,
    pub email_pattern: String,
    /// Delay before the contact form reports success.
    pub contact_confirm_ms: f64,
    /// Delay before the newsletter form reports success.
    pub newsletter_confirm_ms: f64,
}

impl Default for FormValidationConfig {
    fn default() -> Self {
        Self {
            name_min_chars: 2,
            message_min_chars: 10,
            email_pattern: r"^\S+@\S+\.\S+$".to_owned(),
            contact_confirm_ms: 1000.0,
            newsletter_confirm_ms: 800.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    /// Name, email and message.
    Contact,
    /// Email only.
    Newsletter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Email,
    Message,
}

/// Message shown next to one invalid field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

pub type FieldErrors = SmallVec<[FieldError; 3]>;

/// Raw field values as typed; surrounding whitespace is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    #[must_use]
    pub fn contact(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_owned(),
            email: email.to_owned(),
            message: message.to_owned(),
        }
    }

    #[must_use]
    pub fn newsletter(email: &str) -> Self {
        Self {
            email: email.to_owned(),
            ..Self::default()
        }
    }
}

/// Field rules shared by the contact and newsletter forms.
#[derive(Debug, Clone)]
pub struct FormValidator {
    config: FormValidationConfig,
    email: Regex,
}

impl FormValidator {
    pub fn new(config: FormValidationConfig) -> MotionResult<Self> {
        validate_form_validation_config(&config)?;
        let email = compile_email_pattern(&config.email_pattern)?;
        Ok(Self { config, email })
    }

    #[must_use]
    pub fn config(&self) -> &FormValidationConfig {
        &self.config
    }

    #[must_use]
    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email.is_match(email.trim())
    }

    /// Checks the fields a form of `kind` carries, in display order.
    #[must_use]
    pub fn validate(&self, kind: FormKind, fields: &FormFields) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if kind == FormKind::Contact && fields.name.trim().chars().count() < self.config.name_min_chars {
            errors.push(FieldError {
                field: FormField::Name,
                message: format!(
                    "Name must be at least {} characters.",
                    self.config.name_min_chars
                ),
            });
        }
        if !self.is_valid_email(&fields.email) {
            errors.push(FieldError {
                field: FormField::Email,
                message: INVALID_EMAIL.to_owned(),
            });
        }
        if kind == FormKind::Contact
            && fields.message.trim().chars().count() < self.config.message_min_chars
        {
            errors.push(FieldError {
                field: FormField::Message,
                message: format!(
                    "Message must be at least {} characters.",
                    self.config.message_min_chars
                ),
            });
        }
        errors
    }
}

/// What the form shows after a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fields passed; the status line shows the pending text.
    Accepted { status: &'static str },
    /// Fields failed; nothing is pending.
    Rejected { errors: FieldErrors },
    /// A previous submission is still pending.
    Busy,
}

/// Validated submit with a delayed confirmation. Nothing is sent.
#[derive(Debug, Clone)]
pub struct ValidatedForm {
    kind: FormKind,
    validator: FormValidator,
    pending_since_ms: Option<f64>,
    status: Option<&'static str>,
}

impl ValidatedForm {
    pub fn new(kind: FormKind, config: FormValidationConfig) -> MotionResult<Self> {
        Ok(Self::with_validator(kind, FormValidator::new(config)?))
    }

    #[must_use]
    pub fn with_validator(kind: FormKind, validator: FormValidator) -> Self {
        Self {
            kind,
            validator,
            pending_since_ms: None,
            status: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Current status line, if any.
    #[must_use]
    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending_since_ms.is_some()
    }

    pub fn submit(&mut self, fields: &FormFields, now_ms: f64) -> SubmitOutcome {
        if self.is_pending() {
            debug!(kind = ?self.kind, "submit ignored while pending");
            return SubmitOutcome::Busy;
        }
        let errors = self.validator.validate(self.kind, fields);
        if !errors.is_empty() {
            debug!(kind = ?self.kind, invalid = errors.len(), "form rejected");
            // The newsletter form reports its only error on the status line.
            if self.kind == FormKind::Newsletter {
                self.status = Some(INVALID_EMAIL);
            }
            return SubmitOutcome::Rejected { errors };
        }
        let status = match self.kind {
            FormKind::Contact => CONTACT_SENDING,
            FormKind::Newsletter => NEWSLETTER_PENDING,
        };
        self.pending_since_ms = Some(now_ms);
        self.status = Some(status);
        SubmitOutcome::Accepted { status }
    }

    /// Confirms a pending submission once its delay passed.
    ///
    /// Returns `true` exactly once per submission; the host then clears the
    /// form fields.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let Some(since_ms) = self.pending_since_ms else {
            return false;
        };
        let (delay_ms, done) = match self.kind {
            FormKind::Contact => (self.validator.config.contact_confirm_ms, CONTACT_SENT),
            FormKind::Newsletter => (self.validator.config.newsletter_confirm_ms, NEWSLETTER_DONE),
        };
        if now_ms < since_ms + delay_ms {
            return false;
        }
        self.pending_since_ms = None;
        self.status = Some(done);
        debug!(kind = ?self.kind, "form submission confirmed");
        true
    }
}
