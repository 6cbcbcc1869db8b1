//! Validation of the login form.
//!
//! Messages are translation keys; the web front end resolves them through
//! its i18n bundles.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::models::Credentials;

/// Translation key shown when the email field is empty.
pub const EMAIL_REQUIRED: &str = "login.validation.email";

/// Translation key shown when the password field is empty.
pub const PASSWORD_REQUIRED: &str = "login.validation.password";

/// Translation key shown when the backend refused to create a session.
pub const CREDENTIALS_REJECTED: &str = "login.validation.credentials";

/// Form fields a validation entry can be attached to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ValidationField {
    /// The email input.
    Email,
    /// The password input.
    Password,
}

/// Severity of a validation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ValidationType {
    /// Blocks submission until the field is fixed.
    Error,
    /// Informational; shown above the form.
    Warning,
}

/// A single field-scoped or form-level message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationObject {
    /// Field the message belongs to, `None` for the whole form.
    pub field: Option<ValidationField>,
    pub kind: ValidationType,
    /// Translation key of the text to show.
    pub message: String,
}

impl ValidationObject {
    /// An error attached to `field`.
    pub fn error(field: ValidationField, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            kind: ValidationType::Error,
            message: message.into(),
        }
    }

    /// The form-level warning shown after a failed login attempt.
    #[must_use]
    pub fn credentials_rejected() -> Self {
        Self {
            field: None,
            kind: ValidationType::Warning,
            message: CREDENTIALS_REJECTED.to_string(),
        }
    }
}

/// Validate the submitted credentials.
///
/// Both fields are checked so that every failure is reported at once. An
/// empty result means the credentials may be sent.
#[must_use]
pub fn validate_credentials(credentials: &Credentials) -> Vec<ValidationObject> {
    let mut validation = Vec::new();

    if credentials.email.is_empty() {
        validation.push(ValidationObject::error(
            ValidationField::Email,
            EMAIL_REQUIRED,
        ));
    }
    if credentials.password.is_empty() {
        validation.push(ValidationObject::error(
            ValidationField::Password,
            PASSWORD_REQUIRED,
        ));
    }

    validation
}

/// Drop the entries of `field` and every form-level entry.
pub fn clear_field(validation: &mut Vec<ValidationObject>, field: ValidationField) {
    validation.retain(|entry| entry.field.is_some_and(|existing| existing != field));
}

/// Entries attached to `field`.
pub fn entries_for(
    validation: &[ValidationObject],
    field: Option<ValidationField>,
) -> impl Iterator<Item = &ValidationObject> {
    validation.iter().filter(move |entry| entry.field == field)
}
