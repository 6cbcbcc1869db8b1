//! # Login Flow
//!
//! The login form as explicit state plus transitions. A submission is run in
//! three steps: [`LoginState::submit`] decides whether to send anything,
//! [`sign_in`] talks to the injected [`Authenticator`] and [`SessionStore`],
//! and [`LoginState::finish`] applies the result.
//!
//! ```text
//! Idle ─submit─▶ Validating ─┬─▶ Invalid
//!                            └─▶ Authenticating ─┬─▶ Authenticated
//!                                                └─▶ Failed
//! ```

use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::validation::{ValidationField, ValidationObject, clear_field, validate_credentials};
use crate::errors::AuthResult;
use crate::models::{Credentials, LoginPayload, UserSession};
use crate::session::SessionStore;

/// Exchanges credentials for a session token and profile.
#[async_trait(?Send)]
pub trait Authenticator {
    /// Run the login mutation.
    ///
    /// # Errors
    /// Returns an error for transport failures, rejected credentials and
    /// responses without a session payload.
    async fn authenticate(&self, credentials: &Credentials) -> AuthResult<LoginPayload>;
}

#[async_trait(?Send)]
impl<A: Authenticator + ?Sized> Authenticator for &A {
    async fn authenticate(&self, credentials: &Credentials) -> AuthResult<LoginPayload> {
        (**self).authenticate(credentials).await
    }
}

/// Where the login form currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginPhase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A submission is being checked.
    Validating,
    /// The last submission had empty fields.
    Invalid,
    /// The login request is in flight.
    Authenticating,
    /// The session was created and stored.
    Authenticated,
    /// The login request failed.
    Failed,
}

/// What the caller has to do after [`LoginState::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; the entries are on the state. Nothing to send.
    Invalid,
    /// Send exactly these credentials to the authenticator.
    Authenticate(Credentials),
    /// A request is already outstanding; the submit was ignored.
    Busy,
}

/// State of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    phase: LoginPhase,
    validation: Vec<ValidationObject>,
}

impl LoginState {
    /// An idle form with no messages.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    /// Messages to render, field-scoped and form-level.
    #[must_use]
    pub fn validation(&self) -> &[ValidationObject] {
        &self.validation
    }

    /// Whether a login request is outstanding.
    #[must_use]
    pub fn is_authenticating(&self) -> bool {
        self.phase == LoginPhase::Authenticating
    }

    /// Validate a submission and decide whether to authenticate.
    ///
    /// The validation set is recomputed from scratch on every submission.
    pub fn submit(&mut self, credentials: Credentials) -> SubmitOutcome {
        if self.is_authenticating() {
            debug!("login submit ignored, request outstanding");
            return SubmitOutcome::Busy;
        }

        self.phase = LoginPhase::Validating;
        self.validation = validate_credentials(&credentials);

        if self.validation.is_empty() {
            self.phase = LoginPhase::Authenticating;
            SubmitOutcome::Authenticate(credentials)
        } else {
            debug!(entries = self.validation.len(), "login form invalid");
            self.phase = LoginPhase::Invalid;
            SubmitOutcome::Invalid
        }
    }

    /// The session was created and persisted.
    pub fn authentication_succeeded(&mut self) {
        self.phase = LoginPhase::Authenticated;
        self.validation.clear();
    }

    /// The request failed for whatever reason; show the generic warning.
    pub fn authentication_failed(&mut self) {
        self.phase = LoginPhase::Failed;
        self.validation = vec![ValidationObject::credentials_rejected()];
    }

    /// Apply the result of [`sign_in`].
    ///
    /// Failures are logged and collapse into the generic warning. A result
    /// arriving when no request is outstanding is ignored.
    pub fn finish(&mut self, result: &AuthResult<UserSession>) {
        if !self.is_authenticating() {
            debug!("login result ignored, no request outstanding");
            return;
        }
        match result {
            Ok(_) => self.authentication_succeeded(),
            Err(err) => {
                warn!(error = %err, "login failed");
                self.authentication_failed();
            }
        }
    }

    /// The user edited `field`.
    pub fn input_changed(&mut self, field: ValidationField) {
        clear_field(&mut self.validation, field);
    }
}

/// Authenticate and persist the resulting session.
///
/// The session is written to `store` before this returns, so anything that
/// reads the store afterwards sees the new session.
///
/// # Errors
/// Returns the authenticator's error, or a storage error if the session
/// could not be written. In both cases the store is left as it was.
pub async fn sign_in<A, S>(
    authenticator: &A,
    store: &S,
    credentials: &Credentials,
) -> AuthResult<UserSession>
where
    A: Authenticator + ?Sized,
    S: SessionStore + ?Sized,
{
    let LoginPayload { token, me } = authenticator.authenticate(credentials).await?;
    let session = UserSession::authenticated(token, me);
    store.save(&session)?;
    let user_id = session.profile.as_ref().map_or("", |user| user.id.as_str());
    info!(user = %user_id, "signed in");
    Ok(session)
}
