//! # Authentication
//!
//! Login form validation, the login state machine and route guards.

pub mod guard;
pub mod login;
pub mod validation;

pub use guard::{GuardDecision, guard_login, guard_protected};
pub use login::{Authenticator, LoginPhase, LoginState, SubmitOutcome, sign_in};
pub use validation::{ValidationField, ValidationObject, ValidationType, validate_credentials};
