use serde::{Deserialize, Serialize};
use std::fmt;

/// Email/password pair typed into the login form.
///
/// Serializes to the variables of the login mutation.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credentials {
    /// The email address the account was registered with.
    pub email: String,

    /// Plaintext password, only ever sent to the login mutation.
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Profile of the signed-in user as returned by the `me` field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Federated identifier of the actor.
    pub id: String,

    /// Identifier local to this instance.
    #[serde(default)]
    pub local_id: Option<String>,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Account email address.
    #[serde(default)]
    pub email: Option<String>,

    /// Handle used in mentions.
    #[serde(default)]
    pub preferred_username: Option<String>,

    /// Avatar URL.
    #[serde(default)]
    pub icon: Option<String>,

    /// Free-form profile text.
    #[serde(default)]
    pub summary: Option<String>,
}

impl User {
    /// Best human-readable label for the user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.preferred_username.as_deref())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// The client-side record of who is signed in.
///
/// The default value is the unauthenticated session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub is_authenticated: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub profile: Option<User>,
}

impl UserSession {
    /// Session created from a successful login.
    pub fn authenticated(token: impl Into<String>, profile: User) -> Self {
        Self {
            is_authenticated: true,
            token: Some(token.into()),
            profile: Some(profile),
        }
    }

    /// Bearer token to attach to requests, if signed in.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        if self.is_authenticated {
            self.token.as_deref()
        } else {
            None
        }
    }
}
