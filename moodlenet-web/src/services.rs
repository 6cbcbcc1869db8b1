//! Collaborators the pages talk to, provided through a Yew context.

use std::fmt;
use std::rc::Rc;

use shared::auth::Authenticator;
use shared::pagination::CommunityFetcher;
use yew::{hook, use_context};

use crate::api::MoodleNetClient;

/// Backend access for the pages.
///
/// Provided by `App`; pages rendered without a provider fall back to the
/// shared GraphQL client.
#[derive(Clone)]
pub struct Services {
    pub authenticator: Rc<dyn Authenticator>,
    pub fetcher: Rc<dyn CommunityFetcher>,
}

impl Services {
    /// Both collaborators backed by one client.
    pub fn from_client(client: MoodleNetClient) -> Self {
        let client = Rc::new(client);
        Self {
            authenticator: client.clone(),
            fetcher: client,
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::from_client(MoodleNetClient::shared())
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.authenticator), Rc::as_ptr(&other.authenticator))
            && std::ptr::addr_eq(Rc::as_ptr(&self.fetcher), Rc::as_ptr(&other.fetcher))
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

/// The services in context, or the shared client's.
#[hook]
pub fn use_services() -> Services {
    use_context::<Services>().unwrap_or_default()
}
