use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Error};
use serde::{Serialize, de::DeserializeOwned};
use shared::auth::Authenticator;
use shared::errors::{AuthResult, AuthenticationError, FetchError, FetchResult};
use shared::models::{
    CommunitiesData, CommunitiesVariables, CommunityPage, CreateSessionData, Credentials,
    GraphQlRequest, GraphQlResponse, LoginPayload, MeData, User,
};
use shared::pagination::CommunityFetcher;
use std::sync::{Arc, Mutex};

use crate::config::FrontendConfig;

const LOGIN_MUTATION: &str = r"
mutation createSession($email: String!, $password: String!) {
  createSession(email: $email, password: $password) {
    token
    me { id localId name email preferredUsername icon summary }
  }
}";

const GET_COMMUNITIES_QUERY: &str = r"
query getCommunities($limit: Int, $cursor: Cursor) {
  communities(limit: $limit, after: $cursor) {
    pageInfo { startCursor endCursor }
    nodes {
      id
      localId
      name
      summary
      icon
      followed
      members { totalCount }
      collections { totalCount }
      threads { totalCount }
    }
  }
}";

const ME_QUERY: &str = r"
query getMe {
  me { id localId name email preferredUsername icon summary }
}";

thread_local! {
    static SHARED_CLIENT: OnceCell<MoodleNetClient> = OnceCell::new();
}

/// GraphQL client for the MoodleNet API.
#[derive(Clone, Debug)]
pub struct MoodleNetClient {
    endpoint: String,
    client: Client,
    token: Arc<Mutex<Option<String>>>,
}

impl MoodleNetClient {
    /// Create a client posting to `endpoint`.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(&FrontendConfig::default().graphql_url()))
                .clone()
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Set or forget the bearer token sent with every request.
    pub fn set_token(&self, token: Option<String>) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = token;
        }
    }

    pub fn current_token(&self) -> Option<String> {
        self.token
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    async fn execute<V, T>(
        &self,
        operation_name: &str,
        query: &str,
        variables: V,
    ) -> Result<GraphQlResponse<T>, Error>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest::new(operation_name, query, variables);
        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = self.current_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?.error_for_status()?;
        response.json().await
    }

    /// Fetch the profile belonging to the current token.
    pub async fn me(&self) -> FetchResult<User> {
        let response: GraphQlResponse<MeData> = self
            .execute("getMe", ME_QUERY, NoVariables {})
            .await
            .map_err(transport)?;
        response
            .into_result()
            .map_err(|errors| FetchError::GraphQl { errors })?
            .and_then(|data| data.me)
            .ok_or_else(|| FetchError::MissingData {
                field: "me".to_string(),
            })
    }
}

#[async_trait(?Send)]
impl Authenticator for MoodleNetClient {
    async fn authenticate(&self, credentials: &Credentials) -> AuthResult<LoginPayload> {
        let response: GraphQlResponse<CreateSessionData> = self
            .execute("createSession", LOGIN_MUTATION, credentials)
            .await
            .map_err(|err| AuthenticationError::Transport {
                message: err.to_string(),
            })?;
        response
            .into_result()
            .map_err(|errors| AuthenticationError::Rejected { errors })?
            .and_then(|data| data.create_session)
            .ok_or_else(|| AuthenticationError::MalformedResponse {
                details: "createSession returned no session".to_string(),
            })
    }
}

#[async_trait(?Send)]
impl CommunityFetcher for MoodleNetClient {
    async fn fetch_communities(
        &self,
        variables: CommunitiesVariables,
    ) -> FetchResult<CommunityPage> {
        let response: GraphQlResponse<CommunitiesData> = self
            .execute("getCommunities", GET_COMMUNITIES_QUERY, variables)
            .await
            .map_err(transport)?;
        response
            .into_result()
            .map_err(|errors| FetchError::GraphQl { errors })?
            .and_then(|data| data.communities)
            .ok_or_else(|| FetchError::MissingData {
                field: "communities".to_string(),
            })
    }
}

fn transport(err: Error) -> FetchError {
    FetchError::Transport {
        message: err.to_string(),
    }
}

/// Variables of operations without arguments, sent as `{}`.
#[derive(Serialize)]
struct NoVariables {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_has_no_token() {
        let client = MoodleNetClient::new("http://localhost:4000/api/graphql");
        assert_eq!(client.endpoint(), "http://localhost:4000/api/graphql");
        assert!(client.current_token().is_none());
    }

    #[test]
    fn test_token_is_shared_between_clones() {
        let client = MoodleNetClient::new("http://localhost:4000/api/graphql");
        let clone = client.clone();
        client.set_token(Some("tok".to_string()));
        assert_eq!(clone.current_token().as_deref(), Some("tok"));
        clone.set_token(None);
        assert!(client.current_token().is_none());
    }

    #[test]
    fn test_operation_documents_name_their_operations() {
        assert!(LOGIN_MUTATION.contains("mutation createSession"));
        assert!(GET_COMMUNITIES_QUERY.contains("query getCommunities"));
        assert!(GET_COMMUNITIES_QUERY.contains("endCursor"));
        assert!(ME_QUERY.contains("query getMe"));
    }
}
