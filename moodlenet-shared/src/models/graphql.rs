//! GraphQL wire envelope and the payloads of the operations the client uses.

use serde::{Deserialize, Serialize};

use super::{CommunityPage, Cursor, User};

/// Body of a GraphQL `POST`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<&'a str>,
}

impl<'a, V: Serialize> GraphQlRequest<'a, V> {
    pub fn new(operation_name: &'a str, query: &'a str, variables: V) -> Self {
        Self {
            query,
            variables,
            operation_name: Some(operation_name),
        }
    }
}

/// A single entry of the `errors` array.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<serde_json::Value>,
}

impl GraphQlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Vec::new(),
        }
    }
}

/// Response envelope: `data` and/or `errors`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Split the envelope into its data or its errors.
    ///
    /// Any reported error wins over partial data.
    ///
    /// # Errors
    /// Returns the `errors` array when it is not empty.
    pub fn into_result(self) -> Result<Option<T>, Vec<GraphQlError>> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(self.errors)
        }
    }
}

/// Result of the `createSession` mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginPayload {
    pub token: String,
    pub me: User,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionData {
    pub create_session: Option<LoginPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeData {
    pub me: Option<User>,
}

/// Variables of the communities query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CommunitiesVariables {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommunitiesData {
    pub communities: Option<CommunityPage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_operation_name_in_camel_case() {
        let request = GraphQlRequest::new(
            "getCommunities",
            "query getCommunities { communities { nodes { id } } }",
            CommunitiesVariables {
                limit: 15,
                cursor: None,
            },
        );
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["operationName"], "getCommunities");
        assert_eq!(value["variables"], serde_json::json!({ "limit": 15 }));
    }

    #[test]
    fn test_variables_include_cursor_when_present() {
        let variables = CommunitiesVariables {
            limit: 15,
            cursor: Some(Cursor::Number(30)),
        };
        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            serde_json::json!({ "limit": 15, "cursor": 30 })
        );
    }

    #[test]
    fn test_create_session_response_parses() {
        let json = r#"{
            "data": {
                "createSession": {
                    "token": "abc",
                    "me": { "id": "u1", "email": "moodle@moodle.net" }
                }
            }
        }"#;
        let response: GraphQlResponse<CreateSessionData> = serde_json::from_str(json).unwrap();
        let payload = response
            .into_result()
            .unwrap()
            .and_then(|data| data.create_session)
            .unwrap();
        assert_eq!(payload.token, "abc");
        assert_eq!(payload.me.email.as_deref(), Some("moodle@moodle.net"));
    }

    #[test]
    fn test_errors_take_precedence_over_data() {
        let json = r#"{
            "data": { "createSession": null },
            "errors": [{ "message": "invalid_credential", "path": ["createSession"] }]
        }"#;
        let response: GraphQlResponse<CreateSessionData> = serde_json::from_str(json).unwrap();
        let errors = response.into_result().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "invalid_credential");
    }

    #[test]
    fn test_missing_data_is_none() {
        let response: GraphQlResponse<MeData> = serde_json::from_str("{}").unwrap();
        assert!(response.into_result().unwrap().is_none());
    }
}
