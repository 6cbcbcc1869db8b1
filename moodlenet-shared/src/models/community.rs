use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque pagination token.
///
/// The backend has sent both numeric and string cursors over time, so both
/// are accepted and sent back exactly as received.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Cursor {
    Number(i64),
    Text(String),
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

/// Cursors bounding the page that was just fetched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub start_cursor: Option<Cursor>,
    #[serde(default)]
    pub end_cursor: Option<Cursor>,
}

/// `{ totalCount }` wrapper used for the community counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

/// Summary of a community as shown in listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    /// Federated identifier.
    pub id: String,
    /// Identifier local to this instance, used in links.
    pub local_id: String,
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub followed: bool,
    #[serde(default)]
    pub members: TotalCount,
    #[serde(default)]
    pub collections: TotalCount,
    #[serde(default)]
    pub threads: TotalCount,
}

/// One page of a cursor-paginated connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub nodes: Vec<T>,
    #[serde(default)]
    pub page_info: PageInfo,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

/// One page of the communities connection.
pub type CommunityPage = Page<Community>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_accepts_numbers_and_strings() {
        let number: Cursor = serde_json::from_str("42").unwrap();
        let text: Cursor = serde_json::from_str(r#""g3QAAAABZA""#).unwrap();
        assert_eq!(number, Cursor::Number(42));
        assert_eq!(text, Cursor::Text("g3QAAAABZA".to_string()));
        assert_eq!(number.to_string(), "42");
        assert_eq!(serde_json::to_string(&text).unwrap(), r#""g3QAAAABZA""#);
    }

    #[test]
    fn test_community_page_deserializes_graphql_shape() {
        let json = r#"{
            "nodes": [{
                "id": "https://moodle.net/communities/7",
                "localId": "7",
                "name": "Teachers",
                "summary": "A place for teachers",
                "icon": null,
                "followed": true,
                "members": { "totalCount": 12 },
                "collections": { "totalCount": 3 },
                "threads": { "totalCount": 5 }
            }],
            "pageInfo": { "startCursor": 7, "endCursor": 7 }
        }"#;
        let page: CommunityPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.nodes.len(), 1);
        let community = &page.nodes[0];
        assert_eq!(community.local_id, "7");
        assert!(community.followed);
        assert!(community.icon.is_none());
        assert_eq!(community.members.total_count, 12);
        assert_eq!(community.threads.total_count, 5);
        assert_eq!(page.page_info.end_cursor, Some(Cursor::Number(7)));
    }

    #[test]
    fn test_page_info_tolerates_null_cursors() {
        let info: PageInfo =
            serde_json::from_str(r#"{"startCursor":null,"endCursor":null}"#).unwrap();
        assert_eq!(info, PageInfo::default());
    }
}
