use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a saved query, normalized to its string form.
///
/// Persistence layers have historically sent both numeric and string ids,
/// so every id is normalized to a string at the boundary and compared by
/// string equality from then on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryId(String);

impl QueryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QueryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for QueryId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<u64> for QueryId {
    fn from(id: u64) -> Self {
        Self::new(id.to_string())
    }
}

impl From<i64> for QueryId {
    fn from(id: i64) -> Self {
        Self::new(id.to_string())
    }
}

impl Serialize for QueryId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for QueryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = QueryId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a string or numeric query id")
            }

            fn visit_str<E: de::Error>(self, id: &str) -> Result<QueryId, E> {
                Ok(QueryId::new(id))
            }

            fn visit_u64<E: de::Error>(self, id: u64) -> Result<QueryId, E> {
                Ok(QueryId::new(id.to_string()))
            }

            fn visit_i64<E: de::Error>(self, id: i64) -> Result<QueryId, E> {
                Ok(QueryId::new(id.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// One persisted named query belonging to a playground collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuery {
    pub id: QueryId,
    pub name: String,
    /// GraphQL source text.
    pub query: String,
    #[serde(default)]
    pub is_default: bool,
    /// Foreign association, opaque to the toolbar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgraph_id: Option<u64>,
    /// Foreign association, opaque to the toolbar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_id: Option<String>,
}

impl SavedQuery {
    pub fn new(id: impl Into<QueryId>, name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            query: query.into(),
            is_default: false,
            subgraph_id: None,
            version_id: None,
        }
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    pub fn with_subgraph_id(mut self, subgraph_id: u64) -> Self {
        self.subgraph_id = Some(subgraph_id);
        self
    }

    pub fn with_version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }
}
