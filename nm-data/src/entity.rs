use serde::{Deserialize, Serialize};
use std::fmt;

/// Which management table a row belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Keyword,
    Platform,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Keyword, EntityKind::Platform];

    /// Element id prefix of the per-row delete forms rendered by the server.
    pub fn delete_form_prefix(&self) -> &'static str {
        match self {
            EntityKind::Keyword => "deleteKeywordForm_",
            EntityKind::Platform => "deletePlatformForm_",
        }
    }

    /// Extract the row id from a delete form's element id.
    ///
    /// Returns `None` when the element id belongs to another kind or the id
    /// part is empty.
    pub fn parse_delete_form_id(&self, element_id: &str) -> Option<EntityId> {
        element_id
            .strip_prefix(self.delete_form_prefix())
            .filter(|id| !id.is_empty())
            .map(EntityId::from)
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Keyword => "keyword",
            EntityKind::Platform => "platform",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Row id of a keyword or platform, as rendered into the page.
///
/// The server uses string ids (`platform_3`); older pages use integers.
/// Both normalize to the same textual form so `42` and `"42"` are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.trim().to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self::from(id.as_str())
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
