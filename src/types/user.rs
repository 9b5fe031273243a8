use serde::{Deserialize, Serialize};

/// A user profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Case-sensitive username.
    pub id: String,
    /// Creation time, unix seconds.
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub karma: i64,
    /// Self-description, HTML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// IDs of the user's stories, polls and comments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub submitted: Vec<u64>,
}
