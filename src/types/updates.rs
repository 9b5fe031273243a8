use serde::{Deserialize, Deserializer, Serialize};

/// One poll of the `updates.json` change feed.
///
/// A batch with both lists empty is a no-op and is never delivered on an
/// [`UpdateStream`](crate::updates::UpdateStream).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBatch {
    /// IDs of changed or new items.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<u64>,
    /// Usernames of changed profiles.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub profiles: Vec<String>,
}

impl UpdateBatch {
    pub fn new(items: Vec<u64>, profiles: Vec<String>) -> Self {
        Self { items, profiles }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.profiles.is_empty()
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
