//! Items and ranked story lists.

use serde::{Deserialize, Serialize};

/// A story, comment, job, poll or poll option.
///
/// Only `id` is guaranteed on the wire; absent fields take their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
    #[serde(rename = "type", default)]
    pub kind: ItemType,
    /// Username of the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    /// Creation time, unix seconds.
    #[serde(default)]
    pub time: i64,
    /// HTML text of a comment, story or poll.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dead: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u64>,
    /// The poll a pollopt belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poll: Option<u64>,
    /// Comment IDs in ranked display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kids: Vec<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Poll options in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<u64>,
    /// Total comment count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descendants: Option<u64>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Job,
    #[default]
    Story,
    Comment,
    Poll,
    #[serde(rename = "pollopt")]
    PollOpt,
    #[serde(other)]
    Unknown,
}

/// Ranked lists of story IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoryList {
    Top,
    New,
    Best,
    Ask,
    Show,
    Job,
}

impl StoryList {
    pub const ALL: [StoryList; 6] = [
        StoryList::Top,
        StoryList::New,
        StoryList::Best,
        StoryList::Ask,
        StoryList::Show,
        StoryList::Job,
    ];

    /// Endpoint path relative to the API root.
    pub fn endpoint(&self) -> &'static str {
        match self {
            StoryList::Top => "topstories.json",
            StoryList::New => "newstories.json",
            StoryList::Best => "beststories.json",
            StoryList::Ask => "askstories.json",
            StoryList::Show => "showstories.json",
            StoryList::Job => "jobstories.json",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoryList::Top => "top",
            StoryList::New => "new",
            StoryList::Best => "best",
            StoryList::Ask => "ask",
            StoryList::Show => "show",
            StoryList::Job => "job",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.name() == name)
    }
}
