use crate::client::builder::HnClientBuilder;
use crate::config::Config;
use crate::transport::HttpTransport;
use crate::types::{Item, StoryList, User};
use crate::Result;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Hacker News API client.
///
/// Cheap to clone; clones share the connection pool and configuration.
#[derive(Debug, Clone)]
pub struct HnClient {
    pub(crate) config: Arc<Config>,
    pub(crate) transport: Arc<HttpTransport>,
}

impl HnClient {
    /// Client for the public API with default settings.
    pub fn new() -> Result<Self> {
        HnClientBuilder::new().build()
    }

    pub fn builder() -> HnClientBuilder {
        HnClientBuilder::new()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// Fetch a single item by ID.
    pub async fn get_item(&self, id: u64, cancel: &CancellationToken) -> Result<Item> {
        let file = format!("{}.json", id);
        self.transport
            .get_json(&["item", file.as_str()], cancel)
            .await
            .map_err(|e| e.for_resource(format!("item {}", id)))
    }

    /// Fetch a user profile. Usernames are case-sensitive.
    pub async fn get_user(&self, username: &str, cancel: &CancellationToken) -> Result<User> {
        let file = format!("{}.json", username);
        self.transport
            .get_json(&["user", file.as_str()], cancel)
            .await
            .map_err(|e| e.for_resource(format!("user {}", username)))
    }

    /// Fetch the IDs of a ranked story list, in rank order.
    pub async fn get_story_ids(
        &self,
        list: StoryList,
        cancel: &CancellationToken,
    ) -> Result<Vec<u64>> {
        self.transport
            .get_json(&[list.endpoint()], cancel)
            .await
            .map_err(|e| e.for_resource(format!("stories from {}", list.endpoint())))
    }

    pub async fn get_top_stories(&self, cancel: &CancellationToken) -> Result<Vec<u64>> {
        self.get_story_ids(StoryList::Top, cancel).await
    }

    pub async fn get_new_stories(&self, cancel: &CancellationToken) -> Result<Vec<u64>> {
        self.get_story_ids(StoryList::New, cancel).await
    }

    pub async fn get_best_stories(&self, cancel: &CancellationToken) -> Result<Vec<u64>> {
        self.get_story_ids(StoryList::Best, cancel).await
    }

    pub async fn get_ask_stories(&self, cancel: &CancellationToken) -> Result<Vec<u64>> {
        self.get_story_ids(StoryList::Ask, cancel).await
    }

    pub async fn get_show_stories(&self, cancel: &CancellationToken) -> Result<Vec<u64>> {
        self.get_story_ids(StoryList::Show, cancel).await
    }

    pub async fn get_job_stories(&self, cancel: &CancellationToken) -> Result<Vec<u64>> {
        self.get_story_ids(StoryList::Job, cancel).await
    }
}
