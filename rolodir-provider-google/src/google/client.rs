//! HTTP client for the Google contacts and groups feeds.
//!
//! Speaks the JSON representation of the feeds. Paging is not handled;
//! the feed is requested with a large page size instead.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::entry::{ContactEntry, GroupEntry};
use crate::google_contact::EntryStore;

const CONTACTS_FEED_URL: &str = "https://www.google.com/m8/feeds/contacts/default/full";
const GROUPS_FEED_URL: &str = "https://www.google.com/m8/feeds/groups/default/full";
const MAX_RESULTS: &str = "10000";

pub struct ContactsClient {
    http: reqwest::Client,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Feed<T> {
    #[serde(default)]
    entries: Vec<T>,
    #[serde(default)]
    author: Vec<FeedAuthor>,
}

#[derive(Debug, Deserialize)]
struct FeedAuthor {
    #[serde(default)]
    email: Option<String>,
}

impl ContactsClient {
    pub fn new(access_token: impl Into<String>) -> Self {
        ContactsClient {
            http: reqwest::Client::new(),
            access_token: access_token.into(),
        }
    }

    async fn get_feed<T: DeserializeOwned + Default>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<Feed<T>> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(&[("alt", "json"), ("max-results", MAX_RESULTS)])
            .query(query)
            .send()
            .await
            .context("Failed to send feed request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Feed request failed with {}: {}", status, body);
        }

        response.json().await.context("Failed to parse feed response")
    }

    pub async fn list_contacts(&self, group_id: Option<&str>) -> Result<Vec<ContactEntry>> {
        let mut query = Vec::new();
        if let Some(group_id) = group_id {
            query.push(("group", group_id.to_string()));
        }

        let feed: Feed<ContactEntry> = self.get_feed(CONTACTS_FEED_URL, &query).await?;
        Ok(feed.entries)
    }

    pub async fn list_groups(&self) -> Result<Vec<GroupEntry>> {
        let feed: Feed<GroupEntry> = self.get_feed(GROUPS_FEED_URL, &[]).await?;
        Ok(feed.entries)
    }

    /// Email of the authenticated account, read from the feed author.
    pub async fn account_email(&self) -> Result<Option<String>> {
        let feed: Feed<GroupEntry> = self.get_feed(GROUPS_FEED_URL, &[]).await?;
        Ok(feed.author.into_iter().find_map(|a| a.email))
    }
}

#[async_trait]
impl EntryStore for ContactsClient {
    async fn create(&self, entry: &ContactEntry) -> Result<Option<ContactEntry>> {
        let response = self
            .http
            .post(CONTACTS_FEED_URL)
            .bearer_auth(&self.access_token)
            .query(&[("alt", "json")])
            .json(entry)
            .send()
            .await
            .context("Failed to send create request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Create request failed with {}: {}", status, body);
        }

        let created: ContactEntry = response
            .json()
            .await
            .context("Failed to parse created entry")?;

        Ok(Some(created))
    }
}
