//! Request and response shapes of the Postiz public API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::settings::PlatformSettings;

/// A connected social media account (`GET /integrations`).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub id: String,
    /// Platform type, e.g. `x`, `linkedin`, `instagram`.
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_identifier: Option<String>,
}

/// Uploaded media as returned by `POST /upload`.
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
pub struct MediaReference {
    pub id: String,
    pub path: String,
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub date: String,
    pub short_link: bool,
    pub tags: Vec<String>,
    pub posts: Vec<PostEntry>,
}

impl CreatePostRequest {
    /// A scheduled post with no short-linking and no tags.
    pub fn schedule(date: impl Into<String>, posts: Vec<PostEntry>) -> Self {
        Self {
            kind: "schedule",
            date: date.into(),
            short_link: false,
            tags: Vec::new(),
            posts,
        }
    }
}

/// One target integration within a [`CreatePostRequest`].
#[derive(Debug, Clone, Serialize)]
pub struct PostEntry {
    pub integration: IntegrationRef,
    pub value: Vec<PostValue>,
    pub settings: PlatformSettings,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IntegrationRef {
    pub id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostValue {
    pub content: String,
    pub image: Vec<MediaReference>,
}

/// Response of `GET /posts`. A missing `posts` field reads as no posts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    #[serde(default)]
    pub integration: Option<PostIntegration>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Post {
    /// Provider identifier of the integration the post belongs to.
    pub fn platform(&self) -> Option<&str> {
        self.integration
            .as_ref()
            .and_then(|i| i.provider_identifier.as_deref())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostIntegration {
    #[serde(default)]
    pub provider_identifier: Option<String>,
}

/// Inclusive publish-date window for `GET /posts`, as ISO 8601 strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start_date: String,
    pub end_date: String,
}

impl DateRange {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// URL-encoded query string, e.g. `startDate=...&endDate=...`.
    pub fn to_query(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("startDate", &self.start_date)
            .append_pair("endDate", &self.end_date)
            .finish()
    }
}
