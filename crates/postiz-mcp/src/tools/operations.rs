//! Tool handlers: one async function per tool.
//!
//! Handlers take the already-deserialized parameters and a [`SchedulingApi`],
//! and return the success text for the result envelope. Remote calls inside a
//! handler are awaited one after another; later calls depend on earlier
//! results.

use std::collections::HashMap;
use std::path::Path;

use postiz_client::{
    CreatePostRequest, DateRange, Integration, IntegrationRef, PlatformSettings, Post, PostEntry,
    PostValue, SchedulingApi, SettingsOptions,
};
use tracing::{debug, info, warn};

use super::params::{
    DateRangeParams, DeletePostParams, DeletedPost, ListAccountsParams, PostSummary,
    SchedulePostParams, UploadMediaParams,
};
use crate::error::ToolResult;

/// Platform used for integration ids missing from the integrations list.
pub const FALLBACK_PLATFORM: &str = "x";

/// Number of characters kept in a post content preview.
pub const PREVIEW_CHARS: usize = 50;

/// Reply for a bulk delete that matched nothing.
pub const NO_POSTS_FOUND: &str = "No posts found in the specified date range.";

// ── postiz_upload_media ──

pub async fn upload_media(api: &dyn SchedulingApi, params: UploadMediaParams) -> ToolResult<String> {
    let media = api.upload_media(Path::new(&params.file_path)).await?;
    info!(media_id = %media.id, "Media uploaded");

    Ok(format!(
        "File uploaded successfully!\n\nMedia ID: {}\nPath: {}\n\nUse this media ID in postiz_schedule_post",
        media.id, media.path
    ))
}

// ── postiz_schedule_post ──

/// Integration id → platform identifier, fetched fresh for every schedule call.
#[derive(Debug, Clone, Default)]
pub struct PlatformMap(HashMap<String, String>);

impl PlatformMap {
    /// Dependency phase of scheduling: one `GET /integrations`.
    pub async fn fetch(api: &dyn SchedulingApi) -> ToolResult<Self> {
        Ok(Self::from_integrations(api.integrations().await?))
    }

    pub fn from_integrations(integrations: impl IntoIterator<Item = Integration>) -> Self {
        Self(
            integrations
                .into_iter()
                .filter_map(|integration| Some((integration.id, integration.identifier?)))
                .collect(),
        )
    }

    pub fn platform_for(&self, integration_id: &str) -> Option<&str> {
        self.0.get(integration_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Build phase of scheduling: one post entry per requested integration id,
/// all sharing the same content and media.
///
/// Ids absent from `platforms` are posted with the `x` settings shape.
pub fn build_schedule_request(
    params: &SchedulePostParams,
    platforms: &PlatformMap,
) -> CreatePostRequest {
    let options = SettingsOptions {
        instagram_post_type: params.instagram_post_type.unwrap_or_default(),
    };
    let media = params.media.clone().unwrap_or_default();

    let posts = params
        .integration_ids
        .iter()
        .map(|integration_id| {
            let platform = platforms.platform_for(integration_id).unwrap_or_else(|| {
                warn!(
                    integration_id = %integration_id,
                    fallback = FALLBACK_PLATFORM,
                    "Integration not found among connected accounts"
                );
                FALLBACK_PLATFORM
            });

            PostEntry {
                integration: IntegrationRef {
                    id: integration_id.clone(),
                },
                value: vec![PostValue {
                    content: params.content.clone(),
                    image: media.clone(),
                }],
                settings: PlatformSettings::resolve(platform, &options),
            }
        })
        .collect();

    CreatePostRequest::schedule(params.scheduled_date.clone(), posts)
}

pub async fn schedule_post(
    api: &dyn SchedulingApi,
    params: SchedulePostParams,
) -> ToolResult<String> {
    let platforms = PlatformMap::fetch(api).await?;
    debug!(integrations = platforms.len(), "Resolved integration platforms");

    let request = build_schedule_request(&params, &platforms);
    let response = api.create_post(&request).await?;
    info!(
        posts = request.posts.len(),
        date = %params.scheduled_date,
        "Post scheduled"
    );

    Ok(format!(
        "Post scheduled successfully!\n\nIntegrations: {}\nScheduled for: {}\n\nResponse: {}",
        params.integration_ids.join(", "),
        params.scheduled_date,
        serde_json::to_string_pretty(&response)?
    ))
}

// ── postiz_list_accounts ──

pub async fn list_accounts(
    api: &dyn SchedulingApi,
    _params: ListAccountsParams,
) -> ToolResult<String> {
    let integrations = api.list_integrations().await?;
    Ok(format!(
        "Connected accounts:\n\n{}",
        serde_json::to_string_pretty(&integrations)?
    ))
}

// ── postiz_get_posts ──

/// First [`PREVIEW_CHARS`] characters of `content`, followed by `...`.
pub fn content_preview(content: &str) -> String {
    let mut preview: String = content.chars().take(PREVIEW_CHARS).collect();
    preview.push_str("...");
    preview
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            platform: post.platform().map(str::to_string),
            publish_date: post.publish_date.clone(),
            state: post.state.clone(),
            content_preview: post.content.as_deref().map(content_preview),
        }
    }
}

pub async fn get_posts(api: &dyn SchedulingApi, params: DateRangeParams) -> ToolResult<String> {
    let range = DateRange::from(params);
    let response = api.list_posts(&range).await?;
    let summaries: Vec<PostSummary> = response.posts.iter().map(PostSummary::from).collect();

    Ok(format!(
        "Found {} posts:\n\n{}",
        summaries.len(),
        serde_json::to_string_pretty(&summaries)?
    ))
}

// ── postiz_delete_post ──

pub async fn delete_post(api: &dyn SchedulingApi, params: DeletePostParams) -> ToolResult<String> {
    api.delete_post(&params.post_id).await?;
    info!(post_id = %params.post_id, "Post deleted");

    Ok(format!(
        "Post deleted successfully!\n\nPost ID: {}",
        params.post_id
    ))
}

// ── postiz_delete_posts_by_date ──

/// Delete `posts` one at a time, in order.
///
/// Stops at the first failure; posts deleted before it stay deleted.
pub async fn delete_each(api: &dyn SchedulingApi, posts: &[Post]) -> ToolResult<Vec<DeletedPost>> {
    let mut deleted = Vec::with_capacity(posts.len());
    for post in posts {
        if let Err(e) = api.delete_post(&post.id).await {
            warn!(
                post_id = %post.id,
                deleted = deleted.len(),
                remaining = posts.len() - deleted.len(),
                "Bulk delete aborted"
            );
            return Err(e.into());
        }
        deleted.push(DeletedPost {
            id: post.id.clone(),
            platform: post.platform().map(str::to_string),
        });
    }
    Ok(deleted)
}

pub async fn delete_posts_by_date(
    api: &dyn SchedulingApi,
    params: DateRangeParams,
) -> ToolResult<String> {
    let range = DateRange::from(params);
    let posts = api.list_posts(&range).await?.posts;
    if posts.is_empty() {
        return Ok(NO_POSTS_FOUND.to_string());
    }

    let deleted = delete_each(api, &posts).await?;
    info!(count = deleted.len(), "Posts deleted by date range");

    Ok(format!(
        "Deleted {} posts:\n\n{}",
        deleted.len(),
        serde_json::to_string_pretty(&deleted)?
    ))
}
