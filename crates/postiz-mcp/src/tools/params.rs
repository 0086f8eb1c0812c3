//! Parameter and response structs for all MCP tools.

use postiz_client::{DateRange, InstagramPostType, MediaReference};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ── postiz_upload_media ──

/// Parameters for the `postiz_upload_media` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadMediaParams {
    #[schemars(description = "Absolute path to the image file to upload")]
    pub file_path: String,
}

// ── postiz_schedule_post ──

/// Parameters for the `postiz_schedule_post` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePostParams {
    #[schemars(description = "The text content of the post")]
    pub content: String,
    #[schemars(
        description = "Array of integration IDs from connected accounts (get them from postiz_list_accounts)"
    )]
    pub integration_ids: Vec<String>,
    #[schemars(
        description = "ISO 8601 date-time string for when to publish (e.g., '2026-01-14T15:00:00Z')"
    )]
    pub scheduled_date: String,
    #[schemars(
        with = "Vec<MediaReference>",
        description = "Optional array of media objects with id and path from postiz_upload_media"
    )]
    #[serde(default)]
    pub media: Option<Vec<MediaReference>>,
    #[schemars(
        with = "InstagramPostType",
        description = "For Instagram: 'post' for feed post (permanent) or 'story' for 24-hour story. Default is 'post'."
    )]
    #[serde(default)]
    pub instagram_post_type: Option<InstagramPostType>,
}

// ── postiz_list_accounts ──

/// Parameters for the `postiz_list_accounts` tool (none).
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListAccountsParams {}

// ── postiz_get_posts / postiz_delete_posts_by_date ──

/// Date window shared by `postiz_get_posts` and `postiz_delete_posts_by_date`.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    #[schemars(description = "Start date in ISO 8601 format (e.g., '2026-01-15T00:00:00.000Z')")]
    pub start_date: String,
    #[schemars(description = "End date in ISO 8601 format (e.g., '2026-01-15T23:59:59.000Z')")]
    pub end_date: String,
}

impl From<DateRangeParams> for DateRange {
    fn from(p: DateRangeParams) -> Self {
        DateRange::new(p.start_date, p.end_date)
    }
}

// ── postiz_delete_post ──

/// Parameters for the `postiz_delete_post` tool.
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeletePostParams {
    #[schemars(description = "The ID of the post to delete")]
    pub post_id: String,
}

// ── responses ──

/// One row of the `postiz_get_posts` report.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub publish_date: Option<String>,
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_preview: Option<String>,
}

/// One row of the `postiz_delete_posts_by_date` report.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DeletedPost {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}
