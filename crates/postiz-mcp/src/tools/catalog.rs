//! Static tool catalog: names, descriptions, and argument schemas.
//!
//! Schemas are generated from the parameter structs in [`super::params`], so
//! the advertised contract is the same one the dispatcher deserializes into.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use schemars::generate::SchemaSettings;
use schemars::JsonSchema;

use super::params::{
    DateRangeParams, DeletePostParams, ListAccountsParams, SchedulePostParams, UploadMediaParams,
};
use crate::error::ToolError;

/// Every tool this server exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    UploadMedia,
    SchedulePost,
    ListAccounts,
    GetPosts,
    DeletePost,
    DeletePostsByDate,
}

impl ToolName {
    /// Catalog order.
    pub const ALL: [ToolName; 6] = [
        ToolName::UploadMedia,
        ToolName::SchedulePost,
        ToolName::ListAccounts,
        ToolName::GetPosts,
        ToolName::DeletePost,
        ToolName::DeletePostsByDate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::UploadMedia => "postiz_upload_media",
            ToolName::SchedulePost => "postiz_schedule_post",
            ToolName::ListAccounts => "postiz_list_accounts",
            ToolName::GetPosts => "postiz_get_posts",
            ToolName::DeletePost => "postiz_delete_post",
            ToolName::DeletePostsByDate => "postiz_delete_posts_by_date",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ToolName::UploadMedia => {
                "Upload an image file to Postiz. Returns the media ID to use when scheduling posts."
            }
            ToolName::SchedulePost => {
                "Schedule a post to one or multiple social media accounts. Use postiz_list_accounts to get integration IDs."
            }
            ToolName::ListAccounts => "List all connected social media accounts",
            ToolName::GetPosts => "Get scheduled or published posts",
            ToolName::DeletePost => "Delete a scheduled or published post by ID",
            ToolName::DeletePostsByDate => "Delete all posts scheduled for a specific date range",
        }
    }

    /// JSON Schema of the tool's arguments.
    pub fn input_schema(self) -> JsonObject {
        match self {
            ToolName::UploadMedia => schema_for::<UploadMediaParams>(),
            ToolName::SchedulePost => schema_for::<SchedulePostParams>(),
            ToolName::ListAccounts => schema_for::<ListAccountsParams>(),
            ToolName::GetPosts | ToolName::DeletePostsByDate => schema_for::<DateRangeParams>(),
            ToolName::DeletePost => schema_for::<DeletePostParams>(),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))
    }
}

/// Declarative description of one tool.
#[derive(Debug, Clone)]
pub struct ToolDefinition {
    pub name: ToolName,
    pub description: &'static str,
    pub input_schema: JsonObject,
}

impl ToolDefinition {
    pub fn new(name: ToolName) -> Self {
        Self {
            name,
            description: name.description(),
            input_schema: name.input_schema(),
        }
    }

    /// MCP wire representation.
    pub fn to_tool(&self) -> Tool {
        Tool::new(
            self.name.as_str(),
            self.description,
            Arc::new(self.input_schema.clone()),
        )
    }
}

/// The complete, ordered tool catalog.
pub fn catalog() -> Vec<ToolDefinition> {
    ToolName::ALL.into_iter().map(ToolDefinition::new).collect()
}

fn schema_for<T: JsonSchema>() -> JsonObject {
    let schema = SchemaSettings::draft2020_12()
        .with(|s| s.inline_subschemas = true)
        .into_generator()
        .into_root_schema_for::<T>();

    let mut object = schema.as_object().cloned().unwrap_or_default();
    object.remove("$schema");
    object.remove("title");
    object.insert("type".to_string(), "object".into());
    let properties = object
        .entry("properties")
        .or_insert_with(|| JsonObject::new().into());
    // Optional fields are expressed by `required`, not by a null default.
    if let Some(properties) = properties.as_object_mut() {
        for property in properties.values_mut().filter_map(|p| p.as_object_mut()) {
            if property.get("default").is_some_and(|d| d.is_null()) {
                property.remove("default");
            }
        }
    }
    object
}
