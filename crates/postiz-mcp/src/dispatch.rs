//! Tool dispatcher: routes an invocation to its handler and wraps the outcome
//! in a result envelope.
//!
//! `dispatch` never fails. Unknown tool names, argument errors, and remote
//! failures all come back as an envelope with `is_error: true` and the text
//! `"Error: <message>"`.

use std::sync::Arc;

use postiz_client::SchedulingApi;
use rmcp::model::{CallToolRequestParams, CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{ToolError, ToolResult};
use crate::tools::{operations, ToolName};

/// A single tool call as received from the client.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    pub name: String,
    pub arguments: Option<JsonObject>,
}

impl ToolInvocation {
    pub fn new(name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => Some(map),
            _ => None,
        };
        Self {
            name: name.into(),
            arguments,
        }
    }
}

impl From<CallToolRequestParams> for ToolInvocation {
    fn from(request: CallToolRequestParams) -> Self {
        Self {
            name: request.name.into_owned(),
            arguments: request.arguments,
        }
    }
}

/// Routes tool invocations to handlers backed by one [`SchedulingApi`].
#[derive(Debug, Clone)]
pub struct Dispatcher {
    api: Arc<dyn SchedulingApi>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn SchedulingApi>) -> Self {
        Self { api }
    }

    /// Run one invocation and produce exactly one envelope for it.
    pub async fn dispatch(&self, invocation: ToolInvocation) -> CallToolResult {
        let name = invocation.name.clone();
        match self.execute(invocation).await {
            Ok(text) => {
                info!(tool = %name, "Tool call succeeded");
                CallToolResult::success(vec![Content::text(text)])
            }
            Err(e) => {
                warn!(tool = %name, remote = e.is_remote(), error = %e, "Tool call failed");
                CallToolResult::error(vec![Content::text(format!("Error: {e}"))])
            }
        }
    }

    async fn execute(&self, invocation: ToolInvocation) -> ToolResult<String> {
        let tool: ToolName = invocation.name.parse()?;
        let arguments = Value::Object(invocation.arguments.unwrap_or_default());
        let api = self.api.as_ref();

        match tool {
            ToolName::UploadMedia => operations::upload_media(api, parse(tool, arguments)?).await,
            ToolName::SchedulePost => operations::schedule_post(api, parse(tool, arguments)?).await,
            ToolName::ListAccounts => operations::list_accounts(api, parse(tool, arguments)?).await,
            ToolName::GetPosts => operations::get_posts(api, parse(tool, arguments)?).await,
            ToolName::DeletePost => operations::delete_post(api, parse(tool, arguments)?).await,
            ToolName::DeletePostsByDate => {
                operations::delete_posts_by_date(api, parse(tool, arguments)?).await
            }
        }
    }
}

/// Deserialize arguments into the tool's parameter struct before any remote call.
fn parse<T: DeserializeOwned>(tool: ToolName, arguments: Value) -> ToolResult<T> {
    serde_json::from_value(arguments).map_err(|source| ToolError::InvalidArguments { tool, source })
}
