//! MCP ServerHandler implementation for Postiz.
//!
//! Exposes six tools backed by the Postiz public API:
//!
//! - `postiz_upload_media` — Upload a local image, returns a media id and path
//! - `postiz_schedule_post` — Schedule one post to one or more integrations
//! - `postiz_list_accounts` — List connected social media accounts
//! - `postiz_get_posts` — List posts in a date range
//! - `postiz_delete_post` — Delete one post by id
//! - `postiz_delete_posts_by_date` — Delete every post in a date range
//!
//! Tool discovery is served from the static catalog; every `call_tool` goes
//! through the [`Dispatcher`], which always answers with a result envelope.

use std::future::Future;
use std::sync::Arc;

use postiz_client::SchedulingApi;
use rmcp::model::{
    CallToolRequestParams, CallToolResult, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParams, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};

use crate::dispatch::{Dispatcher, ToolInvocation};
use crate::tools::catalog;

const INSTRUCTIONS: &str = "Postiz schedules posts to connected social media accounts.\n\
     Workflow: postiz_list_accounts to find integration IDs → optionally postiz_upload_media \
     for images (keep the returned id and path) → postiz_schedule_post with content, \
     integrationIds, scheduledDate (ISO 8601) and media.\n\
     For Instagram, set instagramPostType to 'story' for a 24-hour story (default 'post').\n\
     Review with postiz_get_posts; remove with postiz_delete_post or postiz_delete_posts_by_date. \
     Bulk deletion is not reversible and stops at the first failure.";

/// Postiz MCP server handler.
#[derive(Debug, Clone)]
pub struct PostizMcpServer {
    dispatcher: Dispatcher,
    tools: Arc<Vec<Tool>>,
}

impl PostizMcpServer {
    pub fn new(api: Arc<dyn SchedulingApi>) -> Self {
        let tools: Vec<Tool> = catalog().iter().map(|definition| definition.to_tool()).collect();
        Self {
            dispatcher: Dispatcher::new(api),
            tools: Arc::new(tools),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Advertised tools, in catalog order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }
}

impl ServerHandler for PostizMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "postiz-mcp".to_string(),
                title: Some("Postiz MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server exposing Postiz social media scheduling: media upload, \
                     post scheduling, account listing, and post cleanup"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, ErrorData>> + Send + '_ {
        std::future::ready(Ok(ListToolsResult::with_all_items(self.tools.to_vec())))
    }

    fn call_tool(
        &self,
        request: CallToolRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, ErrorData>> + Send + '_ {
        async move { Ok(self.dispatcher.dispatch(ToolInvocation::from(request)).await) }
    }
}
