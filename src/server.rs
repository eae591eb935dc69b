//! MCP server exposing the widgets as tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Serialize;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::http::{HttpTransport, Transport};
use crate::model::{FortuneQuery, RetailerSearchQuery};
use crate::widgets::{MagicEightBall, ProductGroups, RetailerSearch, ToolReply};

pub const SERVER_NAME: &str = "chainbridge-widgets";

/// Turn a widget outcome into the host's tool result shape.
///
/// Success carries `structuredContent` plus the summary (if any) as the only
/// text item; failure is a single `"{context}: {message}"` text item with
/// `isError` set.
pub fn into_call_result<T: Serialize>(
    outcome: Result<ToolReply<T>, WidgetError>,
    context: &str,
) -> Result<CallToolResult, McpError> {
    match outcome {
        Ok(reply) => {
            let structured = serde_json::to_value(&reply.structured)
                .map_err(|e| McpError::internal_error(e.to_string(), None))?;
            let content = reply.summary.into_iter().map(Content::text).collect();
            let mut result = CallToolResult::success(content);
            result.structured_content = Some(structured);
            Ok(result)
        }
        Err(e) => {
            warn!(kind = ?e.kind, status = ?e.status, "{}: {}", context, e);
            Ok(CallToolResult::error(vec![Content::text(format!(
                "{}: {}",
                context, e
            ))]))
        }
    }
}

/// Tool handler wiring the three widgets to rmcp.
#[derive(Clone)]
pub struct ChainBridgeTools {
    fortune: MagicEightBall,
    product_groups: ProductGroups,
    retailer_search: RetailerSearch,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ChainBridgeTools {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            fortune: MagicEightBall::default(),
            product_groups: ProductGroups::new(transport.clone()),
            retailer_search: RetailerSearch::new(transport),
            tool_router: Self::tool_router(),
        }
    }

    /// Build the tools against the live ChainBridge API.
    pub fn from_config(config: &WidgetConfig) -> Result<Self, WidgetError> {
        Ok(Self::new(Arc::new(HttpTransport::new(config)?)))
    }

    #[tool(name = "magic-8-ball", description = "For fortune-telling or seeking advice.")]
    pub async fn magic_8_ball(
        &self,
        Parameters(FortuneQuery { question }): Parameters<FortuneQuery>,
    ) -> Result<CallToolResult, McpError> {
        let span = info_span!("tool_call", tool = "magic-8-ball", call_id = %Uuid::new_v4());
        span.in_scope(|| into_call_result(self.fortune.answer(&question), "Error"))
    }

    #[tool(
        name = "product-groups",
        description = "Get available product categories/groups for retailer search. Use this to discover what product types are available before searching for retailers."
    )]
    pub async fn product_groups(&self) -> Result<CallToolResult, McpError> {
        let span = info_span!("tool_call", tool = "product-groups", call_id = %Uuid::new_v4());
        let outcome = self.product_groups.list().instrument(span).await;
        into_call_result(outcome, "Error fetching product groups")
    }

    #[tool(
        name = "retailer-search",
        description = "Search for retailers by product group. Returns retailers that match the specified product category with pagination support."
    )]
    pub async fn retailer_search(
        &self,
        Parameters(query): Parameters<RetailerSearchQuery>,
    ) -> Result<CallToolResult, McpError> {
        let span = info_span!("tool_call", tool = "retailer-search", call_id = %Uuid::new_v4());
        let outcome = self.retailer_search.search(query).instrument(span).await;
        into_call_result(outcome, "Error searching retailers")
    }
}

#[tool_handler]
impl ServerHandler for ChainBridgeTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Use product-groups to discover categories, then retailer-search to find retailers for one of them."
                    .into(),
            ),
            ..Default::default()
        }
    }
}
