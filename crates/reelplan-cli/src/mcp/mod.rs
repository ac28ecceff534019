//! MCP server implementation for Reelplan
//!
//! This module implements the Model Context Protocol server for Reelplan,
//! letting AI assistants generate faceless video plans over stdio.

use std::future::Future;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{
        GetPromptRequestParam, GetPromptResult, Implementation, ListPromptsResult,
        PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;
pub mod prompts;

pub use handlers::{GeneratePlan, McpResult};

/// MCP server for Reelplan
///
/// Generation is stateless, so every call builds its own generator from the
/// request's seed.
#[derive(Clone)]
pub struct ReelplanMcpServer {
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ReelplanMcpServer {
    /// Create a new Reelplan MCP server
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "generate_plan",
        description = "Generate a faceless short-form video plan for an affiliate offer. Requires productName, productDescription and audience. Optional: benefits and painPoints (one per line or comma), affiliateLink, desiredLength (\"15\", \"30\", \"45\" or \"60\"), platform (\"TikTok\", \"Instagram Reels\", \"YouTube Shorts\", \"Pinterest Idea Pin\"), tone (\"Hype\", \"Trustworthy\", \"Educational\", \"Relaxed\") and seed for reproducible output. Returns the plan as Markdown followed by the same plan as JSON."
    )]
    async fn generate_plan(&self, params: Parameters<GeneratePlan>) -> McpResult {
        handlers::McpHandlers.generate_plan(params).await
    }

    #[tool(
        name = "list_presets",
        description = "List the video length presets with their timing promise, plus the supported platforms and tones. Use before generate_plan to pick desiredLength, platform and tone."
    )]
    async fn list_presets(&self) -> McpResult {
        handlers::McpHandlers.list_presets().await
    }

    /// List all available prompts
    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        handlers::McpHandlers.list_prompts(request, context).await
    }

    /// Get a specific prompt by name and apply arguments
    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        handlers::McpHandlers.get_prompt(request, context).await
    }
}

impl Default for ReelplanMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for ReelplanMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation {
                name: "reelplan".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(r#"Reelplan turns an affiliate offer into a faceless short-form video plan that can be filmed without showing a face.

## Core Concepts
- **Offer form**: product name, description and audience (required), plus benefits, pain points, affiliate link, length, platform and tone
- **Plan**: four hooks, a five-beat timed script (Hook, Problem, Solution Setup, Proof / Demo, CTA), three content angles, caption and hashtags, overlay text, upload checklist, automation stack, thumbnail prompts and a three-post cadence (days 1, 3 and 5)

## Workflow
1. Call `list_presets` to see the lengths, platforms and tones
2. Call `generate_plan` with the offer form
3. Pass the same `seed` again to reproduce a plan exactly

## Notes
- Hooks, one overlay line and the soundtrack genre are picked at random unless a seed is given
- Unknown length ids fall back to the 30 second preset
- Blank required fields are rejected as invalid parameters"#.to_string()),
        }
    }

    async fn list_prompts(
        &self,
        request: Option<PaginatedRequestParam>,
        context: RequestContext<RoleServer>,
    ) -> Result<ListPromptsResult, McpError> {
        self.list_prompts(request, context).await
    }

    async fn get_prompt(
        &self,
        request: GetPromptRequestParam,
        context: RequestContext<RoleServer>,
    ) -> Result<GetPromptResult, McpError> {
        self.get_prompt(request, context).await
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: ReelplanMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Reelplan MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
