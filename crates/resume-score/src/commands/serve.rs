//! Serve command: run the MCP server on stdio.

use anyhow::Context;
use clap::Args;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use resume_score_core::config::Config;

use crate::server::ResumeServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    // stdio is the only transport; no options yet
}

/// Serve MCP over stdin/stdout until the client disconnects.
///
/// Logs go to stderr or the JSONL file, never stdout, which carries the protocol.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, max_input_bytes: u64, config: Config) -> anyhow::Result<()> {
    let keywords = config.keyword_set();
    info!(
        keywords = keywords.len(),
        max_input_bytes, "starting MCP server on stdio"
    );

    let service = ResumeServer::new(keywords, max_input_bytes)
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service
        .waiting()
        .await
        .context("MCP server terminated abnormally")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
