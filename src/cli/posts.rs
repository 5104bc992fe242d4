//! Feed and generation commands

use crate::cli::CommandContext;
use crate::error::Result;

/// Run the posts command
pub async fn list(ctx: &CommandContext) -> Result<()> {
    ctx.controller().load_feed().await;
    Ok(())
}

/// Run the generate command
pub async fn generate(ctx: &CommandContext, prompt: &str) -> Result<()> {
    ctx.controller().generate(prompt).await
}
