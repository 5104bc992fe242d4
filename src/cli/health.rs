//! Health command implementation

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::PostsApi;
use crate::error::Result;
use crate::output::json;

/// Run the health command
///
/// An unreachable or unhealthy API is reported, not returned as an error.
pub async fn run(ctx: &CommandContext) -> Result<()> {
    let url = ctx.client.base_url();
    let outcome = ctx.client.health().await;

    if ctx.format == OutputFormat::Json {
        let report = match &outcome {
            Ok(health) => serde_json::json!({ "api_url": url, "status": health.status }),
            Err(e) => serde_json::json!({ "api_url": url, "error": e.to_string() }),
        };
        println!("{}", json::format_json(&report)?);
        return Ok(());
    }

    match outcome {
        Ok(health) if health.is_ok() => {
            println!("{} API reachable at {}", "✓".green(), url.cyan());
        }
        Ok(health) => {
            println!(
                "{} API at {} reports status: {}",
                "⚠".yellow(),
                url.cyan(),
                health.status
            );
        }
        Err(e) => {
            println!("{} API not reachable at {}", "✗".red(), url.cyan());
            println!("  {}", e.to_string().dimmed());
        }
    }

    Ok(())
}
