//! Status command implementation

use colored::Colorize;

use crate::cli::CommandContext;
use crate::error::Result;

/// Run the status command to display configuration and session status
pub fn run(ctx: &CommandContext) -> Result<()> {
    println!("{}\n", "AI-Blog Status".bold());

    if ctx.config_path.exists() {
        println!(
            "Config file: {}",
            ctx.config_path.display().to_string().cyan()
        );
    } else {
        println!(
            "Config file: {} {}",
            ctx.config_path.display().to_string().cyan(),
            "(not created, using defaults)".dimmed()
        );
    }
    println!("API URL: {}", ctx.client.base_url().cyan());
    println!(
        "Session storage: {}",
        ctx.storage().path().display().to_string().cyan()
    );
    println!();

    let controller = ctx.controller();
    let visibility = controller.visibility();

    if controller.session().is_signed_in() {
        println!("{} Signed in", "✓".green());
    } else {
        println!("{} Not signed in", "○".dimmed());
        println!("  → Run {} to sign in", "aiblog login".cyan());
    }

    let available = |on: bool| if on { "available".green() } else { "hidden".dimmed() };
    println!("  Generate: {}", available(visibility.generate));
    println!("  Logout: {}", available(visibility.logout));
    println!();

    Ok(())
}
