//! Init command implementation

use colored::Colorize;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

use crate::cli::GlobalOptions;
use crate::client::{BlogClient, PostsApi};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Asks for the API URL, checks that it answers `/health`, and saves it.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();
    let config_path = Config::resolve_path(opts.config_ref())?;
    let mut config = Config::load_from(&config_path)?;

    println!("{}", "Welcome to AI-Blog!".bold().green());
    println!("Let's point the CLI at your blog API.\n");

    let api_url: String = Input::with_theme(&theme)
        .with_prompt("API URL")
        .default(config.api_url(opts.api_url_ref()))
        .interact_text()?;
    let api_url = api_url.trim().trim_end_matches('/').to_string();

    println!("\n{}", "Checking API...".cyan());
    let client = BlogClient::new(api_url.clone())?;
    match client.health().await {
        Ok(health) if health.is_ok() => println!("{}", "✓ API is reachable!".green()),
        outcome => {
            match outcome {
                Ok(health) => println!("{} API reports status: {}", "⚠".yellow(), health.status),
                Err(e) => println!("{} {}", "⚠".yellow(), e),
            }
            let keep = Confirm::with_theme(&theme)
                .with_prompt("Save this URL anyway?")
                .default(false)
                .interact()?;
            if !keep {
                println!("Nothing saved.");
                return Ok(());
            }
        }
    }

    config.api_url = Some(api_url);
    config.save_to(&config_path)?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Create an account", "aiblog register".cyan());
    println!("  {} - Sign in", "aiblog login".cyan());
    println!("  {} - Read the feed", "aiblog posts".cyan());

    Ok(())
}
