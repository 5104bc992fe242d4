//! Register, login and logout commands

use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::{CommandContext, CredentialArgs};
use crate::error::Result;

/// Run the register command
pub async fn register(ctx: &CommandContext, args: &CredentialArgs) -> Result<()> {
    let (email, password) = prompt_missing(args)?;
    ctx.controller().register(&email, &password).await
}

/// Run the login command
pub async fn login(ctx: &CommandContext, args: &CredentialArgs) -> Result<()> {
    let (email, password) = prompt_missing(args)?;
    ctx.controller().login(&email, &password).await
}

/// Run the logout command
pub fn logout(ctx: &CommandContext) -> Result<()> {
    ctx.controller().logout()
}

/// Fill in whatever was not passed as a flag.
///
/// Empty answers are accepted so the usual "fill in all fields" message
/// applies instead of a prompt loop.
fn prompt_missing(args: &CredentialArgs) -> Result<(String, String)> {
    let theme = ColorfulTheme::default();

    let email = match &args.email {
        Some(email) => email.clone(),
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Email")
            .allow_empty(true)
            .interact_text()?,
    };

    let password = match &args.password {
        Some(password) => password.clone(),
        None => Password::with_theme(&theme)
            .with_prompt("Password")
            .allow_empty_password(true)
            .interact()?,
    };

    Ok((email, password))
}
