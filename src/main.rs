//! AI-Blog CLI - generate blog posts from a prompt and read the feed

use clap::{CommandFactory, Parser};

mod cli;
mod client;
mod config;
mod content;
mod error;
mod feed;
mod models;
mod output;
mod service;
mod session;
mod view;

use cli::{Cli, CommandContext, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Register(args) => {
            let ctx = CommandContext::new(&opts)?;
            cli::auth::register(&ctx, &args).await
        }
        Commands::Login(args) => {
            let ctx = CommandContext::new(&opts)?;
            cli::auth::login(&ctx, &args).await
        }
        Commands::Logout => cli::auth::logout(&CommandContext::new(&opts)?),
        Commands::Generate { prompt } => {
            let ctx = CommandContext::new(&opts)?;
            cli::posts::generate(&ctx, &prompt).await
        }
        Commands::Posts => cli::posts::list(&CommandContext::new(&opts)?).await,
        Commands::Status => cli::status::run(&CommandContext::new(&opts)?),
        Commands::Health => cli::health::run(&CommandContext::new(&opts)?).await,
        Commands::Completion { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "aiblog", &mut std::io::stdout());
            Ok(())
        }
        Commands::Version => {
            println!("aiblog version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// `RUST_LOG` wins; otherwise warn, or debug with `--debug`.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
