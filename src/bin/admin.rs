//! CLI administration tool for minimelon.
//!
//! Creates and resolves short links directly against the configured store,
//! without going through the HTTP server.
//!
//! # Usage
//!
//! ```bash
//! # Create a short link with a generated slug
//! cargo run --bin admin -- shorten https://example.com/docs
//!
//! # Create a short link with a chosen slug
//! cargo run --bin admin -- shorten https://example.com/docs --slug docs
//!
//! # Resolve a slug
//! cargo run --bin admin -- lookup docs
//!
//! # Check store connection
//! cargo run --bin admin -- store check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server (see `minimelon::config`). `STORAGE_URL` should point at
//! a persistent store; the in-memory default is discarded when the command exits.

use minimelon::config::{self, Config};
use minimelon::infrastructure::store;
use minimelon::prelude::*;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing minimelon short links.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Create a short link
    Shorten {
        /// Target URL
        url: String,

        /// Custom slug (generated if omitted)
        #[arg(short, long)]
        slug: Option<String>,

        /// Base used for the printed short URL when CUSTOM_DOMAIN is unset
        #[arg(short, long)]
        base: Option<String>,
    },

    /// Resolve a slug
    Lookup {
        slug: String,

        /// Report the stored URL instead of the redirect
        #[arg(short, long)]
        no_redirect: bool,
    },

    /// Store operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },
}

/// Store diagnostic subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Check store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = store::connect(&config)
        .await
        .context("Failed to connect to store")?;

    match cli.command {
        Commands::Shorten { url, slug, base } => {
            handle_shorten(store, &config, &url, slug.as_deref(), base.as_deref()).await?
        }
        Commands::Lookup { slug, no_redirect } => {
            handle_lookup(store, &config, &slug, no_redirect).await?
        }
        Commands::Store { action } => handle_store_action(action, store).await?,
    }

    Ok(())
}

/// Creates a short link and prints the resulting URL.
async fn handle_shorten(
    store: Arc<dyn KeyValueStore>,
    config: &Config,
    url: &str,
    slug: Option<&str>,
    base: Option<&str>,
) -> Result<()> {
    println!("{}", "🔗 Shorten".bright_blue().bold());
    println!();

    let service = ShortenService::new(
        store,
        config.slug_generator()?,
        config.slug_policy()?,
        config.custom_domain.clone(),
    );

    match service.shorten(Some(url), slug, base).await {
        Ok(short) => {
            println!("  Slug:      {}", short.slug.cyan());
            println!("  Short URL: {}", short.short_url.bright_white().bold());
            println!();
            println!("{}", "✅ Short link created".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{}", format!("❌ {}", e).red());
            Err(e.into())
        }
    }
}

/// Resolves a slug and prints the response it would produce.
async fn handle_lookup(
    store: Arc<dyn KeyValueStore>,
    config: &Config,
    slug: &str,
    no_redirect: bool,
) -> Result<()> {
    println!("{}", "🔍 Lookup".bright_blue().bold());
    println!();

    let service = LookupService::new(store, config.not_found_url.clone());
    let response = service
        .lookup(Some(slug), no_redirect)
        .await
        .map_err(|e| anyhow::anyhow!("Store error: {}", e))?;

    let status = if response.status < 400 {
        response.status.to_string().green()
    } else {
        response.status.to_string().yellow()
    };

    println!("  Status:   {}", status);
    if let Some(location) = response.header("Location") {
        println!("  Location: {}", location.bright_white());
    }
    if let Some(body) = &response.body {
        println!("  Body:     {}", body.bright_black());
    }
    println!();

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_store_action(action: StoreAction, store: Arc<dyn KeyValueStore>) -> Result<()> {
    match action {
        StoreAction::Check => {
            println!("{}", "🔍 Checking store connection...".bright_blue());

            if !store.health_check().await {
                anyhow::bail!("Store is unreachable");
            }

            println!("{}", "✅ Store connection OK".green().bold());
        }
    }

    Ok(())
}
