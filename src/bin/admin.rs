//! CLI administration tool for shortit.
//!
//! Inspects and removes shortlinks and checks the database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all shortlinks
//! cargo run --bin admin -- links list
//!
//! # Show one shortlink
//! cargo run --bin admin -- links show 3f0c6f9e-8a43-4c1e-9d59-6f2b0d1f6a7e
//!
//! # Delete a shortlink (prompts unless -y)
//! cargo run --bin admin -- links delete 3f0c6f9e-8a43-4c1e-9d59-6f2b0d1f6a7e
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Uses the same variables as the server (`DATABASE_URL` or `DB_*`,
//! `BASE_URL`). The in-memory backend is rejected since its contents only
//! exist inside a running server.

use shortit::application::services::ShortlinkService;
use shortit::config::{self, Config, StorageBackend};
use shortit::domain::entities::Shortlink;
use shortit::infrastructure::persistence::PgShortlinkRepository;
use shortit::server::connect_pool;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing shortit.
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
    /// Manage shortlinks
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinksAction {
    /// List all shortlinks
    List,

    /// Show a single shortlink
    Show {
        /// Shortlink ID (UUID)
        id: String,
    },

    /// Delete a shortlink
    Delete {
        /// Shortlink ID (UUID)
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    if config.storage_backend == StorageBackend::Memory {
        anyhow::bail!("The admin tool requires STORAGE_BACKEND=postgres");
    }

    let service = connect_service(&config).await?;

    match cli.command {
        Commands::Links { action } => handle_links_action(action, &service).await?,
        Commands::Db { action } => handle_db_action(action, &service).await?,
    }

    Ok(())
}

async fn connect_service(config: &Config) -> Result<ShortlinkService> {
    let pool = connect_pool(config).await?;
    let repository = Arc::new(PgShortlinkRepository::new(Arc::new(pool)));

    Ok(ShortlinkService::new(repository, config.base_url.clone()))
}

/// Dispatches shortlink commands.
async fn handle_links_action(action: LinksAction, service: &ShortlinkService) -> Result<()> {
    match action {
        LinksAction::List => list_links(service).await?,
        LinksAction::Show { id } => show_link(service, &id).await?,
        LinksAction::Delete { id, yes } => delete_link(service, &id, yes).await?,
    }

    Ok(())
}

/// Prints all shortlinks in insertion order.
///
/// # Output Format
///
/// ```text
/// Shortlinks
///
///   Short URL                      Original URL                             Created
///   ──────────────────────────────────────────────────────────────────────────────────────────
///   https://shortit/aB3dE9         https://example.com                      2024-01-15 10:30
/// ```
async fn list_links(service: &ShortlinkService) -> Result<()> {
    println!("{}", "Shortlinks".bright_blue().bold());
    println!();

    let links = service.list_shortlinks().await?;

    if links.is_empty() {
        println!("{}", "  No shortlinks found".yellow());
        return Ok(());
    }

    println!(
        "  {:<30} {:<40} {:<20}",
        "Short URL".bright_white().bold(),
        "Original URL".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for link in &links {
        println!(
            "  {:<30} {:<40} {}",
            service.short_url(&link.short_url).cyan(),
            truncate(&link.original_url, 40),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn show_link(service: &ShortlinkService, id: &str) -> Result<()> {
    let link = service.get_shortlink(id).await?;

    print_details(service, &link);

    Ok(())
}

/// Deletes a shortlink after confirmation (default: No).
async fn delete_link(service: &ShortlinkService, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "Delete Shortlink".bright_blue().bold());
    println!();

    let link = service.get_shortlink(id).await?;
    print_details(service, &link);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this shortlink?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service.delete_shortlink(id).await?;

    println!();
    println!("{}", "Shortlink deleted".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, service: &ShortlinkService) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            service.check_store().await?;

            println!("{}", "Database connection OK".green().bold());
        }
    }

    Ok(())
}

fn print_details(service: &ShortlinkService, link: &Shortlink) {
    println!("  ID:           {}", link.id.to_string().bright_black());
    println!("  Short URL:    {}", service.short_url(&link.short_url).cyan());
    println!("  Original URL: {}", link.original_url);
    println!(
        "  Custom name:  {}",
        link.custom_name.as_deref().unwrap_or("-")
    );
    println!(
        "  Created:      {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

/// Shortens `s` to at most `max` characters for table output.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }

    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
