//! CLI administration tool for quicklink.
//!
//! Works directly on the database, so it can be used while the server is
//! down.
//!
//! # Usage
//!
//! ```bash
//! # List links, newest first
//! cargo run --bin admin -- links list --limit 20
//!
//! # Show one link
//! cargo run --bin admin -- links show abc
//!
//! # Create a link
//! cargo run --bin admin -- links create https://example.com/a --code abc
//!
//! # Recent client events
//! cargo run --bin admin -- logs tail
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Database tools
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (default: `sqlite://urls.db`)
//!
//! Only `db migrate` creates a missing database file; every other command
//! fails if the file does not exist.

use quicklink::application::services::{LinkService, LogService};
use quicklink::infrastructure::persistence::{
    PoolSettings, SqliteLinkRepository, SqliteLogRepository, connect, run_migrations,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing quicklink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database URL (overrides `DATABASE_URL`)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Inspect ingested client events
    Logs {
        #[command(subcommand)]
        action: LogAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links, newest first
    List {
        /// Maximum rows to print
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },

    /// Show a single link
    Show {
        /// Short code
        code: String,
    },

    /// Create a short link
    Create {
        /// Destination URL
        url: String,

        /// Custom short code (random if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },
}

/// Log subcommands.
#[derive(Subcommand)]
enum LogAction {
    /// Print the most recent entries
    Tail {
        /// Number of entries
        #[arg(short, long, default_value_t = 20)]
        limit: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| "sqlite://urls.db".to_string());

    let settings = PoolSettings {
        create_if_missing: matches!(
            cli.command,
            Commands::Db {
                action: DbAction::Migrate
            }
        ),
        ..PoolSettings::default()
    };

    let pool = connect(&database_url, settings)
        .await
        .with_context(|| format!("Failed to open database '{}'", database_url))?;

    let result = match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await,
        Commands::Logs { action } => handle_log_action(action, &pool).await,
        Commands::Stats => handle_stats(&pool).await,
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    result
}

fn link_service(pool: &SqlitePool) -> LinkService<SqliteLinkRepository> {
    LinkService::new(Arc::new(SqliteLinkRepository::new(Arc::new(pool.clone()))))
}

fn log_service(pool: &SqlitePool) -> LogService<SqliteLogRepository> {
    LogService::new(Arc::new(SqliteLogRepository::new(Arc::new(pool.clone()))))
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, pool: &SqlitePool) -> Result<()> {
    let service = link_service(pool);

    match action {
        LinkAction::List { limit } => list_links(&service, limit).await,
        LinkAction::Show { code } => show_link(&service, &code).await,
        LinkAction::Create { url, code } => create_link(&service, &url, code.as_deref()).await,
    }
}

/// Prints links as a table.
///
/// ```text
/// 🔗 Links
///
///   Code       Clicks  Created           Destination
///   ───────────────────────────────────────────────────────────────
///   abc        3       2025-01-15 10:30  https://example.com/a
/// ```
async fn list_links(service: &LinkService<SqliteLinkRepository>, limit: usize) -> Result<()> {
    println!("{}", "🔗 Links".bright_blue().bold());
    println!();

    let links = service
        .list_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<10} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "Destination".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in links.iter().take(limit) {
        println!(
            "  {:<10} {:<7} {:<17} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_white(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.long_url
        );
    }

    println!();
    println!(
        "  Showing {} of {}",
        links.len().min(limit).to_string().bright_white().bold(),
        links.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints one link.
async fn show_link(service: &LinkService<SqliteLinkRepository>, code: &str) -> Result<()> {
    let link = service
        .get_link_by_code(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {}", code, e))?;

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  Code:        {}", link.code.cyan());
    println!("  Destination: {}", link.long_url);
    println!(
        "  Created:     {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Clicks:      {}", link.clicks.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Creates a link through the same rules as the HTTP API.
async fn create_link(
    service: &LinkService<SqliteLinkRepository>,
    url: &str,
    code: Option<&str>,
) -> Result<()> {
    let link = service
        .shorten(url, code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!();
    println!("  Code:        {}", link.code.bright_yellow().bold());
    println!("  Destination: {}", link.long_url);
    println!();

    Ok(())
}

/// Dispatches log commands.
async fn handle_log_action(action: LogAction, pool: &SqlitePool) -> Result<()> {
    let service = log_service(pool);

    match action {
        LogAction::Tail { limit } => {
            let entries = service
                .recent(limit)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to read logs: {}", e))?;

            println!("{}", "📜 Recent events".bright_blue().bold());
            println!();

            if entries.is_empty() {
                println!("{}", "  No events recorded".yellow());
                return Ok(());
            }

            for entry in entries {
                let data = entry
                    .data
                    .map(|d| d.to_string())
                    .unwrap_or_default();
                println!(
                    "  {} {:<10} {} {}",
                    entry
                        .created_at
                        .format("%Y-%m-%d %H:%M:%S")
                        .to_string()
                        .bright_black(),
                    entry.kind.cyan(),
                    entry.message,
                    data.bright_black()
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Displays totals: links, clicks and log entries.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links = link_service(pool);
    let logs = log_service(pool);

    let links_count = links
        .count_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    let clicks_count = links
        .total_clicks()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to sum clicks: {}", e))?;

    let logs_count = logs
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count logs: {}", e))?;

    println!("  Links:       {}", links_count.to_string().bright_white().bold());
    println!("  Clicks:      {}", clicks_count.to_string().bright_white().bold());
    println!("  Log entries: {}", logs_count.to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await
                .context("Database check failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  SQLite version: {}", version.bright_white());
        }
        DbAction::Migrate => {
            run_migrations(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
