//! Status command implementation

use colored::Colorize;

use crate::cache::DailyRecipeCache;
use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::config::API_KEY_ENV;
use crate::error::Result;
use crate::storage::SqliteStore;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "cooked Configuration Status".bold());

    let path = opts.config_path()?;
    if path.exists() {
        println!("Config file: {}", path.display().to_string().cyan());
    } else {
        println!("{} Config file not found at {}", "○".dimmed(), path.display());
    }

    let ctx = CommandContext::new(opts)?;
    let config = &ctx.config;

    println!();

    // API key status
    if config.require_api_key().is_ok() {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} API key not configured", "✗".red());
        println!(
            "  → Run 'cooked init' or set {} to configure",
            API_KEY_ENV
        );
    }

    println!("{} Provider: {}", "○".dimmed(), config.provider_url.cyan());
    println!("{} Backend:  {}", "○".dimmed(), config.backend_url.cyan());
    println!(
        "{} Cache TTL: {}s, page size {}",
        "○".dimmed(),
        config.cache_ttl_secs,
        config.page_size
    );

    // Login status
    match ctx.backend()?.is_logged_in() {
        Ok(true) => println!("{} Logged in", "✓".green()),
        Ok(false) => {
            println!("{} Not logged in", "○".dimmed());
            println!("  → Run 'cooked login' for personalized recipes");
        }
        Err(e) => println!("{} Login state unreadable: {}", "⚠".yellow(), e),
    }

    // Recipe of the day
    match DailyRecipeCache::new(ctx.store.clone()).stored() {
        Some(entry) => println!(
            "{} Recipe of the day: {} ({})",
            "✓".green(),
            entry.recipe.title,
            entry.date
        ),
        None => println!("{} No recipe of the day yet", "○".dimmed()),
    }

    if opts.ephemeral {
        println!("{} Using in-memory store (--ephemeral)", "○".dimmed());
    } else if let Ok(dir) = SqliteStore::data_dir() {
        println!("{} Local store: {}", "○".dimmed(), dir.display());
    }

    println!();
    Ok(())
}
