//! Saved recipe commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::{Formattable, RecipeList, json};

/// Run the saved list command. `ids_only` skips the detail lookups.
pub async fn list(opts: &GlobalOptions, ids_only: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let backend = ctx.backend()?;
    let agg = ctx.aggregator()?;

    if ids_only {
        let saved = agg.list_saved_recipes(&backend).await?;
        match ctx.format {
            OutputFormat::Json => println!("{}", json::format_json(&saved)?),
            _ => saved.iter().for_each(|s| println!("{}", s.recipe_id)),
        }
        return Ok(());
    }

    let recipes = agg.saved_recipe_details(&backend).await?;
    RecipeList(&recipes).print(ctx.format)
}

/// Run the saved add command
pub async fn add(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let backend = ctx.backend()?;
    let agg = ctx.aggregator()?;

    agg.save_recipe(&backend, id).await?;
    report(ctx.format, id, true, "Saved")
}

/// Run the saved remove command
pub async fn remove(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let backend = ctx.backend()?;
    let agg = ctx.aggregator()?;

    agg.unsave_recipe(&backend, id).await?;
    report(ctx.format, id, false, "Removed")
}

/// Run the saved check command
pub async fn check(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let backend = ctx.backend()?;
    let agg = ctx.aggregator()?;

    let saved = agg.is_recipe_saved(&backend, id).await?;
    if let OutputFormat::Json = ctx.format {
        return report(ctx.format, id, saved, "");
    }

    if saved {
        println!("Recipe {} is saved", id.bold());
    } else {
        println!("Recipe {} is not saved", id.bold());
    }
    Ok(())
}

fn report(format: OutputFormat, id: &str, saved: bool, verb: &str) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({ "recipeId": id, "saved": saved });
            println!("{}", json::format_json(&body)?);
        }
        _ => println!("{} {} recipe {}", "✓".green(), verb, id.bold()),
    }
    Ok(())
}
