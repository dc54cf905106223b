//! Recipe discovery commands

use colored::Colorize;
use log::debug;
use serde_json::Value;
use tabled::Tabled;

use crate::cache::DailyRecipeCache;
use crate::cli::args::GlobalOptions;
use crate::cli::context::Aggregator;
use crate::cli::{CommandContext, NutrientArgs, OutputFormat, PaginationArgs, SearchFilterArgs};
use crate::error::{ApiError, Result};
use crate::models::{NutrientMatchDisplay, SuggestionDisplay};
use crate::output::{Formattable, RecipeList, json, table};

fn log_cache_stats(agg: &Aggregator) {
    let stats = agg.cache_stats();
    debug!(
        "Response cache: {} entries ({} valid, {} expired)",
        stats.total_entries, stats.valid_entries, stats.expired_entries
    );
}

/// Run the search command
pub async fn search(
    opts: &GlobalOptions,
    filters: &SearchFilterArgs,
    pagination: &PaginationArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let agg = ctx.aggregator()?;

    let (page, page_size) = pagination.resolve(ctx.config.page_size);
    let result = agg
        .search_recipes(&filters.to_filters(), page, page_size)
        .await;

    log_cache_stats(&agg);
    result.print(ctx.format)
}

/// Run the random command
pub async fn random(opts: &GlobalOptions, tags: &[String], count: Option<usize>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let agg = ctx.aggregator()?;

    let tags: Vec<&str> = tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    let tags = (!tags.is_empty()).then(|| tags.join(","));

    let recipes = agg
        .get_random_recipes(tags.as_deref(), count.unwrap_or(ctx.config.page_size))
        .await;
    RecipeList(&recipes).print(ctx.format)
}

/// Run the for-you command
pub async fn for_you(opts: &GlobalOptions, limit: Option<usize>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let agg = ctx.aggregator()?;
    let prefs = ctx.preferences().await;

    let recipes = agg
        .get_personalized_recipes(prefs.as_ref(), limit.unwrap_or(ctx.config.page_size))
        .await;
    RecipeList(&recipes).print(ctx.format)
}

/// Run the ingredients command
pub async fn ingredients(
    opts: &GlobalOptions,
    ingredients: &[String],
    limit: Option<usize>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let agg = ctx.aggregator()?;

    let recipes = agg
        .search_by_ingredients(ingredients, limit.unwrap_or(ctx.config.page_size))
        .await;

    log_cache_stats(&agg);
    RecipeList(&recipes).print(ctx.format)
}

/// Run the by-nutrients command
pub async fn by_nutrients(opts: &GlobalOptions, bounds: &NutrientArgs, limit: usize) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let agg = ctx.aggregator()?;

    let matches = agg.search_by_nutrients(&bounds.to_filters(), limit).await;
    log_cache_stats(&agg);

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&matches)?),
        _ if matches.is_empty() => println!("No recipes within those bounds"),
        format => {
            let rows: Vec<NutrientMatchDisplay> = matches.into_iter().map(Into::into).collect();
            rows.print(format)?;
        }
    }
    Ok(())
}

/// Run the recipe command
pub async fn recipe(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let agg = ctx.aggregator()?;

    let recipe = agg
        .get_recipe_by_id(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("recipe {}", id)))?;
    recipe.print(ctx.format)
}

/// Run the similar command
pub async fn similar(opts: &GlobalOptions, id: &str, count: Option<usize>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let agg = ctx.aggregator()?;

    let recipes = agg
        .get_similar_recipes(id, count.unwrap_or(ctx.config.page_size))
        .await;
    RecipeList(&recipes).print(ctx.format)
}

/// Run the autocomplete command
pub async fn autocomplete(opts: &GlobalOptions, query: &str, count: usize) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let agg = ctx.aggregator()?;

    let suggestions: Vec<SuggestionDisplay> = agg
        .autocomplete(query, count)
        .await
        .into_iter()
        .map(SuggestionDisplay::from)
        .collect();
    suggestions.print(ctx.format)
}

/// Nutrient row from the nutrition widget's `good`/`bad` lists
#[derive(Debug, Tabled)]
struct NutrientDisplay {
    #[tabled(rename = "NUTRIENT")]
    name: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "% DAILY")]
    daily: String,
}

fn nutrient_rows(nutrition: &Value) -> Vec<NutrientDisplay> {
    ["bad", "good"]
        .iter()
        .filter_map(|group| nutrition.get(group).and_then(Value::as_array))
        .flatten()
        .filter_map(|n| {
            let name = n.get("title")?.as_str()?;
            Some(NutrientDisplay {
                name: name.to_string(),
                amount: n
                    .get("amount")
                    .and_then(Value::as_str)
                    .unwrap_or("-")
                    .to_string(),
                daily: n
                    .get("percentOfDailyNeeds")
                    .and_then(Value::as_f64)
                    .map(|p| format!("{:.0}%", p))
                    .unwrap_or_else(|| "-".to_string()),
            })
        })
        .collect()
}

fn nutrition_headline(nutrition: &Value) -> String {
    let field = |key: &str| {
        nutrition
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_string()
    };
    format!(
        "{} calories   {} carbs   {} fat   {} protein",
        field("calories").bold(),
        field("carbs"),
        field("fat"),
        field("protein")
    )
}

/// Run the nutrition command
pub async fn nutrition(opts: &GlobalOptions, id: &str) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let agg = ctx.aggregator()?;

    let nutrition = agg
        .get_recipe_nutrition(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("nutrition for recipe {}", id)))?;

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(&nutrition)?),
        OutputFormat::Table => println!("{}", table::format_table(&nutrient_rows(&nutrition))),
        OutputFormat::Pretty => {
            println!("{}", nutrition_headline(&nutrition));
            let rows = nutrient_rows(&nutrition);
            if !rows.is_empty() {
                println!("\n{}", table::format_table(&rows));
            }
        }
    }
    Ok(())
}

/// Run the daily command
pub async fn daily(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let recipe = match DailyRecipeCache::new(ctx.store.clone()).current() {
        Some(recipe) => {
            debug!("Serving stored recipe of the day");
            recipe
        }
        None => {
            let agg = ctx.aggregator()?;
            let prefs = ctx.preferences().await;
            agg.recipe_of_the_day(prefs.as_ref()).await
        }
    };
    if ctx.format == OutputFormat::Pretty {
        println!("{}\n", "Recipe of the day".cyan());
    }
    recipe.print(ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Value {
        json!({
            "calories": "316",
            "carbs": "49g",
            "fat": "12g",
            "protein": "3g",
            "bad": [{"title": "Sugar", "amount": "20g", "percentOfDailyNeeds": 22.4}],
            "good": [{"title": "Fiber", "amount": "4g"}, {"amount": "1g"}]
        })
    }

    #[test]
    fn test_nutrient_rows_from_widget() {
        let rows = nutrient_rows(&widget());

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Sugar");
        assert_eq!(rows[0].daily, "22%");
        assert_eq!(rows[1].daily, "-");
    }

    #[test]
    fn test_nutrient_rows_missing_groups() {
        assert!(nutrient_rows(&json!({"calories": "100"})).is_empty());
    }

    #[test]
    fn test_nutrition_headline() {
        colored::control::set_override(false);
        let line = nutrition_headline(&widget());
        assert!(line.starts_with("316 calories"));
        assert!(line.contains("3g protein"));
    }
}
