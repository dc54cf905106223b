//! Human-oriented recipe cards

use colored::Colorize;

use crate::models::{Recipe, RecipeSource};

/// Render a single recipe as a multi-line card
pub fn recipe_card(recipe: &Recipe) -> String {
    let mut lines = Vec::new();

    let title = match recipe.source {
        RecipeSource::Local => format!("{} {}", recipe.title.bold(), "(offline)".dimmed()),
        RecipeSource::Spoonacular => recipe.title.bold().to_string(),
    };
    lines.push(title);

    lines.push(format!(
        "  {} serves {}   {} {} min   {} {}",
        "•".cyan(),
        recipe.serving_size,
        "•".cyan(),
        recipe.minutes,
        "•".cyan(),
        recipe.difficulty.as_str()
    ));

    if let Some(score) = recipe.health_score {
        lines.push(format!("  health score {}", score));
    }

    if !recipe.description.is_empty() {
        lines.push(format!("  {}", recipe.description));
    }

    let tags: Vec<&str> = recipe
        .cuisines
        .iter()
        .chain(recipe.diets.iter())
        .flatten()
        .map(String::as_str)
        .collect();
    if !tags.is_empty() {
        lines.push(format!("  {}", tags.join(", ").dimmed()));
    }

    lines.push(format!("  id {}", recipe.id.dimmed()));
    lines.join("\n")
}

/// Render a list of recipes as cards separated by blank lines
pub fn recipe_cards(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes found.".to_string();
    }
    recipes
        .iter()
        .map(recipe_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render a recipe card followed by its ingredients and steps, when known
pub fn recipe_detail(recipe: &Recipe) -> String {
    let mut out = recipe_card(recipe);

    let ingredients: Vec<&str> = recipe
        .ingredients
        .as_ref()
        .and_then(|v| v.as_array())
        .into_iter()
        .flatten()
        .filter_map(|i| i.get("original").and_then(|o| o.as_str()))
        .collect();
    if !ingredients.is_empty() {
        out.push_str(&format!("\n\n{}", "Ingredients".bold()));
        for line in ingredients {
            out.push_str(&format!("\n  - {}", line));
        }
    }

    // analyzedInstructions is a list of sections, each with numbered steps
    let steps: Vec<&str> = recipe
        .instructions
        .as_ref()
        .and_then(|v| v.as_array())
        .into_iter()
        .flatten()
        .filter_map(|section| section.get("steps").and_then(|s| s.as_array()))
        .flatten()
        .filter_map(|step| step.get("step").and_then(|s| s.as_str()))
        .collect();
    if !steps.is_empty() {
        out.push_str(&format!("\n\n{}", "Steps".bold()));
        for (n, step) in steps.iter().enumerate() {
            out.push_str(&format!("\n  {}. {}", n + 1, step));
        }
    }

    out
}
