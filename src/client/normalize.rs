//! Conversion from Spoonacular shapes into the internal `Recipe` model

use super::models::{SimilarRecipeResponse, SpoonacularRecipe};
use crate::models::{Difficulty, Recipe, RecipeSource};

/// Maximum description length in characters, before the ellipsis
pub const DESCRIPTION_MAX_CHARS: usize = 150;

/// Serving size used when the provider omits one
pub const DEFAULT_SERVINGS: u32 = 4;

/// Ready time used when the provider omits one
pub const DEFAULT_MINUTES: u32 = 30;

const IMAGE_CDN: &str = "https://img.spoonacular.com/recipes";

/// Remove HTML tags, decode the common entities, and collapse whitespace.
pub fn strip_html(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut in_tag = false;

    for c in input.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                text.push(' ');
            }
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");

    let collapsed = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    // Tag removal leaves a space before punctuation that followed a closing tag
    collapsed
        .replace(" .", ".")
        .replace(" ,", ",")
        .replace(" !", "!")
        .replace(" ?", "?")
}

/// Strip markup from a provider summary and bound its length.
///
/// Text longer than [`DESCRIPTION_MAX_CHARS`] is cut on a character boundary
/// and suffixed with `...`.
pub fn summarize(html: &str) -> String {
    let text = strip_html(html);
    if text.chars().count() <= DESCRIPTION_MAX_CHARS {
        return text;
    }
    let truncated: String = text.chars().take(DESCRIPTION_MAX_CHARS).collect();
    format!("{}...", truncated.trim_end())
}

/// Image URL for a recipe, falling back to the CDN naming scheme when the
/// response carried only an image type
pub fn image_url(id: u64, image: Option<&str>, image_type: Option<&str>) -> String {
    match image {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => format!(
            "{}/{}-556x370.{}",
            IMAGE_CDN,
            id,
            image_type.filter(|t| !t.is_empty()).unwrap_or("jpg")
        ),
    }
}

fn clamp_score(score: f64) -> u32 {
    score.round().clamp(0.0, 100.0) as u32
}

/// Normalize a full provider recipe.
///
/// Difficulty is derived from `spoonacularScore`, falling back to
/// `healthScore` when the former is missing.
pub fn normalize_recipe(recipe: SpoonacularRecipe) -> Recipe {
    let score = recipe
        .spoonacular_score
        .or(recipe.health_score)
        .unwrap_or(0.0);

    Recipe {
        id: recipe.id.to_string(),
        image: image_url(
            recipe.id,
            recipe.image.as_deref(),
            recipe.image_type.as_deref(),
        ),
        title: recipe.title,
        serving_size: recipe.servings.unwrap_or(DEFAULT_SERVINGS),
        minutes: recipe.ready_in_minutes.unwrap_or(DEFAULT_MINUTES),
        difficulty: Difficulty::from_score(score),
        description: recipe.summary.as_deref().map(summarize).unwrap_or_default(),
        cuisines: recipe.cuisines,
        dish_types: recipe.dish_types,
        diets: recipe.diets,
        health_score: recipe.health_score.map(clamp_score),
        likes: recipe.aggregate_likes,
        instructions: recipe.analyzed_instructions,
        ingredients: recipe.extended_ingredients,
        nutrition: recipe.nutrition,
        source: RecipeSource::Spoonacular,
    }
}

/// Normalize a similar-recipe summary. The endpoint returns no scores or
/// summary, so difficulty defaults to `Medium`.
pub fn normalize_similar(similar: SimilarRecipeResponse) -> Recipe {
    Recipe {
        id: similar.id.to_string(),
        image: image_url(similar.id, None, similar.image_type.as_deref()),
        title: similar.title,
        serving_size: similar.servings.unwrap_or(DEFAULT_SERVINGS),
        minutes: similar.ready_in_minutes.unwrap_or(DEFAULT_MINUTES),
        difficulty: Difficulty::Medium,
        description: String::new(),
        cuisines: None,
        dish_types: None,
        diets: None,
        health_score: None,
        likes: None,
        instructions: None,
        ingredients: None,
        nutrition: None,
        source: RecipeSource::Spoonacular,
    }
}
