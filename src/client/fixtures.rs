//! Test fixtures and builders for provider and domain types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::IngredientMatch;
use super::models::SpoonacularRecipe;
use crate::models::{Difficulty, Recipe, RecipeSource, UserPreferences};

// ============================================================================
// SpoonacularRecipeBuilder
// ============================================================================

/// Builder for provider-shaped recipes, as they come off the wire.
///
/// # Example
/// ```ignore
/// let raw = SpoonacularRecipeBuilder::new(716429)
///     .title("Pasta with Garlic")
///     .score(92.0)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct SpoonacularRecipeBuilder {
    recipe: SpoonacularRecipe,
}

impl SpoonacularRecipeBuilder {
    /// Create a new builder with the given numeric ID and populated defaults.
    pub fn new(id: u64) -> Self {
        Self {
            recipe: SpoonacularRecipe {
                id,
                title: format!("Recipe {}", id),
                image: Some(format!("https://img.spoonacular.com/recipes/{}-556x370.jpg", id)),
                image_type: Some("jpg".to_string()),
                ready_in_minutes: Some(45),
                servings: Some(2),
                aggregate_likes: Some(10),
                spoonacular_score: Some(75.0),
                health_score: Some(40.0),
                summary: Some(format!("A <b>tasty</b> recipe number {}.", id)),
                cuisines: Some(vec!["Italian".to_string()]),
                dish_types: Some(vec!["main course".to_string()]),
                diets: Some(Vec::new()),
                analyzed_instructions: None,
                extended_ingredients: None,
                nutrition: None,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.recipe.title = title.into();
        self
    }

    pub fn score(mut self, score: f64) -> Self {
        self.recipe.spoonacular_score = Some(score);
        self
    }

    /// Drop the spoonacular score so difficulty falls back to the health score.
    pub fn no_score(mut self) -> Self {
        self.recipe.spoonacular_score = None;
        self
    }

    pub fn health_score(mut self, score: f64) -> Self {
        self.recipe.health_score = Some(score);
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.recipe.summary = Some(summary.into());
        self
    }

    pub fn servings(mut self, servings: u32) -> Self {
        self.recipe.servings = Some(servings);
        self
    }

    pub fn ready_in_minutes(mut self, minutes: u32) -> Self {
        self.recipe.ready_in_minutes = Some(minutes);
        self
    }

    /// Strip every optional field, leaving only `id` and `title`.
    pub fn minimal(mut self) -> Self {
        let SpoonacularRecipe { id, title, .. } = self.recipe;
        self.recipe = SpoonacularRecipe {
            id,
            title,
            image: None,
            image_type: None,
            ready_in_minutes: None,
            servings: None,
            aggregate_likes: None,
            spoonacular_score: None,
            health_score: None,
            summary: None,
            cuisines: None,
            dish_types: None,
            diets: None,
            analyzed_instructions: None,
            extended_ingredients: None,
            nutrition: None,
        };
        self
    }

    pub fn build(self) -> SpoonacularRecipe {
        self.recipe
    }
}

// ============================================================================
// RecipeBuilder
// ============================================================================

/// Builder for normalized `Recipe` instances.
///
/// # Example
/// ```ignore
/// let recipe = RecipeBuilder::new("716429")
///     .title("Pasta with Garlic")
///     .difficulty(Difficulty::Easy)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    recipe: Recipe,
}

impl RecipeBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            recipe: Recipe {
                title: format!("Recipe {}", &id),
                image: format!("https://img.spoonacular.com/recipes/{}-556x370.jpg", &id),
                id,
                serving_size: 2,
                minutes: 45,
                difficulty: Difficulty::Medium,
                description: "A tasty recipe.".to_string(),
                cuisines: None,
                dish_types: None,
                diets: None,
                health_score: Some(40),
                likes: Some(10),
                instructions: None,
                ingredients: None,
                nutrition: None,
                source: RecipeSource::Spoonacular,
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.recipe.title = title.into();
        self
    }

    pub fn minutes(mut self, minutes: u32) -> Self {
        self.recipe.minutes = minutes;
        self
    }

    pub fn serving_size(mut self, servings: u32) -> Self {
        self.recipe.serving_size = servings;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.recipe.difficulty = difficulty;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.recipe.description = description.into();
        self
    }

    pub fn health_score(mut self, score: Option<u32>) -> Self {
        self.recipe.health_score = score;
        self
    }

    pub fn source(mut self, source: RecipeSource) -> Self {
        self.recipe.source = source;
        self
    }

    pub fn build(self) -> Recipe {
        self.recipe
    }
}

/// Build `count` recipes with sequential numeric IDs starting at `first_id`.
pub fn recipes(first_id: u64, count: usize) -> Vec<Recipe> {
    (0..count as u64)
        .map(|i| RecipeBuilder::new((first_id + i).to_string()).build())
        .collect()
}

// ============================================================================
// IngredientMatchBuilder
// ============================================================================

/// Builder for `findByIngredients` matches.
#[derive(Debug, Clone)]
pub struct IngredientMatchBuilder {
    id: String,
    title: String,
    image: String,
    used: u32,
    missed: u32,
}

impl IngredientMatchBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: format!("Match {}", &id),
            image: format!("https://img.spoonacular.com/recipes/{}-312x231.jpg", &id),
            id,
            used: 1,
            missed: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn used(mut self, count: u32) -> Self {
        self.used = count;
        self
    }

    pub fn missed(mut self, count: u32) -> Self {
        self.missed = count;
        self
    }

    pub fn build(self) -> IngredientMatch {
        IngredientMatch {
            id: self.id,
            title: self.title,
            image: self.image,
            used_ingredient_count: self.used,
            missed_ingredient_count: self.missed,
            likes: None,
        }
    }
}

// ============================================================================
// Preferences
// ============================================================================

/// Preferences as the onboarding flow would produce them.
pub fn preferences(
    cuisines: &[&str],
    diets: &[&str],
    allergies: &[&str],
    recipe_types: &[&str],
) -> UserPreferences {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    UserPreferences {
        cuisines: owned(cuisines),
        diets: owned(diets),
        allergies: owned(allergies),
        recipe_types: owned(recipe_types),
        allergy_other: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spoonacular_builder_defaults() {
        let raw = SpoonacularRecipeBuilder::new(42).build();
        assert_eq!(raw.id, 42);
        assert_eq!(raw.title, "Recipe 42");
        assert!(raw.summary.is_some());
    }

    #[test]
    fn test_spoonacular_builder_minimal() {
        let raw = SpoonacularRecipeBuilder::new(42).title("Soup").minimal().build();
        assert_eq!(raw.title, "Soup");
        assert!(raw.image.is_none());
        assert!(raw.health_score.is_none());
    }

    #[test]
    fn test_recipes_sequential_ids() {
        let ids: Vec<String> = recipes(100, 3).into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["100", "101", "102"]);
    }
}
