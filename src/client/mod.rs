//! Upstream clients: the Spoonacular recipe provider and the profile backend

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{
    AutocompleteSuggestion, NutrientMatch, ProfileUpdate, Recipe, SavedRecipe, UserPreferences,
    UserProfile,
};

pub mod backend;
#[cfg(test)]
pub mod fixtures;
mod http;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod normalize;
pub mod parallel;
pub mod params;
pub mod spoonacular;

pub use backend::ProfileBackend;
#[cfg(test)]
pub use mock::{MockProfileBackend, MockRecipeProvider};
pub use parallel::fetch_all;
pub use params::ProviderParams;
pub use spoonacular::SpoonacularClient;

/// Normalized result of a complex search
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSearchResults {
    pub recipes: Vec<Recipe>,
    pub offset: usize,
    pub total_results: usize,
}

/// A recipe matched by `/recipes/findByIngredients`, before detail lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientMatch {
    pub id: String,
    pub title: String,
    pub image: String,
    pub used_ingredient_count: u32,
    pub missed_ingredient_count: u32,
    pub likes: Option<u32>,
}

/// Recipe provider operations.
///
/// Implementations issue exactly one request per call and surface failures as
/// errors; absorbing them is the aggregator's job.
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Complex search. `params` must already carry `offset` and `number`.
    async fn search_recipes(&self, params: &ProviderParams) -> Result<RecipeSearchResults>;

    /// Random recipes, optionally restricted by comma-separated tags
    async fn get_random_recipes(&self, tags: Option<&str>, number: usize) -> Result<Vec<Recipe>>;

    /// Full recipe information by ID
    async fn get_recipe_information(&self, id: &str) -> Result<Recipe>;

    /// Recipes that use the given ingredients
    async fn search_recipes_by_ingredients(
        &self,
        ingredients: &[String],
        number: usize,
    ) -> Result<Vec<IngredientMatch>>;

    /// Recipes within per-serving nutrient bounds. `params` carries the
    /// bounds and `number`.
    async fn search_recipes_by_nutrients(
        &self,
        params: &ProviderParams,
    ) -> Result<Vec<NutrientMatch>>;

    /// Title autocompletion
    async fn autocomplete_recipe_search(
        &self,
        query: &str,
        number: usize,
    ) -> Result<Vec<AutocompleteSuggestion>>;

    /// Recipes similar to the given one
    async fn get_similar_recipes(&self, id: &str, number: usize) -> Result<Vec<Recipe>>;

    /// Nutrition widget payload, passed through as-is
    async fn get_recipe_nutrition(&self, id: &str) -> Result<serde_json::Value>;
}

/// Token and user returned by login/register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserProfile,
}

/// Profile backend operations.
///
/// Everything here is a pass-through; failures always propagate.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthResponse>;

    async fn current_user(&self) -> Result<UserProfile>;

    async fn update_preferences(&self, preferences: &UserPreferences) -> Result<UserProfile>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile>;

    async fn list_saved_recipes(&self) -> Result<Vec<SavedRecipe>>;

    async fn save_recipe(&self, recipe_id: &str) -> Result<()>;

    async fn unsave_recipe(&self, recipe_id: &str) -> Result<()>;
}
