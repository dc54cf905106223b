//! Spoonacular wire shapes
//!
//! Only the fields the aggregation layer reads are modeled. Everything is
//! optional except the identifier and title, because the shape depends on
//! which endpoint and flags produced it.

use serde::{Deserialize, Serialize};

/// Recipe as returned by `/recipes/{id}/information`, `/recipes/random`, and
/// `/recipes/complexSearch` with `addRecipeInformation=true`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpoonacularRecipe {
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub image_type: Option<String>,

    #[serde(default)]
    pub ready_in_minutes: Option<u32>,

    #[serde(default)]
    pub servings: Option<u32>,

    #[serde(default)]
    pub aggregate_likes: Option<u32>,

    #[serde(default)]
    pub spoonacular_score: Option<f64>,

    #[serde(default)]
    pub health_score: Option<f64>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub cuisines: Option<Vec<String>>,

    #[serde(default)]
    pub dish_types: Option<Vec<String>>,

    #[serde(default)]
    pub diets: Option<Vec<String>>,

    #[serde(default)]
    pub analyzed_instructions: Option<serde_json::Value>,

    #[serde(default)]
    pub extended_ingredients: Option<serde_json::Value>,

    #[serde(default)]
    pub nutrition: Option<serde_json::Value>,
}

/// `/recipes/complexSearch` envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexSearchResponse {
    pub results: Vec<SpoonacularRecipe>,

    #[serde(default)]
    pub offset: usize,

    #[serde(default)]
    pub number: usize,

    #[serde(default)]
    pub total_results: usize,
}

/// `/recipes/random` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct RandomRecipesResponse {
    pub recipes: Vec<SpoonacularRecipe>,
}

/// Element of `/recipes/findByIngredients`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMatchResponse {
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub used_ingredient_count: u32,

    #[serde(default)]
    pub missed_ingredient_count: u32,

    #[serde(default)]
    pub likes: Option<u32>,
}

/// Element of `/recipes/findByNutrients`. Calories are a number, the
/// macronutrients strings such as `"35g"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientMatchResponse {
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub image_type: Option<String>,

    #[serde(default)]
    pub calories: Option<f64>,

    #[serde(default)]
    pub protein: Option<String>,

    #[serde(default)]
    pub fat: Option<String>,

    #[serde(default)]
    pub carbs: Option<String>,
}

/// Element of `/recipes/autocomplete`
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteResponse {
    pub id: u64,
    pub title: String,
}

/// Element of `/recipes/{id}/similar`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarRecipeResponse {
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub image_type: Option<String>,

    #[serde(default)]
    pub ready_in_minutes: Option<u32>,

    #[serde(default)]
    pub servings: Option<u32>,

    #[serde(default)]
    pub source_url: Option<String>,
}
