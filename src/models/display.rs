//! Display model implementations for table and JSON output
//!
//! Display models flatten recipes into CLI-friendly rows with stable column
//! names.

use serde::Serialize;
use tabled::Tabled;

use super::{AutocompleteSuggestion, NutrientMatch, Recipe, RecipeSource};

/// Recipe display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RecipeDisplay {
    /// Recipe ID
    #[tabled(rename = "ID")]
    pub id: String,

    /// Recipe title
    #[tabled(rename = "TITLE")]
    pub title: String,

    /// Serving size
    #[tabled(rename = "SERVES")]
    pub serves: u32,

    /// Ready time in minutes
    #[tabled(rename = "MINUTES")]
    pub minutes: u32,

    /// Derived difficulty
    #[tabled(rename = "DIFFICULTY")]
    pub difficulty: String,

    /// Health score, or "-" when unknown
    #[tabled(rename = "HEALTH")]
    pub health: String,

    /// spoonacular or local
    #[tabled(rename = "SOURCE")]
    pub source: String,
}

impl From<&Recipe> for RecipeDisplay {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            serves: recipe.serving_size,
            minutes: recipe.minutes,
            difficulty: recipe.difficulty.as_str().to_string(),
            health: recipe
                .health_score
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string()),
            source: match recipe.source {
                RecipeSource::Spoonacular => "spoonacular".to_string(),
                RecipeSource::Local => "local".to_string(),
            },
        }
    }
}

impl From<Recipe> for RecipeDisplay {
    fn from(recipe: Recipe) -> Self {
        Self::from(&recipe)
    }
}

/// Autocomplete suggestion display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SuggestionDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,
}

impl From<AutocompleteSuggestion> for SuggestionDisplay {
    fn from(s: AutocompleteSuggestion) -> Self {
        Self {
            id: s.id,
            title: s.title,
        }
    }
}

/// Nutrient search hit display model.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct NutrientMatchDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "KCAL")]
    pub calories: String,

    #[tabled(rename = "PROTEIN")]
    pub protein: String,

    #[tabled(rename = "CARBS")]
    pub carbs: String,

    #[tabled(rename = "FAT")]
    pub fat: String,
}

impl From<NutrientMatch> for NutrientMatchDisplay {
    fn from(m: NutrientMatch) -> Self {
        let or_dash = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
        Self {
            id: m.id,
            title: m.title,
            calories: or_dash(m.calories.map(|c| c.to_string())),
            protein: or_dash(m.protein),
            carbs: or_dash(m.carbs),
            fat: or_dash(m.fat),
        }
    }
}
