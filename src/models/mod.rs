//! Domain models for the aggregation layer and their CLI display forms

pub mod display;
mod query;
mod recipe;

pub use display::{NutrientMatchDisplay, RecipeDisplay, SuggestionDisplay};
pub use query::{
    NutrientFilters, ProfileUpdate, RecipeFilters, SavedRecipe, SortDirection, SortKey,
    UserPreferences, UserProfile,
};
pub use recipe::{
    AutocompleteSuggestion, Difficulty, NutrientMatch, Recipe, RecipeSource, SearchPage,
};
