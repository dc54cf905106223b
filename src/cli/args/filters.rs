//! Filter argument types for CLI commands

use clap::Args;

use super::{SortBy, SortDir};
use crate::models::{NutrientFilters, RecipeFilters};

/// Filter arguments for the search command.
///
/// Intolerances accept both repeated flags and comma-separated values:
/// `--intolerance gluten --intolerance dairy` or `--intolerance gluten,dairy`.
#[derive(Args, Debug, Default, Clone)]
pub struct SearchFilterArgs {
    /// Free-text query
    pub query: Option<String>,

    /// Cuisine (e.g. italian, thai)
    #[arg(long, short = 'c')]
    pub cuisine: Option<String>,

    /// Diet (e.g. vegetarian, ketogenic)
    #[arg(long, short = 'd')]
    pub diet: Option<String>,

    /// Meal type (e.g. breakfast, dessert)
    #[arg(long = "type", short = 't')]
    pub recipe_type: Option<String>,

    /// Intolerances to exclude
    #[arg(long = "intolerance", short = 'i', value_delimiter = ',')]
    pub intolerances: Vec<String>,

    /// Maximum ready time in minutes
    #[arg(long)]
    pub max_time: Option<u32>,

    /// Minimum health score (0-100)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub min_health: Option<u32>,

    /// Sort key
    #[arg(long, value_enum)]
    pub sort: Option<SortBy>,

    /// Sort direction (asc, desc)
    #[arg(long, value_enum, requires = "sort", hide_possible_values = true)]
    pub sort_dir: Option<SortDir>,
}

impl SearchFilterArgs {
    /// Convert CLI args to search filters. Blank strings are dropped.
    pub fn to_filters(&self) -> RecipeFilters {
        let given = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let mut filters = RecipeFilters::new();
        if let Some(query) = given(&self.query) {
            filters = filters.query(query);
        }
        if let Some(cuisine) = given(&self.cuisine) {
            filters = filters.cuisine(cuisine);
        }
        if let Some(diet) = given(&self.diet) {
            filters = filters.diet(diet);
        }
        if let Some(recipe_type) = given(&self.recipe_type) {
            filters = filters.recipe_type(recipe_type);
        }

        let intolerances: Vec<&str> = self
            .intolerances
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if !intolerances.is_empty() {
            filters = filters.intolerances(intolerances.join(","));
        }

        if let Some(minutes) = self.max_time {
            filters = filters.max_ready_time(minutes);
        }
        if let Some(score) = self.min_health {
            filters = filters.min_health_score(score);
        }
        if let Some(sort) = self.sort {
            filters = filters.sort(sort.into(), self.sort_dir.map(Into::into));
        }

        filters
    }
}

/// Per-serving nutrient bounds for the by-nutrients command. At least one
/// bound is required.
#[derive(Args, Debug, Default, Clone)]
#[group(required = true, multiple = true)]
pub struct NutrientArgs {
    /// Minimum calories (kcal)
    #[arg(long)]
    pub min_calories: Option<u32>,

    /// Maximum calories (kcal)
    #[arg(long)]
    pub max_calories: Option<u32>,

    /// Minimum protein (g)
    #[arg(long)]
    pub min_protein: Option<u32>,

    /// Maximum protein (g)
    #[arg(long)]
    pub max_protein: Option<u32>,

    /// Minimum carbohydrates (g)
    #[arg(long)]
    pub min_carbs: Option<u32>,

    /// Maximum carbohydrates (g)
    #[arg(long)]
    pub max_carbs: Option<u32>,

    /// Minimum fat (g)
    #[arg(long)]
    pub min_fat: Option<u32>,

    /// Maximum fat (g)
    #[arg(long)]
    pub max_fat: Option<u32>,
}

impl NutrientArgs {
    pub fn to_filters(&self) -> NutrientFilters {
        NutrientFilters {
            min_calories: self.min_calories,
            max_calories: self.max_calories,
            min_protein: self.min_protein,
            max_protein: self.max_protein,
            min_carbs: self.min_carbs,
            max_carbs: self.max_carbs,
            min_fat: self.min_fat,
            max_fat: self.max_fat,
        }
    }
}
