//! Query parameters sent to Spoonacular
//!
//! `ProviderParams` is an ordered map, so iterating it yields a canonical
//! parameter order. That order doubles as the cache-key serialization.

use std::collections::BTreeMap;

use crate::models::{NutrientFilters, RecipeFilters};

/// Parameter name for the cuisine filter
pub const CUISINE: &str = "cuisine";
/// Parameter name for the diet filter
pub const DIET: &str = "diet";
/// Parameter name for the intolerance filter
pub const INTOLERANCES: &str = "intolerances";
/// Parameter name for the meal type filter
pub const TYPE: &str = "type";
/// Parameter name for the ready-time ceiling, in minutes
pub const MAX_READY_TIME: &str = "maxReadyTime";

/// Provider query parameters.
///
/// Blank values are dropped on insert, so a parameter is either present with
/// content or absent entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderParams {
    values: BTreeMap<String, String>,
}

impl ProviderParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter. Empty or whitespace-only values are ignored.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        self.values.insert(key.to_string(), trimmed.to_string());
    }

    /// Insert a parameter only when a value is present.
    pub fn insert_opt<V: ToString>(&mut self, key: &str, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key, v.to_string());
        }
    }

    /// Builder-style insert
    #[cfg(test)]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Merge another parameter set into this one. Values from `other` win.
    pub fn extend(&mut self, other: ProviderParams) {
        self.values.extend(other.values);
    }

    /// Borrowed `(key, value)` pairs in canonical order
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

impl From<&RecipeFilters> for ProviderParams {
    fn from(filters: &RecipeFilters) -> Self {
        let mut params = ProviderParams::new();
        params.insert_opt("query", filters.query.as_deref());
        params.insert_opt(CUISINE, filters.cuisine.as_deref());
        params.insert_opt(DIET, filters.diet.as_deref());
        params.insert_opt(TYPE, filters.recipe_type.as_deref());
        params.insert_opt(INTOLERANCES, filters.intolerances.as_deref());
        params.insert_opt(MAX_READY_TIME, filters.max_ready_time);
        params.insert_opt("minHealthScore", filters.min_health_score);
        params.insert_opt("sort", filters.sort.map(|s| s.as_str()));
        params.insert_opt("sortDirection", filters.sort_direction.map(|d| d.as_str()));
        params
    }
}

impl From<&NutrientFilters> for ProviderParams {
    fn from(filters: &NutrientFilters) -> Self {
        let mut params = ProviderParams::new();
        params.insert_opt("minCalories", filters.min_calories);
        params.insert_opt("maxCalories", filters.max_calories);
        params.insert_opt("minProtein", filters.min_protein);
        params.insert_opt("maxProtein", filters.max_protein);
        params.insert_opt("minCarbs", filters.min_carbs);
        params.insert_opt("maxCarbs", filters.max_carbs);
        params.insert_opt("minFat", filters.min_fat);
        params.insert_opt("maxFat", filters.max_fat);
        params
    }
}
