//! Recipe aggregation service
//!
//! Sits between callers and the recipe provider: builds cache keys, consults
//! the response cache, applies preference mapping, enriches ingredient
//! matches, and substitutes fallback data when the provider fails.
//!
//! Read operations never fail; upstream errors are logged and turned into an
//! empty, absent, or fallback result. Saved-recipe operations talk to the
//! profile backend and propagate its errors.

mod fallback;

pub use fallback::{fallback_recipe, fallback_recipes};

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use log::{debug, info, warn};

use crate::cache::{CacheStats, DailyRecipeCache, ResponseCache, cache_key, recipe_key};
use crate::client::normalize::{DEFAULT_MINUTES, DEFAULT_SERVINGS};
use crate::client::{IngredientMatch, ProfileApi, ProviderParams, RecipeProvider, fetch_all};
use crate::error::Result;
use crate::models::{
    AutocompleteSuggestion, Difficulty, NutrientFilters, NutrientMatch, Recipe, RecipeFilters,
    RecipeSource, SavedRecipe, SearchPage, SortDirection, SortKey, UserPreferences,
};
use crate::preferences::map_to_query_params;
use crate::storage::KeyValueStore;

/// Uncapped detail fan-out above this many matches is logged as a warning
const LARGE_FANOUT: usize = 20;

/// Orchestrates provider calls behind caching and graceful degradation.
///
/// The aggregator owns its cache state; two aggregators never share entries.
pub struct RecipeAggregator<P: RecipeProvider + ?Sized + 'static> {
    provider: Arc<P>,
    cache: ResponseCache,
    daily: DailyRecipeCache,
    max_concurrent_details: Option<usize>,
}

impl<P: RecipeProvider + ?Sized + 'static> RecipeAggregator<P> {
    /// Create an aggregator with the default response TTL and unbounded
    /// detail fan-out.
    pub fn new(provider: Arc<P>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            provider,
            cache: ResponseCache::default(),
            daily: DailyRecipeCache::new(store),
            max_concurrent_details: None,
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache = ResponseCache::new(ttl);
        self
    }

    /// Cap concurrent detail lookups during ingredient search. `None` fires
    /// every lookup at once.
    pub fn with_max_concurrent_details(mut self, limit: Option<usize>) -> Self {
        self.max_concurrent_details = limit;
        self
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// One page of filtered search results.
    ///
    /// On a cache hit the total and `has_more` are estimated from the cached
    /// page: a full page is assumed to have a successor, so its total counts
    /// one result past the page. Offsets past `usize::MAX` saturate.
    pub async fn search_recipes(
        &self,
        filters: &RecipeFilters,
        page: usize,
        page_size: usize,
    ) -> SearchPage {
        let mut params = ProviderParams::from(filters);
        params.insert("addRecipeInformation", "true");
        self.search_page(params, page, page_size).await
    }

    async fn search_page(
        &self,
        mut params: ProviderParams,
        page: usize,
        page_size: usize,
    ) -> SearchPage {
        let page_size = page_size.max(1);
        let offset = page.saturating_mul(page_size);
        params.insert("offset", offset.to_string());
        params.insert("number", page_size.to_string());

        let key = cache_key("search", &params.pairs());
        if let Some(recipes) = self.cache.get::<Vec<Recipe>>(&key) {
            let count = recipes.len();
            let has_more = count == page_size;
            return SearchPage {
                recipes,
                total_results: offset
                    .saturating_add(count)
                    .saturating_add(usize::from(has_more)),
                offset,
                has_more,
            };
        }

        match self.provider.search_recipes(&params).await {
            Ok(results) => {
                self.cache.set(&key, &results.recipes);
                let has_more =
                    offset.saturating_add(results.recipes.len()) < results.total_results;
                SearchPage {
                    recipes: results.recipes,
                    total_results: results.total_results,
                    offset,
                    has_more,
                }
            }
            Err(e) => {
                warn!("Recipe search failed: {}", e);
                SearchPage::empty(offset)
            }
        }
    }

    /// Random recipes, optionally restricted by comma-separated tags.
    ///
    /// Falls back to the local list when the provider fails or returns nothing.
    pub async fn get_random_recipes(&self, tags: Option<&str>, count: usize) -> Vec<Recipe> {
        if count == 0 {
            return Vec::new();
        }
        let tags = tags.map(str::trim).filter(|t| !t.is_empty());
        let number = count.to_string();
        let key = cache_key(
            "random",
            &[("tags", tags.unwrap_or_default()), ("number", number.as_str())],
        );

        if let Some(recipes) = self.cache.get::<Vec<Recipe>>(&key) {
            return recipes;
        }

        match self.provider.get_random_recipes(tags, count).await {
            Ok(recipes) if !recipes.is_empty() => {
                let recipes: Vec<Recipe> = recipes.into_iter().take(count).collect();
                self.cache.set(&key, &recipes);
                recipes
            }
            Ok(_) => {
                warn!("Provider returned no random recipes, serving fallback");
                fallback_recipes(count)
            }
            Err(e) => {
                warn!("Random recipes failed, serving fallback: {}", e);
                fallback_recipes(count)
            }
        }
    }

    /// Popular recipes matching the user's preferences.
    ///
    /// Absent preferences mean an unfiltered popularity search.
    pub async fn get_personalized_recipes(
        &self,
        prefs: Option<&UserPreferences>,
        limit: usize,
    ) -> Vec<Recipe> {
        if limit == 0 {
            return Vec::new();
        }
        let filters = RecipeFilters::new().sort(SortKey::Popularity, Some(SortDirection::Desc));
        let mut params = ProviderParams::from(&filters);
        params.extend(map_to_query_params(prefs));
        params.insert("addRecipeInformation", "true");
        params.insert("fillIngredients", "true");

        let page = self.search_page(params, 0, limit).await;
        if page.recipes.is_empty() {
            warn!("No personalized recipes, serving fallback");
            return fallback_recipes(limit);
        }
        page.recipes
    }

    // ========================================================================
    // Ingredient search
    // ========================================================================

    /// Recipes using the given ingredients, each enriched with full details.
    ///
    /// Details are fetched in parallel. A failed lookup degrades that recipe
    /// to a partial record built from the match itself.
    pub async fn search_by_ingredients(
        &self,
        ingredients: &[String],
        limit: usize,
    ) -> Vec<Recipe> {
        let mut cleaned: Vec<String> = Vec::new();
        for ingredient in ingredients.iter().map(|i| i.trim().to_lowercase()) {
            if !ingredient.is_empty() && !cleaned.contains(&ingredient) {
                cleaned.push(ingredient);
            }
        }
        if cleaned.is_empty() || limit == 0 {
            return Vec::new();
        }

        let joined = cleaned.join(",");
        let number = limit.to_string();
        let key = cache_key(
            "ingredients",
            &[("ingredients", joined.as_str()), ("number", number.as_str())],
        );
        if let Some(recipes) = self.cache.get::<Vec<Recipe>>(&key) {
            return recipes;
        }

        let matches = match self
            .provider
            .search_recipes_by_ingredients(&cleaned, limit)
            .await
        {
            Ok(matches) => matches,
            Err(e) => {
                warn!("Ingredient search failed: {}", e);
                return Vec::new();
            }
        };

        let mut unique: Vec<IngredientMatch> = Vec::with_capacity(matches.len());
        for m in matches {
            if !unique.iter().any(|u| u.id == m.id) {
                unique.push(m);
            }
        }
        debug!("Enriching {} ingredient matches", unique.len());
        if self.max_concurrent_details.is_none() && unique.len() > LARGE_FANOUT {
            warn!(
                "Fetching {} recipe details at once; set max_concurrent_details to cap this",
                unique.len()
            );
        }

        let provider = Arc::clone(&self.provider);
        let outcomes = fetch_all(
            unique,
            move |m: IngredientMatch| {
                let provider = Arc::clone(&provider);
                async move { provider.get_recipe_information(&m.id).await }
            },
            self.max_concurrent_details,
        )
        .await;

        let recipes: Vec<Recipe> = outcomes
            .into_iter()
            .map(|(m, result)| match result {
                Ok(recipe) => {
                    self.cache.set(&recipe_key(&recipe.id), &recipe);
                    recipe
                }
                Err(e) => {
                    warn!("Detail lookup for {} failed, using partial record: {}", m.id, e);
                    partial_recipe(&m)
                }
            })
            .collect();

        if !recipes.is_empty() {
            self.cache.set(&key, &recipes);
        }
        recipes
    }

    /// Recipes within per-serving nutrient bounds; empty on failure.
    ///
    /// Without any bound nothing is requested.
    pub async fn search_by_nutrients(
        &self,
        filters: &NutrientFilters,
        limit: usize,
    ) -> Vec<NutrientMatch> {
        if filters.is_empty() || limit == 0 {
            return Vec::new();
        }
        let mut params = ProviderParams::from(filters);
        params.insert("number", limit.to_string());

        let key = cache_key("nutrients", &params.pairs());
        if let Some(matches) = self.cache.get::<Vec<NutrientMatch>>(&key) {
            return matches;
        }

        match self.provider.search_recipes_by_nutrients(&params).await {
            Ok(matches) => {
                self.cache.set(&key, &matches);
                matches
            }
            Err(e) => {
                warn!("Nutrient search failed: {}", e);
                Vec::new()
            }
        }
    }

    // ========================================================================
    // Single-recipe lookups
    // ========================================================================

    /// Full recipe details, or `None` on any failure
    pub async fn get_recipe_by_id(&self, id: &str) -> Option<Recipe> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        let key = recipe_key(id);
        if let Some(recipe) = self.cache.get::<Recipe>(&key) {
            return Some(recipe);
        }

        match self.provider.get_recipe_information(id).await {
            Ok(recipe) => {
                self.cache.set(&key, &recipe);
                Some(recipe)
            }
            Err(e) => {
                warn!("Recipe {} unavailable: {}", id, e);
                None
            }
        }
    }

    /// Recipes similar to the given one; empty on failure
    pub async fn get_similar_recipes(&self, id: &str, count: usize) -> Vec<Recipe> {
        let number = count.to_string();
        let key = cache_key("similar", &[("id", id), ("number", number.as_str())]);
        if let Some(recipes) = self.cache.get::<Vec<Recipe>>(&key) {
            return recipes;
        }

        match self.provider.get_similar_recipes(id, count).await {
            Ok(recipes) => {
                self.cache.set(&key, &recipes);
                recipes
            }
            Err(e) => {
                warn!("Similar recipes for {} failed: {}", id, e);
                Vec::new()
            }
        }
    }

    /// Title suggestions for a partial query. A blank query returns nothing
    /// without calling the provider.
    pub async fn autocomplete(&self, query: &str, count: usize) -> Vec<AutocompleteSuggestion> {
        let query = query.trim();
        if query.is_empty() || count == 0 {
            return Vec::new();
        }
        let number = count.to_string();
        let key = cache_key(
            "autocomplete",
            &[("query", query), ("number", number.as_str())],
        );
        if let Some(suggestions) = self.cache.get::<Vec<AutocompleteSuggestion>>(&key) {
            return suggestions;
        }

        match self.provider.autocomplete_recipe_search(query, count).await {
            Ok(suggestions) => {
                self.cache.set(&key, &suggestions);
                suggestions
            }
            Err(e) => {
                warn!("Autocomplete failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Nutrition breakdown for a recipe, or `None` on failure
    pub async fn get_recipe_nutrition(&self, id: &str) -> Option<serde_json::Value> {
        let key = cache_key("nutrition", &[("id", id)]);
        if let Some(nutrition) = self.cache.get::<serde_json::Value>(&key) {
            return Some(nutrition);
        }

        match self.provider.get_recipe_nutrition(id).await {
            Ok(nutrition) => {
                self.cache.set(&key, &nutrition);
                Some(nutrition)
            }
            Err(e) => {
                warn!("Nutrition for {} unavailable: {}", id, e);
                None
            }
        }
    }

    /// Today's recipe, refreshed once per local calendar day
    pub async fn recipe_of_the_day(&self, prefs: Option<&UserPreferences>) -> Recipe {
        self.daily.get_or_refresh(self.provider.as_ref(), prefs).await
    }

    /// Drop every response cache entry. The recipe of the day is unaffected.
    pub fn clear_cache(&self) -> usize {
        let removed = self.cache.invalidate_all();
        info!("Cleared {} cached responses", removed);
        removed
    }

    // ========================================================================
    // Saved recipes
    // ========================================================================

    pub async fn list_saved_recipes<B: ProfileApi + ?Sized>(
        &self,
        backend: &B,
    ) -> Result<Vec<SavedRecipe>> {
        backend.list_saved_recipes().await
    }

    pub async fn save_recipe<B: ProfileApi + ?Sized>(&self, backend: &B, id: &str) -> Result<()> {
        backend.save_recipe(id).await
    }

    pub async fn unsave_recipe<B: ProfileApi + ?Sized>(&self, backend: &B, id: &str) -> Result<()> {
        backend.unsave_recipe(id).await
    }

    pub async fn is_recipe_saved<B: ProfileApi + ?Sized>(
        &self,
        backend: &B,
        id: &str,
    ) -> Result<bool> {
        let saved = backend.list_saved_recipes().await?;
        Ok(saved.iter().any(|s| s.recipe_id == id))
    }

    /// Saved recipes resolved to full details.
    ///
    /// Listing failures propagate; recipes whose details cannot be fetched
    /// are skipped.
    pub async fn saved_recipe_details<B: ProfileApi + ?Sized>(
        &self,
        backend: &B,
    ) -> Result<Vec<Recipe>> {
        let saved = backend.list_saved_recipes().await?;
        let limit = self.max_concurrent_details.unwrap_or(saved.len()).max(1);

        let recipes: Vec<Option<Recipe>> = stream::iter(saved.iter())
            .map(|s| self.get_recipe_by_id(&s.recipe_id))
            .buffered(limit)
            .collect()
            .await;

        Ok(recipes.into_iter().flatten().collect())
    }
}

/// Stand-in for a match whose detail lookup failed
fn partial_recipe(m: &IngredientMatch) -> Recipe {
    Recipe {
        id: m.id.clone(),
        title: m.title.clone(),
        image: m.image.clone(),
        serving_size: DEFAULT_SERVINGS,
        minutes: DEFAULT_MINUTES,
        difficulty: Difficulty::Medium,
        description: format!("Uses {} of your ingredients", m.used_ingredient_count),
        cuisines: None,
        dish_types: None,
        diets: None,
        health_score: None,
        likes: m.likes,
        instructions: None,
        ingredients: None,
        nutrition: None,
        source: RecipeSource::Spoonacular,
    }
}
