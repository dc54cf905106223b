//! Mock provider and backend clients for testing
//!
//! Provides implementations of the client traits for unit testing the
//! aggregation layer without making real API calls.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{
    AuthResponse, IngredientMatch, ProfileApi, ProviderParams, RecipeProvider,
    RecipeSearchResults,
};
use crate::error::{ApiError, Result};
use crate::models::{
    AutocompleteSuggestion, NutrientMatch, ProfileUpdate, Recipe, SavedRecipe, UserPreferences,
    UserProfile,
};

/// Tracks provider call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub search_recipes: usize,
    pub get_random_recipes: usize,
    pub get_recipe_information: usize,
    pub search_recipes_by_ingredients: usize,
    pub search_recipes_by_nutrients: usize,
    pub autocomplete_recipe_search: usize,
    pub get_similar_recipes: usize,
    pub get_recipe_nutrition: usize,
}

impl CallCounts {
    /// Get total number of provider calls made.
    pub fn total(&self) -> usize {
        self.search_recipes
            + self.get_random_recipes
            + self.get_recipe_information
            + self.search_recipes_by_ingredients
            + self.search_recipes_by_nutrients
            + self.autocomplete_recipe_search
            + self.get_similar_recipes
            + self.get_recipe_nutrition
    }
}

/// Mock recipe provider.
///
/// Configure responses via builder methods, then hand it to the aggregator.
///
/// # Example
/// ```ignore
/// let mock = MockRecipeProvider::new()
///     .with_search_results(recipes(1, 25))
///     .failing_details(&["3"]);
/// ```
#[derive(Default)]
pub struct MockRecipeProvider {
    search_results: Vec<Recipe>,
    total_results: Option<usize>,
    random: Vec<Recipe>,
    details: HashMap<String, Recipe>,
    ingredient_matches: Vec<IngredientMatch>,
    nutrient_matches: Vec<NutrientMatch>,
    suggestions: Vec<AutocompleteSuggestion>,
    similar: Vec<Recipe>,
    nutrition: Option<serde_json::Value>,
    /// Every call fails with a server error
    fail_all: bool,
    /// Detail lookups for these IDs fail
    failing_ids: HashSet<String>,
    /// Simulated latency for detail lookups
    detail_delay: Option<Duration>,
    /// One-shot error, consumed by the next call
    error: Arc<Mutex<Option<ApiError>>>,
    call_count: Arc<Mutex<CallCounts>>,
    captured_params: Arc<Mutex<Vec<ProviderParams>>>,
    captured_tags: Arc<Mutex<Vec<Option<String>>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockRecipeProvider {
    /// Create a new mock with empty responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipes served by complex search, paged by the `offset`/`number` params.
    pub fn with_search_results(mut self, recipes: Vec<Recipe>) -> Self {
        self.search_results = recipes;
        self
    }

    /// Override the reported total (defaults to the number of search results).
    pub fn with_total_results(mut self, total: usize) -> Self {
        self.total_results = Some(total);
        self
    }

    pub fn with_random(mut self, recipes: Vec<Recipe>) -> Self {
        self.random = recipes;
        self
    }

    /// Recipes served by ID lookup; unknown IDs return `NotFound`.
    pub fn with_details(mut self, recipes: Vec<Recipe>) -> Self {
        self.details = recipes.into_iter().map(|r| (r.id.clone(), r)).collect();
        self
    }

    pub fn with_ingredient_matches(mut self, matches: Vec<IngredientMatch>) -> Self {
        self.ingredient_matches = matches;
        self
    }

    pub fn with_nutrient_matches(mut self, matches: Vec<NutrientMatch>) -> Self {
        self.nutrient_matches = matches;
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<AutocompleteSuggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }

    pub fn with_similar(mut self, recipes: Vec<Recipe>) -> Self {
        self.similar = recipes;
        self
    }

    pub fn with_nutrition(mut self, nutrition: serde_json::Value) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    /// Make every call fail.
    pub fn failing(mut self) -> Self {
        self.fail_all = true;
        self
    }

    /// Make detail lookups for the given IDs fail.
    pub fn failing_details(mut self, ids: &[&str]) -> Self {
        self.failing_ids = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_detail_delay(mut self, delay: Duration) -> Self {
        self.detail_delay = Some(delay);
        self
    }

    /// Configure an error to return on the next call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Params passed to each complex or nutrient search, in call order.
    pub async fn captured_params(&self) -> Vec<ProviderParams> {
        self.captured_params.lock().await.clone()
    }

    /// Tags passed to each random call, in call order.
    pub async fn captured_tags(&self) -> Vec<Option<String>> {
        self.captured_tags.lock().await.clone()
    }

    /// Highest number of detail lookups observed in flight at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn check_error(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        if self.fail_all {
            return Err(ApiError::ServerError("mock failure".to_string()).into());
        }
        Ok(())
    }

    fn param_usize(params: &ProviderParams, key: &str) -> Option<usize> {
        params.get(key).and_then(|v| v.parse().ok())
    }
}

#[async_trait]
impl RecipeProvider for MockRecipeProvider {
    async fn search_recipes(&self, params: &ProviderParams) -> Result<RecipeSearchResults> {
        self.call_count.lock().await.search_recipes += 1;
        self.captured_params.lock().await.push(params.clone());
        self.check_error().await?;

        let offset = Self::param_usize(params, "offset").unwrap_or(0);
        let number = Self::param_usize(params, "number").unwrap_or(10);

        Ok(RecipeSearchResults {
            recipes: self
                .search_results
                .iter()
                .skip(offset)
                .take(number)
                .cloned()
                .collect(),
            offset,
            total_results: self.total_results.unwrap_or(self.search_results.len()),
        })
    }

    async fn get_random_recipes(&self, tags: Option<&str>, number: usize) -> Result<Vec<Recipe>> {
        self.call_count.lock().await.get_random_recipes += 1;
        self.captured_tags
            .lock()
            .await
            .push(tags.map(|t| t.to_string()));
        self.check_error().await?;

        Ok(self.random.iter().take(number).cloned().collect())
    }

    async fn get_recipe_information(&self, id: &str) -> Result<Recipe> {
        self.call_count.lock().await.get_recipe_information += 1;

        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.detail_delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        self.check_error().await?;
        if self.failing_ids.contains(id) {
            return Err(ApiError::ServerError(format!("mock failure for {}", id)).into());
        }

        self.details
            .get(id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("Recipe {}", id)).into())
    }

    async fn search_recipes_by_ingredients(
        &self,
        _ingredients: &[String],
        number: usize,
    ) -> Result<Vec<IngredientMatch>> {
        self.call_count.lock().await.search_recipes_by_ingredients += 1;
        self.check_error().await?;

        Ok(self.ingredient_matches.iter().take(number).cloned().collect())
    }

    async fn search_recipes_by_nutrients(
        &self,
        params: &ProviderParams,
    ) -> Result<Vec<NutrientMatch>> {
        self.call_count.lock().await.search_recipes_by_nutrients += 1;
        self.captured_params.lock().await.push(params.clone());
        self.check_error().await?;

        let number = Self::param_usize(params, "number").unwrap_or(10);
        Ok(self.nutrient_matches.iter().take(number).cloned().collect())
    }

    async fn autocomplete_recipe_search(
        &self,
        _query: &str,
        number: usize,
    ) -> Result<Vec<AutocompleteSuggestion>> {
        self.call_count.lock().await.autocomplete_recipe_search += 1;
        self.check_error().await?;

        Ok(self.suggestions.iter().take(number).cloned().collect())
    }

    async fn get_similar_recipes(&self, _id: &str, number: usize) -> Result<Vec<Recipe>> {
        self.call_count.lock().await.get_similar_recipes += 1;
        self.check_error().await?;

        Ok(self.similar.iter().take(number).cloned().collect())
    }

    async fn get_recipe_nutrition(&self, id: &str) -> Result<serde_json::Value> {
        self.call_count.lock().await.get_recipe_nutrition += 1;
        self.check_error().await?;

        self.nutrition
            .clone()
            .ok_or_else(|| ApiError::NotFound(format!("Nutrition for {}", id)).into())
    }
}

// ============================================================================
// MockProfileBackend
// ============================================================================

/// In-memory profile backend.
///
/// Saved recipes behave like the real backend: saving twice keeps one entry
/// and unsaving an unknown ID is a no-op.
pub struct MockProfileBackend {
    user: Arc<Mutex<Option<UserProfile>>>,
    saved: Arc<Mutex<Vec<SavedRecipe>>>,
    error: Arc<Mutex<Option<ApiError>>>,
}

impl Default for MockProfileBackend {
    fn default() -> Self {
        Self {
            user: Arc::new(Mutex::new(None)),
            saved: Arc::new(Mutex::new(Vec::new())),
            error: Arc::new(Mutex::new(None)),
        }
    }
}

impl MockProfileBackend {
    /// A backend with no logged-in user.
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend logged in as `email` with the given preferences.
    pub fn logged_in(email: &str, preferences: UserPreferences) -> Self {
        let backend = Self::default();
        *backend.user.try_lock().expect("fresh mutex") = Some(UserProfile {
            email: email.to_string(),
            name: None,
            birthday: None,
            preferences,
        });
        backend
    }

    pub fn with_saved(self, ids: &[&str]) -> Self {
        *self.saved.try_lock().expect("fresh mutex") = ids
            .iter()
            .map(|id| SavedRecipe {
                recipe_id: id.to_string(),
            })
            .collect();
        self
    }

    /// Configure an error to return on the next call.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    pub async fn saved_ids(&self) -> Vec<String> {
        self.saved
            .lock()
            .await
            .iter()
            .map(|s| s.recipe_id.clone())
            .collect()
    }

    async fn check(&self) -> Result<()> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        if self.user.lock().await.is_none() {
            return Err(ApiError::NotLoggedIn.into());
        }
        Ok(())
    }

    fn auth(user: UserProfile) -> AuthResponse {
        AuthResponse {
            token: format!("mock-token-{}", user.email),
            user,
        }
    }
}

#[async_trait]
impl ProfileApi for MockProfileBackend {
    async fn login(&self, email: &str, _password: &str) -> Result<AuthResponse> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        let mut user = self.user.lock().await;
        let profile = user.get_or_insert_with(|| UserProfile {
            email: email.to_string(),
            name: None,
            birthday: None,
            preferences: UserPreferences::default(),
        });
        Ok(Self::auth(profile.clone()))
    }

    async fn register(
        &self,
        email: &str,
        _password: &str,
        name: Option<&str>,
    ) -> Result<AuthResponse> {
        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }
        let profile = UserProfile {
            email: email.to_string(),
            name: name.map(|n| n.to_string()),
            birthday: None,
            preferences: UserPreferences::default(),
        };
        *self.user.lock().await = Some(profile.clone());
        Ok(Self::auth(profile))
    }

    async fn current_user(&self) -> Result<UserProfile> {
        self.check().await?;
        self.user
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::NotLoggedIn.into())
    }

    async fn update_preferences(&self, preferences: &UserPreferences) -> Result<UserProfile> {
        self.check().await?;
        let mut user = self.user.lock().await;
        let profile = user.as_mut().ok_or(ApiError::NotLoggedIn)?;
        profile.preferences = preferences.clone();
        Ok(profile.clone())
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        self.check().await?;
        let mut user = self.user.lock().await;
        let profile = user.as_mut().ok_or(ApiError::NotLoggedIn)?;
        if let Some(name) = &update.name {
            profile.name = Some(name.clone());
        }
        if let Some(birthday) = &update.birthday {
            profile.birthday = Some(birthday.clone());
        }
        Ok(profile.clone())
    }

    async fn list_saved_recipes(&self) -> Result<Vec<SavedRecipe>> {
        self.check().await?;
        Ok(self.saved.lock().await.clone())
    }

    async fn save_recipe(&self, recipe_id: &str) -> Result<()> {
        self.check().await?;
        let mut saved = self.saved.lock().await;
        if !saved.iter().any(|s| s.recipe_id == recipe_id) {
            saved.push(SavedRecipe {
                recipe_id: recipe_id.to_string(),
            });
        }
        Ok(())
    }

    async fn unsave_recipe(&self, recipe_id: &str) -> Result<()> {
        self.check().await?;
        self.saved.lock().await.retain(|s| s.recipe_id != recipe_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::recipes;
    use crate::error::Error;

    #[tokio::test]
    async fn test_mock_search_pages_by_offset() {
        let mock = MockRecipeProvider::new().with_search_results(recipes(1, 25));
        let params = ProviderParams::new().with("offset", "20").with("number", "10");

        let results = mock.search_recipes(&params).await.unwrap();

        assert_eq!(results.recipes.len(), 5);
        assert_eq!(results.total_results, 25);
        assert_eq!(mock.call_counts().await.search_recipes, 1);
    }

    #[tokio::test]
    async fn test_mock_one_shot_error_consumed() {
        let mock = MockRecipeProvider::new()
            .with_random(recipes(1, 2))
            .with_error(ApiError::QuotaExceeded)
            .await;

        assert!(mock.get_random_recipes(None, 2).await.is_err());
        assert_eq!(mock.get_random_recipes(None, 2).await.unwrap().len(), 2);
        assert_eq!(mock.call_counts().await.total(), 2);
    }

    #[tokio::test]
    async fn test_mock_backend_requires_login() {
        let backend = MockProfileBackend::new();
        let err = backend.list_saved_recipes().await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::NotLoggedIn)));
    }

    #[tokio::test]
    async fn test_mock_backend_save_is_idempotent() {
        let backend = MockProfileBackend::logged_in("a@b.c", UserPreferences::default());
        backend.save_recipe("1").await.unwrap();
        backend.save_recipe("1").await.unwrap();
        backend.unsave_recipe("2").await.unwrap();

        assert_eq!(backend.saved_ids().await, vec!["1"]);
    }

    #[tokio::test]
    async fn test_mock_profile_update_keeps_unset_fields() {
        let backend = MockProfileBackend::logged_in("cook@example.com", UserPreferences::default());
        backend
            .update_profile(&ProfileUpdate {
                name: Some("Ada".to_string()),
                birthday: None,
            })
            .await
            .unwrap();
        let user = backend
            .update_profile(&ProfileUpdate {
                name: None,
                birthday: Some("1990-04-01".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(user.name.as_deref(), Some("Ada"));
        assert_eq!(user.birthday.as_deref(), Some("1990-04-01"));
    }
}
