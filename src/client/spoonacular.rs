//! Spoonacular API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use super::http::read_json;
use super::models::{
    AutocompleteResponse, ComplexSearchResponse, IngredientMatchResponse, NutrientMatchResponse,
    RandomRecipesResponse, SimilarRecipeResponse, SpoonacularRecipe,
};
use super::normalize::{image_url, normalize_recipe, normalize_similar};
use super::{IngredientMatch, ProviderParams, RecipeProvider, RecipeSearchResults};
use crate::error::{ApiError, Result};
use crate::models::{AutocompleteSuggestion, NutrientMatch, Recipe};

/// Spoonacular API base URL
pub const API_BASE_URL: &str = "https://api.spoonacular.com";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client-side request ceiling, well under the provider's per-second limit
const RATE_LIMIT_PER_SECOND: u32 = 5;

/// Spoonacular API client.
///
/// The API key travels on every request both as the `apiKey` query parameter
/// and the `x-api-key` header.
pub struct SpoonacularClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl SpoonacularClient {
    /// Create a new client against the public Spoonacular API
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let quota = Quota::per_second(
            NonZeroU32::new(RATE_LIMIT_PER_SECOND).unwrap_or(NonZeroU32::MIN),
        );

        Ok(Self {
            http,
            base_url: API_BASE_URL.to_string(),
            api_key: api_key.into(),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        })
    }

    /// Point the client at a different host (mock servers, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Issue an authenticated GET and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} ({} params)", path, query.len());

        let response = self
            .http
            .get(&url)
            .header("x-api-key", &self.api_key)
            .query(&[("apiKey", self.api_key.as_str())])
            .query(query)
            .send()
            .await
            .map_err(ApiError::from)?;

        read_json(response).await
    }
}

/// Spoonacular recipe IDs are numeric; reject anything else before it reaches a URL path.
fn numeric_id(id: &str) -> Result<&str> {
    if !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(id)
    } else {
        Err(ApiError::BadRequest(format!("Invalid recipe id: {:?}", id)).into())
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn search_recipes(&self, params: &ProviderParams) -> Result<RecipeSearchResults> {
        let response: ComplexSearchResponse =
            self.get("/recipes/complexSearch", &params.pairs()).await?;

        Ok(RecipeSearchResults {
            recipes: response.results.into_iter().map(normalize_recipe).collect(),
            offset: response.offset,
            total_results: response.total_results,
        })
    }

    async fn get_random_recipes(&self, tags: Option<&str>, number: usize) -> Result<Vec<Recipe>> {
        let number = number.to_string();
        let mut query = vec![("number", number.as_str())];
        if let Some(tags) = tags.filter(|t| !t.trim().is_empty()) {
            query.push(("tags", tags));
        }

        let response: RandomRecipesResponse = self.get("/recipes/random", &query).await?;
        Ok(response.recipes.into_iter().map(normalize_recipe).collect())
    }

    async fn get_recipe_information(&self, id: &str) -> Result<Recipe> {
        let path = format!("/recipes/{}/information", numeric_id(id)?);
        let recipe: SpoonacularRecipe = self.get(&path, &[("includeNutrition", "false")]).await?;
        Ok(normalize_recipe(recipe))
    }

    async fn search_recipes_by_ingredients(
        &self,
        ingredients: &[String],
        number: usize,
    ) -> Result<Vec<IngredientMatch>> {
        let joined = ingredients.join(",");
        let number = number.to_string();
        let query = [
            ("ingredients", joined.as_str()),
            ("number", number.as_str()),
            ("ranking", "1"),
            ("ignorePantry", "true"),
        ];

        let matches: Vec<IngredientMatchResponse> =
            self.get("/recipes/findByIngredients", &query).await?;

        Ok(matches
            .into_iter()
            .map(|m| IngredientMatch {
                id: m.id.to_string(),
                image: image_url(m.id, m.image.as_deref(), None),
                title: m.title,
                used_ingredient_count: m.used_ingredient_count,
                missed_ingredient_count: m.missed_ingredient_count,
                likes: m.likes,
            })
            .collect())
    }

    async fn search_recipes_by_nutrients(
        &self,
        params: &ProviderParams,
    ) -> Result<Vec<NutrientMatch>> {
        let matches: Vec<NutrientMatchResponse> =
            self.get("/recipes/findByNutrients", &params.pairs()).await?;

        Ok(matches
            .into_iter()
            .map(|m| NutrientMatch {
                id: m.id.to_string(),
                image: image_url(m.id, m.image.as_deref(), m.image_type.as_deref()),
                title: m.title,
                calories: m.calories.map(|c| c.round().max(0.0) as u32),
                protein: m.protein,
                fat: m.fat,
                carbs: m.carbs,
            })
            .collect())
    }

    async fn autocomplete_recipe_search(
        &self,
        query: &str,
        number: usize,
    ) -> Result<Vec<AutocompleteSuggestion>> {
        let number = number.to_string();
        let hits: Vec<AutocompleteResponse> = self
            .get(
                "/recipes/autocomplete",
                &[("query", query), ("number", number.as_str())],
            )
            .await?;

        Ok(hits
            .into_iter()
            .map(|h| AutocompleteSuggestion {
                id: h.id.to_string(),
                title: h.title,
            })
            .collect())
    }

    async fn get_similar_recipes(&self, id: &str, number: usize) -> Result<Vec<Recipe>> {
        let path = format!("/recipes/{}/similar", numeric_id(id)?);
        let number = number.to_string();
        let similar: Vec<SimilarRecipeResponse> =
            self.get(&path, &[("number", number.as_str())]).await?;
        Ok(similar.into_iter().map(normalize_similar).collect())
    }

    async fn get_recipe_nutrition(&self, id: &str) -> Result<serde_json::Value> {
        let path = format!("/recipes/{}/nutritionWidget.json", numeric_id(id)?);
        self.get(&path, &[]).await
    }
}
