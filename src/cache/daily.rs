//! Recipe of the day, persisted once per local calendar day

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::aggregator::fallback_recipe;
use crate::client::params::{DIET, TYPE};
use crate::client::{ProviderParams, RecipeProvider};
use crate::models::{Recipe, UserPreferences};
use crate::preferences::map_to_query_params_randomized;
use crate::storage::{DAILY_RECIPE_KEY, KeyValueStore};

/// The persisted `{recipe, date}` pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecipe {
    pub recipe: Recipe,
    pub date: NaiveDate,
}

/// Once-per-day recipe backed by the local key-value store.
///
/// Unlike the response cache, validity is a calendar-day boundary in local
/// time, not a rolling duration. Refreshes are serialized so concurrent
/// callers on a new day trigger a single upstream call.
pub struct DailyRecipeCache {
    store: Arc<dyn KeyValueStore>,
    refresh: Mutex<()>,
}

impl DailyRecipeCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            refresh: Mutex::new(()),
        }
    }

    /// The persisted entry, whatever its date
    pub fn stored(&self) -> Option<DailyRecipe> {
        match self.store.get_json(DAILY_RECIPE_KEY) {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Failed to read recipe of the day: {}", e);
                None
            }
        }
    }

    /// The stored recipe when it was picked on `today`; never touches the
    /// provider.
    pub fn current_on(&self, today: NaiveDate) -> Option<Recipe> {
        self.stored()
            .filter(|entry| entry.date == today)
            .map(|entry| entry.recipe)
    }

    /// Today's stored recipe, if one was already picked
    pub fn current(&self) -> Option<Recipe> {
        self.current_on(Local::now().date_naive())
    }

    /// Today's recipe, fetching and persisting a new one on the first call of
    /// each day.
    ///
    /// Never fails: an upstream error serves the last stored recipe, or a
    /// fallback recipe when nothing was ever stored.
    pub async fn get_or_refresh<P>(&self, provider: &P, prefs: Option<&UserPreferences>) -> Recipe
    where
        P: RecipeProvider + ?Sized,
    {
        let today = Local::now().date_naive();
        let params = {
            let mut rng = rand::thread_rng();
            map_to_query_params_randomized(prefs, &mut rng)
        };
        self.get_or_refresh_on(provider, today, &params).await
    }

    pub(crate) async fn get_or_refresh_on<P>(
        &self,
        provider: &P,
        today: NaiveDate,
        params: &ProviderParams,
    ) -> Recipe
    where
        P: RecipeProvider + ?Sized,
    {
        let _guard = self.refresh.lock().await;

        let stored = self.stored();
        if let Some(entry) = stored.as_ref().filter(|e| e.date == today) {
            log::debug!("Recipe of the day still valid for {}", today);
            return entry.recipe.clone();
        }

        let tags = random_tags(params);
        match provider.get_random_recipes(tags.as_deref(), 1).await {
            Ok(recipes) => match recipes.into_iter().next() {
                Some(recipe) => {
                    let entry = DailyRecipe {
                        recipe: recipe.clone(),
                        date: today,
                    };
                    if let Err(e) = self.store.set_json(DAILY_RECIPE_KEY, &entry) {
                        log::warn!("Failed to persist recipe of the day: {}", e);
                    }
                    return recipe;
                }
                None => log::warn!("Provider returned no random recipe"),
            },
            Err(e) => log::warn!("Failed to refresh recipe of the day: {}", e),
        }

        match stored {
            Some(entry) => entry.recipe,
            None => fallback_recipe(),
        }
    }
}

/// Comma-joined `tags` for the random endpoint, from the meal type and diet
fn random_tags(params: &ProviderParams) -> Option<String> {
    let tags: Vec<&str> = [TYPE, DIET]
        .iter()
        .filter_map(|key| params.get(key))
        .collect();
    (!tags.is_empty()).then(|| tags.join(","))
}
