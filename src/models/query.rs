//! Search filters and user preference inputs

use serde::{Deserialize, Serialize};

/// Sort keys accepted by Spoonacular's complex search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Popularity,
    Healthiness,
    Price,
    Time,
    Random,
    MaxUsedIngredients,
    MinMissingIngredients,
    Calories,
    MetaScore,
}

impl SortKey {
    /// Provider token for this sort key
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Popularity => "popularity",
            SortKey::Healthiness => "healthiness",
            SortKey::Price => "price",
            SortKey::Time => "time",
            SortKey::Random => "random",
            SortKey::MaxUsedIngredients => "max-used-ingredients",
            SortKey::MinMissingIngredients => "min-missing-ingredients",
            SortKey::Calories => "calories",
            SortKey::MetaScore => "meta-score",
        }
    }
}

/// Sort direction for complex search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Optional filters for a recipe search.
///
/// Every field is optional; absent or blank fields are never sent upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeFilters {
    pub query: Option<String>,
    pub cuisine: Option<String>,
    pub diet: Option<String>,
    pub recipe_type: Option<String>,
    pub intolerances: Option<String>,
    pub max_ready_time: Option<u32>,
    pub min_health_score: Option<u32>,
    pub sort: Option<SortKey>,
    pub sort_direction: Option<SortDirection>,
}

impl RecipeFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn diet(mut self, diet: impl Into<String>) -> Self {
        self.diet = Some(diet.into());
        self
    }

    pub fn recipe_type(mut self, recipe_type: impl Into<String>) -> Self {
        self.recipe_type = Some(recipe_type.into());
        self
    }

    pub fn intolerances(mut self, intolerances: impl Into<String>) -> Self {
        self.intolerances = Some(intolerances.into());
        self
    }

    pub fn max_ready_time(mut self, minutes: u32) -> Self {
        self.max_ready_time = Some(minutes);
        self
    }

    pub fn min_health_score(mut self, score: u32) -> Self {
        self.min_health_score = Some(score);
        self
    }

    pub fn sort(mut self, key: SortKey, direction: Option<SortDirection>) -> Self {
        self.sort = Some(key);
        self.sort_direction = direction;
        self
    }
}

/// Per-serving nutrient bounds for `/recipes/findByNutrients`.
///
/// Calories are in kcal, the macronutrients in grams.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientFilters {
    pub min_calories: Option<u32>,
    pub max_calories: Option<u32>,
    pub min_protein: Option<u32>,
    pub max_protein: Option<u32>,
    pub min_carbs: Option<u32>,
    pub max_carbs: Option<u32>,
    pub min_fat: Option<u32>,
    pub max_fat: Option<u32>,
}

impl NutrientFilters {
    /// True when no bound is set. Spoonacular rejects such a request.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Preference selections captured during onboarding or profile editing.
///
/// Labels are the human-facing choices ("Low-Carb / Keto", "Nut-Free"), not
/// provider tokens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub cuisines: Vec<String>,

    #[serde(default)]
    pub diets: Vec<String>,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub recipe_types: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergy_other: Option<String>,
}

/// User record returned by the profile backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    #[serde(default)]
    pub preferences: UserPreferences,
}

/// Account fields to change through `PUT /user/profile`; `None` is left out
/// of the body.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl ProfileUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.birthday.is_none()
    }
}

/// Saved-recipe reference held by the profile backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecipe {
    pub recipe_id: String,
}
