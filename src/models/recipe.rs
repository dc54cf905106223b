//! Internal recipe model shared by every read path

use serde::{Deserialize, Serialize};

/// Derived difficulty rating. Not authoritative; computed from provider scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Advanced,
}

impl Difficulty {
    /// Bucket a provider score (0-100) into a difficulty rating.
    ///
    /// Scores above 80 are `Easy`, above 60 `Medium`, everything else `Advanced`.
    pub fn from_score(score: f64) -> Self {
        if score > 80.0 {
            Difficulty::Easy
        } else if score > 60.0 {
            Difficulty::Medium
        } else {
            Difficulty::Advanced
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Where a recipe came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    Spoonacular,
    Local,
}

/// Recipe as exposed to callers of the aggregation layer.
///
/// `id` is always a string, even though Spoonacular uses numeric identifiers.
/// The instruction, ingredient and nutrition payloads are passed through in
/// the provider's own shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,

    pub title: String,

    pub image: String,

    pub serving_size: u32,

    pub minutes: u32,

    pub difficulty: Difficulty,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisines: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dish_types: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diets: Option<Vec<String>>,

    /// Health score clamped to 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<serde_json::Value>,

    pub source: RecipeSource,
}

/// One page of search results.
///
/// On a cache hit `total_results` and `has_more` are estimated from the
/// cached page rather than re-queried.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub recipes: Vec<Recipe>,
    pub total_results: usize,
    pub offset: usize,
    pub has_more: bool,
}

impl SearchPage {
    /// An empty page at the given offset
    pub fn empty(offset: usize) -> Self {
        Self {
            recipes: Vec::new(),
            total_results: 0,
            offset,
            has_more: false,
        }
    }
}

/// A recipe matched by `/recipes/findByNutrients`, with its per-serving
/// amounts as the provider formats them (`"35g"`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientMatch {
    pub id: String,
    pub title: String,
    pub image: String,
    pub calories: Option<u32>,
    pub protein: Option<String>,
    pub fat: Option<String>,
    pub carbs: Option<String>,
}

/// Autocomplete hit for a partial recipe title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteSuggestion {
    pub id: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_thresholds() {
        assert_eq!(Difficulty::from_score(95.0), Difficulty::Easy);
        assert_eq!(Difficulty::from_score(80.5), Difficulty::Easy);
        assert_eq!(Difficulty::from_score(80.0), Difficulty::Medium);
        assert_eq!(Difficulty::from_score(61.0), Difficulty::Medium);
        assert_eq!(Difficulty::from_score(60.0), Difficulty::Advanced);
        assert_eq!(Difficulty::from_score(0.0), Difficulty::Advanced);
    }

    #[test]
    fn test_source_serializes_lowercase() {
        let json = serde_json::to_string(&RecipeSource::Spoonacular).unwrap();
        assert_eq!(json, "\"spoonacular\"");
        let json = serde_json::to_string(&RecipeSource::Local).unwrap();
        assert_eq!(json, "\"local\"");
    }

    #[test]
    fn test_recipe_serializes_camel_case_and_skips_absent() {
        let recipe = Recipe {
            id: "42".to_string(),
            title: "Toast".to_string(),
            image: "https://example.com/toast.jpg".to_string(),
            serving_size: 1,
            minutes: 5,
            difficulty: Difficulty::Easy,
            description: "Bread, but warm.".to_string(),
            cuisines: None,
            dish_types: Some(vec!["breakfast".to_string()]),
            diets: None,
            health_score: None,
            likes: None,
            instructions: None,
            ingredients: None,
            nutrition: None,
            source: RecipeSource::Spoonacular,
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert_eq!(json["servingSize"], 1);
        assert_eq!(json["dishTypes"][0], "breakfast");
        assert_eq!(json["source"], "spoonacular");
        assert!(json.get("cuisines").is_none());
        assert!(json.get("healthScore").is_none());
    }

    #[test]
    fn test_empty_page() {
        let page = SearchPage::empty(20);
        assert!(page.recipes.is_empty());
        assert_eq!(page.offset, 20);
        assert!(!page.has_more);
    }
}
