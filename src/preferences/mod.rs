//! Translation of preference labels into provider query parameters
//!
//! Users pick human-facing labels ("Low-Carb / Keto", "Peanuts", "Snacks").
//! Spoonacular expects its own tokens ("ketogenic", "peanut", "snack").
//! Both the onboarding labels and the preference editor labels are mapped.
//! Labels without a mapping are dropped rather than forwarded.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::client::ProviderParams;
use crate::client::params::{CUISINE, DIET, INTOLERANCES, MAX_READY_TIME, TYPE};
use crate::models::UserPreferences;

/// Diet label → Spoonacular diet token
pub const DIET_TOKENS: &[(&str, &str)] = &[
    ("Vegetarian", "vegetarian"),
    ("Vegan", "vegan"),
    ("Pescatarian", "pescetarian"),
    ("Gluten-Free", "gluten free"),
    ("Low-Carb / Keto", "ketogenic"),
    ("Keto", "ketogenic"),
    ("Low-Carb", "ketogenic"),
    ("Paleo", "paleo"),
];

/// Allergy label → Spoonacular intolerance token
pub const ALLERGY_TOKENS: &[(&str, &str)] = &[
    ("Nut-Free", "tree nut"),
    ("Gluten-Free", "gluten"),
    ("Dairy-Free", "dairy"),
    ("Egg-Free", "egg"),
    ("Shellfish-Free", "shellfish"),
    ("Soy-Free", "soy"),
    ("Peanuts", "peanut"),
    ("Tree Nuts", "tree nut"),
    ("Shellfish", "shellfish"),
    ("Fish", "seafood"),
    ("Eggs", "egg"),
    ("Dairy", "dairy"),
    ("Soy", "soy"),
    ("Wheat/Gluten", "gluten"),
    ("Sesame", "sesame"),
];

/// Recipe-type label → Spoonacular meal type
pub const MEAL_TYPE_TOKENS: &[(&str, &str)] = &[
    ("Breakfast", "breakfast"),
    ("Lunch", "main course"),
    ("Dinner", "main course"),
    ("Snacks", "snack"),
    ("Desserts", "dessert"),
    ("Drinks & Smoothies", "beverage"),
    ("Appetizers", "appetizer"),
    ("Soups & Salads", "soup"),
    ("Side Dishes", "side dish"),
    ("Beverages", "beverage"),
];

/// Intolerance tokens Spoonacular accepts; free-text allergies are matched
/// against these
pub const KNOWN_INTOLERANCES: &[&str] = &[
    "dairy",
    "egg",
    "gluten",
    "grain",
    "peanut",
    "seafood",
    "sesame",
    "shellfish",
    "soy",
    "sulfite",
    "tree nut",
    "wheat",
];

/// Diet selection meaning "don't filter by diet"
pub const NO_DIET_SENTINEL: &str = "No specific diet";

/// Allergy selections meaning "nothing to avoid". They add no intolerance
/// but never cancel an allergy picked alongside them.
pub const NO_ALLERGY_SENTINELS: &[&str] = &["No Allergies", "None"];

/// Recipe-type label that asks for short recipes instead of a meal type
pub const QUICK_MEALS_LABEL: &str = "Quick Meals";

/// Ready-time ceiling, in minutes, applied for [`QUICK_MEALS_LABEL`]
pub const QUICK_MEAL_MINUTES: u32 = 30;

/// Cuisine selections meaning "don't filter by cuisine"
pub const ANY_CUISINE_SENTINELS: &[&str] = &["Any", "Any cuisine"];

fn is_one_of(label: &str, sentinels: &[&str]) -> bool {
    let label = label.trim();
    sentinels.iter().any(|s| s.eq_ignore_ascii_case(label))
}

fn lookup(table: &[(&str, &'static str)], label: &str) -> Option<&'static str> {
    let label = label.trim();
    table
        .iter()
        .find(|(l, _)| l.eq_ignore_ascii_case(label))
        .map(|(_, token)| *token)
}

/// Map labels through a table, dropping unmapped ones and duplicates
/// while keeping first-seen order.
fn map_labels(table: &[(&str, &'static str)], labels: &[String]) -> Vec<&'static str> {
    let mut tokens = Vec::new();
    for token in labels.iter().filter_map(|l| lookup(table, l)) {
        if !tokens.contains(&token) {
            tokens.push(token);
        }
    }
    tokens
}

fn cuisine_param(cuisines: &[String]) -> Option<String> {
    let selected: Vec<&str> = cuisines
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .filter(|c| !is_one_of(c, ANY_CUISINE_SENTINELS))
        .collect();
    (!selected.is_empty()).then(|| selected.join(","))
}

fn diet_param(diets: &[String]) -> Option<String> {
    if diets.iter().any(|d| is_one_of(d, &[NO_DIET_SENTINEL])) {
        return None;
    }
    let tokens = map_labels(DIET_TOKENS, diets);
    (!tokens.is_empty()).then(|| tokens.join(","))
}

fn intolerances_param(prefs: &UserPreferences) -> Option<String> {
    let allergies: Vec<String> = prefs
        .allergies
        .iter()
        .filter(|a| !is_one_of(a, NO_ALLERGY_SENTINELS))
        .cloned()
        .collect();
    let mut tokens: Vec<String> = map_labels(ALLERGY_TOKENS, &allergies)
        .into_iter()
        .map(String::from)
        .collect();

    if let Some(other) = prefs.allergy_other.as_deref() {
        for piece in other.split(',').map(|p| p.trim().to_lowercase()) {
            if KNOWN_INTOLERANCES.contains(&piece.as_str()) && !tokens.contains(&piece) {
                tokens.push(piece);
            }
        }
    }

    (!tokens.is_empty()).then(|| tokens.join(","))
}

fn base_params(prefs: &UserPreferences) -> ProviderParams {
    let mut params = ProviderParams::new();
    params.insert_opt(CUISINE, cuisine_param(&prefs.cuisines));
    params.insert_opt(DIET, diet_param(&prefs.diets));
    params.insert_opt(INTOLERANCES, intolerances_param(prefs));
    if prefs.recipe_types.iter().any(|t| is_one_of(t, &[QUICK_MEALS_LABEL])) {
        params.insert(MAX_READY_TIME, QUICK_MEAL_MINUTES.to_string());
    }
    params
}

/// Map preferences to provider parameters, picking the first mapped meal type.
///
/// Absent preferences, or preferences with nothing mappable, produce an empty
/// parameter set.
pub fn map_to_query_params(prefs: Option<&UserPreferences>) -> ProviderParams {
    let Some(prefs) = prefs else {
        return ProviderParams::new();
    };
    let mut params = base_params(prefs);
    params.insert_opt(
        TYPE,
        map_labels(MEAL_TYPE_TOKENS, &prefs.recipe_types).first(),
    );
    params
}

/// Like [`map_to_query_params`], but the meal type is drawn uniformly from
/// the distinct mapped types using `rng`.
pub fn map_to_query_params_randomized<R: Rng + ?Sized>(
    prefs: Option<&UserPreferences>,
    rng: &mut R,
) -> ProviderParams {
    let Some(prefs) = prefs else {
        return ProviderParams::new();
    };
    let mut params = base_params(prefs);
    params.insert_opt(
        TYPE,
        map_labels(MEAL_TYPE_TOKENS, &prefs.recipe_types).choose(rng),
    );
    params
}
