//! Static recipes served when the provider cannot be reached

use crate::models::{Difficulty, Recipe, RecipeSource};

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/556x370?text=cooked";

fn local(
    id: &str,
    title: &str,
    serving_size: u32,
    minutes: u32,
    difficulty: Difficulty,
    description: &str,
) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: title.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
        serving_size,
        minutes,
        difficulty,
        description: description.to_string(),
        cuisines: None,
        dish_types: None,
        diets: None,
        health_score: None,
        likes: None,
        instructions: None,
        ingredients: None,
        nutrition: None,
        source: RecipeSource::Local,
    }
}

fn all() -> [Recipe; 3] {
    [
        local(
            "local-1",
            "Hawaiian Chicken Pizza",
            6,
            55,
            Difficulty::Advanced,
            "Homemade crust topped with grilled chicken, pineapple and red onion.",
        ),
        local(
            "local-2",
            "Peanut Butter Banana Pancake Wrap",
            6,
            45,
            Difficulty::Easy,
            "Fluffy pancakes rolled around peanut butter and sliced banana.",
        ),
        local(
            "local-3",
            "One-Pan Garlic Butter Pasta",
            4,
            25,
            Difficulty::Easy,
            "Spaghetti tossed in browned garlic butter with parmesan and parsley.",
        ),
    ]
}

/// The fallback list, truncated to `count`
pub fn fallback_recipes(count: usize) -> Vec<Recipe> {
    all().into_iter().take(count).collect()
}

/// The first fallback recipe, for single-recipe features
pub fn fallback_recipe() -> Recipe {
    let [first, ..] = all();
    first
}
