//! Caches for provider responses
//!
//! Two caches with different invalidation rules: a short-TTL in-memory cache
//! for search/detail responses, and a persisted once-per-day recipe.

pub mod daily;
pub mod key;
pub mod response;

use std::time::Duration;

/// Cache TTL configuration
pub struct CacheTtl;

impl CacheTtl {
    /// Search, random, detail and ingredient responses
    pub const RESPONSES: Duration = Duration::from_secs(5 * 60); // 5 min
}

// Re-export main types
pub use daily::{DailyRecipe, DailyRecipeCache};
pub use key::{cache_key, recipe_key};
pub use response::{CacheStats, ResponseCache};
