//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading, store selection, and client initialization.

use std::sync::Arc;

use log::{debug, warn};

use crate::aggregator::RecipeAggregator;
use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{ProfileApi, ProfileBackend, SpoonacularClient};
use crate::config::Config;
use crate::error::Result;
use crate::models::UserPreferences;
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};

/// Aggregator over the live Spoonacular client
pub type Aggregator = RecipeAggregator<SpoonacularClient>;

/// Context for command execution containing config, local store, and
/// output preference.
pub struct CommandContext {
    /// Loaded configuration with env and flag overrides applied
    pub config: Config,
    /// Token and recipe-of-the-day storage
    pub store: Arc<dyn KeyValueStore>,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config (file, then env, then flags) and open the local store.
    ///
    /// A missing config file is not an error here; commands that need the
    /// API key fail later in [`CommandContext::aggregator`].
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_with_env(opts.config_path()?)?;
        opts.apply_to(&mut config);

        let store: Arc<dyn KeyValueStore> = if opts.ephemeral {
            debug!("Using in-memory store");
            Arc::new(MemoryStore::new())
        } else {
            Arc::new(SqliteStore::open()?)
        };

        Ok(Self {
            config,
            store,
            format: opts.format,
        })
    }

    /// Build the recipe aggregator. Requires a configured API key.
    pub fn aggregator(&self) -> Result<Aggregator> {
        let api_key = self.config.require_api_key()?;
        let client = SpoonacularClient::new(api_key, self.config.request_timeout())?
            .with_base_url(self.config.provider_url.clone());

        Ok(RecipeAggregator::new(Arc::new(client), self.store.clone())
            .with_cache_ttl(self.config.cache_ttl())
            .with_max_concurrent_details(self.config.max_concurrent_details))
    }

    /// Build the profile backend client
    pub fn backend(&self) -> Result<ProfileBackend> {
        ProfileBackend::new(
            self.config.backend_url.clone(),
            self.config.request_timeout(),
            self.store.clone(),
        )
    }

    /// Stored preferences of the logged-in user, if any.
    ///
    /// Personalization is best-effort: a missing login or an unreachable
    /// backend degrades to unpersonalized results.
    pub async fn preferences(&self) -> Option<UserPreferences> {
        let backend = match self.backend() {
            Ok(backend) => backend,
            Err(e) => {
                warn!("Profile backend unavailable: {}", e);
                return None;
            }
        };

        match backend.is_logged_in() {
            Ok(true) => {}
            Ok(false) => {
                debug!("Not logged in; skipping personalization");
                return None;
            }
            Err(e) => {
                warn!("Failed to read login state: {}", e);
                return None;
            }
        }

        match backend.current_user().await {
            Ok(user) => Some(user.preferences),
            Err(e) => {
                warn!("Failed to load preferences: {}", e);
                None
            }
        }
    }
}
