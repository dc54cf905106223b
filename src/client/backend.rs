//! Profile backend client: auth, profile, preferences, and saved recipes

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as HttpClient, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::http::{check_status, read_json};
use super::{AuthResponse, ProfileApi};
use crate::error::{ApiError, Result};
use crate::models::{ProfileUpdate, SavedRecipe, UserPreferences, UserProfile};
use crate::storage::{KeyValueStore, TOKEN_KEY};

/// Default profile backend base URL (local development server)
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000/api";

/// REST client for the profile backend.
///
/// The bearer token returned by login/register is kept in the local
/// key-value store under [`TOKEN_KEY`] and attached to every authenticated
/// request.
pub struct ProfileBackend {
    http: HttpClient,
    base_url: String,
    store: Arc<dyn KeyValueStore>,
}

impl ProfileBackend {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            store,
        })
    }

    /// Whether a bearer token is stored
    pub fn is_logged_in(&self) -> Result<bool> {
        Ok(self.store.get(TOKEN_KEY)?.is_some())
    }

    /// Forget the stored token. Returns whether one was present.
    pub fn logout(&self) -> Result<bool> {
        Ok(self.store.remove(TOKEN_KEY)?)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    fn authed(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let token = self.store.get(TOKEN_KEY)?.ok_or(ApiError::NotLoggedIn)?;
        Ok(self.request(method, path).bearer_auth(token))
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await.map_err(ApiError::from)?;
        read_json(response).await
    }

    async fn send_empty(builder: RequestBuilder) -> Result<()> {
        let response = builder.send().await.map_err(ApiError::from)?;
        check_status(response).await?;
        Ok(())
    }

    fn remember(&self, auth: AuthResponse) -> Result<AuthResponse> {
        self.store.set(TOKEN_KEY, &auth.token)?;
        Ok(auth)
    }
}

#[async_trait]
impl ProfileApi for ProfileBackend {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let builder = self
            .request(Method::POST, "/auth/login")
            .json(&json!({ "email": email, "password": password }));
        let auth: AuthResponse = Self::send_json(builder).await?;
        self.remember(auth)
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthResponse> {
        let mut body = json!({ "email": email, "password": password });
        if let Some(name) = name {
            body["name"] = json!(name);
        }
        let builder = self.request(Method::POST, "/auth/register").json(&body);
        let auth: AuthResponse = Self::send_json(builder).await?;
        self.remember(auth)
    }

    async fn current_user(&self) -> Result<UserProfile> {
        Self::send_json(self.authed(Method::GET, "/user/me")?).await
    }

    async fn update_preferences(&self, preferences: &UserPreferences) -> Result<UserProfile> {
        let builder = self
            .authed(Method::PUT, "/user/preferences")?
            .json(&json!({ "preferences": preferences }));
        Self::send_json(builder).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        let builder = self.authed(Method::PUT, "/user/profile")?.json(update);
        Self::send_json(builder).await
    }

    async fn list_saved_recipes(&self) -> Result<Vec<SavedRecipe>> {
        Self::send_json(self.authed(Method::GET, "/user/recipes/saved")?).await
    }

    async fn save_recipe(&self, recipe_id: &str) -> Result<()> {
        let builder = self
            .authed(Method::POST, "/user/recipes/save")?
            .json(&json!({ "recipeId": recipe_id }));
        Self::send_empty(builder).await
    }

    async fn unsave_recipe(&self, recipe_id: &str) -> Result<()> {
        let path = format!("/user/recipes/save/{}", recipe_id);
        Self::send_empty(self.authed(Method::DELETE, &path)?).await
    }
}
