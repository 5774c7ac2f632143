// src/core/api_client.rs
//! Shared HTTP transport - every API area goes through this wrapper

use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::token_store::TokenStore;
use crate::error::{error_for_status, ApiError, Result};

pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    token_store: TokenStore,
}

impl ApiClient {
    /// Create the client with the configured base URL and request timeout.
    pub fn new(base_url: String, timeout_seconds: u64, token_store: TokenStore) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self {
            client,
            base_url,
            token_store,
        })
    }

    pub fn token_store(&self) -> &TokenStore {
        &self.token_store
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, endpoint);
        Url::parse(&raw).map_err(|_| ApiError::InvalidUrl(raw))
    }

    fn bearer_token(&self) -> Result<String> {
        self.token_store.access_token().ok_or(ApiError::Unauthorized)
    }

    // ===== Unauthenticated requests (auth endpoints) =====

    pub async fn post_public<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        debug!("POST {}", url);
        self.execute(self.client.post(url).json(body)).await
    }

    /// Fire-and-forget POST for endpoints whose response body is empty or
    /// irrelevant (password reset).
    pub async fn post_public_no_content<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<()> {
        let url = self.endpoint_url(endpoint)?;
        debug!("POST {}", url);
        self.execute_no_content(self.client.post(url).json(body)).await
    }

    // ===== Authenticated requests =====

    pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R> {
        let url = self.endpoint_url(endpoint)?;
        let token = self.bearer_token()?;
        debug!("GET {}", url);
        self.execute(self.client.get(url).bearer_auth(token)).await
    }

    pub async fn get_with_query<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<R> {
        let url = self.endpoint_url(endpoint)?;
        let token = self.bearer_token()?;
        debug!("GET {} ({} params)", url, query.len());
        self.execute(self.client.get(url).query(query).bearer_auth(token))
            .await
    }

    pub async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        let token = self.bearer_token()?;
        debug!("POST {}", url);
        self.execute(self.client.post(url).bearer_auth(token).json(body))
            .await
    }

    pub async fn put<B, R>(&self, endpoint: &str, body: &B) -> Result<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        let token = self.bearer_token()?;
        debug!("PUT {}", url);
        self.execute(self.client.put(url).bearer_auth(token).json(body))
            .await
    }

    /// POST with no request body, ignoring the response body (save/unsave).
    pub async fn post_no_content(&self, endpoint: &str) -> Result<()> {
        let url = self.endpoint_url(endpoint)?;
        let token = self.bearer_token()?;
        debug!("POST {}", url);
        self.execute_no_content(self.client.post(url).bearer_auth(token))
            .await
    }

    pub async fn delete_no_content(&self, endpoint: &str) -> Result<()> {
        let url = self.endpoint_url(endpoint)?;
        let token = self.bearer_token()?;
        debug!("DELETE {}", url);
        self.execute_no_content(self.client.delete(url).bearer_auth(token))
            .await
    }

    /// Multipart file upload (resume).
    pub async fn post_multipart<R: DeserializeOwned>(
        &self,
        endpoint: &str,
        field_name: &str,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<R> {
        let url = self.endpoint_url(endpoint)?;
        let token = self.bearer_token()?;

        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(content_type)
            .map_err(ApiError::Transport)?;
        let form = Form::new().part(field_name.to_string(), part);

        debug!("POST {} (multipart, {})", url, file_name);
        self.execute(self.client.post(url).bearer_auth(token).multipart(form))
            .await
    }

    // ===== Response handling =====

    async fn execute<R: DeserializeOwned>(&self, request: RequestBuilder) -> Result<R> {
        let body = self.send_checked(request).await?;
        serde_json::from_str(&body).map_err(|err| {
            warn!("Failed to decode response body: {}", err);
            ApiError::Decode(err)
        })
    }

    async fn execute_no_content(&self, request: RequestBuilder) -> Result<()> {
        self.send_checked(request).await.map(|_| ())
    }

    /// Send the request and map the status code onto the client error set.
    /// A 401 clears the stored session so the caller is signed out.
    async fn send_checked(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await.map_err(ApiError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(|_| ApiError::InvalidResponse)?;

        if status.is_success() {
            return Ok(body);
        }

        debug!("Request failed with status {}", status);
        if status == StatusCode::UNAUTHORIZED {
            if let Err(err) = self.token_store.clear() {
                warn!("Failed to clear stored tokens: {}", err);
            }
        }
        Err(error_for_status(status.as_u16(), &body))
    }
}
