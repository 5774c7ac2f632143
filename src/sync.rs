// src/sync.rs
//! Trigger and inspect the server-side email sync; the engine itself lives
//! behind the API.

use crate::core::api_client::ApiClient;
use crate::error::Result;
use crate::types::response::{MessageResponse, SyncStatus};

pub struct SyncClient<'a> {
    api: &'a ApiClient,
}

impl<'a> SyncClient<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Kick off a sync run. A run already in progress comes back as a 409
    /// with the server's detail message.
    pub async fn run(&self) -> Result<MessageResponse> {
        self.api.post("/sync/run", &serde_json::json!({})).await
    }

    pub async fn status(&self) -> Result<SyncStatus> {
        self.api.get("/sync/").await
    }
}
