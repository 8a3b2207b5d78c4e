use crate::client::Client;
use crate::error::Result;
use crate::pagination::Page;
use crate::pagination::PageParams;
use crate::types::Prompt;
use crate::types::PromptParams;

/// Prompts resource for managing conversation prompts.
pub struct Prompts<'a> {
    client: &'a Client,
}

impl<'a> Prompts<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List prompts.
    pub async fn list(&self, paging: Option<PageParams>) -> Result<Page<Prompt>> {
        let query = paging.map(|p| p.to_query()).unwrap_or_default();
        self.client.get("/prompts/list", &query).await
    }

    /// Get a prompt by identifier.
    pub async fn get(&self, id: &str) -> Result<Prompt> {
        self.client.get("/prompts", &[("id", id.to_string())]).await
    }

    /// Create a prompt.
    pub async fn create(&self, params: PromptParams) -> Result<Prompt> {
        let body = serde_json::to_value(&params)?;
        self.client.post("/prompts/create", &[], Some(body)).await
    }

    /// Update a prompt.
    pub async fn update(&self, id: &str, params: PromptParams) -> Result<Prompt> {
        let body = serde_json::to_value(&params)?;
        self.client
            .post("/prompts/update", &[("id", id.to_string())], Some(body))
            .await
    }
}
