use crate::client::Client;
use crate::error::Result;
use crate::pagination::Page;
use crate::pagination::PageParams;
use crate::types::Webhook;
use crate::types::WebhookParams;

/// Webhooks resource for managing event subscriptions.
pub struct Webhooks<'a> {
    client: &'a Client,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List webhooks.
    pub async fn list(&self, paging: Option<PageParams>) -> Result<Page<Webhook>> {
        let query = paging.map(|p| p.to_query()).unwrap_or_default();
        self.client.get("/webhooks/list", &query).await
    }

    /// Get a webhook by identifier.
    pub async fn get(&self, id: &str) -> Result<Webhook> {
        self.client
            .get("/webhooks", &[("id", id.to_string())])
            .await
    }

    /// Create a webhook.
    pub async fn create(&self, params: WebhookParams) -> Result<Webhook> {
        let body = serde_json::to_value(&params)?;
        self.client.post("/webhooks/create", &[], Some(body)).await
    }

    /// Update a webhook.
    pub async fn update(&self, id: &str, params: WebhookParams) -> Result<Webhook> {
        let body = serde_json::to_value(&params)?;
        self.client
            .post("/webhooks/update", &[("id", id.to_string())], Some(body))
            .await
    }
}
