use crate::client::Client;
use crate::error::Result;
use crate::pagination::Page;
use crate::pagination::PageParams;
use crate::types::Agent;
use crate::types::AgentParams;

/// Agents resource for managing conversational agents.
pub struct Agents<'a> {
    client: &'a Client,
}

impl<'a> Agents<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List agents.
    pub async fn list(&self, paging: Option<PageParams>) -> Result<Page<Agent>> {
        let query = paging.map(|p| p.to_query()).unwrap_or_default();
        self.client.get("/agents/list", &query).await
    }

    /// Get an agent by identifier.
    pub async fn get(&self, id: &str) -> Result<Agent> {
        self.client.get("/agents", &[("id", id.to_string())]).await
    }

    /// Create an agent.
    pub async fn create(&self, params: AgentParams) -> Result<Agent> {
        let body = serde_json::to_value(&params)?;
        self.client.post("/agents/create", &[], Some(body)).await
    }

    /// Update an agent.
    pub async fn update(&self, id: &str, params: AgentParams) -> Result<Agent> {
        let body = serde_json::to_value(&params)?;
        self.client
            .post("/agents/update", &[("id", id.to_string())], Some(body))
            .await
    }
}
