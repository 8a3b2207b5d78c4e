use crate::client::Client;
use crate::error::Result;
use crate::pagination::Page;
use crate::pagination::PageParams;
use crate::types::Action;
use crate::types::ActionParams;

/// Actions resource for managing agent actions.
pub struct Actions<'a> {
    client: &'a Client,
}

impl<'a> Actions<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List actions.
    pub async fn list(&self, paging: Option<PageParams>) -> Result<Page<Action>> {
        let query = paging.map(|p| p.to_query()).unwrap_or_default();
        self.client.get("/actions/list", &query).await
    }

    /// Get an action by identifier.
    pub async fn get(&self, id: &str) -> Result<Action> {
        self.client.get("/actions", &[("id", id.to_string())]).await
    }

    /// Create an action.
    pub async fn create(&self, params: ActionParams) -> Result<Action> {
        let body = serde_json::to_value(&params)?;
        self.client.post("/actions/create", &[], Some(body)).await
    }

    /// Update an action.
    pub async fn update(&self, id: &str, params: ActionParams) -> Result<Action> {
        let body = serde_json::to_value(&params)?;
        self.client
            .post("/actions/update", &[("id", id.to_string())], Some(body))
            .await
    }
}
