use crate::client::Client;
use crate::error::Result;
use crate::pagination::Page;
use crate::pagination::PageParams;
use crate::types::AccountConnection;
use crate::types::AccountConnectionConfig;

/// Account connections resource for managing provider credentials.
pub struct AccountConnections<'a> {
    client: &'a Client,
}

impl<'a> AccountConnections<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List account connections.
    pub async fn list(&self, paging: Option<PageParams>) -> Result<Page<AccountConnection>> {
        let query = paging.map(|p| p.to_query()).unwrap_or_default();
        self.client.get("/account_connections/list", &query).await
    }

    /// Get an account connection by identifier.
    pub async fn get(&self, id: &str) -> Result<AccountConnection> {
        self.client
            .get("/account_connections", &[("id", id.to_string())])
            .await
    }

    /// Create an account connection.
    pub async fn create(&self, config: AccountConnectionConfig) -> Result<AccountConnection> {
        let body = serde_json::to_value(&config)?;
        self.client
            .post("/account_connections/create", &[], Some(body))
            .await
    }

    /// Update an account connection.
    pub async fn update(
        &self,
        id: &str,
        config: AccountConnectionConfig,
    ) -> Result<AccountConnection> {
        let body = serde_json::to_value(&config)?;
        self.client
            .post(
                "/account_connections/update",
                &[("id", id.to_string())],
                Some(body),
            )
            .await
    }
}
