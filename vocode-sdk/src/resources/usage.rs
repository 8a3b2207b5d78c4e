use crate::client::Client;
use crate::error::Result;
use crate::types::Usage;

/// Usage resource for the authenticated account.
pub struct UsageResource<'a> {
    client: &'a Client,
}

impl<'a> UsageResource<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get monthly usage.
    pub async fn get(&self) -> Result<Usage> {
        self.client.get("/usage", &[]).await
    }
}
