use bytes::Bytes;

use crate::client::Client;
use crate::error::Result;
use crate::pagination::Page;
use crate::pagination::PageParams;
use crate::types::Call;
use crate::types::CallParams;

/// Calls resource for managing phone calls.
pub struct Calls<'a> {
    client: &'a Client,
}

impl<'a> Calls<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List calls.
    pub async fn list(&self, paging: Option<PageParams>) -> Result<Page<Call>> {
        let query = paging.map(|p| p.to_query()).unwrap_or_default();
        self.client.get("/calls/list", &query).await
    }

    /// Get a call by identifier.
    pub async fn get(&self, id: &str) -> Result<Call> {
        self.client.get("/calls", &[("id", id.to_string())]).await
    }

    /// Start an outbound call.
    pub async fn create(&self, params: CallParams) -> Result<Call> {
        let body = serde_json::to_value(&params)?;
        self.client.post("/calls/create", &[], Some(body)).await
    }

    /// End an in-progress call.
    pub async fn end(&self, id: &str) -> Result<Call> {
        self.client
            .post("/calls/end", &[("id", id.to_string())], None)
            .await
    }

    /// Download the recording of a call.
    pub async fn recording(&self, id: &str) -> Result<Bytes> {
        self.client
            .get_bytes("/calls/recording", &[("id", id.to_string())])
            .await
    }
}
