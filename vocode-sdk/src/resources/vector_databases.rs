use crate::client::Client;
use crate::error::Result;
use crate::pagination::Page;
use crate::pagination::PageParams;
use crate::types::VectorDatabase;
use crate::types::VectorDatabaseConfig;

/// Vector databases resource for managing retrieval indexes.
pub struct VectorDatabases<'a> {
    client: &'a Client,
}

impl<'a> VectorDatabases<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List vector databases.
    pub async fn list(&self, paging: Option<PageParams>) -> Result<Page<VectorDatabase>> {
        let query = paging.map(|p| p.to_query()).unwrap_or_default();
        self.client.get("/vector_databases/list", &query).await
    }

    /// Get a vector database by identifier.
    pub async fn get(&self, id: &str) -> Result<VectorDatabase> {
        self.client
            .get("/vector_databases", &[("id", id.to_string())])
            .await
    }

    /// Create a vector database.
    pub async fn create(&self, config: VectorDatabaseConfig) -> Result<VectorDatabase> {
        let body = serde_json::to_value(&config)?;
        self.client
            .post("/vector_databases/create", &[], Some(body))
            .await
    }

    /// Update a vector database.
    pub async fn update(&self, id: &str, config: VectorDatabaseConfig) -> Result<VectorDatabase> {
        let body = serde_json::to_value(&config)?;
        self.client
            .post(
                "/vector_databases/update",
                &[("id", id.to_string())],
                Some(body),
            )
            .await
    }
}
