//! Vector database resources.

use serde::Deserialize;
use serde::Serialize;

use super::Reference;

/// A vector database resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorDatabase {
    /// Vector database identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Provider-specific configuration.
    #[serde(flatten)]
    pub config: VectorDatabaseConfig,
}

/// Provider-specific vector database payload, tagged by provider.
///
/// Doubles as the create/update request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VectorDatabaseConfig {
    /// Pinecone index.
    #[serde(rename = "vector_database_pinecone")]
    Pinecone(PineconeConfig),
}

/// Pinecone payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PineconeConfig {
    pub index: String,
    pub api_key: String,
    pub api_environment: String,
}

/// A vector database field that may arrive as a bare identifier or a full
/// object.
pub type VectorDatabaseRef = Reference<VectorDatabase>;
