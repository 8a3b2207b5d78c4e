//! Prompt resources.

use serde::Deserialize;
use serde::Serialize;

use super::Reference;

/// Type of a collected field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    #[default]
    #[serde(rename = "field_type_email")]
    Email,
}

/// A field the agent collects from the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectField {
    pub field_type: FieldType,
    pub label: String,
    pub name: String,
    pub description: String,
}

/// A reusable prompt template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTemplate {
    pub id: String,
    pub user_id: String,
    pub label: String,
    pub required_context_keys: Vec<String>,
}

/// A prompt resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prompt {
    /// Prompt identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Prompt content.
    pub content: String,
    /// Fields to collect during the conversation.
    pub collect_fields: Vec<CollectField>,
    /// Endpoint queried for extra conversation context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_endpoint: Option<String>,
    /// Template the prompt is derived from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<PromptTemplate>,
}

/// Create/update request body for prompts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromptParams {
    pub content: String,
    #[serde(default)]
    pub collect_fields: Vec<CollectField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_endpoint: Option<String>,
    /// Identifier of the template to derive the prompt from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_template: Option<String>,
}

impl PromptParams {
    /// Create prompt params with the given content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }
}

/// A prompt field that may arrive as a bare identifier or a full object.
pub type PromptRef = Reference<Prompt>;
