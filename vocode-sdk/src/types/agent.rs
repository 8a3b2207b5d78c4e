//! Agent resources.

use serde::Deserialize;
use serde::Serialize;

use super::AccountConnectionRef;
use super::ActionRef;
use super::Language;
use super::PromptRef;
use super::VectorDatabaseRef;
use super::VoiceRef;
use super::WebhookRef;

/// How aggressively the agent lets callers interrupt it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterruptSensitivity {
    #[default]
    Low,
    High,
}

/// How aggressively end-of-utterance is detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointingSensitivity {
    #[default]
    Auto,
    Relaxed,
    Sensitive,
}

/// IVR navigation behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IvrNavigationMode {
    #[default]
    Default,
    Off,
}

/// An agent resource.
///
/// Embedded resources (prompt, voice, webhook, ...) may arrive as bare
/// identifiers or fully expanded objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agent {
    /// Agent identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Conversation prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<PromptRef>,
    /// Conversation language.
    pub language: Language,
    /// Actions available to the agent.
    pub actions: Vec<ActionRef>,
    /// Synthesis voice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice: Option<VoiceRef>,
    /// Message spoken when the call connects.
    #[serde(rename = "initial_msg", skip_serializing_if = "Option::is_none")]
    pub initial_message: Option<String>,
    /// Webhook notified of call events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<WebhookRef>,
    /// Vector database used for retrieval.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_database: Option<VectorDatabaseRef>,
    /// Interrupt sensitivity.
    pub interrupt_sensitivity: InterruptSensitivity,
    /// Endpoint queried for extra conversation context.
    // sic: wire name as served by the API
    #[serde(rename = "context_endpint", skip_serializing_if = "Option::is_none")]
    pub context_endpoint: Option<String>,
    /// Whether inbound audio is noise-suppressed.
    pub noise_suppression: bool,
    /// Endpointing sensitivity.
    pub endpointing_sensitivity: EndpointingSensitivity,
    /// IVR navigation mode.
    pub ivr_navigation_mode: IvrNavigationMode,
    /// Conversation speed multiplier.
    pub conversation_speed: f32,
    /// Delay before the initial message, in seconds.
    pub initial_message_delay: i32,
    /// Whether the OpenAI model name is overridden.
    pub openai_model_name_override: bool,
    /// Ask whether a human is present when the line goes idle.
    pub ask_if_human_present_on_idle: bool,
    /// OpenAI account connection used for completions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openai_account_connection: Option<AccountConnectionRef>,
    /// Run do-not-call detection on calls made by this agent.
    pub run_do_not_call_detection: bool,
    /// LLM sampling temperature.
    pub llm_temperature: i32,
}

/// Create/update request body for agents.
///
/// Embedded resources are referenced by identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentParams {
    pub name: String,
    /// Identifier of the conversation prompt.
    pub prompt: String,
    /// Identifier of the synthesis voice.
    pub voice: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Identifiers of actions available to the agent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    #[serde(
        default,
        rename = "initial_msg",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_message: Option<String>,
    /// Identifier of the webhook to notify.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook: Option<String>,
    /// Identifier of the vector database to use for retrieval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_database: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interrupt_sensitivity: Option<InterruptSensitivity>,
    // sic: wire name as served by the API
    #[serde(
        default,
        rename = "context_endpint",
        skip_serializing_if = "Option::is_none"
    )]
    pub context_endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_suppression: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpointing_sensitivity: Option<EndpointingSensitivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ivr_navigation_mode: Option<IvrNavigationMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_speed: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_message_delay: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_model_name_override: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask_if_human_present_on_idle: Option<bool>,
    /// Identifier of the OpenAI account connection to use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openai_account_connection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_do_not_call_detection: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llm_temperature: Option<i32>,
}

impl AgentParams {
    /// Create agent params referencing an existing prompt and voice.
    pub fn new(
        name: impl Into<String>,
        prompt: impl Into<String>,
        voice: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            prompt: prompt.into(),
            voice: voice.into(),
            ..Self::default()
        }
    }
}

/// An agent field that may arrive as a bare identifier or a full object.
pub type AgentRef = super::Reference<Agent>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::Prompt;
    use crate::types::VoiceConfig;

    #[test]
    fn test_mixed_reference_forms_decode() {
        // Voice arrives as a bare identifier, prompt as a full object.
        let body = r#"{
            "id":"ag1",
            "user_id":"u1",
            "name":"Scheduler",
            "prompt":{"id":"p1","user_id":"u1","content":"You schedule appointments.","collect_fields":[]},
            "language":"en",
            "actions":["a1","a2"],
            "voice":"v1",
            "interrupt_sensitivity":"high",
            "noise_suppression":true,
            "endpointing_sensitivity":"sensitive",
            "ivr_navigation_mode":"off",
            "conversation_speed":1.5,
            "initial_message_delay":2,
            "llm_temperature":1
        }"#;
        let agent: Agent = serde_json::from_str(body).unwrap();
        assert_eq!(agent.voice.as_ref().unwrap().as_id(), Some("v1"));
        let prompt: &Prompt = agent.prompt.as_ref().unwrap().as_full().unwrap();
        assert_eq!(prompt.content, "You schedule appointments.");
        assert_eq!(agent.actions.len(), 2);
        assert_eq!(agent.actions[0].as_id(), Some("a1"));
        assert_eq!(agent.interrupt_sensitivity, InterruptSensitivity::High);
        assert_eq!(agent.ivr_navigation_mode, IvrNavigationMode::Off);
    }

    #[test]
    fn test_expanded_voice_decodes_with_payload() {
        let body = r#"{
            "id":"ag1",
            "user_id":"u1",
            "name":"Scheduler",
            "voice":{"id":"v1","user_id":"u1","type":"voice_azure","voice_name":"Eva","pitch":0,"rate":0}
        }"#;
        let agent: Agent = serde_json::from_str(body).unwrap();
        let voice = agent.voice.unwrap();
        let voice = voice.as_full().unwrap();
        assert!(matches!(voice.config, VoiceConfig::Azure(_)));
    }

    #[test]
    fn test_params_encode_minimal() {
        let params = AgentParams::new("Scheduler", "p1", "v1");
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"name":"Scheduler","prompt":"p1","voice":"v1"}"#
        );
    }

    #[test]
    fn test_params_keep_wire_names() {
        let params = AgentParams {
            initial_message: Some("Hi!".to_string()),
            context_endpoint: Some("https://example.com/ctx".to_string()),
            ..AgentParams::new("Scheduler", "p1", "v1")
        };
        let encoded = serde_json::to_value(&params).unwrap();
        assert_eq!(encoded["initial_msg"], "Hi!");
        assert_eq!(encoded["context_endpint"], "https://example.com/ctx");
    }
}
