//! Call resources.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::AccountConnectionRef;
use super::AgentRef;
use super::TelephonyMetadata;
use super::TelephonyProvider;

/// Call lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStatus {
    #[default]
    NotStarted,
    InProgress,
    Error,
    Ended,
}

/// Stage a call has reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStage {
    Created,
    PickedUp,
    TransferStarted,
    TransferSuccessful,
}

/// How the reached stage concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallStageOutcome {
    HumanUnanswered,
    HumanDisconnected,
    CallDidNotConnect,
    BotDisconnected,
    TransferUnanswered,
    TransferDisconnected,
}

/// Result of human-detection on an answered call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumanDetectionResult {
    Human,
    NoHuman,
}

/// Behavior when no human answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnNoHumanAnswer {
    #[default]
    Continue,
    Hangup,
}

/// A call resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Call {
    /// Call identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Lifecycle status.
    pub status: CallStatus,
    /// Error message, for failed calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Whether a recording is available for download.
    pub recording_available: bool,
    /// Call transcript.
    pub transcript: String,
    /// Human-detection outcome.
    #[serde(
        rename = "human_detection_result",
        skip_serializing_if = "Option::is_none"
    )]
    pub human_detection: Option<HumanDetectionResult>,
    /// Do-not-call detection outcome.
    #[serde(rename = "do_not_call_result")]
    pub do_not_call: bool,
    /// Provider-side call identifier.
    pub telephony_id: String,
    /// Stage the call reached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<CallStage>,
    /// How the stage concluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_outcome: Option<CallStageOutcome>,
    /// Provider-specific metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephony_metadata: Option<TelephonyMetadata>,
    /// Caller number.
    pub from_number: String,
    /// Callee number.
    pub to_number: String,
    /// Agent handling the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<AgentRef>,
    /// Telephony provider carrying the call.
    pub telephony_provider: TelephonyProvider,
    /// Number the agent calls from.
    pub agent_phone_number: String,
    /// Call start time.
    pub start_time: String,
    /// Call end time.
    pub end_time: String,
    /// Whether the call is HIPAA compliant.
    pub hipaa_compliant: bool,
    /// Behavior when no human answers.
    pub on_no_human_answer: OnNoHumanAnswer,
    /// Extra conversation context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
    /// Run do-not-call detection on this call.
    pub run_do_not_call_detection: bool,
    /// Telephony account connection carrying the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephony_account_connection: Option<AccountConnectionRef>,
    /// Extra provider parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephony_params: Option<Map<String, Value>>,
}

/// Create request body for outbound calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallParams {
    pub from_number: String,
    pub to_number: String,
    /// Identifier of the agent to run the call.
    pub agent: String,
    #[serde(default)]
    pub on_no_human_answer: OnNoHumanAnswer,
    #[serde(default)]
    pub run_do_not_call_detection: bool,
    #[serde(default)]
    pub hipaa_compliant: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
}

impl CallParams {
    /// Create call params for the given route and agent.
    pub fn new(
        from_number: impl Into<String>,
        to_number: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            from_number: from_number.into(),
            to_number: to_number.into(),
            agent: agent.into(),
            ..Self::default()
        }
    }
}
