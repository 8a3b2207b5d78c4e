//! Phone number resources.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::AccountConnectionRef;
use super::AgentRef;
use super::TelephonyProvider;

/// A phone number resource.
///
/// List responses carry the inbound agent and telephony account connection as
/// bare identifiers; single-number responses expand them. Both forms decode
/// into the same reference fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNumber {
    /// Number identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Whether the number is active.
    pub active: bool,
    /// Display label.
    pub label: String,
    /// Agent answering inbound calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_agent: Option<AgentRef>,
    /// Whether the number is outbound-only.
    pub outbound_only: bool,
    /// Example conversation context.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_context: Option<Map<String, Value>>,
    /// The number in E.164 form.
    pub number: String,
    /// Telephony provider the number belongs to.
    pub telephony_provider: TelephonyProvider,
    /// Telephony account connection the number was bought through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephony_account_connection: Option<AccountConnectionRef>,
}

/// Request body for buying a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyNumberParams {
    pub area_code: String,
    pub telephony_provider: TelephonyProvider,
    /// Identifier of the telephony account connection to buy through.
    pub telephony_account_connection: String,
}

/// Update request body for numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateNumberParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Identifier of the agent answering inbound calls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inbound_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outbound_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_context: Option<Map<String, Value>>,
}
