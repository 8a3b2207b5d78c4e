//! Account connections: provider credentials linked to a Vocode account.

use serde::Deserialize;
use serde::Serialize;

use super::Reference;

/// An account connection resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountConnection {
    /// Connection identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Provider-specific credentials and settings.
    #[serde(flatten)]
    pub config: AccountConnectionConfig,
}

/// Provider-specific connection payload, tagged by connection type.
///
/// Doubles as the create/update request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AccountConnectionConfig {
    /// OpenAI account connection.
    #[serde(rename = "account_connection_openai")]
    OpenAi(OpenAiAccount),

    /// Twilio account connection.
    #[serde(rename = "account_connection_twilio")]
    Twilio(TwilioAccount),
}

/// OpenAI connection payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiAccount {
    pub credentials: OpenAiCredentials,
}

/// OpenAI credentials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiCredentials {
    pub openai_api_key: String,
}

/// Twilio connection payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwilioAccount {
    pub credentials: TwilioCredentials,
    pub steering_pool: Vec<String>,
    pub account_supports_any_caller_id: bool,
}

/// Twilio credentials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwilioCredentials {
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
}

/// An account connection field that may arrive as a bare identifier or a
/// full object.
pub type AccountConnectionRef = Reference<AccountConnection>;
