//! Telephony provider and call metadata types.

use serde::Deserialize;
use serde::Serialize;

/// Telephony provider backing a number or call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TelephonyProvider {
    #[default]
    Twilio,
    Vonage,
}

/// Provider-specific call metadata, tagged by provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TelephonyMetadata {
    /// Vonage metadata carries no extra fields.
    #[serde(rename = "telephony_metadata_vonage")]
    Vonage,

    /// Twilio call state identifiers.
    #[serde(rename = "telephony_metadata_twilio")]
    Twilio(TwilioTelephonyMetadata),
}

/// Twilio metadata payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwilioTelephonyMetadata {
    pub call_sid: String,
    pub call_status: String,
    pub transfer_call_sid: String,
    pub transfer_call_status: String,
    pub conference_sid: String,
}
