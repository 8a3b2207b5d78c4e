//! Webhook resources.

use serde::Deserialize;
use serde::Serialize;

use super::Reference;

/// Events a webhook can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookEvent {
    #[serde(rename = "event_message")]
    Message,
    #[serde(rename = "event_action")]
    Action,
    #[serde(rename = "event_phone_call_connected")]
    PhoneCallConnected,
    #[serde(rename = "event_phone_call_ended")]
    PhoneCallEnded,
    #[serde(rename = "event_phone_call_did_not_connect")]
    PhoneCallDidNotConnect,
    #[serde(rename = "event_transcript")]
    Transcript,
    #[serde(rename = "event_recording")]
    Recording,
    #[serde(rename = "event_human_detection")]
    HumanDetection,
}

/// HTTP method used to deliver webhook events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WebhookMethod {
    #[serde(rename = "GET")]
    Get,
    #[default]
    #[serde(rename = "POST")]
    Post,
}

/// A webhook resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    /// Webhook identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Subscribed events.
    pub subscriptions: Vec<WebhookEvent>,
    /// Delivery URL.
    pub url: String,
    /// Delivery method.
    pub method: WebhookMethod,
}

/// Create/update request body for webhooks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookParams {
    pub subscriptions: Vec<WebhookEvent>,
    pub url: String,
    pub method: WebhookMethod,
}

/// A webhook field that may arrive as a bare identifier or a full object.
pub type WebhookRef = Reference<Webhook>;
