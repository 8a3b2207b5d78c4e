//! Voice resources: one payload shape per synthesis provider.

use serde::Deserialize;
use serde::Serialize;

use super::Reference;

/// A voice resource.
///
/// The provider-specific payload is selected by the wire `type` tag and is
/// flattened into the same JSON object as the envelope fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    /// Voice identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Provider-specific configuration.
    #[serde(flatten)]
    pub config: VoiceConfig,
}

/// Provider-specific voice configuration, tagged by provider.
///
/// Doubles as the create/update request body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VoiceConfig {
    /// Azure TTS voice.
    #[serde(rename = "voice_azure")]
    Azure(AzureVoice),

    /// Rime voice.
    #[serde(rename = "voice_rime")]
    Rime(RimeVoice),

    /// ElevenLabs voice.
    #[serde(rename = "voice_eleven_labs")]
    ElevenLabs(ElevenLabsVoice),

    /// Play.ht voice.
    #[serde(rename = "voice_play_ht")]
    PlayHt(PlayHtVoice),
}

/// Azure voice payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AzureVoice {
    pub voice_name: String,
    pub pitch: i32,
    pub rate: i32,
}

/// Rime voice model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RimeModel {
    #[default]
    Mist,
    V1,
}

/// Rime voice payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RimeVoice {
    pub speaker: String,
    pub speed_alpha: f64,
    pub model_id: RimeModel,
}

/// ElevenLabs voice payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevenLabsVoice {
    pub api_key: String,
    pub model_id: String,
    pub voice_id: String,
    pub stability: i32,
    pub similarity_boost: i32,
    pub optimize_streaming_latency: i32,
    pub experimental_input_streaming: bool,
}

/// Play.ht API version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayHtVersion {
    #[serde(rename = "1")]
    V1,
    #[default]
    #[serde(rename = "2")]
    V2,
}

/// Play.ht synthesis quality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayHtQuality {
    Faster,
    #[default]
    Draft,
    Low,
    Medium,
    High,
    Premium,
}

/// Play.ht voice payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayHtVoice {
    pub voice_id: String,
    pub api_user_id: String,
    pub api_key: String,
    pub version: PlayHtVersion,
    pub quality: PlayHtQuality,
    pub speed: f32,
    pub temperature: f32,
    pub top_p: i32,
    pub text_guidance: String,
    pub voice_guidance: String,
    pub experimental_remove_silence: bool,
}

/// A voice field that may arrive as a bare identifier or a full object.
pub type VoiceRef = Reference<Voice>;
