//! Shared enum vocabularies.

use serde::Deserialize;
use serde::Serialize;

/// Conversation language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "pt")]
    Portuguese,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "nl")]
    Dutch,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "jp")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
}
