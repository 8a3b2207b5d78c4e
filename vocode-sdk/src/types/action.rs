//! Action resources: typed per-kind configs plus a nested trigger union.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::Reference;

/// An action resource.
///
/// The action's own `type` tag selects the shape of its `config` payload;
/// the nested trigger is dispatched independently on the trigger's own tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// Action identifier.
    pub id: String,
    /// Owning user identifier.
    pub user_id: String,
    /// Kind-specific configuration.
    #[serde(flatten)]
    pub kind: ActionKind,
    /// Trigger that fires the action.
    pub action_trigger: ActionTrigger,
}

/// Kind-specific action configuration, tagged by action type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActionKind {
    /// Transfer the call to another number.
    #[serde(rename = "action_transfer_call")]
    TransferCall {
        #[serde(default)]
        config: TransferCallConfig,
    },

    /// Hang up the conversation.
    #[serde(rename = "action_end_conversation")]
    EndConversation {
        #[serde(default)]
        config: Map<String, Value>,
    },

    /// Send DTMF tones.
    #[serde(rename = "action_dtmf")]
    Dtmf {
        #[serde(default)]
        config: Map<String, Value>,
    },

    /// Dial a third party into a conference.
    #[serde(rename = "action_add_to_conference")]
    AddToConference {
        #[serde(default)]
        config: AddToConferenceConfig,
    },

    /// Place the call on hold.
    #[serde(rename = "action_set_hold")]
    SetHold {
        #[serde(default)]
        config: Map<String, Value>,
    },

    /// Invoke an external HTTP endpoint.
    #[serde(rename = "action_external")]
    External {
        #[serde(default)]
        config: ExternalActionConfig,
    },
}

/// Config payload for transfer-call actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferCallConfig {
    pub phone_number: String,
}

/// Config payload for add-to-conference actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddToConferenceConfig {
    pub phone_number: String,
    pub place_primary_on_hold: bool,
}

/// Audio processing mode while an external action runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingMode {
    #[default]
    Muted,
}

/// Config payload for external actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalActionConfig {
    pub processing_mode: ProcessingMode,
    pub name: String,
    pub description: String,
    pub url: String,
    pub input_schema: Map<String, Value>,
    pub speak_on_send: bool,
    pub speak_on_receive: bool,
}

/// Trigger that fires an action, tagged by trigger type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ActionTrigger {
    /// Fired when the model emits a function call.
    #[serde(rename = "action_trigger_function_call")]
    FunctionCall {
        #[serde(default)]
        config: Map<String, Value>,
    },

    /// Fired when a configured phrase is heard.
    #[serde(rename = "action_trigger_phrase_based")]
    PhraseBased { config: PhraseTriggerConfig },
}

/// Config payload for phrase-based triggers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseTriggerConfig {
    pub phrase_triggers: Vec<Phrase>,
}

/// A phrase and the conditions under which it matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phrase {
    pub phrase: String,
    pub conditions: Vec<PhraseCondition>,
}

/// Phrase match condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhraseCondition {
    #[default]
    #[serde(rename = "phrase_condition_type_contains")]
    Contains,
}

/// Create/update request body for actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionParams {
    /// Kind-specific configuration.
    #[serde(flatten)]
    pub kind: ActionKind,
    /// Trigger that fires the action.
    pub action_trigger: ActionTrigger,
}

/// An action field that may arrive as a bare identifier or a full object.
pub type ActionRef = Reference<Action>;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_transfer_call_with_function_call_trigger() {
        let body = r#"{
            "id":"a1",
            "user_id":"u1",
            "type":"action_transfer_call",
            "config":{"phone_number":"+15550100"},
            "action_trigger":{"type":"action_trigger_function_call","config":{}}
        }"#;
        let action: Action = serde_json::from_str(body).unwrap();
        assert_eq!(
            action.kind,
            ActionKind::TransferCall {
                config: TransferCallConfig {
                    phone_number: "+15550100".to_string(),
                },
            }
        );
        assert_eq!(
            action.action_trigger,
            ActionTrigger::FunctionCall { config: Map::new() }
        );
    }

    #[test]
    fn test_trigger_dispatches_on_its_own_tag() {
        // The outer action tag and the nested trigger tag are unrelated.
        let body = r#"{
            "id":"a1",
            "user_id":"u1",
            "type":"action_end_conversation",
            "config":{},
            "action_trigger":{
                "type":"action_trigger_phrase_based",
                "config":{"phrase_triggers":[{"phrase":"goodbye","conditions":["phrase_condition_type_contains"]}]}
            }
        }"#;
        let action: Action = serde_json::from_str(body).unwrap();
        assert!(matches!(action.kind, ActionKind::EndConversation { .. }));
        let ActionTrigger::PhraseBased { config } = action.action_trigger else {
            panic!("expected phrase-based trigger");
        };
        assert_eq!(config.phrase_triggers.len(), 1);
        assert_eq!(config.phrase_triggers[0].phrase, "goodbye");
        assert_eq!(
            config.phrase_triggers[0].conditions,
            vec![PhraseCondition::Contains]
        );
    }

    #[test]
    fn test_unknown_action_type_is_a_decode_error() {
        let body = r#"{
            "id":"a1",
            "user_id":"u1",
            "type":"action_nonexistent",
            "config":{},
            "action_trigger":{"type":"action_trigger_function_call","config":{}}
        }"#;
        let err = serde_json::from_str::<Action>(body).unwrap_err();
        assert!(err.to_string().contains("action_nonexistent"));
    }

    #[test]
    fn test_unknown_trigger_type_is_a_decode_error() {
        let body = r#"{
            "id":"a1",
            "user_id":"u1",
            "type":"action_set_hold",
            "config":{},
            "action_trigger":{"type":"action_trigger_nonexistent","config":{}}
        }"#;
        let err = serde_json::from_str::<Action>(body).unwrap_err();
        assert!(err.to_string().contains("action_trigger_nonexistent"));
    }

    #[test]
    fn test_missing_config_decodes_to_default_payload() {
        let body = r#"{
            "id":"a1",
            "user_id":"u1",
            "type":"action_dtmf",
            "action_trigger":{"type":"action_trigger_function_call"}
        }"#;
        let action: Action = serde_json::from_str(body).unwrap();
        assert_eq!(action.kind, ActionKind::Dtmf { config: Map::new() });
    }

    #[test]
    fn test_round_trip_every_kind() {
        let kinds = vec![
            ActionKind::TransferCall {
                config: TransferCallConfig {
                    phone_number: "+15550100".to_string(),
                },
            },
            ActionKind::EndConversation { config: Map::new() },
            ActionKind::Dtmf { config: Map::new() },
            ActionKind::AddToConference {
                config: AddToConferenceConfig {
                    phone_number: "+15550111".to_string(),
                    place_primary_on_hold: true,
                },
            },
            ActionKind::SetHold { config: Map::new() },
            ActionKind::External {
                config: ExternalActionConfig {
                    processing_mode: ProcessingMode::Muted,
                    name: "lookup".to_string(),
                    description: "CRM lookup".to_string(),
                    url: "https://example.com/hook".to_string(),
                    input_schema: Map::new(),
                    speak_on_send: true,
                    speak_on_receive: false,
                },
            },
        ];
        for kind in kinds {
            let action = Action {
                id: "a1".to_string(),
                user_id: "u1".to_string(),
                kind,
                action_trigger: ActionTrigger::FunctionCall { config: Map::new() },
            };
            let encoded = serde_json::to_string(&action).unwrap();
            let decoded: Action = serde_json::from_str(&encoded).unwrap();
            assert_eq!(decoded, action);
        }
    }

    #[test]
    fn test_params_encode_shape() {
        let params = ActionParams {
            kind: ActionKind::TransferCall {
                config: TransferCallConfig {
                    phone_number: "+15550100".to_string(),
                },
            },
            action_trigger: ActionTrigger::FunctionCall { config: Map::new() },
        };
        let encoded = serde_json::to_value(&params).unwrap();
        assert_eq!(
            encoded,
            json!({
                "type": "action_transfer_call",
                "config": {"phone_number": "+15550100"},
                "action_trigger": {"type": "action_trigger_function_call", "config": {}},
            })
        );
    }
}
