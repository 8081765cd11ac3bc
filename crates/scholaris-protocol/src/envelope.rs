//! Conversation envelopes and the events they carry.

use crate::manifest::ManifestParameters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Protocol schema version produced by this crate.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Container for one conversation turn exchanged between agents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Protocol schema the envelope conforms to.
    pub schema: Schema,
    /// Conversation this turn belongs to.
    pub conversation: Conversation,
    /// Identity of the party that produced the envelope.
    pub sender: Sender,
    /// Ordered events carried by this turn.
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Envelope {
    /// Build an outbound envelope replying within `inbound`'s conversation.
    ///
    /// The schema version and conversation id are echoed from the inbound
    /// envelope; the sender is the replying agent's own identity, never the
    /// original sender's.
    pub fn reply_to(inbound: &Envelope, sender: Sender, events: Vec<Event>) -> Self {
        Self {
            schema: inbound.schema.clone(),
            conversation: inbound.conversation.clone(),
            sender,
            events,
        }
    }
}

/// Schema version marker carried by every envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schema {
    /// Version string, e.g. "1.0.0".
    pub version: String,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
        }
    }
}

/// Conversation identity shared by every turn of a dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    /// Opaque conversation identifier.
    pub id: String,
}

impl Conversation {
    /// Start a new conversation with a generated id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
        }
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

/// Identity of the party sending an envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sender {
    /// Stable speaker identity URI.
    pub speaker_uri: String,
    /// Service address the speaker can be reached at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
}

/// Addressee of an event; an event with no addressee is broadcast.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Addressee {
    /// Speaker identity URI of the addressed party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_uri: Option<String>,
    /// Service address of the addressed party.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_url: Option<String>,
}

impl Addressee {
    /// Address the party identified by `sender`.
    pub fn reply_to(sender: &Sender) -> Self {
        Self {
            speaker_uri: Some(sender.speaker_uri.clone()),
            service_url: sender.service_url.clone(),
        }
    }
}

/// Events that can appear in an envelope, tagged by `eventType`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "eventType", rename_all = "camelCase")]
pub enum Event {
    /// A dialog utterance carrying tokenized text.
    #[serde(rename_all = "camelCase")]
    Utterance {
        /// Optional addressee; `None` broadcasts to all participants.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<Addressee>,
        /// Utterance payload.
        parameters: UtteranceParameters,
    },
    /// Request for the capability manifest of the addressed agents.
    #[serde(rename_all = "camelCase")]
    GetManifests {
        /// Optional addressee; `None` asks every participant.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<Addressee>,
    },
    /// Publication of capability manifests in reply to a request.
    #[serde(rename_all = "camelCase")]
    PublishManifests {
        /// Requesting party the publication is addressed back to.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        to: Option<Addressee>,
        /// Published manifests.
        parameters: ManifestParameters,
    },
    /// Any event kind this crate does not model; ignored on receipt.
    #[serde(other)]
    Unrecognized,
}

impl Event {
    /// Build an utterance event carrying `text`, spoken by `speaker_uri`.
    pub fn utterance(speaker_uri: &str, to: Option<Addressee>, text: &str) -> Self {
        Event::Utterance {
            to,
            parameters: UtteranceParameters {
                dialog_event: DialogEvent::from_text(speaker_uri, text),
            },
        }
    }

    /// Addressee attached to the event, if any.
    pub fn to(&self) -> Option<&Addressee> {
        match self {
            Event::Utterance { to, .. }
            | Event::GetManifests { to }
            | Event::PublishManifests { to, .. } => to.as_ref(),
            Event::Unrecognized => None,
        }
    }

    /// Whether the event is addressed to the given identity.
    ///
    /// An event with no addressee is broadcast and addressed to every
    /// participant; otherwise either the speaker URI or the service URL
    /// must match.
    pub fn addressed_to(&self, speaker_uri: &str, service_url: &str) -> bool {
        match self.to() {
            None => true,
            Some(to) => {
                to.speaker_uri.as_deref() == Some(speaker_uri)
                    || to.service_url.as_deref() == Some(service_url)
            }
        }
    }
}

/// Parameters carried by an utterance event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UtteranceParameters {
    /// The dialog event with the utterance features.
    pub dialog_event: DialogEvent,
}

/// One speaker contribution with its typed features.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DialogEvent {
    /// Identifier for this dialog event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Speaker that produced the event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker_uri: Option<String>,
    /// Features attached to the event; text lives under `text`.
    #[serde(default)]
    pub features: Features,
}

impl DialogEvent {
    /// Build a dialog event carrying a single text token.
    pub fn from_text(speaker_uri: &str, text: &str) -> Self {
        Self {
            id: Some(Uuid::new_v4().to_string()),
            speaker_uri: Some(speaker_uri.to_string()),
            features: Features {
                text: Some(TextFeature {
                    mime_type: Some("text/plain".to_string()),
                    tokens: vec![Token {
                        value: text.to_string(),
                    }],
                }),
            },
        }
    }

    /// Reconstruct the utterance text by concatenating the text-feature
    /// tokens with no separator. Empty when the text feature is absent.
    pub fn text(&self) -> String {
        let Some(feature) = &self.features.text else {
            return String::new();
        };
        feature
            .tokens
            .iter()
            .map(|token| token.value.as_str())
            .collect()
    }
}

/// Feature map of a dialog event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Features {
    /// Tokenized text feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextFeature>,
}

/// Tokenized text payload of an utterance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextFeature {
    /// Mime type of the token values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
    /// Ordered tokens making up the text.
    #[serde(default)]
    pub tokens: Vec<Token>,
}

/// One token of a text feature.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// Token value; values concatenate with no separator.
    #[serde(default)]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sender() -> Sender {
        Sender {
            speaker_uri: "tag:example.com,2025:scholaris".to_string(),
            service_url: Some("https://agents.example.com/scholaris".to_string()),
        }
    }

    #[test]
    fn envelope_round_trips_through_json() {
        let envelope = Envelope {
            schema: Schema::default(),
            conversation: Conversation::new(),
            sender: sender(),
            events: vec![Event::utterance(
                "tag:example.com,2025:alice",
                Some(Addressee::reply_to(&sender())),
                "find papers on quantum cryptography",
            )],
        };
        let encoded = serde_json::to_value(&envelope).expect("serialize");
        let decoded: Envelope = serde_json::from_value(encoded).expect("deserialize");
        assert_eq!(decoded, envelope);
    }

    #[test]
    fn utterance_event_uses_camel_case_tags() {
        let event = Event::utterance("tag:example.com,2025:alice", None, "hello");
        let value = serde_json::to_value(&event).expect("serialize");
        assert_eq!(value["eventType"], "utterance");
        assert_eq!(
            value["parameters"]["dialogEvent"]["features"]["text"]["tokens"][0]["value"],
            "hello"
        );
    }

    #[test]
    fn unknown_event_type_deserializes_as_unrecognized() {
        let value = json!({
            "eventType": "whisper",
            "to": { "speakerUri": "tag:example.com,2025:bob" },
            "parameters": {}
        });
        let event: Event = serde_json::from_value(value).expect("deserialize");
        assert_eq!(event, Event::Unrecognized);
    }

    #[test]
    fn broadcast_events_are_addressed_to_everyone() {
        let event = Event::utterance("tag:example.com,2025:alice", None, "hi all");
        assert!(event.addressed_to(
            "tag:example.com,2025:scholaris",
            "https://agents.example.com/scholaris"
        ));
    }

    #[test]
    fn addressing_matches_on_either_identity_field() {
        let by_speaker = Event::GetManifests {
            to: Some(Addressee {
                speaker_uri: Some("tag:example.com,2025:scholaris".to_string()),
                service_url: None,
            }),
        };
        let by_service = Event::GetManifests {
            to: Some(Addressee {
                speaker_uri: None,
                service_url: Some("https://agents.example.com/scholaris".to_string()),
            }),
        };
        let neither = Event::GetManifests {
            to: Some(Addressee {
                speaker_uri: Some("tag:example.com,2025:someone-else".to_string()),
                service_url: Some("https://agents.example.com/other".to_string()),
            }),
        };

        let me = (
            "tag:example.com,2025:scholaris",
            "https://agents.example.com/scholaris",
        );
        assert!(by_speaker.addressed_to(me.0, me.1));
        assert!(by_service.addressed_to(me.0, me.1));
        assert!(!neither.addressed_to(me.0, me.1));
    }

    #[test]
    fn dialog_event_text_concatenates_tokens_without_separator() {
        let dialog_event = DialogEvent {
            id: None,
            speaker_uri: None,
            features: Features {
                text: Some(TextFeature {
                    mime_type: None,
                    tokens: vec![
                        Token {
                            value: "quantum ".to_string(),
                        },
                        Token {
                            value: "cryptography".to_string(),
                        },
                    ],
                }),
            },
        };
        assert_eq!(dialog_event.text(), "quantum cryptography");
    }

    #[test]
    fn reply_envelope_echoes_schema_and_conversation() {
        let inbound = Envelope {
            schema: Schema {
                version: "0.9.4".to_string(),
            },
            conversation: Conversation {
                id: "conv:42".to_string(),
            },
            sender: Sender {
                speaker_uri: "tag:example.com,2025:alice".to_string(),
                service_url: None,
            },
            events: vec![],
        };
        let outbound = Envelope::reply_to(&inbound, sender(), vec![]);
        assert_eq!(outbound.schema, inbound.schema);
        assert_eq!(outbound.conversation, inbound.conversation);
        assert_eq!(outbound.sender, sender());
    }
}
