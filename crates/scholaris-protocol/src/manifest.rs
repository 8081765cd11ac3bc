//! Capability manifests published in reply to manifest requests.

use serde::{Deserialize, Serialize};

/// Static capability descriptor for an agent.
///
/// Built once at startup and published verbatim whenever a manifest
/// request arrives; the router never edits it per conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    /// Who the agent is.
    pub identification: Identification,
    /// What the agent can do.
    pub capabilities: Vec<Capability>,
}

/// Identity block of a manifest.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    /// Stable speaker identity URI.
    pub speaker_uri: String,
    /// Service address the agent is reachable at.
    pub service_url: String,
    /// Organization operating the agent.
    pub organization: String,
    /// Display name used in conversation.
    pub conversational_name: String,
    /// One-line summary of the agent's role.
    pub synopsis: String,
}

/// One advertised capability.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Capability {
    /// Keyphrases a floor manager can match queries against.
    pub keyphrases: Vec<String>,
    /// Human-readable capability descriptions.
    pub descriptions: Vec<String>,
}

/// Parameters carried by a manifest publication event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestParameters {
    /// Manifests of the publishing agent.
    pub manifests: Vec<Manifest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn manifest_serializes_with_camel_case_identification() {
        let manifest = Manifest {
            identification: Identification {
                speaker_uri: "tag:example.com,2025:scholaris".to_string(),
                service_url: "https://agents.example.com/scholaris".to_string(),
                organization: "Example Research".to_string(),
                conversational_name: "Scholaris".to_string(),
                synopsis: "Finds and summarizes academic papers".to_string(),
            },
            capabilities: vec![Capability {
                keyphrases: vec!["research".to_string(), "papers".to_string()],
                descriptions: vec!["Searches arXiv for academic papers".to_string()],
            }],
        };
        let value = serde_json::to_value(&manifest).expect("serialize");
        assert_eq!(value["identification"]["speakerUri"], "tag:example.com,2025:scholaris");
        assert_eq!(value["identification"]["conversationalName"], "Scholaris");
        let decoded: Manifest = serde_json::from_value(value).expect("deserialize");
        assert_eq!(decoded, manifest);
    }
}
