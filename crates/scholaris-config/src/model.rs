//! Configuration schema for Scholaris.

use crate::ConfigError;
use serde::{Deserialize, Serialize};

/// Root config for the Scholaris agent service.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ScholarisConfig {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl ScholarisConfig {
    /// Check field-level invariants the rest of the service relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agent.speaker_uri.trim().is_empty() {
            return Err(ConfigError::invalid("agent.speaker_uri", "must not be empty"));
        }
        if self.agent.service_url.trim().is_empty() {
            return Err(ConfigError::invalid("agent.service_url", "must not be empty"));
        }
        if self.search.endpoint.trim().is_empty() {
            return Err(ConfigError::invalid("search.endpoint", "must not be empty"));
        }
        if self.search.max_results == 0 {
            return Err(ConfigError::invalid("search.max_results", "must be at least 1"));
        }
        if self.server.port == 0 {
            return Err(ConfigError::invalid("server.port", "must be a nonzero port"));
        }
        Ok(())
    }
}

/// Identity the agent presents in envelopes and manifests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentConfig {
    #[serde(default = "default_speaker_uri")]
    pub speaker_uri: String,
    #[serde(default = "default_service_url")]
    pub service_url: String,
    #[serde(default = "default_conversational_name")]
    pub conversational_name: String,
    #[serde(default = "default_organization")]
    pub organization: String,
    #[serde(default = "default_synopsis")]
    pub synopsis: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            speaker_uri: default_speaker_uri(),
            service_url: default_service_url(),
            conversational_name: default_conversational_name(),
            organization: default_organization(),
            synopsis: default_synopsis(),
        }
    }
}

/// Tuning for the external paper-search backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Maximum results requested per search.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Minimum spacing between outbound search calls.
    #[serde(default = "default_min_interval_ms")]
    pub min_interval_ms: u64,
    /// Client-level request timeout.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_results: default_max_results(),
            min_interval_ms: default_min_interval_ms(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// HTTP listener binding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

fn default_speaker_uri() -> String {
    "tag:scholaris.ai,2025:research-agent".to_string()
}

fn default_service_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_conversational_name() -> String {
    "Scholaris".to_string()
}

fn default_organization() -> String {
    "Scholaris".to_string()
}

fn default_synopsis() -> String {
    "Research specialist that finds and summarizes academic papers".to_string()
}

fn default_endpoint() -> String {
    "https://export.arxiv.org/api/query".to_string()
}

fn default_max_results() -> usize {
    5
}

fn default_min_interval_ms() -> u64 {
    2_000
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}
