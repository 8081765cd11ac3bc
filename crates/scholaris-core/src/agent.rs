//! Envelope routing and the per-utterance query pipeline.

use crate::classify::is_academic;
use crate::error::SearchError;
use crate::extract::RecordExtractor;
use crate::ratelimit::RateLimiter;
use crate::render::render;
use crate::search::{ArxivClient, SearchBackend};
use log::{debug, info, warn};
use scholaris_config::{AgentConfig, ScholarisConfig};
use scholaris_protocol::{
    Addressee, Capability, Envelope, Event, Identification, Manifest, ManifestParameters, Sender,
    UtteranceParameters,
};
use std::sync::Arc;
use std::time::Duration;

/// Fixed reply when an utterance carries no text tokens.
const MISSING_QUERY_REPLY: &str =
    "Please provide a research query, for example: \"find papers on quantum cryptography\".";
/// Fixed reply when a query does not look academic.
const NON_ACADEMIC_REPLY: &str = "I specialize in academic research. Try topics like machine \
     learning, quantum computing, cryptography, algorithms, or physics.";
/// Fixed reply when the search backend times out.
const TIMEOUT_REPLY: &str = "The paper search hit a timeout. Please try again in a moment.";
/// Fixed reply for any other pipeline failure.
const FAILURE_REPLY: &str =
    "I'm sorry, I ran into a problem while searching for papers. Please try again later.";

/// The research specialist agent.
///
/// Routes inbound conversation envelopes, answers academic queries with
/// rate-limited arXiv searches, and publishes its capability manifest on
/// request. One instance serves every conversation; the rate limiter is
/// the only state shared between them.
pub struct ResearchAgent {
    sender: Sender,
    service_url: String,
    manifest: Manifest,
    max_results: usize,
    limiter: RateLimiter,
    backend: Arc<dyn SearchBackend>,
    extractor: RecordExtractor,
}

impl ResearchAgent {
    /// Build an agent from config with the live arXiv backend.
    pub fn new(config: &ScholarisConfig) -> Result<Self, SearchError> {
        let backend = Arc::new(ArxivClient::new(&config.search)?);
        Ok(Self::with_backend(config, backend))
    }

    /// Build an agent over an explicit search backend.
    pub fn with_backend(config: &ScholarisConfig, backend: Arc<dyn SearchBackend>) -> Self {
        Self {
            sender: Sender {
                speaker_uri: config.agent.speaker_uri.clone(),
                service_url: Some(config.agent.service_url.clone()),
            },
            service_url: config.agent.service_url.clone(),
            manifest: build_manifest(&config.agent),
            max_results: config.search.max_results,
            limiter: RateLimiter::new(Duration::from_millis(config.search.min_interval_ms)),
            backend,
            extractor: RecordExtractor::new(),
        }
    }

    /// Identity this agent signs outbound envelopes with.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Capability manifest published on manifest requests.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Process one inbound envelope and assemble the reply envelope.
    ///
    /// Events are handled sequentially in input order. Events not
    /// addressed to this agent, and event kinds it does not handle,
    /// produce no response. The reply envelope always echoes the inbound
    /// schema version and conversation id, with this agent as sender, even
    /// when no events were produced.
    pub async fn route(&self, inbound: &Envelope) -> Envelope {
        let mut events = Vec::new();
        for event in &inbound.events {
            if !event.addressed_to(&self.sender.speaker_uri, &self.service_url) {
                debug!(
                    "skipping event addressed elsewhere (conversation_id={})",
                    inbound.conversation.id
                );
                continue;
            }
            match event {
                Event::Utterance { parameters, .. } => {
                    events.push(self.handle_utterance(parameters, &inbound.sender).await);
                }
                Event::GetManifests { .. } => {
                    info!(
                        "publishing manifest (conversation_id={})",
                        inbound.conversation.id
                    );
                    events.push(Event::PublishManifests {
                        to: Some(Addressee::reply_to(&inbound.sender)),
                        parameters: ManifestParameters {
                            manifests: vec![self.manifest.clone()],
                        },
                    });
                }
                Event::PublishManifests { .. } | Event::Unrecognized => {}
            }
        }
        Envelope::reply_to(inbound, self.sender.clone(), events)
    }

    /// Handle one utterance addressed to this agent.
    ///
    /// This is the terminal recovery boundary for the per-event pipeline:
    /// every failure maps to one of the fixed user-facing replies, so one
    /// failing query never aborts the rest of the envelope.
    async fn handle_utterance(&self, parameters: &UtteranceParameters, from: &Sender) -> Event {
        let query = parameters.dialog_event.text();

        if query.trim().is_empty() {
            return self.reply(from, MISSING_QUERY_REPLY);
        }
        if !is_academic(&query) {
            debug!("query rejected as non-academic (query_len={})", query.len());
            return self.reply(from, NON_ACADEMIC_REPLY);
        }

        info!(
            "handling research query (query_len={}, max_results={})",
            query.len(),
            self.max_results
        );
        match self.search_and_render(&query).await {
            Ok(text) => self.reply(from, &text),
            Err(SearchError::Timeout) => {
                warn!("search timed out (query_len={})", query.len());
                self.reply(from, TIMEOUT_REPLY)
            }
            Err(err) => {
                warn!("search pipeline failed: {err}");
                self.reply(from, FAILURE_REPLY)
            }
        }
    }

    /// Run the rate-limited search and synthesize the display text.
    async fn search_and_render(&self, query: &str) -> Result<String, SearchError> {
        self.limiter.acquire().await;
        let raw = self.backend.search(query, self.max_results).await?;
        let records = self.extractor.extract(&raw);
        info!("extracted records (count={})", records.len());
        Ok(render(query, &records))
    }

    /// Build an utterance event addressed back to `from`.
    fn reply(&self, from: &Sender, text: &str) -> Event {
        Event::utterance(
            &self.sender.speaker_uri,
            Some(Addressee::reply_to(from)),
            text,
        )
    }
}

/// Assemble the static capability manifest from agent config.
fn build_manifest(agent: &AgentConfig) -> Manifest {
    Manifest {
        identification: Identification {
            speaker_uri: agent.speaker_uri.clone(),
            service_url: agent.service_url.clone(),
            organization: agent.organization.clone(),
            conversational_name: agent.conversational_name.clone(),
            synopsis: agent.synopsis.clone(),
        },
        capabilities: vec![Capability {
            keyphrases: vec![
                "research".to_string(),
                "papers".to_string(),
                "academic".to_string(),
                "arxiv".to_string(),
                "scientific literature".to_string(),
            ],
            descriptions: vec![
                "Searches arXiv for academic papers on a topic".to_string(),
                "Summarizes paper results with a quality assessment".to_string(),
            ],
        }],
    }
}
