//! HTTP transport for the Scholaris agent.
//!
//! Thin plumbing around two boundary calls: "receive envelope, return
//! envelope" (`POST /`) and "report health" (`GET /health`). All decision
//! logic lives in `scholaris-core`.

use chrono::{DateTime, Utc};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::Header;
use rocket::serde::json::Json;
use rocket::{Build, Request, Response, Rocket, State, get, options, post, routes};
use scholaris_config::ServerConfig;
use scholaris_core::ResearchAgent;
use scholaris_protocol::Envelope;
use serde::Serialize;
use std::sync::Arc;

/// Health descriptor reported by `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct Health {
    /// Fixed service status.
    pub status: &'static str,
    /// Speaker URI identifying the agent.
    pub agent: String,
    /// Advertised capability keyphrases.
    pub capabilities: Vec<String>,
    /// Time the descriptor was produced.
    pub timestamp: DateTime<Utc>,
}

/// Process one inbound conversation envelope.
#[post("/", format = "json", data = "<envelope>")]
async fn converse(
    envelope: Json<Envelope>,
    agent: &State<Arc<ResearchAgent>>,
) -> Json<Envelope> {
    Json(agent.route(&envelope).await)
}

/// Report the agent's health descriptor.
#[get("/health")]
fn health(agent: &State<Arc<ResearchAgent>>) -> Json<Health> {
    let manifest = agent.manifest();
    Json(Health {
        status: "healthy",
        agent: manifest.identification.speaker_uri.clone(),
        capabilities: manifest
            .capabilities
            .iter()
            .flat_map(|capability| capability.keyphrases.iter().cloned())
            .collect(),
        timestamp: Utc::now(),
    })
}

/// Answer CORS preflight requests; the fairing adds the headers.
#[options("/<_..>")]
fn preflight() {}

/// Fairing that adds permissive CORS headers to every response.
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "CORS headers",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, POST, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "Content-Type"));
    }
}

/// Assemble the Rocket instance serving `agent`.
pub fn rocket(config: &ServerConfig, agent: Arc<ResearchAgent>) -> Rocket<Build> {
    let figment = rocket::Config::figment()
        .merge(("address", config.address.clone()))
        .merge(("port", config.port));
    rocket::custom(figment)
        .manage(agent)
        .attach(Cors)
        .mount("/", routes![converse, health, preflight])
}
