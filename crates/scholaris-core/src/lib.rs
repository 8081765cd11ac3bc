//! Core query pipeline for the Scholaris research agent.
//!
//! This crate owns intent classification, the outbound-call rate limiter,
//! the arXiv search client, tolerant record extraction, quality
//! assessment, response synthesis, and the envelope router that ties them
//! together. The HTTP transport lives in `scholaris-server`.

mod agent;
mod assess;
mod classify;
mod error;
mod extract;
mod ratelimit;
mod render;
mod search;

pub use agent::ResearchAgent;
pub use assess::assess;
pub use classify::is_academic;
pub use error::SearchError;
pub use extract::{PaperRecord, RecordExtractor};
pub use ratelimit::RateLimiter;
pub use render::render;
pub use search::{ArxivClient, SearchBackend};
