//! Wire protocol types for the multi-party dialog protocol Scholaris speaks.
//!
//! This crate owns the conversation envelope schema, the event union, and
//! the addressing semantics used by the envelope router. Wire-schema
//! validation beyond serde's structural requirements is left to the caller.

mod envelope;
mod manifest;

pub use envelope::{
    Addressee, Conversation, DialogEvent, Envelope, Event, Features, Schema, Sender, TextFeature,
    Token, UtteranceParameters, SCHEMA_VERSION,
};
pub use manifest::{Capability, Identification, Manifest, ManifestParameters};
