//! Ontology fixtures shared by the engine integration tests.
//!
//! Each constant holds a Turtle 1.1 graph using the published GFO
//! namespace, so the default configuration applies unchanged.

#![allow(dead_code)]

mod cyclic;
mod fraud_ontology;

pub use cyclic::CYCLIC_ONTOLOGY;
pub use fraud_ontology::FRAUD_ONTOLOGY;

/// Namespace every fixture uses.
pub const GFO: &str = "https://gaoinnovations.gov/antifraud_resource/howfraudworks/gfo/";

/// Full IRI of a GFO local name.
pub fn gfo(local: &str) -> String {
    format!("{GFO}{local}")
}
