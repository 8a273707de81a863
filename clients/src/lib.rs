//! Shared plumbing for the GFO command-line clients.
//!
//! Every client takes the same `--ontology`, `--config` and `--json`
//! arguments ([`CommonArgs`]), logs to stderr through [`init_tracing`], and
//! opens its [`Session`] through [`open_session`].

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use gfo_engine::{EngineConfig, Session};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Arguments shared by every client.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Ontology file (.ttl, .nt, .rdf/.owl/.xml or .jsonld/.json).
    #[arg(long)]
    pub ontology: PathBuf,

    /// Engine configuration file (TOML). Built-in defaults when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of a text report.
    #[arg(long)]
    pub json: bool,
}

/// Installs the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the configuration (if any) and loads the ontology into a new
/// session.
///
/// # Errors
///
/// Returns an error if the configuration is unreadable or invalid, or the
/// ontology cannot be loaded.
pub fn open_session(args: &CommonArgs) -> Result<Session> {
    let config = match &args.config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    debug!(?config, "configuration resolved");
    let mut session = Session::new(config);
    session
        .load_path(&args.ontology)
        .with_context(|| format!("loading ontology {}", args.ontology.display()))?;
    Ok(session)
}

/// Prints `value` as pretty JSON on stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
