//! `gfo-categories`: Lists the selectable fraud-activity categories.
//!
//! **Usage:**
//! ```text
//! gfo-categories --ontology <file> [--config <toml>] [--json]
//! ```
//!
//! Exits non-zero if the ontology cannot be loaded.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::Result;
use clap::Parser;
use gfo_clients::{init_tracing, open_session, print_json, CommonArgs};

/// List the categories of a GFO ontology.
#[derive(Parser)]
#[command(
    name = "gfo-categories",
    about = "List the fraud-activity categories of a GFO ontology"
)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let session = open_session(&args.common)?;
    let catalog = session.categories()?;

    if args.common.json {
        return print_json(catalog);
    }

    if catalog.is_empty() {
        println!("No categories found.");
        return Ok(());
    }
    let width = catalog.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
    for entry in catalog.iter() {
        println!("{:<width$}  {}", entry.label, entry.id);
    }
    println!();
    println!("{} categories", catalog.len());
    Ok(())
}
