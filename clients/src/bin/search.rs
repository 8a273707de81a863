//! `gfo-search`: Finds the resources related to one category under the
//! Modern policy.
//!
//! **Usage:**
//! ```text
//! gfo-search --ontology <file> --category <label|id> [--config <toml>] [--json]
//! ```
//!
//! Exits non-zero if the ontology cannot be loaded or the category is
//! unknown. A failed facet is reported and does not change the exit status.

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

/// Search a GFO ontology for the resources of one category.
#[derive(Parser)]
#[command(
    name = "gfo-search",
    about = "Find the resources related to a fraud-activity category"
)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Category display label or identifier.
    #[arg(long)]
    category: String,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut session = open_session(&args.common)?;
    let outcome = session.search(&args.category)?;

    if args.common.json {
        return print_json(outcome);
    }

    println!("{} ({})", outcome.category.label, outcome.category.id);
    println!("{}", "=".repeat(outcome.category.label.chars().count() + outcome.category.id.len() + 3));
    for facet in &outcome.facets {
        println!();
        println!("{} ({})", facet.facet, facet.records.len());
        if let Some(error) = &facet.error {
            println!("  [ERROR] {error}");
            continue;
        }
        for record in &facet.records {
            match &record.linked_relations {
                Some(relations) => {
                    let relations: Vec<_> = relations.iter().map(String::as_str).collect();
                    println!("  - {} [{}]", record.label, relations.join(", "));
                }
                None => println!("  - {}", record.label),
            }
            if let Some(website) = &record.website {
                println!("      {website}");
            }
        }
    }
    println!();
    println!("Total: {} resources", outcome.total());
    Ok(())
}
