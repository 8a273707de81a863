//! `gfo-compare`: Reconciles the Modern and Legacy results for one
//! category.
//!
//! **Usage:**
//! ```text
//! gfo-compare --ontology <file> --category <label|id> [--config <toml>] [--json]
//! ```
//!
//! Exits non-zero if the ontology cannot be loaded or the category is
//! unknown. Facet failures are listed and do not change the exit status.

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

/// Compare the Modern and Legacy policies for one category.
#[derive(Parser)]
#[command(
    name = "gfo-compare",
    about = "Compare Modern and Legacy search results for a fraud-activity category"
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
    session.search(&args.category)?;
    let outcome = session.compare()?;

    if args.common.json {
        return print_json(outcome);
    }

    println!("Policy Comparison: {}", outcome.category.label);
    println!("==================");

    for table in &outcome.facets {
        println!();
        println!(
            "{} (modern {}, legacy {})",
            table.facet,
            table.modern_count(),
            table.legacy_count()
        );
        if table.rows.is_empty() {
            println!("  (no results)");
        }
        for row in &table.rows {
            let status = format!("[{}]", row.status);
            println!("  {status:<14}{}", row.label);
            if let Some(relations) = &row.linked_relations {
                println!("                via {relations}");
            }
            if let Some(description) = &row.description {
                println!("                {description}");
            }
        }
    }

    if !outcome.errors.is_empty() {
        println!();
        for error in &outcome.errors {
            println!("[ERROR] {} ({}): {}", error.facet, error.policy, error.message);
        }
    }

    println!();
    println!("{:<40}{:>8}{:>8}", "Summary", "Modern", "Legacy");
    for row in outcome.summary.iter_with_total() {
        println!("{:<40}{:>8}{:>8}", row.facet, row.modern_count, row.legacy_count);
    }
    Ok(())
}
