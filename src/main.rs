use anyhow::Result;
use std::env;

use clothing_catalog::{run_catalog_demo, sample_catalog, sample_target, CatalogOutcome};

fn main() {
    // Construction failures propagate here; print one diagnostic line
    // to stderr and exit non-zero
    if let Err(e) = run() {
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let outcome = build_outcome()?;

    if args.len() > 1 && args[1] == "json" {
        // JSON mode
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        // Default mode: the three labeled console sections
        println!("{}", outcome.render());
    }

    Ok(())
}

fn build_outcome() -> Result<CatalogOutcome> {
    let catalog = sample_catalog()?;
    let target = sample_target()?;

    Ok(run_catalog_demo(catalog, &target))
}
