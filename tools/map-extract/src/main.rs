//! Offline extraction pass for the map artifact.
//!
//! Reads the hand-authored SVG, extracts the structured document, and
//! persists it as JSON for the runtime to load. Runs once per deployment;
//! the runtime never touches the raw markup.
//!
//! ## Usage
//!
//! ```bash
//! # Default paths: map.svg -> map.json
//! map-extract
//!
//! # Explicit paths, pretty-printed output
//! map-extract --input assets/map.svg --output assets/map.json --pretty
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use mapkit_common::{init_logging, LogConfig};
use mapkit_document::MapDocument;

#[derive(Parser)]
#[command(name = "map-extract")]
#[command(about = "Extract the structured map document from raw SVG markup")]
struct Cli {
    /// Input SVG file
    #[arg(short, long, default_value = "map.svg")]
    input: PathBuf,

    /// Output JSON file
    #[arg(short, long, default_value = "map.json")]
    output: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

struct Summary {
    groups: usize,
    elements: usize,
}

fn run(cli: &Cli) -> anyhow::Result<Summary> {
    if !cli.input.exists() {
        bail!("cannot find {}", cli.input.display());
    }

    let markup = fs::read_to_string(&cli.input)
        .with_context(|| format!("reading {}", cli.input.display()))?;
    let document = MapDocument::extract(&markup);

    let json = if cli.pretty {
        document.to_json_string_pretty()?
    } else {
        document.to_json_string()?
    };
    fs::write(&cli.output, json)
        .with_context(|| format!("writing {}", cli.output.display()))?;

    Ok(Summary {
        groups: document.groups.len(),
        elements: document.element_count(),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(if cli.verbose {
        LogConfig::debug()
    } else {
        LogConfig::default()
    });

    let summary = run(&cli)?;
    println!(
        "Created {} with {} groups and {} elements.",
        cli.output.display(),
        summary.groups,
        summary.elements
    );
    Ok(())
}
