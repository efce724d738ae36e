use add_indices::Indexer;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

/// Number the nodes of a JSON graph document by their position.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input JSON document (an object with a "graph" array)
    input: PathBuf,

    /// Path to write the indexed node array to (created or overwritten)
    output: PathBuf,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is left alone.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let report = Indexer::new()
        .run(&cli.input, &cli.output)
        .inspect_err(|e| error!("Indexing stopped at the {} stage", e.stage()))
        .with_context(|| format!("Failed to index {}", cli.input.display()))?;

    info!("Done: {} node(s) indexed", report.nodes);
    Ok(())
}
