// =============================================================================
// analyze — run the signal engine on a snapshot JSON document
// =============================================================================
//
// Usage:
//   analyze <snapshot.json>       read the snapshot from a file
//   analyze < snapshot.json       read the snapshot from stdin
//
// Prints the analysis report as pretty JSON on stdout. Exits nonzero when
// the snapshot cannot be parsed or the history is too short.

use std::fs;
use std::io::Read;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use finsight_engine::{analyze_snapshot, StockSnapshot};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw = match std::env::args().nth(1) {
        Some(path) => {
            fs::read_to_string(&path).with_context(|| format!("reading snapshot from {path}"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading snapshot from stdin")?;
            buf
        }
    };

    let snapshot: StockSnapshot =
        serde_json::from_str(&raw).context("parsing snapshot JSON")?;

    let report = analyze_snapshot(&snapshot)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
