use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod document;
mod dump;
mod pdf;

use document::Document;

#[derive(Parser, Debug)]
#[command(
    name = "vypiska",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VYPISKA_BUILD_SHA"), ")"),
    about = "Extract per-account transactions from Sberbank and VTB statements"
)]
struct Cli {
    /// Statement document: a PDF, or a JSON page dump (`.json`)
    path: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let document = Document::open(&cli.path)
        .with_context(|| format!("opening {}", cli.path.display()))?;
    info!(path = %cli.path.display(), pages = document.page_count(), "document loaded");

    let extraction = document
        .extract()
        .with_context(|| format!("processing {}", cli.path.display()))?;

    if extraction.account_transactions.is_empty() {
        error!(
            statement_type = %extraction.statement_type,
            "no accounts or transactions found"
        );
        bail!("could not extract account transactions");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &extraction).context("writing result")?;
    out.write_all(b"\n").context("writing result")?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
