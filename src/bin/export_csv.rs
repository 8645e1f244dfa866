//! Export binary - writes the waitlist as CSV
//!
//! Usage:
//!   cargo run --bin export                         # CSV to stdout, Uzbek headers
//!   cargo run --bin export -- --lang en            # English headers (also "EN", "en-US")
//!   cargo run --bin export -- --output list.csv    # Write to a file
//!
//! Required environment variables:
//! - DATABASE_URL

use anyhow::{bail, Context, Result};
use eazy_waitlist::config::{Backend, Config};
use eazy_waitlist::export;
use eazy_waitlist::i18n::Language;
use eazy_waitlist::waitlist;
use std::fs;
use tracing::info;

#[derive(Debug, Default)]
struct Args {
    lang: Option<String>,
    output: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => args.lang = Some(iter.next().context("--lang needs a value")?),
            "--output" => args.output = Some(iter.next().context("--output needs a value")?),
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok(args)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout stays clean CSV
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("export=info".parse()?),
        )
        .init();

    let args = parse_args()?;
    let language = match args.lang.as_deref() {
        Some(tag) => Language::from_tag(tag)?,
        None => Language::canonical(),
    };

    let config = Config::from_env()?;
    if config.backend == Backend::Memory {
        bail!("The in-memory backend has nothing to export; set DATABASE_URL");
    }

    let Some(store) = waitlist::open_store(&config).await? else {
        bail!("DATABASE_URL not set");
    };

    let entries = store.list_all().await?;
    let csv = export::to_csv(&entries, language);

    match args.output {
        Some(path) => {
            fs::write(&path, format!("{}\n", csv))
                .with_context(|| format!("Failed to write {}", path))?;
            info!("✓ Exported {} entries to {}", entries.len(), path);
        }
        None => {
            println!("{}", csv);
            info!("✓ Exported {} entries", entries.len());
        }
    }

    Ok(())
}
