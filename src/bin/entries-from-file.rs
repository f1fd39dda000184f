use clap::Parser;
use std::{fs, path::PathBuf};
use tabroom_entries::report::{self, Format};
use tabroom_entries::tabroom;
use tracing::info;

/// Extract debate partnerships from a saved Tabroom entries page
#[derive(Debug, Parser)]
struct Args {
    /// Html file of a Tabroom entries page
    path: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tabroom_entries::logging::init();

    let args = Args::parse();
    let html = fs::read_to_string(&args.path)?;
    info!("Read {} bytes from {}", html.len(), args.path.display());

    let entries = tabroom::entries_from_markup(&html)?;
    info!("Extracted {} entries", entries.len());

    let stdout = std::io::stdout();
    report::write_entries(&mut stdout.lock(), &entries, args.format)?;
    Ok(())
}
