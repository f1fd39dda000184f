use clap::Parser;
use std::time::Duration;
use tabroom_entries::fetch::{self, HttpFetcher};
use tabroom_entries::report::{self, Format};
use tracing::debug;

const DEFAULT_TOURN_ID: u32 = 13142;
const DEFAULT_EVENT_ID: u32 = 111039;

/// Print the debate partnerships entered in a Tabroom event
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Tabroom entries page, e.g. https://www.tabroom.com/index/tourn/fields.mhtml?tourn_id=..&event_id=..
    #[arg(conflicts_with_all = ["tourn_id", "event_id"])]
    url: Option<String>,

    /// Tournament id, used together with --event-id instead of URL
    #[arg(long, requires = "event_id")]
    tourn_id: Option<u32>,

    /// Event id, used together with --tourn-id instead of URL
    #[arg(long, requires = "tourn_id")]
    event_id: Option<u32>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tabroom_entries::logging::init();

    let args = Args::parse();
    debug!("{:?}", args);

    let url = match args.url {
        Some(url) => url,
        None => fetch::entries_url(
            args.tourn_id.unwrap_or(DEFAULT_TOURN_ID),
            args.event_id.unwrap_or(DEFAULT_EVENT_ID),
        )?
        .to_string(),
    };

    let fetcher = HttpFetcher::new(Duration::from_secs(args.timeout))?;
    let entries = tabroom_entries::get_entries(&fetcher, &url).await?;

    let stdout = std::io::stdout();
    report::write_entries(&mut stdout.lock(), &entries, args.format)?;
    Ok(())
}
