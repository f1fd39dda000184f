use crate::EntriesError;
use std::time::Duration;
use tracing::debug;
use url::Url;

pub const TABROOM_FIELDS_URL: &str = "https://www.tabroom.com/index/tourn/fields.mhtml";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait::async_trait]
pub trait Fetcher {
    /// Returns the body of the page at `url`.
    async fn fetch(&self, url: &str) -> Result<String, EntriesError>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<HttpFetcher, EntriesError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, EntriesError> {
        let url = Url::parse(url)?;

        debug!("Visit {}", url);
        let html = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(html)
    }
}

/// Url of the fields (entries) page of one event of a Tabroom tournament.
pub fn entries_url(tourn_id: u32, event_id: u32) -> Result<Url, EntriesError> {
    Ok(Url::parse_with_params(
        TABROOM_FIELDS_URL,
        &[
            ("tourn_id", tourn_id.to_string()),
            ("event_id", event_id.to_string()),
        ],
    )?)
}
