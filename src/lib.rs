use tracing::info;

pub mod fetch;
pub mod logging;
pub mod report;
pub mod tabroom;

mod error;
mod utils;

pub use error::EntriesError;
pub use fetch::{Fetcher, HttpFetcher};
pub use tabroom::Partnership;

/// Fetches a Tabroom entries page and extracts its partnerships.
pub async fn get_entries<F>(fetcher: &F, url: &str) -> Result<Vec<Partnership>, EntriesError>
where
    F: Fetcher + ?Sized,
{
    let html = fetcher.fetch(url).await?;
    info!("Fetched {} bytes from {}", html.len(), url);

    let entries = tabroom::entries_from_markup(&html)?;
    info!("Extracted {} entries", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::fs;

    struct StaticFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait::async_trait]
    impl Fetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<String, EntriesError> {
            match self.pages.get(url) {
                Some(page) => Ok(page.clone()),
                None => Err(EntriesError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    url.to_string(),
                ))),
            }
        }
    }

    const URL: &str = "https://www.tabroom.com/index/tourn/fields.mhtml?tourn_id=1&event_id=2";

    fn fetcher(page: &str) -> StaticFetcher {
        StaticFetcher {
            pages: HashMap::from([(URL.to_string(), page.to_string())]),
        }
    }

    #[tokio::test]
    async fn get_entries_from_page() {
        let html = fs::read_to_string("tests/htmls/fieldsort.html").expect("Invalid file url");
        let entries = get_entries(&fetcher(&html), URL).await.unwrap();

        let lines = entries.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "Lincoln HS SJ - Smith & Jones",
                "Jefferson HS OL - O'Brien & Lee",
                "Westwood Academy NP - Nguyen & Patel",
                "Lincoln HS GK - Garcia & Kim",
            ]
        );
    }

    #[tokio::test]
    async fn get_entries_without_table() {
        let f = fetcher("<html><body><h1>Error</h1></body></html>");
        assert!(matches!(
            get_entries(&f, URL).await,
            Err(EntriesError::TableNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn get_entries_propagates_fetch_failure() {
        let f = fetcher("");
        assert!(matches!(
            get_entries(&f, "https://www.tabroom.com/missing").await,
            Err(EntriesError::Io(_))
        ));
    }
}
