#[derive(Debug, thiserror::Error)]
pub enum EntriesError {
    #[error("Failed to fetch page")]
    Fetch(#[from] reqwest::Error),

    #[error("Invalid url")]
    InvalidUrl(#[from] url::ParseError),

    #[error("No element with id `{id}` in page")]
    TableNotFound { id: String },

    #[error("Must pass exactly two names for a partnership of {school}. Got {names:?}")]
    MalformedPartnership { school: String, names: Vec<String> },

    #[error("Failed to read page")]
    Io(#[from] std::io::Error),

    #[error("Failed to write json")]
    Json(#[from] serde_json::Error),
}
