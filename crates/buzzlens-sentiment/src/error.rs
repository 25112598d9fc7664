use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The discussion API rejected the configured client credentials.
    #[error("Reddit credentials rejected: {0}")]
    Credentials(String),

    #[error("Reddit API error: {0}")]
    Reddit(String),

    #[error("keyword must not be empty")]
    EmptyKeyword,
}
