use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a mention was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    News,
    Discussion,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::News, Platform::Discussion];
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::News => write!(f, "News"),
            Platform::Discussion => write!(f, "Reddit"),
        }
    }
}

/// Three-way polarity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

/// Coarse classification of the search keyword, used to pick query templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Brand,
    Person,
    #[default]
    Topic,
}

impl EntityType {
    /// Parse an entity-type hint, ignoring case and surrounding whitespace.
    ///
    /// Unrecognized values fall back to [`EntityType::Topic`].
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "brand" => EntityType::Brand,
            "person" => EntityType::Person,
            _ => EntityType::Topic,
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Brand => write!(f, "brand"),
            EntityType::Person => write!(f, "person"),
            EntityType::Topic => write!(f, "topic"),
        }
    }
}

/// One normalized news article or discussion post about the keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    pub platform: Platform,
    /// The synthetic search string that produced this record.
    pub query: String,
    /// Display text. Adapters never emit an empty title.
    pub title: String,
    pub link: String,
    /// Publisher name for news items, `r/<subreddit>` for discussion posts.
    pub outlet: Option<String>,
    /// Published (news) or posted (discussion) time. `None` when the source
    /// omitted it or it could not be parsed.
    pub published: Option<DateTime<Utc>>,
    pub sentiment: Sentiment,
    /// Absolute compound score on a 0-100 scale, two decimal places.
    pub sentiment_percent: f64,
}

impl Mention {
    /// Calendar date for display, or `"Unknown"`.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.published.map_or_else(
            || "Unknown".to_string(),
            |ts| ts.format("%Y-%m-%d").to_string(),
        )
    }

    /// `YYYY-MM` bucket used by trend views. `None` for undated mentions.
    #[must_use]
    pub fn month(&self) -> Option<String> {
        self.published.map(|ts| ts.format("%Y-%m").to_string())
    }
}
