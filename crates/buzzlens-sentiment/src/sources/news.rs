//! Google News RSS search adapter.

use buzzlens_core::{Mention, NewsLocale, Platform};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::Client;

use super::rss_helpers::{parse_pub_date, parse_rss_items, FeedItem};
use super::{build_http_client, fan_out, DEFAULT_CONCURRENCY, NEWS_USER_AGENT};
use crate::classifier::Classifier;
use crate::error::SentimentError;
use crate::retry::{retry_with_backoff, RetryPolicy};

pub(crate) const DEFAULT_BASE_URL: &str = "https://news.google.com";

/// Escapes everything in a query value except RFC 3986 unreserved characters.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Items kept from each query's feed.
pub const MAX_ITEMS_PER_QUERY: usize = 20;

/// Client for the Google News RSS search endpoint.
///
/// Use [`NewsClient::new`] for production or [`NewsClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
    base_url: String,
    locale: NewsLocale,
    retry: RetryPolicy,
    concurrency: usize,
}

impl NewsClient {
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        locale: NewsLocale,
        retry: RetryPolicy,
    ) -> Result<Self, SentimentError> {
        Self::with_base_url(timeout_secs, locale, retry, DEFAULT_BASE_URL)
    }

    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        timeout_secs: u64,
        locale: NewsLocale,
        retry: RetryPolicy,
        base_url: &str,
    ) -> Result<Self, SentimentError> {
        Ok(Self {
            client: build_http_client(timeout_secs, NEWS_USER_AGENT)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            locale,
            retry,
            concurrency: DEFAULT_CONCURRENCY,
        })
    }

    /// Maximum number of queries fetched at once. `1` fetches sequentially.
    #[must_use]
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Fetch and classify news mentions for every query.
    ///
    /// Each query is independent: a failed or empty response contributes
    /// zero mentions and is logged. Sentiment is scored on the title only.
    pub async fn fetch_news(&self, queries: &[String], classifier: &Classifier) -> Vec<Mention> {
        let mentions = fan_out("google_news", queries, self.concurrency, |query| {
            self.fetch_query(query, classifier)
        })
        .await;
        tracing::info!(count = mentions.len(), queries = queries.len(), "news mentions collected");
        mentions
    }

    /// Fetch one query's feed.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] on network failure,
    /// [`SentimentError::UnexpectedStatus`] on a non-2xx response, or
    /// [`SentimentError::Xml`] on malformed RSS.
    pub async fn fetch_query(
        &self,
        query: &str,
        classifier: &Classifier,
    ) -> Result<Vec<Mention>, SentimentError> {
        let url = self.search_url(query);
        let body = retry_with_backoff(self.retry, || self.get_text(&url)).await?;

        if !body.contains("<rss") && !body.contains("<feed") {
            tracing::debug!(query, "news response is not a feed; treating as empty");
            return Ok(Vec::new());
        }

        let items = parse_rss_items(&body, MAX_ITEMS_PER_QUERY)?;
        Ok(items
            .into_iter()
            .map(|item| to_mention(item, query, classifier))
            .collect())
    }

    pub(crate) fn search_url(&self, query: &str) -> String {
        let encode = |value: &str| utf8_percent_encode(value, QUERY_VALUE).to_string();
        format!(
            "{}/rss/search?q={}&hl={}&gl={}&ceid={}",
            self.base_url,
            encode(query),
            encode(&self.locale.language),
            encode(&self.locale.region),
            encode(&self.locale.ceid())
        )
    }

    async fn get_text(&self, url: &str) -> Result<String, SentimentError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response.text().await?)
    }
}

fn to_mention(item: FeedItem, query: &str, classifier: &Classifier) -> Mention {
    let classification = classifier.classify(&item.title);
    let published = item.pub_date.as_deref().and_then(parse_pub_date);
    if published.is_none() {
        tracing::trace!(link = %item.link, raw = ?item.pub_date, "news item has no usable date");
    }
    Mention {
        platform: Platform::News,
        query: query.to_string(),
        title: item.title,
        link: item.link,
        outlet: item.source,
        published,
        sentiment: classification.label,
        sentiment_percent: classification.magnitude,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> NewsClient {
        NewsClient::with_base_url(5, NewsLocale::default(), RetryPolicy::none(), base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn search_url_encodes_query_and_appends_locale() {
        let client = test_client("https://news.google.com/");
        assert_eq!(
            client.search_url("Zomato news"),
            "https://news.google.com/rss/search?q=Zomato%20news&hl=en-IN&gl=IN&ceid=IN%3Aen"
        );
    }

    #[test]
    fn search_url_encodes_locale_values() {
        let locale = NewsLocale {
            language: "en US&x=1".to_string(),
            region: "U#S".to_string(),
        };
        let client = NewsClient::with_base_url(5, locale, RetryPolicy::none(), "https://news.google.com")
            .expect("client construction should not fail");
        assert_eq!(
            client.search_url("Tesla"),
            "https://news.google.com/rss/search?q=Tesla&hl=en%20US%26x%3D1&gl=U%23S&ceid=U%23S%3Aen%20US%26x%3D1"
        );
    }

    #[test]
    fn search_url_encodes_special_characters() {
        let client = test_client("https://news.google.com");
        let url = client.search_url("AT&T price hike?");
        assert!(url.contains("q=AT%26T%20price%20hike%3F&"), "got {url}");
    }

    #[test]
    fn concurrency_is_at_least_one() {
        let client = test_client("http://localhost").with_concurrency(0);
        assert_eq!(client.concurrency, 1);
    }

    #[test]
    fn feed_item_becomes_news_mention_scored_on_title() {
        let item = FeedItem {
            title: "Zomato raises prices, customers unhappy".to_string(),
            link: "https://example.com/a".to_string(),
            pub_date: Some("not a date".to_string()),
            source: Some("Mint".to_string()),
        };
        let mention = to_mention(item, "Zomato news", &Classifier::default());
        assert_eq!(mention.platform, Platform::News);
        assert_eq!(mention.query, "Zomato news");
        assert_eq!(mention.outlet.as_deref(), Some("Mint"));
        assert!(mention.published.is_none());
        assert_eq!(mention.sentiment, buzzlens_core::Sentiment::Negative);
    }
}
