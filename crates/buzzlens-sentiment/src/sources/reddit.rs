//! Reddit search adapter (client-credentials OAuth).

use buzzlens_core::{AppConfig, Mention};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::reddit_helpers::{is_relevant, to_mention};
use super::{build_http_client, fan_out, DEFAULT_CONCURRENCY};
use crate::classifier::Classifier;
use crate::error::SentimentError;
use crate::retry::{retry_with_backoff, RetryPolicy};

pub(crate) const DEFAULT_TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
pub(crate) const DEFAULT_API_BASE: &str = "https://oauth.reddit.com";

/// Results requested per search query.
pub const SEARCH_LIMIT: usize = 20;

/// Reddit OAuth token response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
}

/// Reddit search listing wrapper.
#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<Post>,
}

#[derive(Debug, Deserialize)]
pub(super) struct Post {
    pub(super) data: PostData,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PostData {
    pub(super) title: Option<String>,
    pub(super) selftext: Option<String>,
    pub(super) url: Option<String>,
    pub(super) permalink: Option<String>,
    pub(super) subreddit: Option<String>,
    pub(super) created_utc: Option<f64>,
}

/// The three values Reddit needs for an app-only token.
#[derive(Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub user_agent: String,
}

impl RedditCredentials {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            client_id: config.reddit_client_id.clone(),
            client_secret: config.reddit_client_secret.clone(),
            user_agent: config.reddit_user_agent.clone(),
        }
    }
}

impl std::fmt::Debug for RedditCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedditCredentials")
            .field("client_id", &"[redacted]")
            .field("client_secret", &"[redacted]")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Reddit API client holding a valid access token.
pub struct RedditClient {
    client: Client,
    token: String,
    api_base: String,
    retry: RetryPolicy,
    concurrency: usize,
}

impl std::fmt::Debug for RedditClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedditClient")
            .field("api_base", &self.api_base)
            .field("retry", &self.retry)
            .field("concurrency", &self.concurrency)
            .finish_non_exhaustive()
    }
}

impl RedditClient {
    /// Create a client by exchanging client credentials for a token.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Credentials`] if Reddit rejects the
    /// credentials, [`SentimentError::Http`] on network failure, or
    /// [`SentimentError::Reddit`] on any other token-endpoint failure.
    pub async fn connect(
        credentials: &RedditCredentials,
        timeout_secs: u64,
        retry: RetryPolicy,
    ) -> Result<Self, SentimentError> {
        Self::connect_with_base_urls(
            credentials,
            timeout_secs,
            retry,
            DEFAULT_TOKEN_URL,
            DEFAULT_API_BASE,
        )
        .await
    }

    /// Like [`RedditClient::connect`] with custom endpoints (for wiremock).
    ///
    /// # Errors
    ///
    /// See [`RedditClient::connect`].
    pub async fn connect_with_base_urls(
        credentials: &RedditCredentials,
        timeout_secs: u64,
        retry: RetryPolicy,
        token_url: &str,
        api_base: &str,
    ) -> Result<Self, SentimentError> {
        let client = build_http_client(timeout_secs, &credentials.user_agent)?;
        let token = retry_with_backoff(retry, || {
            Self::fetch_token(&client, token_url, credentials)
        })
        .await?;

        tracing::debug!("Reddit access token acquired");

        Ok(Self {
            client,
            token,
            api_base: api_base.trim_end_matches('/').to_string(),
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

    async fn fetch_token(
        client: &Client,
        token_url: &str,
        credentials: &RedditCredentials,
    ) -> Result<String, SentimentError> {
        let response = client
            .post(token_url)
            .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SentimentError::Credentials(format!(
                "token exchange returned {status}; check REDDIT_CLIENT_ID and REDDIT_CLIENT_SECRET"
            )));
        }
        if !status.is_success() {
            return Err(SentimentError::UnexpectedStatus {
                status: status.as_u16(),
                url: token_url.to_string(),
            });
        }

        let body = response.text().await?;
        let token: TokenResponse =
            serde_json::from_str(&body).map_err(|e| SentimentError::Deserialize {
                context: "Reddit token response".to_string(),
                source: e,
            })?;

        match (token.access_token, token.error) {
            (Some(access_token), _) if !access_token.is_empty() => Ok(access_token),
            (_, Some(error)) => Err(SentimentError::Credentials(error)),
            _ => Err(SentimentError::Reddit(
                "token response did not contain an access token".to_string(),
            )),
        }
    }

    /// Search Reddit for every query and keep only relevant posts.
    ///
    /// A post is kept when `entity_name` appears in its title or the query
    /// appears in its body (both case-insensitive). Sentiment is scored on
    /// title and body together. Failed queries contribute nothing.
    pub async fn fetch_discussion(
        &self,
        queries: &[String],
        entity_name: &str,
        classifier: &Classifier,
    ) -> Vec<Mention> {
        let mentions = fan_out("reddit", queries, self.concurrency, |query| {
            self.search_query(query, entity_name, classifier)
        })
        .await;
        tracing::info!(
            count = mentions.len(),
            queries = queries.len(),
            "discussion mentions collected"
        );
        mentions
    }

    /// Run one search and convert the relevant posts.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Http`] on network failure,
    /// [`SentimentError::UnexpectedStatus`] on a non-2xx response, or
    /// [`SentimentError::Deserialize`] if the listing cannot be parsed.
    pub async fn search_query(
        &self,
        query: &str,
        entity_name: &str,
        classifier: &Classifier,
    ) -> Result<Vec<Mention>, SentimentError> {
        let posts = retry_with_backoff(self.retry, || self.search(query)).await?;
        let total = posts.len();

        let mentions: Vec<Mention> = posts
            .iter()
            .filter(|post| {
                is_relevant(
                    post.data.title.as_deref().unwrap_or_default(),
                    post.data.selftext.as_deref().unwrap_or_default(),
                    entity_name,
                    query,
                )
            })
            .filter_map(|post| to_mention(post, query, classifier))
            .collect();

        tracing::debug!(
            query,
            returned = total,
            kept = mentions.len(),
            "applied relevance filter"
        );
        Ok(mentions)
    }

    async fn search(&self, query: &str) -> Result<Vec<Post>, SentimentError> {
        let endpoint = format!("{}/r/all/search", self.api_base);
        let limit = SEARCH_LIMIT.to_string();
        let params = [
            ("q", query),
            ("sort", "relevance"),
            ("limit", limit.as_str()),
            ("restrict_sr", "false"),
            ("type", "link"),
            ("raw_json", "1"),
        ];

        let response = self
            .client
            .get(&endpoint)
            .bearer_auth(&self.token)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SentimentError::UnexpectedStatus {
                status: status.as_u16(),
                url: endpoint,
            });
        }

        let body = response.text().await?;
        let listing: Listing =
            serde_json::from_str(&body).map_err(|e| SentimentError::Deserialize {
                context: format!("Reddit search(q={query})"),
                source: e,
            })?;

        let mut posts = listing.data.children;
        posts.truncate(SEARCH_LIMIT);
        Ok(posts)
    }
}
