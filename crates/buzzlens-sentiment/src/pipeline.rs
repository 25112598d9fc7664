//! End-to-end analysis: expand, fetch both sources, classify, combine.

use buzzlens_core::{AppConfig, EntityType, Mention};
use serde::Serialize;

use crate::aggregate::combine;
use crate::classifier::Classifier;
use crate::error::SentimentError;
use crate::queries::{expand, ExpandedQueries};
use crate::retry::RetryPolicy;
use crate::sources::{
    NewsClient, RedditClient, RedditCredentials, NEWS_BASE_URL, REDDIT_API_BASE, REDDIT_TOKEN_URL,
};

/// Result of one keyword analysis.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub keyword: String,
    pub entity_type: EntityType,
    pub queries: ExpandedQueries,
    /// Combined, deduplicated table: news first, then discussion.
    pub mentions: Vec<Mention>,
}

/// Base URLs for every remote endpoint an [`Analyzer`] talks to.
///
/// [`Endpoints::default`] points at the production services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub news_base: String,
    pub reddit_token_url: String,
    pub reddit_api_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            news_base: NEWS_BASE_URL.to_string(),
            reddit_token_url: REDDIT_TOKEN_URL.to_string(),
            reddit_api_base: REDDIT_API_BASE.to_string(),
        }
    }
}

/// Holds both source clients and the classifier for repeated analyses.
///
/// `discussion` is `None` when the Reddit token could not be obtained for a
/// transient reason; analyses then run on news alone.
#[derive(Debug)]
pub struct Analyzer {
    news: NewsClient,
    discussion: Option<RedditClient>,
    classifier: Classifier,
}

impl Analyzer {
    /// Build production clients from configuration and obtain a Reddit token.
    ///
    /// # Errors
    ///
    /// See [`Analyzer::with_endpoints`].
    pub async fn new(config: &AppConfig) -> Result<Self, SentimentError> {
        Self::with_endpoints(config, &Endpoints::default()).await
    }

    /// Like [`Analyzer::new`] with custom endpoints (for wiremock).
    ///
    /// A token exchange that fails for any reason other than rejected
    /// credentials (timeouts, 5xx, malformed responses) is logged and the
    /// discussion source is skipped for this analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Credentials`] if Reddit rejects the client
    /// credentials, or [`SentimentError::Http`] if an HTTP client cannot be
    /// constructed.
    pub async fn with_endpoints(
        config: &AppConfig,
        endpoints: &Endpoints,
    ) -> Result<Self, SentimentError> {
        let retry = RetryPolicy {
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
        };

        let news = NewsClient::with_base_url(
            config.request_timeout_secs,
            config.news_locale.clone(),
            retry,
            &endpoints.news_base,
        )?
        .with_concurrency(config.max_concurrent_queries);

        let connected = RedditClient::connect_with_base_urls(
            &RedditCredentials::from_config(config),
            config.request_timeout_secs,
            retry,
            &endpoints.reddit_token_url,
            &endpoints.reddit_api_base,
        )
        .await;

        let discussion = match connected {
            Ok(client) => Some(client.with_concurrency(config.max_concurrent_queries)),
            Err(SentimentError::Http(e)) if e.is_builder() => return Err(SentimentError::Http(e)),
            Err(e @ SentimentError::Credentials(_)) => return Err(e),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Reddit token exchange failed; continuing without discussion results"
                );
                None
            }
        };

        Ok(Self {
            news,
            discussion,
            classifier: Classifier::default(),
        })
    }

    /// Assemble an analyzer from already-built parts.
    #[must_use]
    pub fn from_parts(news: NewsClient, discussion: RedditClient, classifier: Classifier) -> Self {
        Self {
            news,
            discussion: Some(discussion),
            classifier,
        }
    }

    /// Whether discussion results will be collected.
    #[must_use]
    pub fn has_discussion_source(&self) -> bool {
        self.discussion.is_some()
    }

    /// Analyze `keyword` across news and discussion sources.
    ///
    /// Both sources run concurrently. Per-query failures are logged and
    /// skipped, so an analysis that found nothing still succeeds with an
    /// empty table.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::EmptyKeyword`] if `keyword` is blank.
    pub async fn analyze(
        &self,
        keyword: &str,
        entity_type: EntityType,
    ) -> Result<Analysis, SentimentError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(SentimentError::EmptyKeyword);
        }

        let queries = expand(entity_type, keyword);
        tracing::info!(
            keyword,
            %entity_type,
            news_queries = queries.news.len(),
            discussion_queries = queries.discussion.len(),
            "starting analysis"
        );

        let discussion_fetch = async {
            match &self.discussion {
                Some(client) => {
                    client
                        .fetch_discussion(&queries.discussion, keyword, &self.classifier)
                        .await
                }
                None => Vec::new(),
            }
        };
        let (news, discussion) = tokio::join!(
            self.news.fetch_news(&queries.news, &self.classifier),
            discussion_fetch,
        );

        let mentions = combine(news, discussion);
        if mentions.is_empty() {
            tracing::warn!(keyword, "no mentions found");
        } else {
            tracing::info!(keyword, count = mentions.len(), "analysis complete");
        }

        Ok(Analysis {
            keyword: keyword.to_string(),
            entity_type,
            queries,
            mentions,
        })
    }
}
