//! Source adapters: Google News RSS and Reddit search.

mod news;
mod reddit;
mod reddit_helpers;
mod rss_helpers;

pub use news::NewsClient;
pub use reddit::{RedditClient, RedditCredentials};

pub(crate) use news::DEFAULT_BASE_URL as NEWS_BASE_URL;
pub(crate) use reddit::{DEFAULT_API_BASE as REDDIT_API_BASE, DEFAULT_TOKEN_URL as REDDIT_TOKEN_URL};

use std::future::Future;
use std::time::Duration;

use buzzlens_core::Mention;
use futures::stream::{self, StreamExt};
use reqwest::Client;

use crate::error::SentimentError;

/// Default number of queries in flight per source.
pub const DEFAULT_CONCURRENCY: usize = 4;

const NEWS_USER_AGENT: &str = "buzzlens/0.1 (mention-sentiment)";

pub(crate) fn build_http_client(
    timeout_secs: u64,
    user_agent: &str,
) -> Result<Client, SentimentError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Run `fetch` for every query with at most `concurrency` in flight.
///
/// Results keep query order. A failed query is logged and contributes
/// nothing; it never aborts the others.
pub(crate) async fn fan_out<'q, F, Fut>(
    source: &'static str,
    queries: &'q [String],
    concurrency: usize,
    fetch: F,
) -> Vec<Mention>
where
    F: Fn(&'q str) -> Fut,
    Fut: Future<Output = Result<Vec<Mention>, SentimentError>>,
{
    let results: Vec<(&str, Result<Vec<Mention>, SentimentError>)> =
        stream::iter(queries.iter().map(String::as_str))
            .map(|query| {
                let pending = fetch(query);
                async move { (query, pending.await) }
            })
            .buffered(concurrency.max(1))
            .collect()
            .await;

    let mut mentions = Vec::new();
    for (query, result) in results {
        match result {
            Ok(batch) => {
                tracing::debug!(source, query, count = batch.len(), "query fetched");
                mentions.extend(batch);
            }
            Err(e) => {
                tracing::warn!(source, query, error = %e, "query failed; skipping");
            }
        }
    }
    mentions
}
