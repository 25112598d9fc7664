//! Mention collection and sentiment analysis for BuzzLens.
//!
//! Expands a keyword into news and discussion queries, fetches Google News
//! RSS and Reddit search results, labels each mention with a lexicon-based
//! polarity scorer, and combines everything into one deduplicated table.

pub mod aggregate;
pub mod classifier;
pub mod error;
pub mod pipeline;
pub mod queries;
pub mod report;
pub mod retry;
pub mod scorer;

mod lexicon;
mod sources;

pub use aggregate::combine;
pub use classifier::{Classification, Classifier, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use error::SentimentError;
pub use pipeline::{Analysis, Analyzer, Endpoints};
pub use queries::{expand, ExpandedQueries};
pub use report::{AnalysisReport, PlatformBreakdown, SentimentCounts, Summary};
pub use retry::RetryPolicy;
pub use scorer::{LexiconScorer, PolarityScorer};
pub use sources::{NewsClient, RedditClient, RedditCredentials, DEFAULT_CONCURRENCY};
