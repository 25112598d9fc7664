//! Summary metrics over a combined mention table.

use std::collections::BTreeMap;

use buzzlens_core::{EntityType, Mention, Platform, Sentiment};
use serde::Serialize;

use crate::pipeline::Analysis;
use crate::queries::ExpandedQueries;

/// Label counts for a group of mentions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub total: usize,
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentCounts {
    fn record(&mut self, sentiment: Sentiment) {
        self.total += 1;
        match sentiment {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Neutral => self.neutral += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    #[must_use]
    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }

    /// Share of `sentiment` in this group as a percentage, rounded to two
    /// decimals. An empty group yields `0.0`.
    #[must_use]
    pub fn share(&self, sentiment: Sentiment) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let pct = self.count(sentiment) as f64 / self.total as f64 * 100.0;
        (pct * 100.0).round() / 100.0
    }
}

/// Per-platform counts and mean sentiment magnitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformBreakdown {
    pub platform: Platform,
    pub counts: SentimentCounts,
    pub average_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub overall: SentimentCounts,
    /// One entry per platform, in [`Platform::ALL`] order, including
    /// platforms with no mentions.
    pub platforms: Vec<PlatformBreakdown>,
    /// Counts keyed by `YYYY-MM`, ascending. Undated mentions are excluded.
    pub monthly: BTreeMap<String, SentimentCounts>,
    pub undated: usize,
}

impl Summary {
    #[must_use]
    pub fn from_mentions(mentions: &[Mention]) -> Self {
        let mut overall = SentimentCounts::default();
        let mut monthly: BTreeMap<String, SentimentCounts> = BTreeMap::new();
        let mut undated = 0;

        for mention in mentions {
            overall.record(mention.sentiment);
            match mention.month() {
                Some(month) => monthly.entry(month).or_default().record(mention.sentiment),
                None => undated += 1,
            }
        }

        let platforms = Platform::ALL
            .iter()
            .map(|&platform| platform_breakdown(mentions, platform))
            .collect();

        Self {
            overall,
            platforms,
            monthly,
            undated,
        }
    }
}

fn platform_breakdown(mentions: &[Mention], platform: Platform) -> PlatformBreakdown {
    let mut counts = SentimentCounts::default();
    let mut percent_sum = 0.0;
    for mention in mentions.iter().filter(|m| m.platform == platform) {
        counts.record(mention.sentiment);
        percent_sum += mention.sentiment_percent;
    }
    #[allow(clippy::cast_precision_loss)]
    let average_percent = if counts.total == 0 {
        0.0
    } else {
        (percent_sum / counts.total as f64 * 100.0).round() / 100.0
    };
    PlatformBreakdown {
        platform,
        counts,
        average_percent,
    }
}

/// Everything one run produced, in the shape emitted as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub keyword: String,
    pub entity_type: EntityType,
    pub queries: ExpandedQueries,
    pub summary: Summary,
    pub mentions: Vec<Mention>,
}

impl From<Analysis> for AnalysisReport {
    fn from(analysis: Analysis) -> Self {
        let summary = Summary::from_mentions(&analysis.mentions);
        Self {
            keyword: analysis.keyword,
            entity_type: analysis.entity_type,
            queries: analysis.queries,
            summary,
            mentions: analysis.mentions,
        }
    }
}
