//! Three-way sentiment labelling on top of a compound polarity score.

use std::sync::Arc;

use buzzlens_core::Sentiment;

use crate::scorer::{LexiconScorer, PolarityScorer};

/// Compound scores strictly above this are positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound scores strictly below this are negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Label and intensity for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: Sentiment,
    /// `|compound| * 100`, rounded to two decimal places.
    pub magnitude: f64,
}

/// Map a compound score to its label. Both thresholds are exclusive, so
/// exactly `0.05` and `-0.05` are neutral.
#[must_use]
pub fn label_for_compound(compound: f64) -> Sentiment {
    if compound > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if compound < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Convert a compound score to the 0-100 magnitude shown alongside the label.
#[must_use]
pub fn magnitude_for_compound(compound: f64) -> f64 {
    ((compound * 100.0 * 100.0).round() / 100.0).abs()
}

/// Wraps a [`PolarityScorer`] and applies the fixed label thresholds.
///
/// Cheap to clone; the scorer is shared.
#[derive(Clone)]
pub struct Classifier {
    scorer: Arc<dyn PolarityScorer>,
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier").finish_non_exhaustive()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Arc::new(LexiconScorer::new()))
    }
}

impl Classifier {
    #[must_use]
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self { scorer }
    }

    /// Score and label `text`. Blank text is neutral with zero magnitude.
    #[must_use]
    pub fn classify(&self, text: &str) -> Classification {
        if text.trim().is_empty() {
            return Classification {
                label: Sentiment::Neutral,
                magnitude: 0.0,
            };
        }
        let compound = self.scorer.compound(text);
        Classification {
            label: label_for_compound(compound),
            magnitude: magnitude_for_compound(compound),
        }
    }
}
