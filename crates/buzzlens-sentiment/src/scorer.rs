//! Lexicon-based compound polarity scorer.
//!
//! Rule-based valence scoring in the VADER style: per-word valences from
//! [`LEXICON`](crate::lexicon::LEXICON), adjusted for degree modifiers,
//! all-caps emphasis, negation, contrastive "but", and trailing `!`/`?`,
//! then squashed into `[-1.0, 1.0]`.

use std::collections::HashMap;

use crate::lexicon::{BOOSTERS, LEXICON, NEGATIONS};

/// Emphasis added to a sentiment word written in all caps inside mixed-case text.
const CAPS_INCREMENT: f64 = 0.733;
/// Multiplier applied to a sentiment word preceded by a negation.
const NEGATION_SCALAR: f64 = -0.74;
/// Normalization constant approximating the maximum expected raw sum.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Produces a compound polarity score in `[-1.0, 1.0]` for a piece of text.
///
/// Implementations must be deterministic and free of I/O so the same text
/// always yields the same score.
pub trait PolarityScorer: Send + Sync {
    fn compound(&self, text: &str) -> f64;
}

/// Default [`PolarityScorer`] backed by the built-in word lexicon.
///
/// Building the lookup tables is the only setup cost; construct once and
/// share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: HashMap<&'static str, f64>,
    boosters: HashMap<&'static str, f64>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconScorer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON.iter().copied().collect(),
            boosters: BOOSTERS.iter().copied().collect(),
        }
    }

    fn valence_of(&self, lower: &str) -> Option<f64> {
        self.lexicon.get(lower).copied()
    }

    /// Valence of the token at `i` after caps, booster, negation and
    /// "least" adjustments.
    fn token_valence(&self, tokens: &[Token], i: usize, caps_differ: bool) -> f64 {
        let Some(mut valence) = self.valence_of(&tokens[i].lower) else {
            return 0.0;
        };

        // "no" only carries its own valence when it does not modify another
        // sentiment word.
        if tokens[i].lower == "no"
            && tokens
                .get(i + 1)
                .is_some_and(|next| self.valence_of(&next.lower).is_some())
        {
            return 0.0;
        }

        if caps_differ && tokens[i].is_upper {
            valence += CAPS_INCREMENT.copysign(valence);
        }

        for distance in 1..=3 {
            if i < distance {
                break;
            }
            let prev = &tokens[i - distance];
            if self.valence_of(&prev.lower).is_some() {
                continue;
            }
            let mut scalar = self.booster_scalar(prev, valence, caps_differ);
            if distance == 2 {
                scalar *= 0.95;
            } else if distance == 3 {
                scalar *= 0.9;
            }
            valence += scalar;
            valence = negation_adjust(valence, tokens, i, distance);
        }

        least_adjust(valence, tokens, i)
    }

    fn booster_scalar(&self, token: &Token, valence: f64, caps_differ: bool) -> f64 {
        let Some(&base) = self.boosters.get(token.lower.as_str()) else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if caps_differ && token.is_upper {
            if valence > 0.0 {
                scalar += CAPS_INCREMENT;
            } else {
                scalar -= CAPS_INCREMENT;
            }
        }
        scalar
    }
}

impl PolarityScorer for LexiconScorer {
    fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        let upper_count = tokens.iter().filter(|t| t.is_upper).count();
        let caps_differ = upper_count > 0 && upper_count < tokens.len();

        let mut valences: Vec<f64> = (0..tokens.len())
            .map(|i| {
                if self.boosters.contains_key(tokens[i].lower.as_str()) {
                    0.0
                } else {
                    self.token_valence(&tokens, i, caps_differ)
                }
            })
            .collect();

        apply_but_contrast(&mut valences, &tokens);

        let mut sum: f64 = valences.iter().sum();
        if sum == 0.0 {
            return 0.0;
        }
        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else {
            sum -= emphasis;
        }

        let compound = (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0);
        (compound * 10_000.0).round() / 10_000.0
    }
}

#[derive(Debug)]
struct Token {
    lower: String,
    is_upper: bool,
}

/// Split on whitespace and strip surrounding punctuation. Single-character
/// tokens carry no sentiment and are dropped.
fn tokenize(text: &str) -> Vec<Token> {
    text.split_whitespace()
        .filter_map(|word| {
            let stripped = word.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 1 {
                return None;
            }
            let has_upper = stripped.chars().any(char::is_uppercase);
            let has_lower = stripped.chars().any(char::is_lowercase);
            Some(Token {
                lower: stripped.to_lowercase(),
                is_upper: has_upper && !has_lower,
            })
        })
        .collect()
}

fn is_negation(token: &Token) -> bool {
    NEGATIONS.contains(&token.lower.as_str()) || token.lower.contains("n't")
}

/// Apply negation found `distance` tokens before the sentiment word at `i`.
///
/// "never so good" / "never this good" intensify rather than negate.
fn negation_adjust(valence: f64, tokens: &[Token], i: usize, distance: usize) -> f64 {
    let lower = |offset: usize| tokens[i - offset].lower.as_str();
    let is_so_or_this = |w: &str| w == "so" || w == "this";
    match distance {
        1 => {
            if is_negation(&tokens[i - 1]) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        2 => {
            if lower(2) == "never" && is_so_or_this(lower(1)) {
                valence * 1.25
            } else if is_negation(&tokens[i - 2]) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        3 => {
            if lower(3) == "never" && (is_so_or_this(lower(2)) || is_so_or_this(lower(1))) {
                valence * 1.25
            } else if is_negation(&tokens[i - 3]) {
                valence * NEGATION_SCALAR
            } else {
                valence
            }
        }
        _ => valence,
    }
}

/// "least" before a sentiment word negates it, except in "at least" / "very least".
fn least_adjust(valence: f64, tokens: &[Token], i: usize) -> f64 {
    if i == 0 || tokens[i - 1].lower != "least" {
        return valence;
    }
    if i >= 2 && matches!(tokens[i - 2].lower.as_str(), "at" | "very") {
        return valence;
    }
    valence * NEGATION_SCALAR
}

/// Sentiment after "but" dominates: words before it are halved, words after
/// it weighted by 1.5.
fn apply_but_contrast(valences: &mut [f64], tokens: &[Token]) {
    let Some(but_index) = tokens.iter().position(|t| t.lower == "but") else {
        return;
    };
    for (i, valence) in valences.iter_mut().enumerate() {
        if i < but_index {
            *valence *= 0.5;
        } else if i > but_index {
            *valence *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(4);
    #[allow(clippy::cast_precision_loss)]
    let exclamation_boost = exclamations as f64 * 0.292;

    let questions = text.matches('?').count();
    #[allow(clippy::cast_precision_loss)]
    let question_boost = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * 0.18,
        _ => 0.96,
    };

    exclamation_boost + question_boost
}
