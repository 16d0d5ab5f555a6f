// Data-driven language configuration.
//
// Every balance knob of the generator lives here in `LanguageConfig`, loaded
// from JSON or taken from `Default` (the shipped balance). The pipeline never
// uses magic numbers — it reads from the config. Meaning pools and name
// pools are plain data on the config too, not process-wide statics, so tests
// can inject tiny languages and the balance team can retune without touching
// code.
//
// `validate()` is the fail-fast gate described in `error.rs`: a config that
// passes it can only fail generation through cross-category meaning
// exhaustion, which names the same error type.
//
// See also: `words.rs` / `roots.rs` / `texts.rs`, which consume these
// parameters, and `error.rs` for the violations `validate()` reports.
//
// **Critical constraint: determinism.** Config values feed every draw the
// pipeline makes. Category parameters are keyed in a `BTreeMap`, so
// iteration follows `Category` declaration order — the factory's processing
// order is data-independent.

use crate::error::ConfigError;
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// Per-category generation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryParams {
    /// Number of words generated for this category.
    pub word_count: usize,
    /// Inclusive base-cost interval; costs interpolate linearly across it.
    pub cost_range: (u32, u32),
    /// Inclusive glyph-sequence length interval.
    pub glyph_range: (usize, usize),
    /// English meanings this category may draw from.
    pub meaning_pool: Vec<String>,
}

/// Complete generator configuration. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Number of glyph shapes in the game's generated alphabet.
    pub alphabet_size: u8,
    /// Whole-sequence redraw attempts before a glyph collision is accepted
    /// (and reported as a `GenerationWarning`).
    pub glyph_retry_limit: u32,

    /// Per-category parameters, iterated in `Category` declaration order.
    pub categories: BTreeMap<Category, CategoryParams>,

    /// Words in every root family. The families must exactly cover the word
    /// inventory; `validate()` rejects uneven partitions.
    pub words_per_root: usize,
    /// Upper bound on the number of root families.
    pub root_count: usize,
    /// Translated members needed to discover a family.
    pub root_discovery_threshold: u32,
    /// Stem names, consumed in partition order.
    pub root_name_pool: Vec<String>,

    /// Number of texts to compose.
    pub text_count: usize,
    /// Inclusive slots-per-text interval.
    pub text_slot_range: (usize, usize),
    /// Unlock thresholds by text position; positions past the end extend
    /// arithmetically at `index * 8`.
    pub text_unlock_thresholds: Vec<u32>,
    /// Display titles by text position; positions past the end fall back to
    /// a numbered title.
    pub text_name_pool: Vec<String>,
    /// Probability that a slot of the first text draws from the text's own
    /// category pool.
    pub text_primary_bias: f64,
    /// Same-category probability for every later text. Lower than the
    /// primary bias so later texts spread across the vocabulary.
    pub text_secondary_bias: f64,
}

fn owned(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|s| s.to_string()).collect()
}

impl Default for LanguageConfig {
    /// The shipped balance: 30 words across four categories, five root
    /// families of six, four texts of 8–12 slots.
    fn default() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            Category::Common,
            CategoryParams {
                word_count: 10,
                cost_range: (10, 30),
                glyph_range: (1, 1),
                meaning_pool: owned(&[
                    "water", "fire", "earth", "sky", "stone", "hand", "eye", "sun", "moon",
                    "star", "tree", "river", "path", "door", "light", "bone", "wind", "seed",
                    "salt", "ash",
                ]),
            },
        );
        categories.insert(
            Category::Everyday,
            CategoryParams {
                word_count: 10,
                cost_range: (50, 200),
                glyph_range: (2, 2),
                meaning_pool: owned(&[
                    "gather", "build", "speak", "listen", "travel", "carry", "break", "mend",
                    "trade", "plant", "harvest", "shelter", "guard", "rest", "weave", "forge",
                    "carve", "kindle", "bind", "honor",
                ]),
            },
        );
        categories.insert(
            Category::Academic,
            CategoryParams {
                word_count: 6,
                cost_range: (300, 1000),
                glyph_range: (2, 2),
                meaning_pool: owned(&[
                    "knowledge", "theorem", "axiom", "paradox", "chronicle", "alchemy",
                    "cipher", "cosmology", "dialectic", "epitome", "schema", "paradigm",
                ]),
            },
        );
        categories.insert(
            Category::Rare,
            CategoryParams {
                word_count: 4,
                cost_range: (1500, 5000),
                glyph_range: (2, 2),
                meaning_pool: owned(&[
                    "transcendence", "apotheosis", "eschatology", "pneuma", "anamnesis",
                    "theurgy", "metempsychosis", "henosis",
                ]),
            },
        );

        Self {
            alphabet_size: 26,
            glyph_retry_limit: 100,
            categories,
            words_per_root: 6,
            root_count: 5,
            root_discovery_threshold: 3,
            root_name_pool: owned(&[
                "kel", "myr", "tho", "van", "zir", "arn", "dru", "fen", "gol", "hes",
            ]),
            text_count: 4,
            text_slot_range: (8, 12),
            text_unlock_thresholds: vec![0, 5, 12, 20],
            text_name_pool: owned(&[
                "The Foundation Tablet",
                "The Builder's Record",
                "The Scholar's Codex",
                "The Hidden Archive",
            ]),
            text_primary_bias: 0.6,
            text_secondary_bias: 0.4,
        }
    }
}

impl LanguageConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Total words across all categories.
    pub fn total_word_count(&self) -> usize {
        self.categories.values().map(|p| p.word_count).sum()
    }

    /// Number of root families actually generated:
    /// `min(root_count, total words / words_per_root)`.
    pub fn family_count(&self) -> usize {
        self.root_count
            .min(self.total_word_count() / self.words_per_root.max(1))
    }

    /// Unlock threshold for the text at `index`, extending arithmetically
    /// past the configured list.
    pub fn unlock_threshold_for(&self, index: usize) -> u32 {
        self.text_unlock_thresholds
            .get(index)
            .copied()
            .unwrap_or(index as u32 * 8)
    }

    /// Display title for the text at `index`, with a numbered fallback past
    /// the configured pool.
    pub fn text_name_for(&self, index: usize) -> String {
        self.text_name_pool
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Text {}", index + 1))
    }

    /// Reject any configuration that cannot produce a well-formed model.
    ///
    /// Everything checked here is a static property of the config; a passing
    /// config can only fail later through cross-category meaning exhaustion.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.alphabet_size == 0 {
            return Err(ConfigError::EmptyAlphabet);
        }

        for (&category, params) in &self.categories {
            let (cost_lo, cost_hi) = params.cost_range;
            if cost_lo > cost_hi {
                return Err(ConfigError::InvertedCostRange {
                    category,
                    lo: cost_lo,
                    hi: cost_hi,
                });
            }
            let (glyph_lo, glyph_hi) = params.glyph_range;
            if glyph_lo == 0 || glyph_lo > glyph_hi {
                return Err(ConfigError::InvalidGlyphRange {
                    category,
                    lo: glyph_lo,
                    hi: glyph_hi,
                });
            }
            if params.meaning_pool.len() < params.word_count {
                return Err(ConfigError::MeaningPoolExhausted {
                    category,
                    needed: params.word_count,
                    available: params.meaning_pool.len(),
                });
            }
        }

        if self.words_per_root == 0 {
            return Err(ConfigError::EmptyRootFamilies);
        }
        let total = self.total_word_count();
        let families = self.family_count();
        if families * self.words_per_root != total {
            return Err(ConfigError::UnevenRootPartition {
                total,
                families,
                size: self.words_per_root,
            });
        }
        if self.root_name_pool.len() < families {
            return Err(ConfigError::RootNamePoolExhausted {
                needed: families,
                available: self.root_name_pool.len(),
            });
        }

        if self.text_count == 0 {
            return Err(ConfigError::NoTexts);
        }
        let (slot_lo, slot_hi) = self.text_slot_range;
        if slot_lo == 0 || slot_lo > slot_hi {
            return Err(ConfigError::InvalidSlotRange {
                lo: slot_lo,
                hi: slot_hi,
            });
        }
        let first = self.unlock_threshold_for(0);
        if first != 0 {
            return Err(ConfigError::NonzeroFirstThreshold { found: first });
        }
        // Check the effective sequence, list plus extension, over the whole
        // text count: a list tail above the arithmetic extension would
        // otherwise regress.
        let mut previous = first;
        for index in 1..self.text_count {
            let current = self.unlock_threshold_for(index);
            if current < previous {
                return Err(ConfigError::ThresholdRegression {
                    index,
                    previous,
                    current,
                });
            }
            previous = current;
        }
        for bias in [self.text_primary_bias, self.text_secondary_bias] {
            if !(0.0..=1.0).contains(&bias) {
                return Err(ConfigError::BiasOutOfRange { value: bias });
            }
        }

        Ok(())
    }
}
