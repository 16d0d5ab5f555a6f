// Configuration errors.
//
// Every failure mode of the generator is a static property of the
// `LanguageConfig`, not a runtime condition — generation itself is a pure
// function with bounded loops. `validate()` catches most of these before a
// single draw is made; `MeaningPoolExhausted` can also surface mid-pipeline,
// because cross-category deduplication may shrink a pool that looked large
// enough on its own.

use crate::types::Category;
use thiserror::Error;

/// A configuration that cannot produce a well-formed language model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("category '{category}' needs {needed} unique meanings but only {available} are available")]
    MeaningPoolExhausted {
        category: Category,
        needed: usize,
        available: usize,
    },

    #[error("alphabet size must be at least 1")]
    EmptyAlphabet,

    #[error("category '{category}' has an inverted cost range ({lo}, {hi})")]
    InvertedCostRange { category: Category, lo: u32, hi: u32 },

    #[error("category '{category}' has an invalid glyph range ({lo}, {hi}); lengths start at 1")]
    InvalidGlyphRange {
        category: Category,
        lo: usize,
        hi: usize,
    },

    #[error("words_per_root must be at least 1")]
    EmptyRootFamilies,

    #[error("{total} words cannot be covered by {families} root families of {size}")]
    UnevenRootPartition {
        total: usize,
        families: usize,
        size: usize,
    },

    #[error("root name pool holds {available} names but {needed} families need one each")]
    RootNamePoolExhausted { needed: usize, available: usize },

    #[error("text count must be at least 1")]
    NoTexts,

    #[error("text slot range ({lo}, {hi}) is invalid; slots per text start at 1")]
    InvalidSlotRange { lo: usize, hi: usize },

    #[error("the first text must unlock at threshold 0, not {found}")]
    NonzeroFirstThreshold { found: u32 },

    #[error("unlock threshold regresses at text {index}: {current} after {previous}")]
    ThresholdRegression {
        index: usize,
        previous: u32,
        current: u32,
    },

    #[error("category bias {value} is outside [0, 1]")]
    BiasOutOfRange { value: f64 },
}
