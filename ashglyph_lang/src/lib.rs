// Ashglyph language generation — pure data layer, no engine dependency.
//
// Builds the complete "lost language" at the heart of Ashglyph from a single
// integer seed: a closed word inventory, root families with discovery
// thresholds, and composite texts with unlock gating. The incremental-game
// runtime turns the result into purchasable elements and income sources; the
// rendering layer rasterizes glyph indices against a generated alphabet;
// the save system persists the seed plus play progress and regenerates the
// rest. None of those live here — this crate produces a self-consistent,
// queryable, immutable data structure and nothing else.
//
// Module overview:
// - `config.rs`: `LanguageConfig` — every balance knob, meaning/name pools,
//   fail-fast validation.
// - `types.rs`:  `Word` / `Root` / `Text` values and their id newtypes.
// - `words.rs`:  stage 1 — the word factory (meanings, costs, glyphs).
// - `roots.rs`:  stage 2 — partition into fixed-size root families.
// - `texts.rs`:  stage 3 — category-biased text composition.
// - `repair.rs`: stage 4 — orphan coverage repair over the composed texts.
// - `model.rs`:  `LanguageModel` aggregate, queries, generation warnings.
// - `error.rs`:  `ConfigError` — descriptive configuration failures.
//
// **Critical constraint: determinism.** Generation is a pure function of
// `(seed, config)`. All five stages draw from one `LangRng` in a fixed,
// non-reentrant order — word meanings, word glyphs, the partition shuffle,
// text slot draws, then the orphan-queue shuffle. Reordering any draw
// against the same seed changes every downstream value, so the order itself
// is part of the save-compatibility contract. No `HashMap`, no system time,
// no OS entropy; `BTreeMap` everywhere an order can leak.

pub mod config;
pub mod error;
pub mod model;
pub mod types;

mod repair;
mod roots;
mod texts;
mod words;

pub use config::{DEFAULT_SEED, CategoryParams, LanguageConfig};
pub use error::ConfigError;
pub use model::{GenerationWarning, LanguageModel};
pub use types::{Category, Root, RootId, Text, TextId, Word, WordId};

use ashglyph_prng::LangRng;

/// Generate a complete language from a seed under the shipped balance.
///
/// Identical seeds produce structurally identical models — same ids, same
/// field values, same list orders — which is what lets the save format store
/// nothing but the seed and the player's progress.
pub fn generate(seed: u64) -> Result<LanguageModel, ConfigError> {
    generate_with(seed, &LanguageConfig::default())
}

/// Generate a complete language from a seed and an explicit configuration.
///
/// The configuration is validated first; generation after a passing
/// `validate()` can only fail through cross-category meaning exhaustion.
pub fn generate_with(seed: u64, config: &LanguageConfig) -> Result<LanguageModel, ConfigError> {
    config.validate()?;

    let mut rng = LangRng::new(seed);
    let mut warnings = Vec::new();

    let mut words = words::build_words(config, &mut rng, &mut warnings)?;
    let roots = roots::partition_roots(config, &mut rng, &mut words);
    let mut texts = texts::compose_texts(config, &mut rng, &words);
    repair::repair_coverage(&mut rng, &words, &mut texts, &mut warnings);

    Ok(model::assemble(seed, words, roots, texts, warnings))
}
