// Word factory — the first pipeline stage.
//
// Builds the full word inventory category by category: shuffles each
// category's meaning pool, claims meanings no earlier category took, spreads
// base costs linearly across the category's cost interval, and draws glyph
// sequences with a bounded redraw loop that chases global uniqueness.
//
// Draw order per category: one pool shuffle, then per word a glyph length
// followed by the glyph indices (redrawn wholesale on collision). This order
// is part of the generation contract — the partitioner's shuffle and every
// later stage read the stream where this stage leaves it.
//
// A sequence still colliding after `glyph_retry_limit` redraws is accepted
// and reported as `GenerationWarning::GlyphCollision` rather than silently
// kept; the model's uniqueness invariant is otherwise absolute.

use crate::config::LanguageConfig;
use crate::error::ConfigError;
use crate::model::GenerationWarning;
use crate::types::{Word, WordId};
use ashglyph_prng::LangRng;
use smallvec::SmallVec;
use std::collections::BTreeSet;

/// Generate the complete word inventory in creation order.
pub(crate) fn build_words(
    config: &LanguageConfig,
    rng: &mut LangRng,
    warnings: &mut Vec<GenerationWarning>,
) -> Result<Vec<Word>, ConfigError> {
    let mut words: Vec<Word> = Vec::with_capacity(config.total_word_count());
    let mut used_meanings: BTreeSet<String> = BTreeSet::new();
    let mut used_glyphs: BTreeSet<SmallVec<[u8; 4]>> = BTreeSet::new();
    let mut next_id = 0u32;

    for (&category, params) in &config.categories {
        let mut pool = params.meaning_pool.clone();
        rng.shuffle(&mut pool);

        // Claim the first `word_count` meanings not already taken by an
        // earlier category.
        let mut selection: Vec<String> = Vec::with_capacity(params.word_count);
        for meaning in pool {
            if !used_meanings.contains(&meaning) {
                selection.push(meaning);
            }
            if selection.len() == params.word_count {
                break;
            }
        }
        if selection.len() < params.word_count {
            return Err(ConfigError::MeaningPoolExhausted {
                category,
                needed: params.word_count,
                available: selection.len(),
            });
        }

        let (cost_lo, cost_hi) = params.cost_range;
        let (glyph_lo, glyph_hi) = params.glyph_range;

        for (position, meaning) in selection.into_iter().enumerate() {
            used_meanings.insert(meaning.clone());

            let base_cost = interpolate_cost(cost_lo, cost_hi, position, params.word_count);

            // The length is drawn once; collisions redraw the indices only.
            let glyph_count = rng.range_usize_inclusive(glyph_lo, glyph_hi);
            let mut glyphs = draw_sequence(rng, glyph_count, config.alphabet_size);
            let mut attempts = 1;
            while used_glyphs.contains(&glyphs) && attempts < config.glyph_retry_limit {
                glyphs = draw_sequence(rng, glyph_count, config.alphabet_size);
                attempts += 1;
            }

            let id = WordId(next_id);
            next_id += 1;

            if used_glyphs.contains(&glyphs) {
                warnings.push(GenerationWarning::GlyphCollision { word: id });
            }
            used_glyphs.insert(glyphs.clone());

            words.push(Word {
                id,
                root_id: None,
                glyph_indices: glyphs,
                meaning,
                category,
                base_cost,
            });
        }
    }

    Ok(words)
}

/// Linear interpolation across the cost interval by selection position,
/// truncated to an integer. A single-word category sits at the midpoint.
fn interpolate_cost(lo: u32, hi: u32, position: usize, count: usize) -> u32 {
    let t = if count > 1 {
        position as f64 / (count - 1) as f64
    } else {
        0.5
    };
    (lo as f64 + t * (hi - lo) as f64) as u32
}

fn draw_sequence(rng: &mut LangRng, length: usize, alphabet_size: u8) -> SmallVec<[u8; 4]> {
    (0..length)
        .map(|_| rng.range_usize(0, alphabet_size as usize) as u8)
        .collect()
}
