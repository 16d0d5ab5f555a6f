// Text composer — the third pipeline stage.
//
// Builds the configured number of texts as ordered word-slot sequences.
// Each text cycles through the categories and biases its slot draws toward
// its own category: strongly for the first text (the player's opening
// material should feel thematically coherent), more loosely afterward so
// later texts spread across the vocabulary.
//
// Slot draws fall back to the complementary pool when the preferred one is
// empty, and to the full inventory when both are — the last case only
// arises for degenerate configurations, but composing must never dead-end.
//
// Unlock thresholds and display titles come from the config's position
// tables; `validate()` has already proven the effective threshold sequence
// ascends from zero.

use crate::config::LanguageConfig;
use crate::types::{Category, Text, TextId, Word, WordId};
use ashglyph_prng::LangRng;

/// Compose all texts in unlock order.
pub(crate) fn compose_texts(
    config: &LanguageConfig,
    rng: &mut LangRng,
    words: &[Word],
) -> Vec<Text> {
    let mut texts = Vec::with_capacity(config.text_count);
    let (slot_lo, slot_hi) = config.text_slot_range;

    for text_index in 0..config.text_count {
        let category = Category::ALL[text_index % Category::ALL.len()];
        let slot_count = rng.range_usize_inclusive(slot_lo, slot_hi);
        let bias = if text_index == 0 {
            config.text_primary_bias
        } else {
            config.text_secondary_bias
        };

        let preferred: Vec<&Word> = words.iter().filter(|w| w.category == category).collect();
        let others: Vec<&Word> = words.iter().filter(|w| w.category != category).collect();

        let mut word_ids: Vec<WordId> = Vec::with_capacity(slot_count);
        for _ in 0..slot_count {
            let choice = if !preferred.is_empty() && (rng.chance(bias) || others.is_empty()) {
                rng.pick(&preferred).id
            } else if !others.is_empty() {
                rng.pick(&others).id
            } else {
                rng.pick(words).id
            };
            word_ids.push(choice);
        }

        texts.push(Text {
            id: TextId(text_index as u32),
            display_name: config.text_name_for(text_index),
            word_ids,
            category,
            unlock_threshold: config.unlock_threshold_for(text_index),
        });
    }

    texts
}
