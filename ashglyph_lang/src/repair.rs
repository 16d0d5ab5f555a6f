// Coverage repair — the fourth pipeline stage.
//
// The composer draws slots at random, so some words may end up referenced by
// no text at all ("orphans"). Orphans are dead inventory: the player could
// buy them but never see them in a passage. This stage trades redundant
// references for missing coverage in two bounded passes:
//
// - Pass 1: inside each text, slots repeating an id already present earlier
//   in the same text are free — substituting an orphan there never removes
//   the text's last reference to anything.
// - Pass 2: ids referenced by more than one distinct text are donors; one
//   of their occurrences may be given to an orphan, never dropping a donor
//   below a single referencing text.
//
// The repair never creates a new orphan. It also cannot promise full
// coverage when the configuration offers fewer total slots than words —
// leftovers are reported as `GenerationWarning::ResidualOrphans`. Under the
// shipped balance total slots always exceed the word count, and the two
// passes then provably cover everything.
//
// Texts are immutable: every accepted substitution builds a replacement
// `Text` at the same list slot.

use crate::model::GenerationWarning;
use crate::types::{Text, Word, WordId};
use ashglyph_prng::LangRng;
use std::collections::{BTreeMap, BTreeSet};

/// Substitute orphaned words into redundant text slots, in place.
pub(crate) fn repair_coverage(
    rng: &mut LangRng,
    words: &[Word],
    texts: &mut [Text],
    warnings: &mut Vec<GenerationWarning>,
) {
    let referenced: BTreeSet<WordId> = texts
        .iter()
        .flat_map(|text| text.word_ids.iter().copied())
        .collect();

    // Orphans start in canonical word order, then take a fixed-but-arbitrary
    // processing order from the shared stream. `pop` consumes from the back.
    let mut queue: Vec<WordId> = words
        .iter()
        .map(|word| word.id)
        .filter(|id| !referenced.contains(id))
        .collect();
    if queue.is_empty() {
        return;
    }
    rng.shuffle(&mut queue);

    // Pass 1: intra-text duplicates are free slots.
    for text in texts.iter_mut() {
        if queue.is_empty() {
            break;
        }
        let mut word_ids = text.word_ids.clone();
        let mut seen: BTreeSet<WordId> = BTreeSet::new();
        let mut changed = false;
        for slot in 0..word_ids.len() {
            if !seen.insert(word_ids[slot]) {
                let Some(orphan) = queue.pop() else { break };
                word_ids[slot] = orphan;
                changed = true;
            }
        }
        if changed {
            *text = text.with_word_ids(word_ids);
        }
    }

    // Pass 2: cross-text duplicates donate one occurrence each.
    if !queue.is_empty() {
        let mut referencing_texts: BTreeMap<WordId, usize> = BTreeMap::new();
        for text in texts.iter() {
            let distinct: BTreeSet<WordId> = text.word_ids.iter().copied().collect();
            for id in distinct {
                *referencing_texts.entry(id).or_insert(0) += 1;
            }
        }

        for text in texts.iter_mut() {
            if queue.is_empty() {
                break;
            }
            let mut word_ids = text.word_ids.clone();
            let mut changed = false;
            for slot in 0..word_ids.len() {
                let donor = word_ids[slot];
                if referencing_texts.get(&donor).copied().unwrap_or(0) > 1 {
                    let Some(orphan) = queue.pop() else { break };
                    if let Some(count) = referencing_texts.get_mut(&donor) {
                        *count -= 1;
                    }
                    *referencing_texts.entry(orphan).or_insert(0) += 1;
                    word_ids[slot] = orphan;
                    changed = true;
                }
            }
            if changed {
                *text = text.with_word_ids(word_ids);
            }
        }
    }

    if !queue.is_empty() {
        queue.sort_unstable();
        warnings.push(GenerationWarning::ResidualOrphans { word_ids: queue });
    }
}
