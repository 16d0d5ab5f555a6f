// The immutable language aggregate.
//
// `LanguageModel` owns every generated entity twice over: an id-keyed
// `BTreeMap` for O(log n) lookup and a stable-ordered list per entity type
// for deterministic iteration and display. Both views are populated together
// during assembly and never mutated afterward — the fields are private and
// no method hands out `&mut`, so a model can be shared freely as the
// read-only substrate the save system replays progress against.
//
// Orders: the word list ascends by base cost (purchase order in the UI),
// root and text lists follow their sequential ids. A root's `word_ids`
// keeps partition order instead — two independent views over the same
// entities, deliberately not required to agree.
//
// Best-effort degradations during generation land here as
// `GenerationWarning` values rather than log lines, following the
// typed-events-as-output convention used across this project.

use crate::types::{Root, RootId, Text, TextId, Word, WordId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// A deliberate best-effort compromise made during generation. Warnings are
/// part of the model so callers can detect invariant softening without a
/// logging subscriber.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationWarning {
    /// This word's glyph sequence duplicates an earlier word's: every redraw
    /// attempt collided. The meaning remains unique; only the written form
    /// is ambiguous.
    GlyphCollision { word: WordId },
    /// These words are referenced by no text: the configuration offers fewer
    /// substitution slots than orphans. Ids ascend.
    ResidualOrphans { word_ids: Vec<WordId> },
}

/// Complete generated language: words, root families, texts, and the seed
/// that reproduces all of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageModel {
    seed: u64,
    words: BTreeMap<WordId, Word>,
    roots: BTreeMap<RootId, Root>,
    texts: BTreeMap<TextId, Text>,
    word_list: Vec<Word>,
    root_list: Vec<Root>,
    text_list: Vec<Text>,
    warnings: Vec<GenerationWarning>,
}

/// Build the aggregate from the pipeline's finished stages. The lists keep
/// the orders the stages established; the maps are derived from them.
pub(crate) fn assemble(
    seed: u64,
    words: Vec<Word>,
    roots: Vec<Root>,
    texts: Vec<Text>,
    warnings: Vec<GenerationWarning>,
) -> LanguageModel {
    LanguageModel {
        seed,
        words: words.iter().map(|w| (w.id, w.clone())).collect(),
        roots: roots.iter().map(|r| (r.id, r.clone())).collect(),
        texts: texts.iter().map(|t| (t.id, t.clone())).collect(),
        word_list: words,
        root_list: roots,
        text_list: texts,
        warnings,
    }
}

impl LanguageModel {
    /// The seed this model regenerates from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// All words, ascending by base cost.
    pub fn word_list(&self) -> &[Word] {
        &self.word_list
    }

    /// All root families, in partition order.
    pub fn root_list(&self) -> &[Root] {
        &self.root_list
    }

    /// All texts, in unlock order.
    pub fn text_list(&self) -> &[Text] {
        &self.text_list
    }

    /// Compromises recorded during generation; empty under sane balances.
    pub fn warnings(&self) -> &[GenerationWarning] {
        &self.warnings
    }

    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words.get(&id)
    }

    pub fn root(&self, id: RootId) -> Option<&Root> {
        self.roots.get(&id)
    }

    pub fn text(&self, id: TextId) -> Option<&Text> {
        self.texts.get(&id)
    }

    /// Member words of a root family, in family (partition) order.
    pub fn words_for_root(&self, root_id: RootId) -> Option<Vec<&Word>> {
        let root = self.roots.get(&root_id)?;
        Some(
            root.word_ids
                .iter()
                .filter_map(|id| self.words.get(id))
                .collect(),
        )
    }

    /// Distinct words referenced by a text, in first-occurrence order.
    pub fn unique_words_in_text(&self, text_id: TextId) -> Option<Vec<&Word>> {
        let text = self.texts.get(&text_id)?;
        let mut seen: BTreeSet<WordId> = BTreeSet::new();
        Some(
            text.word_ids
                .iter()
                .filter(|id| seen.insert(**id))
                .filter_map(|id| self.words.get(id))
                .collect(),
        )
    }

    /// Every text whose slots reference the word, in unlock order. The
    /// runtime layer derives passive-income sources from this.
    pub fn texts_containing_word(&self, word_id: WordId) -> Vec<&Text> {
        self.text_list
            .iter()
            .filter(|text| text.word_ids.contains(&word_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;
    use smallvec::smallvec;

    fn tiny_model() -> LanguageModel {
        let words = vec![
            Word {
                id: WordId(0),
                root_id: Some(RootId(0)),
                glyph_indices: smallvec![4],
                meaning: "water".to_string(),
                category: Category::Common,
                base_cost: 10,
            },
            Word {
                id: WordId(1),
                root_id: Some(RootId(0)),
                glyph_indices: smallvec![9, 2],
                meaning: "gather".to_string(),
                category: Category::Everyday,
                base_cost: 50,
            },
        ];
        let roots = vec![Root {
            id: RootId(0),
            display_name: "kel".to_string(),
            word_ids: vec![WordId(1), WordId(0)],
            discovery_threshold: 1,
        }];
        let texts = vec![Text {
            id: TextId(0),
            display_name: "The Foundation Tablet".to_string(),
            word_ids: vec![WordId(0), WordId(1), WordId(0)],
            category: Category::Common,
            unlock_threshold: 0,
        }];
        assemble(7, words, roots, texts, Vec::new())
    }

    #[test]
    fn lookups_agree_with_lists() {
        let model = tiny_model();
        assert_eq!(model.seed(), 7);
        for word in model.word_list() {
            assert_eq!(model.word(word.id), Some(word));
        }
        for root in model.root_list() {
            assert_eq!(model.root(root.id), Some(root));
        }
        for text in model.text_list() {
            assert_eq!(model.text(text.id), Some(text));
        }
        assert_eq!(model.word(WordId(99)), None);
    }

    #[test]
    fn words_for_root_keeps_family_order() {
        let model = tiny_model();
        let members = model.words_for_root(RootId(0)).unwrap();
        let ids: Vec<WordId> = members.iter().map(|w| w.id).collect();
        // Family order, not cost order.
        assert_eq!(ids, vec![WordId(1), WordId(0)]);
        assert!(model.words_for_root(RootId(5)).is_none());
    }

    #[test]
    fn unique_words_in_text_deduplicates_in_order() {
        let model = tiny_model();
        let unique = model.unique_words_in_text(TextId(0)).unwrap();
        let ids: Vec<WordId> = unique.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![WordId(0), WordId(1)]);
        assert!(model.unique_words_in_text(TextId(3)).is_none());
    }

    #[test]
    fn texts_containing_word_scans_all_texts() {
        let model = tiny_model();
        assert_eq!(model.texts_containing_word(WordId(0)).len(), 1);
        assert_eq!(model.texts_containing_word(WordId(99)).len(), 0);
    }

    #[test]
    fn model_serde_roundtrip() {
        let model = tiny_model();
        let json = serde_json::to_string(&model).unwrap();
        let restored: LanguageModel = serde_json::from_str(&json).unwrap();
        assert_eq!(model, restored);
    }
}
