// Core language entities: identifiers, categories, words, roots, and texts.
//
// All three entity types are immutable values. Nothing here carries interior
// mutability or setters — any structural change during generation (stamping
// a word's root family, swapping a text slot during coverage repair) builds
// a replacement value via the `with_*` constructors and overwrites the old
// value at the same collection slot. No stale copy survives a replacement.
//
// Identifiers are sequential newtypes, assigned in creation order by the
// pipeline. Their `Display` forms ("word_07", "root_02", "text_01") are the
// stable names the save format and the UI layer refer to.
//
// **Critical constraint: determinism.** These types are keyed into `BTreeMap`
// collections and sorted lists; every derive below that feeds ordering
// (`Ord` on ids and `Category`) is part of the generation contract.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

// ---------------------------------------------------------------------------
// Entity identifiers
// ---------------------------------------------------------------------------

// Custom serde: ids serialize as their display form ("word_07") so they can
// key JSON maps (serde_json requires string keys) and match the names the
// save format uses.
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "_{:02}"), self.0)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.strip_prefix(concat!($prefix, "_"))
                    .and_then(|digits| digits.parse::<u32>().ok())
                    .map($name)
                    .ok_or_else(|| {
                        serde::de::Error::custom(concat!(
                            "expected an id of the form ",
                            $prefix,
                            "_NN"
                        ))
                    })
            }
        }
    };
}

entity_id!(/// Identifier of a word, sequential in creation order.
WordId, "word");
entity_id!(/// Identifier of a root family, sequential in partition order.
RootId, "root");
entity_id!(/// Identifier of a text, sequential in composition order.
TextId, "text");

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Vocabulary category. Declaration order is processing order — the word
/// factory walks categories in this order, and texts cycle through it.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Concrete everyday nouns — the cheapest words, unlocked first.
    Common,
    /// Verbs of daily life and craft.
    Everyday,
    /// Scholarly vocabulary.
    Academic,
    /// The most expensive, late-game words.
    Rare,
}

impl Category {
    /// All categories in declaration (processing) order.
    pub const ALL: [Category; 4] = [
        Category::Common,
        Category::Everyday,
        Category::Academic,
        Category::Rare,
    ];

    /// Lowercase name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Category::Common => "common",
            Category::Everyday => "everyday",
            Category::Academic => "academic",
            Category::Rare => "rare",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A single word of the lost language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub id: WordId,
    /// Root family this word belongs to. `None` only transiently inside the
    /// pipeline, before the partitioner stamps families; every word in a
    /// finished model carries `Some`.
    pub root_id: Option<RootId>,
    /// Ordered glyph indices into the game's generated alphabet. Kept inline:
    /// one or two glyphs per word under the shipped balance.
    pub glyph_indices: SmallVec<[u8; 4]>,
    /// English translation, globally unique across the model.
    pub meaning: String,
    pub category: Category,
    /// Purchase cost in Insight before any root discount.
    pub base_cost: u32,
}

impl Word {
    /// Replacement value with the root family stamped. The returned word is
    /// identical in every other field.
    pub fn with_root(&self, root_id: RootId) -> Word {
        Word {
            root_id: Some(root_id),
            ..self.clone()
        }
    }
}

/// A root family: a fixed-size group of words sharing a morphological stem,
/// granting a discount once enough members are translated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Root {
    pub id: RootId,
    /// Short stem name, e.g. "kel".
    pub display_name: String,
    /// Member words in partition order.
    pub word_ids: Vec<WordId>,
    /// Translated members needed before the family counts as discovered.
    pub discovery_threshold: u32,
}

/// A composite text: an ordered sequence of word slots, repeats allowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Text {
    pub id: TextId,
    pub display_name: String,
    /// Word slots in reading order. The same id may fill several slots.
    pub word_ids: Vec<WordId>,
    /// Category the slot selection is biased toward.
    pub category: Category,
    /// Total translated-word count required to unlock this text.
    pub unlock_threshold: u32,
}

impl Text {
    /// Replacement value with new slot contents, used by coverage repair.
    /// Identity, name, category, and threshold are unchanged.
    pub fn with_word_ids(&self, word_ids: Vec<WordId>) -> Text {
        Text {
            word_ids,
            ..self.clone()
        }
    }
}
