// Part-of-speech tagging module
//
// The pipeline only needs a coarse verb / non-verb decision to pick the
// lemmatization strategy, so the tagging contract is deliberately small:
// given a token sequence, return one tag per token. The default
// implementation is a deterministic rule tagger over closed-class word
// lists and suffix heuristics; anything smarter can be plugged in through
// the `PosTagger` trait.

use quill_core::token::PosTag;

/// Trait for part-of-speech taggers.
///
/// Implementations must return exactly one tag per input word, aligned by
/// position. Tokens the tagger cannot classify get `PosTag::Unknown`, which
/// downstream stages treat as a non-verb.
pub trait PosTagger {
    /// Tag a sequence of lowercased word tokens.
    fn tag(&self, words: &[String]) -> Vec<PosTag>;
}

// ---------------------------------------------------------------------------
// RuleTagger
// ---------------------------------------------------------------------------

const AUX_AND_COPULA: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "has", "have", "had",
];

const MODALS: &[&str] = &[
    "will", "would", "can", "could", "shall", "should", "may", "might", "must",
];

const DETERMINERS: &[&str] = &["a", "an", "the", "this", "that", "these", "those"];

const PREPOSITIONS: &[&str] = &["of", "in", "on", "at", "for", "to", "with", "by", "from"];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "so", "yet"];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
];

/// Deterministic rule-based tagger.
///
/// Closed-class words are tagged from fixed lists; open-class words fall
/// back to suffix and context heuristics ("-ing"/"-ed" endings, a preceding
/// "to" or modal). Everything else is a noun. The output depends only on
/// the input sequence, so repeated calls are always identical.
#[derive(Debug, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    fn tag_word(&self, word: &str, prev: Option<&str>) -> PosTag {
        if AUX_AND_COPULA.contains(&word) || MODALS.contains(&word) {
            return PosTag::Verb;
        }
        if DETERMINERS.contains(&word) {
            return PosTag::Determiner;
        }
        if PREPOSITIONS.contains(&word) {
            return PosTag::Preposition;
        }
        if CONJUNCTIONS.contains(&word) {
            return PosTag::Conjunction;
        }
        if PRONOUNS.contains(&word) {
            return PosTag::Pronoun;
        }
        if word == "not" {
            return PosTag::Adverb;
        }

        // Context: infinitive marker or modal forces a verb reading.
        if let Some(prev) = prev {
            if prev == "to" || MODALS.contains(&prev) {
                return PosTag::Verb;
            }
        }

        // Suffix heuristics.
        let len = word.chars().count();
        if len > 4 && (word.ends_with("ing") || word.ends_with("ed")) {
            return PosTag::Verb;
        }
        if len > 3 && word.ends_with("ly") {
            return PosTag::Adverb;
        }

        PosTag::Noun
    }
}

impl PosTagger for RuleTagger {
    fn tag(&self, words: &[String]) -> Vec<PosTag> {
        let mut tags = Vec::with_capacity(words.len());
        for (i, word) in words.iter().enumerate() {
            let prev = if i > 0 { Some(words[i - 1].as_str()) } else { None };
            tags.push(self.tag_word(word, prev));
        }
        tags
    }
}
