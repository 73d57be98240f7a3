// Candidate ranker
//
// Generates correction candidates for a misspelled lemma by scanning the
// vocabulary and computing the exact Levenshtein distance to every entry.
// Ordering is fully deterministic: ascending distance, then descending
// corpus frequency, then lexicographic. The scan only reads the shared
// immutable lexicon, so independent words can be ranked concurrently.
//
// An optional distance radius skips candidates that cannot make the cut;
// the character-length difference is used as a lower bound before the full
// distance is computed, which never changes the output, only the work.

use quill_core::distance::{length_difference, levenshtein};

use crate::lexicon::Lexicon;

/// A ranked correction candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The suggested vocabulary word.
    pub word: String,
    /// Exact edit distance from the misspelled word.
    pub distance: usize,
    /// Corpus frequency of the suggestion.
    pub frequency: u64,
}

/// Options controlling candidate generation.
#[derive(Debug, Clone)]
pub struct RankerOptions {
    /// Maximum number of candidates to return.
    pub max_suggestions: usize,
    /// Only consider candidates within this edit distance, if set.
    pub max_distance: Option<usize>,
}

impl Default for RankerOptions {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            max_distance: None,
        }
    }
}

/// Rank correction candidates for `word` against the vocabulary.
///
/// Returns at most `max_suggestions` candidates, best first. A word with no
/// surviving candidates gets an empty vector; that is a legitimate "no known
/// correction" outcome, not an error.
pub fn rank(word: &str, lexicon: &Lexicon, options: &RankerOptions) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = Vec::new();

    for (entry, frequency) in lexicon.vocabulary() {
        if let Some(radius) = options.max_distance {
            if length_difference(word, entry) > radius {
                continue;
            }
        }
        let distance = levenshtein(word, entry);
        if options.max_distance.is_some_and(|radius| distance > radius) {
            continue;
        }
        candidates.push(Candidate {
            word: entry.to_string(),
            distance,
            frequency,
        });
    }

    candidates.sort_by(|a, b| {
        a.distance
            .cmp(&b.distance)
            .then(b.frequency.cmp(&a.frequency))
            .then(a.word.cmp(&b.word))
    });
    candidates.truncate(options.max_suggestions);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    fn lexicon(entries: &[(&str, u64)]) -> Lexicon {
        let word_freq: HashMap<String, u64> =
            entries.iter().map(|(w, c)| (w.to_string(), *c)).collect();
        Lexicon::from_parts(word_freq, HashMap::new(), HashMap::new()).unwrap()
    }

    #[test]
    fn orders_by_ascending_distance() {
        // relieve is one substitution away; receive needs two.
        let lexicon = lexicon(&[("receive", 10), ("relieve", 10), ("market", 10)]);
        let ranked = rank("recieve", &lexicon, &RankerOptions::default());
        assert_eq!(ranked[0].word, "relieve");
        assert_eq!(ranked[0].distance, 1);
        assert_eq!(ranked[1].word, "receive");
        assert_eq!(ranked[1].distance, 2);
    }

    #[test]
    fn distance_ties_broken_by_frequency_then_lexicographic() {
        // "cat" vs "bat"/"hat"/"rat": all distance 1 from "aat".
        let lexicon = lexicon(&[("bat", 5), ("hat", 9), ("rat", 5)]);
        let ranked = rank("aat", &lexicon, &RankerOptions::default());
        let words: Vec<&str> = ranked.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, ["hat", "bat", "rat"]);
    }

    #[test]
    fn suggestion_distances_are_monotone() {
        let lexicon = lexicon(&[
            ("move", 3),
            ("moved", 2),
            ("market", 7),
            ("year", 9),
            ("rise", 1),
        ]);
        let ranked = rank("mve", &lexicon, &RankerOptions::default());
        for pair in ranked.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn max_suggestions_caps_the_list() {
        let lexicon = lexicon(&[("aa", 1), ("ab", 1), ("ac", 1), ("ad", 1)]);
        let options = RankerOptions {
            max_suggestions: 2,
            max_distance: None,
        };
        assert_eq!(rank("aa", &lexicon, &options).len(), 2);
    }

    #[test]
    fn radius_filters_but_never_reorders() {
        let lexicon = lexicon(&[("receive", 10), ("relieve", 3), ("zebra", 50)]);
        let unrestricted = rank("recieve", &lexicon, &RankerOptions::default());
        let restricted = rank(
            "recieve",
            &lexicon,
            &RankerOptions {
                max_suggestions: 5,
                max_distance: Some(3),
            },
        );
        // The restricted list is a prefix of the unrestricted one.
        assert_eq!(restricted.len(), 2);
        assert_eq!(
            unrestricted[..2]
                .iter()
                .map(|c| c.word.as_str())
                .collect::<Vec<_>>(),
            restricted.iter().map(|c| c.word.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn no_surviving_candidates_is_empty_not_error() {
        let lexicon = lexicon(&[("bitcoin", 10)]);
        let ranked = rank(
            "xq",
            &lexicon,
            &RankerOptions {
                max_suggestions: 5,
                max_distance: Some(1),
            },
        );
        assert!(ranked.is_empty());
    }

    #[test]
    fn deterministic_across_calls() {
        let lexicon = lexicon(&[("bat", 5), ("hat", 5), ("rat", 5), ("cat", 5)]);
        let a = rank("aat", &lexicon, &RankerOptions::default());
        let b = rank("aat", &lexicon, &RankerOptions::default());
        assert_eq!(a, b);
    }
}
