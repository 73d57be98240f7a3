// Spelling detector
//
// Flags lemmas that are absent from the vocabulary, excluding function
// words and auxiliary verbs by construction. Duplicates are reported once,
// keeping first-occurrence order so results are deterministic for a given
// input. The detector only reads shared immutable tables.

use hashbrown::HashSet;

use crate::lexicon::Lexicon;
use crate::tables::LinguisticTables;

/// Return the lemmas considered misspelled, deduplicated in first-occurrence
/// order.
pub fn detect(lemmas: &[String], lexicon: &Lexicon, tables: &LinguisticTables) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut flagged = Vec::new();

    for lemma in lemmas {
        if lexicon.contains(lemma) || tables.is_function_word(lemma) || tables.is_aux(lemma) {
            continue;
        }
        if seen.insert(lemma.as_str()) {
            flagged.push(lemma.clone());
        }
    }

    flagged
}
