// Lemmatizer
//
// Reduces tagged word tokens to their base forms:
//   - auxiliary verbs keep their surface form (the surface IS the lemma,
//     so the grammar rules can match "is"/"has"/... directly);
//   - verb-tagged tokens get verb lemmatization (irregular table first,
//     then suffix stripping);
//   - everything else, including Unknown tags, gets default noun
//     lemmatization (plural stripping).

use quill_core::token::{PosTag, Token};

use crate::tables::LinguisticTables;

/// Lemmatize tagged words into tokens. `words` and `tags` are aligned by
/// position; output order matches input order one-to-one.
pub fn lemmatize(words: &[String], tags: &[PosTag], tables: &LinguisticTables) -> Vec<Token> {
    debug_assert_eq!(words.len(), tags.len());

    words
        .iter()
        .zip(tags.iter())
        .map(|(word, &tag)| {
            let lemma = if tables.is_aux(word) {
                word.clone()
            } else if tag.is_verb() {
                verb_lemma(word, tables)
            } else {
                noun_lemma(word)
            };
            Token::with_lemma(word.clone(), lemma, tag)
        })
        .collect()
}

/// Reduce a verb form to its base form.
fn verb_lemma(word: &str, tables: &LinguisticTables) -> String {
    if let Some(base) = tables.irregular_verb_lemma(word) {
        return base.to_string();
    }

    let len = word.chars().count();

    // studies -> study, studied -> study
    if len > 4 && (word.ends_with("ies") || word.ends_with("ied")) {
        return format!("{}y", &word[..word.len() - 3]);
    }
    // walking -> walk, stopping -> stop
    if len > 5 && word.ends_with("ing") {
        return undouble(&word[..word.len() - 3]);
    }
    // walked -> walk, stopped -> stop
    if len > 4 && word.ends_with("ed") {
        return undouble(&word[..word.len() - 2]);
    }
    // goes -> go, watches -> watch, misses -> miss
    if len > 3 && has_es_suffix(word) {
        return word[..word.len() - 2].to_string();
    }
    // moves -> move, walks -> walk
    if len > 3 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

/// Reduce a noun to its singular form.
fn noun_lemma(word: &str) -> String {
    let len = word.chars().count();

    // cities -> city
    if len > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    // boxes -> box, churches -> church
    if len > 3 && has_es_suffix(word) {
        return word[..word.len() - 2].to_string();
    }
    // years -> year
    if len > 3 && word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
        return word[..word.len() - 1].to_string();
    }

    word.to_string()
}

/// Whether the word carries an "-es" suffix added to a sibilant or "o" stem,
/// where stripping the whole "es" recovers the base.
fn has_es_suffix(word: &str) -> bool {
    word.ends_with("oes")
        || word.ends_with("ches")
        || word.ends_with("shes")
        || word.ends_with("sses")
        || word.ends_with("xes")
        || word.ends_with("zes")
}

/// Drop one letter of a doubled final consonant ("stopp" -> "stop").
fn undouble(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 {
        let last = chars[chars.len() - 1];
        let prev = chars[chars.len() - 2];
        if last == prev && !"aeiou".contains(last) {
            return chars[..chars.len() - 1].iter().collect();
        }
    }
    stem.to_string()
}
