// Fixed linguistic tables: auxiliary verbs, function words, participle forms.
//
// These are small closed-class mappings, constant for the process lifetime.
// They are built once into hash tables and passed as read-only dependencies
// into the pipeline stages; nothing here is global or mutable.

use hashbrown::{HashMap, HashSet};

/// Forms of "be" that trigger the progressive rewrite (Rule A).
const BE_FORMS: &[&str] = &["am", "is", "are", "was", "were"];

/// Forms of "have" that trigger the perfect rewrite (Rule B).
const HAVE_FORMS: &[&str] = &["has", "have", "had"];

/// Closed-class words exempt from spelling-error flagging.
const FUNCTION_WORDS: &[&str] = &[
    "this", "that", "a", "an", "the", "and", "or", "of", "in", "on", "for",
    "to", "with", "by", "at",
];

/// Base verb to present participle ("-ing" form), used after forms of "be".
const PRESENT_PARTICIPLES: &[(&str, &str)] = &[
    ("be", "being"),
    ("have", "having"),
    ("do", "doing"),
    ("go", "going"),
    ("rise", "rising"),
    ("come", "coming"),
    ("happen", "happening"),
    ("move", "moving"),
    ("determine", "determining"),
    ("use", "using"),
];

/// Base verb to past participle, used after forms of "have". Verbs missing
/// from this table fall back to their lemma unchanged.
const PAST_PARTICIPLES: &[(&str, &str)] = &[
    ("move", "moved"),
    ("go", "gone"),
    ("come", "come"),
    ("rise", "risen"),
    ("be", "been"),
    ("have", "had"),
    ("do", "done"),
];

/// Irregular inflected forms that the suffix rules of the lemmatizer cannot
/// recover. Mostly the inversions of the participle tables, plus a handful
/// of common irregular pasts.
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[("went", "go"), ("did", "do"), ("gave", "give")];

/// The fixed linguistic tables, built once at startup.
pub struct LinguisticTables {
    aux_verbs: HashSet<&'static str>,
    be_forms: HashSet<&'static str>,
    have_forms: HashSet<&'static str>,
    function_words: HashSet<&'static str>,
    present_participles: HashMap<&'static str, &'static str>,
    past_participles: HashMap<&'static str, &'static str>,
    /// Inflected form -> base form, for verb lemmatization.
    verb_lemmas: HashMap<&'static str, &'static str>,
}

impl LinguisticTables {
    pub fn new() -> Self {
        let be_forms: HashSet<_> = BE_FORMS.iter().copied().collect();
        let have_forms: HashSet<_> = HAVE_FORMS.iter().copied().collect();
        let aux_verbs: HashSet<_> = be_forms.union(&have_forms).copied().collect();
        let function_words: HashSet<_> = FUNCTION_WORDS.iter().copied().collect();
        let present_participles: HashMap<_, _> = PRESENT_PARTICIPLES.iter().copied().collect();
        let past_participles: HashMap<_, _> = PAST_PARTICIPLES.iter().copied().collect();

        // Invert both participle tables so the lemmatizer can undo them.
        let mut verb_lemmas: HashMap<&'static str, &'static str> = HashMap::new();
        for &(base, inflected) in PRESENT_PARTICIPLES.iter().chain(PAST_PARTICIPLES) {
            verb_lemmas.insert(inflected, base);
        }
        for &(inflected, base) in IRREGULAR_LEMMAS {
            verb_lemmas.insert(inflected, base);
        }

        Self {
            aux_verbs,
            be_forms,
            have_forms,
            function_words,
            present_participles,
            past_participles,
            verb_lemmas,
        }
    }

    /// Whether `word` is an auxiliary verb (a form of "be" or "have").
    pub fn is_aux(&self, word: &str) -> bool {
        self.aux_verbs.contains(word)
    }

    /// Whether `word` is a form of "be" that starts a progressive rewrite.
    pub fn is_be_form(&self, word: &str) -> bool {
        self.be_forms.contains(word)
    }

    /// Whether `word` is a form of "have" that starts a perfect rewrite.
    pub fn is_have_form(&self, word: &str) -> bool {
        self.have_forms.contains(word)
    }

    /// Whether `word` is a closed-class function word.
    pub fn is_function_word(&self, word: &str) -> bool {
        self.function_words.contains(word)
    }

    /// Present participle for `lemma`, if one is registered.
    pub fn present_participle(&self, lemma: &str) -> Option<&'static str> {
        self.present_participles.get(lemma).copied()
    }

    /// Past participle for `lemma`, if one is registered.
    pub fn past_participle(&self, lemma: &str) -> Option<&'static str> {
        self.past_participles.get(lemma).copied()
    }

    /// Base form for an irregularly inflected verb, if one is registered.
    pub fn irregular_verb_lemma(&self, word: &str) -> Option<&'static str> {
        self.verb_lemmas.get(word).copied()
    }
}

impl Default for LinguisticTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aux_set_is_union_of_be_and_have_forms() {
        let tables = LinguisticTables::new();
        for word in ["am", "is", "are", "was", "were", "has", "have", "had"] {
            assert!(tables.is_aux(word), "{word} should be an aux verb");
        }
        assert!(!tables.is_aux("be"));
        assert!(!tables.is_aux("bitcoin"));
    }

    #[test]
    fn be_and_have_forms_are_disjoint() {
        let tables = LinguisticTables::new();
        assert!(tables.is_be_form("is"));
        assert!(!tables.is_have_form("is"));
        assert!(tables.is_have_form("had"));
        assert!(!tables.is_be_form("had"));
    }

    #[test]
    fn function_words_present() {
        let tables = LinguisticTables::new();
        for word in ["this", "that", "a", "an", "the", "to", "at"] {
            assert!(tables.is_function_word(word));
        }
        assert!(!tables.is_function_word("year"));
    }

    #[test]
    fn participle_lookups() {
        let tables = LinguisticTables::new();
        assert_eq!(tables.present_participle("rise"), Some("rising"));
        assert_eq!(tables.present_participle("walk"), None);
        assert_eq!(tables.past_participle("go"), Some("gone"));
        assert_eq!(tables.past_participle("walk"), None);
    }

    #[test]
    fn verb_lemmas_invert_participles() {
        let tables = LinguisticTables::new();
        assert_eq!(tables.irregular_verb_lemma("rising"), Some("rise"));
        assert_eq!(tables.irregular_verb_lemma("gone"), Some("go"));
        assert_eq!(tables.irregular_verb_lemma("been"), Some("be"));
        assert_eq!(tables.irregular_verb_lemma("went"), Some("go"));
        assert_eq!(tables.irregular_verb_lemma("walked"), None);
    }
}
