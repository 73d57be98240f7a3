// Token and part-of-speech public API types

// ---------------------------------------------------------------------------
// PosTag
// ---------------------------------------------------------------------------

/// Coarse word-class tag assigned by a part-of-speech tagger.
///
/// Only `Verb` changes downstream behavior (verb lemmatization); everything
/// else falls through to default (noun) lemmatization. Taggers that cannot
/// classify a token return `Unknown`, which is treated as a non-verb and is
/// never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Verb, including auxiliary verbs.
    Verb,
    /// Noun (the default class).
    Noun,
    /// Adjective.
    Adjective,
    /// Adverb.
    Adverb,
    /// Determiner or article.
    Determiner,
    /// Preposition.
    Preposition,
    /// Conjunction.
    Conjunction,
    /// Pronoun.
    Pronoun,
    /// Unclassifiable token; treated as a non-verb.
    Unknown,
}

impl PosTag {
    /// Whether this tag selects verb lemmatization.
    pub fn is_verb(self) -> bool {
        self == PosTag::Verb
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A word token produced by the tokenizer and annotated by the tagger and
/// lemmatizer.
///
/// The surface form is the lowercased alphabetic run as it appeared in the
/// input; the lemma is the normalized base form used for vocabulary lookup.
/// Token order is preserved end-to-end and the index of a token in its
/// sequence is the position used to correlate detection results back to
/// display tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Lowercased surface form from the input text.
    pub surface: String,
    /// Normalized base form (lowercase).
    pub lemma: String,
    /// Coarse word-class tag.
    pub pos_tag: PosTag,
}

impl Token {
    /// Create a token whose lemma equals its surface form.
    pub fn new(surface: impl Into<String>, pos_tag: PosTag) -> Self {
        let surface = surface.into();
        let lemma = surface.clone();
        Self {
            surface,
            lemma,
            pos_tag,
        }
    }

    /// Create a token with an explicit lemma.
    pub fn with_lemma(
        surface: impl Into<String>,
        lemma: impl Into<String>,
        pos_tag: PosTag,
    ) -> Self {
        Self {
            surface: surface.into(),
            lemma: lemma.into(),
            pos_tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_token_lemma_defaults_to_surface() {
        let tok = Token::new("bitcoin", PosTag::Noun);
        assert_eq!(tok.surface, "bitcoin");
        assert_eq!(tok.lemma, "bitcoin");
        assert_eq!(tok.pos_tag, PosTag::Noun);
    }

    #[test]
    fn with_lemma_keeps_both_forms() {
        let tok = Token::with_lemma("rising", "rise", PosTag::Verb);
        assert_eq!(tok.surface, "rising");
        assert_eq!(tok.lemma, "rise");
    }

    #[test]
    fn only_verb_tag_is_verb() {
        assert!(PosTag::Verb.is_verb());
        assert!(!PosTag::Noun.is_verb());
        assert!(!PosTag::Unknown.is_verb());
    }

    #[test]
    fn pos_tag_is_copy() {
        let a = PosTag::Adverb;
        let b = a;
        assert_eq!(a, b);
    }
}
