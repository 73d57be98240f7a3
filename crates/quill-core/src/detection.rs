// Detection result public API types

// ---------------------------------------------------------------------------
// ErrorKind
// ---------------------------------------------------------------------------

/// Classification of a detected problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The word is absent from the vocabulary.
    Spelling,
    /// The word was rewritten by a grammar rule.
    Grammar,
}

impl ErrorKind {
    /// Human-readable label, used by the CLI tools.
    pub fn label(self) -> &'static str {
        match self {
            ErrorKind::Spelling => "spelling",
            ErrorKind::Grammar => "grammar",
        }
    }
}

// ---------------------------------------------------------------------------
// GrammarCorrection
// ---------------------------------------------------------------------------

/// A single rewrite performed by the grammar transformer.
///
/// `position` indexes into the display-token sequence. Ownership passes to
/// the caller with the transform result and the value is never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarCorrection {
    /// Index of the corrected token in the display sequence.
    pub position: usize,
    /// The lemma that was rewritten.
    pub original_lemma: String,
    /// The participial form that replaced it.
    pub corrected_form: String,
}

impl GrammarCorrection {
    pub fn new(
        position: usize,
        original_lemma: impl Into<String>,
        corrected_form: impl Into<String>,
    ) -> Self {
        Self {
            position,
            original_lemma: original_lemma.into(),
            corrected_form: corrected_form.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// DetectionResult
// ---------------------------------------------------------------------------

/// One flagged word with its classification and ordered suggestions.
///
/// A word with no known correction is still reported, with an empty
/// suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    /// The flagged lemma.
    pub word: String,
    /// Error classification.
    pub kind: ErrorKind,
    /// Candidate corrections, best first.
    pub suggestions: Vec<String>,
}

impl DetectionResult {
    /// Create a detection result with no suggestions.
    pub fn new(word: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            word: word.into(),
            kind,
            suggestions: Vec::new(),
        }
    }

    /// Create a detection result with an ordered suggestion list.
    pub fn with_suggestions(
        word: impl Into<String>,
        kind: ErrorKind,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            word: word.into(),
            kind,
            suggestions,
        }
    }
}
