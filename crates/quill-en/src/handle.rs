// CheckerHandle: top-level integration point for the correction pipeline.
//
// Owns the lexicon, the fixed linguistic tables, the tagger, and the
// options, and runs the stages in order: tokenize -> tag -> lemmatize ->
// grammar transform -> spelling detection -> candidate ranking.
//
// Design notes:
// - All methods take `&self`; every request allocates its own buffers, so
//   a handle can be shared across threads once built.
// - The tagger sits behind the `PosTagger` trait; the default is the
//   deterministic `RuleTagger`.
// - Construction is fallible only through the lexicon: a handle cannot
//   exist without complete tables.

use quill_core::detection::{DetectionResult, ErrorKind, GrammarCorrection};
use quill_core::token::Token;

use crate::grammar;
use crate::lexicon::Lexicon;
use crate::speller;
use crate::suggestion::{self, Candidate, RankerOptions};
use crate::tables::LinguisticTables;
use crate::tagger::{PosTagger, RuleTagger};
use crate::tokenizer;

/// Options stored on the handle and applied to every request.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Maximum number of suggestions attached to each spelling error.
    pub max_suggestions: usize,
    /// Optional edit-distance radius for candidate generation.
    pub max_distance: Option<usize>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            max_distance: None,
        }
    }
}

/// Everything the presentation layer needs for one piece of input text.
#[derive(Debug, Clone)]
pub struct CheckReport {
    /// Display-ready tokens, aligned with the input word positions.
    pub display_tokens: Vec<String>,
    /// Grammar rewrites, one per corrected display position.
    pub corrections: Vec<GrammarCorrection>,
    /// Flagged words with their classification and ordered suggestions.
    pub errors: Vec<DetectionResult>,
}

impl CheckReport {
    /// Whether the display token at `position` was grammar-corrected.
    pub fn is_corrected(&self, position: usize) -> bool {
        self.corrections.iter().any(|c| c.position == position)
    }

    /// The set of grammar-corrected display positions.
    pub fn corrected_positions(&self) -> hashbrown::HashSet<usize> {
        self.corrections.iter().map(|c| c.position).collect()
    }
}

/// Top-level handle that owns all pipeline components.
pub struct CheckerHandle {
    lexicon: Lexicon,
    tables: LinguisticTables,
    tagger: Box<dyn PosTagger + Send + Sync>,
    options: CheckOptions,
}

impl CheckerHandle {
    /// Create a handle with the default rule tagger and default options.
    pub fn new(lexicon: Lexicon) -> Self {
        Self::with_tagger(lexicon, Box::new(RuleTagger::new()))
    }

    /// Create a handle with a caller-supplied tagger.
    pub fn with_tagger(lexicon: Lexicon, tagger: Box<dyn PosTagger + Send + Sync>) -> Self {
        Self {
            lexicon,
            tables: LinguisticTables::new(),
            tagger,
            options: CheckOptions::default(),
        }
    }

    /// Set the maximum number of suggestions per spelling error.
    pub fn set_max_suggestions(&mut self, max_suggestions: usize) {
        self.options.max_suggestions = max_suggestions;
    }

    /// Set (or clear) the candidate edit-distance radius.
    pub fn set_max_distance(&mut self, max_distance: Option<usize>) {
        self.options.max_distance = max_distance;
    }

    /// Access the lexicon (for vocabulary browsing and statistics).
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Tokenize `text` into lowercased alphabetic words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        tokenizer::tokenize(text)
    }

    /// Tokenize, tag, and lemmatize `text`.
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let words = tokenizer::tokenize(text);
        let tags = self.tagger.tag(&words);
        crate::lemmatizer::lemmatize(&words, &tags, &self.tables)
    }

    /// The lemma sequence for `text`.
    pub fn lemmas(&self, text: &str) -> Vec<String> {
        self.analyze(text).into_iter().map(|t| t.lemma).collect()
    }

    /// Whether a single word passes spelling detection (vocabulary member,
    /// function word, or auxiliary verb).
    pub fn spell(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.lexicon.contains(&word)
            || self.tables.is_function_word(&word)
            || self.tables.is_aux(&word)
    }

    /// Ranked correction candidates for a single word.
    pub fn suggest(&self, word: &str) -> Vec<Candidate> {
        suggestion::rank(&word.to_lowercase(), &self.lexicon, &self.ranker_options())
    }

    /// Run the full pipeline on `text`.
    pub fn check(&self, text: &str) -> CheckReport {
        let lemmas = self.lemmas(text);
        let transform = grammar::transform(&lemmas, &self.tables);

        let mut errors = Vec::new();

        // Spelling errors with ranked suggestions.
        let ranker_options = self.ranker_options();
        for flagged in speller::detect(&lemmas, &self.lexicon, &self.tables) {
            let suggestions = suggestion::rank(&flagged, &self.lexicon, &ranker_options)
                .into_iter()
                .map(|c| c.word)
                .collect();
            errors.push(DetectionResult::with_suggestions(
                flagged,
                ErrorKind::Spelling,
                suggestions,
            ));
        }

        // Grammar rewrites that actually changed the form are reported as
        // grammar errors, with the corrected form as the single suggestion.
        for correction in &transform.corrections {
            if correction.corrected_form != correction.original_lemma {
                errors.push(DetectionResult::with_suggestions(
                    correction.original_lemma.clone(),
                    ErrorKind::Grammar,
                    vec![correction.corrected_form.clone()],
                ));
            }
        }

        CheckReport {
            display_tokens: transform.display_tokens,
            corrections: transform.corrections,
            errors,
        }
    }

    fn ranker_options(&self) -> RankerOptions {
        RankerOptions {
            max_suggestions: self.options.max_suggestions,
            max_distance: self.options.max_distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashMap;

    fn handle(words: &[(&str, u64)]) -> CheckerHandle {
        let word_freq: HashMap<String, u64> =
            words.iter().map(|(w, c)| (w.to_string(), *c)).collect();
        let lexicon = Lexicon::from_parts(word_freq, HashMap::new(), HashMap::new()).unwrap();
        CheckerHandle::new(lexicon)
    }

    fn positions(expected: &[usize]) -> hashbrown::HashSet<usize> {
        expected.iter().copied().collect()
    }

    fn crypto_handle() -> CheckerHandle {
        handle(&[
            ("bitcoin", 40),
            ("year", 25),
            ("market", 12),
            ("she", 8),
            ("he", 8),
            ("rise", 6),
            ("move", 6),
            ("go", 6),
            ("not", 20),
            ("late", 4),
            ("receive", 10),
            ("relieve", 3),
        ])
    }

    #[test]
    fn progressive_example() {
        let report = crypto_handle().check("Bitcoin is rise this year");
        assert_eq!(
            report.display_tokens,
            ["bitcoin", "is", "rising", "this", "year"]
        );
        assert_eq!(report.corrected_positions(), positions(&[2]));
    }

    #[test]
    fn perfect_example() {
        let report = crypto_handle().check("She has go to the market");
        assert_eq!(
            report.display_tokens,
            ["she", "has", "gone", "to", "the", "market"]
        );
        assert!(report.is_corrected(2));
    }

    #[test]
    fn negated_perfect_drops_nonalphabetic_run() {
        let report = crypto_handle().check("62% of Bitcoin has not move in a year");
        assert_eq!(
            report.display_tokens,
            ["of", "bitcoin", "has", "not", "moved", "in", "a", "year"]
        );
        assert!(report.is_corrected(4));
        assert_eq!(report.display_tokens[4], "moved");
    }

    #[test]
    fn spelling_error_with_ranked_suggestions() {
        let report = crypto_handle().check("she did recieve it");
        let spelling: Vec<&DetectionResult> = report
            .errors
            .iter()
            .filter(|e| e.kind == ErrorKind::Spelling)
            .collect();
        let recieve = spelling.iter().find(|e| e.word == "recieve").unwrap();
        // relieve is a single substitution away, receive two.
        assert_eq!(recieve.suggestions[0], "relieve");
        assert_eq!(recieve.suggestions[1], "receive");
    }

    #[test]
    fn grammar_rewrites_reported_as_grammar_errors() {
        let report = crypto_handle().check("Bitcoin is rise this year");
        let grammar: Vec<&DetectionResult> = report
            .errors
            .iter()
            .filter(|e| e.kind == ErrorKind::Grammar)
            .collect();
        assert_eq!(grammar.len(), 1);
        assert_eq!(grammar[0].word, "rise");
        assert_eq!(grammar[0].suggestions, ["rising"]);
    }

    #[test]
    fn empty_input_is_benign() {
        let report = crypto_handle().check("   ");
        assert!(report.display_tokens.is_empty());
        assert!(report.corrections.is_empty());
        assert!(report.errors.is_empty());
    }

    #[test]
    fn spell_accepts_function_words_and_aux() {
        let handle = crypto_handle();
        assert!(handle.spell("bitcoin"));
        assert!(handle.spell("The"));
        assert!(handle.spell("has"));
        assert!(!handle.spell("recieve"));
    }

    #[test]
    fn max_suggestions_option_is_applied() {
        let mut handle = crypto_handle();
        handle.set_max_suggestions(1);
        let suggestions = handle.suggest("recieve");
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, "relieve");
        assert_eq!(suggestions[0].distance, 1);
    }

    #[test]
    fn handle_is_shareable_across_threads() {
        fn assert_sync<T: Sync + Send>() {}
        assert_sync::<CheckerHandle>();
    }
}
