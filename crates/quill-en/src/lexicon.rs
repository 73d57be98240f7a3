// Lexicon: the externally supplied lookup tables.
//
// Three corpus-derived tables back the detector and the ranker:
//   - word frequency (lemma -> count); its key set IS the vocabulary,
//   - bigram counts ((lemma, lemma) -> count),
//   - unigram counts (lemma -> count).
//
// All three are loaded once at process start and are read-only for the
// rest of the process lifetime. A malformed or missing table is a fatal
// construction error: detection correctness depends on the tables, so the
// lexicon refuses to exist rather than operate on partial data.

use hashbrown::HashMap;

/// Error type for lexicon construction failures.
#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    /// A table file was not valid JSON of the expected shape.
    #[error("failed to parse table: {0}")]
    Parse(#[from] serde_json::Error),

    /// A bigram key did not consist of exactly two whitespace-separated words.
    #[error("malformed bigram key: {0:?}")]
    MalformedBigramKey(String),

    /// The word-frequency table was empty, leaving no vocabulary to check
    /// against.
    #[error("word-frequency table is empty")]
    EmptyVocabulary,
}

/// The immutable corpus tables.
#[derive(Debug)]
pub struct Lexicon {
    /// Lemma -> corpus occurrence count. The key set is the vocabulary.
    word_freq: HashMap<String, u64>,
    /// (lemma, lemma) -> adjacent-pair count.
    bigram_counts: HashMap<(String, String), u64>,
    /// Lemma -> count in the bigram corpus (denominator for transitions).
    unigram_counts: HashMap<String, u64>,
}

impl Lexicon {
    /// Build a lexicon from already-constructed in-memory tables.
    pub fn from_parts(
        word_freq: HashMap<String, u64>,
        bigram_counts: HashMap<(String, String), u64>,
        unigram_counts: HashMap<String, u64>,
    ) -> Result<Self, LexiconError> {
        if word_freq.is_empty() {
            return Err(LexiconError::EmptyVocabulary);
        }
        Ok(Self {
            word_freq,
            bigram_counts,
            unigram_counts,
        })
    }

    /// Build a lexicon from the three JSON table files.
    ///
    /// `word_freq` and `unigram_counts` map words to counts; `bigram_counts`
    /// keys are two words separated by whitespace ("of bitcoin").
    pub fn from_json(
        word_freq: &str,
        bigram_counts: &str,
        unigram_counts: &str,
    ) -> Result<Self, LexiconError> {
        let word_freq: HashMap<String, u64> = serde_json::from_str(word_freq)?;
        let unigram_counts: HashMap<String, u64> = serde_json::from_str(unigram_counts)?;

        let raw_bigrams: HashMap<String, u64> = serde_json::from_str(bigram_counts)?;
        let mut bigrams = HashMap::with_capacity(raw_bigrams.len());
        for (key, count) in raw_bigrams {
            let mut parts = key.split_whitespace();
            let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(LexiconError::MalformedBigramKey(key));
            };
            bigrams.insert((first.to_string(), second.to_string()), count);
        }

        Self::from_parts(word_freq, bigrams, unigram_counts)
    }

    /// Whether `lemma` is in the vocabulary.
    pub fn contains(&self, lemma: &str) -> bool {
        self.word_freq.contains_key(lemma)
    }

    /// Corpus frequency of `lemma` (0 when absent).
    pub fn frequency(&self, lemma: &str) -> u64 {
        self.word_freq.get(lemma).copied().unwrap_or(0)
    }

    /// Iterate over the vocabulary with frequencies. Iteration order is
    /// unspecified; callers needing determinism must sort.
    pub fn vocabulary(&self) -> impl Iterator<Item = (&str, u64)> {
        self.word_freq.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Number of vocabulary entries.
    pub fn len(&self) -> usize {
        self.word_freq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_freq.is_empty()
    }

    /// Count of the adjacent pair (`prev`, `next`) in the corpus.
    pub fn bigram_count(&self, prev: &str, next: &str) -> u64 {
        self.bigram_counts
            .get(&(prev.to_string(), next.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// Count of `lemma` in the bigram corpus.
    pub fn unigram_count(&self, lemma: &str) -> u64 {
        self.unigram_counts.get(lemma).copied().unwrap_or(0)
    }

    /// Maximum-likelihood transition probability P(next | prev), or 0.0
    /// when `prev` was never observed.
    pub fn transition_probability(&self, prev: &str, next: &str) -> f64 {
        let denominator = self.unigram_count(prev);
        if denominator == 0 {
            return 0.0;
        }
        self.bigram_count(prev, next) as f64 / denominator as f64
    }
}
