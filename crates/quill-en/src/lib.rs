// quill-en: English language module for the Quill correction pipeline.
//
// Pipeline stages, leaves first:
//   tokenizer  -> lowercased alphabetic word tokens
//   tagger     -> one coarse part-of-speech tag per token
//   lemmatizer -> normalized base forms (verb or noun lemmatization)
//   grammar    -> auxiliary+verb rewrite into participial display forms
//   speller    -> out-of-vocabulary lemma detection
//   suggestion -> candidate ranking by exact edit distance
//
// The `handle` module ties the stages together behind a single owner of the
// lexicon and the fixed linguistic tables.

pub mod grammar;
pub mod lemmatizer;
pub mod lexicon;
pub mod speller;
pub mod suggestion;
pub mod tables;
pub mod tagger;
pub mod tokenizer;

#[cfg(feature = "handle")]
pub mod handle;
