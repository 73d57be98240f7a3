// quill-core: shared public API types for the Quill correction pipeline.
//
// This crate holds the data model that flows between the language module
// and its callers: tokens with their word-class tags, grammar corrections,
// spelling detection results, and the exact edit distance routine used for
// candidate ranking. No I/O and no language-specific logic lives here.

pub mod detection;
pub mod distance;
pub mod token;
