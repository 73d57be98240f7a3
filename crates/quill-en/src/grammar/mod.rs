// Grammar transformer
//
// A single left-to-right pass over the lemma sequence with an explicit
// cursor, one token of lookahead, and a lookback at the previous OUTPUT
// token (not the previous input lemma, so a rewrite earlier in the
// sentence is what later rules see).
//
// Rules:
//   A (progressive): am/is/are/was/were + known base verb -> present
//     participle ("is rise" -> "is rising").
//   B (perfect): has/have/had + base verb -> past participle, with an
//     optional intervening "not" ("has not move" -> "has not moved").
//     Verbs without a registered past participle fall back to the lemma
//     itself; the position is still recorded as corrected.
//
// The pass is a pure function: no retries, no backtracking, and empty
// input produces empty output. Rule B's negation branch consumes two
// input lemmas but also emits two output tokens, so the display sequence
// always has the same length as the input sequence.

use hashbrown::HashSet;
use quill_core::detection::GrammarCorrection;

use crate::tables::LinguisticTables;

/// Result of the grammar pass: display tokens plus the rewrites applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarTransform {
    /// Display-ready tokens, aligned with the input lemma positions.
    pub display_tokens: Vec<String>,
    /// One entry per rewritten position, in output order. Ownership passes
    /// to the caller; the transformer never touches these again.
    pub corrections: Vec<GrammarCorrection>,
}

impl GrammarTransform {
    /// The set of display positions considered grammar-corrected.
    pub fn corrected_positions(&self) -> HashSet<usize> {
        self.corrections.iter().map(|c| c.position).collect()
    }

    /// Whether the display token at `position` was rewritten.
    pub fn is_corrected(&self, position: usize) -> bool {
        self.corrections.iter().any(|c| c.position == position)
    }
}

/// Apply the auxiliary-verb rewrite rules to a lemma sequence.
pub fn transform(lemmas: &[String], tables: &LinguisticTables) -> GrammarTransform {
    let mut display_tokens: Vec<String> = Vec::with_capacity(lemmas.len());
    let mut corrections: Vec<GrammarCorrection> = Vec::new();

    let mut i = 0;
    while i < lemmas.len() {
        let lemma = lemmas[i].as_str();
        let prev = display_tokens.last().map(String::as_str).unwrap_or("");

        // Rule A: progressive after a form of "be".
        if tables.is_be_form(prev) {
            if let Some(participle) = tables.present_participle(lemma) {
                corrections.push(GrammarCorrection::new(display_tokens.len(), lemma, participle));
                display_tokens.push(participle.to_string());
                i += 1;
                continue;
            }
        }

        // Rule B: perfect after a form of "have", with optional negation.
        if tables.is_have_form(prev) {
            if lemma == "not" && i + 1 < lemmas.len() {
                let next = lemmas[i + 1].as_str();
                let participle = tables.past_participle(next).unwrap_or(next);
                display_tokens.push(lemma.to_string());
                corrections.push(GrammarCorrection::new(display_tokens.len(), next, participle));
                display_tokens.push(participle.to_string());
                i += 2;
                continue;
            }
            let participle = tables.past_participle(lemma).unwrap_or(lemma);
            corrections.push(GrammarCorrection::new(display_tokens.len(), lemma, participle));
            display_tokens.push(participle.to_string());
            i += 1;
            continue;
        }

        // Default: copy through unchanged.
        display_tokens.push(lemma.to_string());
        i += 1;
    }

    GrammarTransform {
        display_tokens,
        corrections,
    }
}
