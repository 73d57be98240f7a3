// Word tokenizer
//
// Splits raw text into maximal runs of alphabetic characters, lowercased.
// Every other character (digits, punctuation, symbols, whitespace) acts as
// a separator and is discarded; a token like "62%" contributes nothing to
// the output sequence.

/// Tokenize `text` into lowercased alphabetic words, in input order.
///
/// Empty or whitespace-only input yields an empty vector, never an error.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphabetic() {
            // char::to_lowercase may expand to more than one char.
            current.extend(c.to_lowercase());
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}
