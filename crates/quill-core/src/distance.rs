// Exact Levenshtein edit distance
//
// Unit cost for insertion, deletion, and substitution. Candidate ranking
// depends on this being exact, so no cutoff or approximation is applied
// here; callers that want a radius filter compare against the returned
// value.

/// Compute the Levenshtein distance between two strings.
///
/// Operates on characters, not bytes, so multi-byte UTF-8 input is measured
/// in the same units the tokenizer produces. Uses the classic two-row
/// dynamic program: O(|a| * |b|) time, O(min(|a|, |b|)) space.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // Keep the shorter string on the row dimension.
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev: Vec<usize> = (0..=short.len()).collect();
    let mut curr: Vec<usize> = vec![0; short.len() + 1];

    for (i, &lc) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &sc) in short.iter().enumerate() {
            let substitution = prev[j] + usize::from(lc != sc);
            let insertion = curr[j] + 1;
            let deletion = prev[j + 1] + 1;
            curr[j + 1] = substitution.min(insertion).min(deletion);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// Lower bound on the distance between two strings: the difference of their
/// character lengths. Used as a cheap prune before the full computation.
pub fn length_difference(a: &str, b: &str) -> usize {
    let la = a.chars().count();
    let lb = b.chars().count();
    la.abs_diff(lb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_have_distance_zero() {
        assert_eq!(levenshtein("receive", "receive"), 0);
        assert_eq!(levenshtein("", ""), 0);
    }

    #[test]
    fn empty_versus_nonempty_is_length() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abc", ""), 3);
    }

    #[test]
    fn single_edits() {
        assert_eq!(levenshtein("cat", "cut"), 1); // substitute
        assert_eq!(levenshtein("cat", "cats"), 1); // insert
        assert_eq!(levenshtein("cats", "cat"), 1); // delete
    }

    #[test]
    fn transposition_costs_two() {
        // Plain Levenshtein has no transposition operation.
        assert_eq!(levenshtein("recieve", "receive"), 2);
    }

    #[test]
    fn common_misspelling_distances() {
        // "recieve" -> "receive" swaps two letters (two substitutions);
        // "recieve" -> "relieve" is a single substitution.
        assert_eq!(levenshtein("recieve", "receive"), 2);
        assert_eq!(levenshtein("recieve", "relieve"), 1);
    }

    #[test]
    fn symmetric() {
        assert_eq!(
            levenshtein("kitten", "sitting"),
            levenshtein("sitting", "kitten")
        );
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        assert_eq!(levenshtein("caf\u{00E9}", "cafe"), 1);
    }

    #[test]
    fn length_difference_is_lower_bound() {
        assert_eq!(length_difference("ab", "abcde"), 3);
        assert!(length_difference("recieve", "receive") <= levenshtein("recieve", "receive"));
    }
}
