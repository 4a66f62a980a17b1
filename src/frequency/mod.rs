//! Word tokenization and frequency counting.
//!
//! A block of text is split on runs of ASCII whitespace (space, tab, line
//! feed, vertical tab, form feed, carriage return); other Unicode spaces
//! such as U+00A0 belong to the word they appear in. Words are compared
//! byte-for-byte, so `Word`, `word` and `word,` are three distinct symbols.
//! The resulting [`FreqTable`] is a `BTreeMap`, hence it is always iterated
//! in lexicographic order; the tree builder relies on this to seed its heap
//! deterministically.

use std::collections::BTreeMap;

/// Alias for a sorted map containing pairs `word: frequency`.
pub type FreqTable = BTreeMap<String, u64>;

/// Returns `true` if `c` separates two words.
pub fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

/// Returns an iterator over the words of `text`, in order.
///
/// # Examples
///
/// ```
/// use wordhuff::frequency::tokens;
///
/// let words: Vec<&str> = tokens("  the cat\n sat ").collect();
/// assert_eq!(words, vec!["the", "cat", "sat"]);
/// ```
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|word| !word.is_empty())
}

/// Returns the frequency table of the words in `text`.
///
/// An empty table means there is nothing to encode and no tree must be built.
///
/// # Examples
///
/// ```
/// use wordhuff::frequency::count_frequencies;
///
/// let freqs = count_frequencies("b a b");
/// let pairs: Vec<(&str, u64)> = freqs.iter().map(|(w, &f)| (w.as_str(), f)).collect();
/// assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
///
/// assert!(count_frequencies(" \t\n").is_empty());
/// ```
pub fn count_frequencies(text: &str) -> FreqTable {
    let freqs = tokens(text).fold(FreqTable::new(), |mut map, word| {
        // avoid allocating a key for words already seen
        match map.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                map.insert(word.to_owned(), 1);
            }
        }
        map
    });

    log::trace!("Word frequency: {:?}", freqs);
    freqs
}

/// Returns the total number of words accounted for by `freqs`.
pub fn total_words(freqs: &FreqTable) -> u64 {
    freqs.values().sum()
}
