//! Encoding of a block of text into a string of `'0'`/`'1'` characters.
use crate::error::HuffmanError;
use crate::frequency::tokens;
use crate::huffman::CodeTable;

use serde::{Deserialize, Serialize};

/// What to do with a word that has no entry in the code table.
///
/// This cannot happen when the table was built from the same text, but a
/// table may be reused on another block.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum CompressPolicy {
    /// Skip the word and keep going.
    #[default]
    Lenient,
    /// Stop with [`HuffmanError::UnknownWord`].
    Strict,
}

/// Concatenates the codes of the words of `text`, in order.
///
/// # Examples
///
/// ```
/// use wordhuff::compress::{compress, CompressPolicy};
/// use wordhuff::frequency::count_frequencies;
/// use wordhuff::huffman::HuffmanTree;
///
/// let text = "a a a b b c";
/// let codes = HuffmanTree::build(&count_frequencies(text)).unwrap().codebook();
///
/// let bits = compress(text, &codes, CompressPolicy::Strict).unwrap();
/// assert_eq!(bits, "000111110");
///
/// let bits = compress("a z c", &codes, CompressPolicy::Lenient).unwrap();
/// assert_eq!(bits, "010");
/// assert!(compress("a z c", &codes, CompressPolicy::Strict).is_err());
/// ```
pub fn compress(
    text: &str,
    codes: &CodeTable,
    policy: CompressPolicy,
) -> Result<String, HuffmanError> {
    let mut compressed = String::with_capacity(compressed_len(text, codes));

    for word in tokens(text) {
        match (codes.get(word), policy) {
            (Some(code), _) => compressed.push_str(code),
            (None, CompressPolicy::Lenient) => log::trace!("skipping word without code: {word:?}"),
            (None, CompressPolicy::Strict) => {
                return Err(HuffmanError::UnknownWord(word.to_owned()))
            }
        }
    }

    Ok(compressed)
}

/// Returns the length of the lenient compression of `text`, i.e., the sum
/// of the code lengths of the words of `text` that have a code.
pub fn compressed_len(text: &str, codes: &CodeTable) -> usize {
    tokens(text)
        .filter_map(|word| codes.get(word))
        .map(|code| code.len())
        .sum()
}
