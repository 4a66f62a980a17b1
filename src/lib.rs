//! This library builds word-level [Huffman codes](https://en.wikipedia.org/wiki/Huffman_coding)
//! for blocks of text.
//!
//! The symbols of the code are the words of a block, i.e., the maximal runs
//! of characters other than ASCII whitespace. For every block the library
//! computes:
//! - the [`HuffmanTree`] of the word frequencies;
//! - the [`CodeTable`] mapping every distinct word to its binary code;
//! - the compressed text, as a string of `'0'` and `'1'` characters;
//! - a pre-order serialization of the tree.
//!
//! Construction is fully deterministic: ties between equal frequencies are
//! broken by the lexicographic order of the words and then by the order in
//! which merged nodes are created, so the same block always yields the same
//! tree and the same codes.
//!
//! ## Example
//!
//! ```
//! use wordhuff::{encode_block, CompressPolicy};
//!
//! let encoded = encode_block("a a a b b c", CompressPolicy::Strict)
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(encoded.tree.serialize(), "I 6 L a 3 # # I 3 L c 1 # # L b 2 # # ");
//! assert_eq!(encoded.codes["b"], "11");
//! assert_eq!(encoded.compressed, "000111110");
//!
//! assert!(encode_block(" \n ", CompressPolicy::Strict).unwrap().is_none());
//! ```
//!
//! The [`report`] module turns a whole document, split on empty lines, into
//! a textual report; the `wordhuff` binary wires it to files.

pub mod compress;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod perf_and_test_utils;
pub mod report;

pub use compress::{compress, CompressPolicy};
pub use error::HuffmanError;
pub use frequency::{count_frequencies, is_separator, FreqTable};
pub use huffman::{CodeTable, HuffmanTree};

/// Everything computed for one non-empty block of text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedBlock {
    /// The block, trimmed.
    pub text: String,
    pub tree: HuffmanTree,
    pub codes: CodeTable,
    pub compressed: String,
}

/// Runs the whole pipeline on `text`.
///
/// Returns `Ok(None)` if `text` has no words: in this case no tree is
/// built.
pub fn encode_block(
    text: &str,
    policy: CompressPolicy,
) -> Result<Option<EncodedBlock>, HuffmanError> {
    let text = text.trim_matches(is_separator);
    let freqs = count_frequencies(text);
    if freqs.is_empty() {
        return Ok(None);
    }

    let tree = HuffmanTree::build(&freqs)?;
    let codes = tree.codebook();
    let compressed = compress(text, &codes, policy)?;

    Ok(Some(EncodedBlock {
        text: text.to_owned(),
        tree,
        codes,
        compressed,
    }))
}

#[cfg(test)]
mod tests;
