//! Errors reported by the coding pipeline.
use std::io;

#[derive(thiserror::Error, Debug)]
pub enum HuffmanError {
    /// A tree was requested for a block without words.
    #[error("cannot build a Huffman tree from an empty frequency table")]
    EmptyFrequencyTable,
    /// The frequencies of a tree do not fit in a `u64`.
    #[error("frequency overflow while merging nodes")]
    FrequencyOverflow,
    /// Strict compression met a word that has no code.
    #[error("word `{0}` has no Huffman code")]
    UnknownWord(String),
    /// A serialized tree could not be parsed back.
    #[error("malformed serialized tree: {0}")]
    MalformedTree(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
