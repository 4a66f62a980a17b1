//! Textual pre-order encoding of a [`HuffmanTree`].
//!
//! Every node is written as a marker followed by its payload, and every
//! token is followed by a single space:
//! - `L <word> <freq> ` for a leaf, then `# # ` for its two absent children;
//! - `I <freq> ` for an internal node, then its left and right subtrees.
//!
//! Words never contain separators, so the stream is self-describing and can
//! be parsed back into an isomorphic tree with [`HuffmanTree::deserialize`].

use super::HuffmanTree;
use crate::error::HuffmanError;
use crate::frequency::tokens;

use std::fmt;

pub const LEAF_MARKER: &str = "L";
pub const INTERNAL_MARKER: &str = "I";
pub const NULL_MARKER: &str = "#";

/// Maximum number of nested internal nodes accepted by the parser.
///
/// Frequencies are `u64`, so a tree built from them is at most 92 levels
/// deep (Fibonacci weights).
pub const MAX_DEPTH: usize = 128;

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HuffmanTree::Leaf { word, freq } => {
                write!(f, "{LEAF_MARKER} {word} {freq} ")?;
                write!(f, "{NULL_MARKER} {NULL_MARKER} ")
            }
            HuffmanTree::Internal { freq, left, right } => {
                write!(f, "{INTERNAL_MARKER} {freq} ")?;
                fmt::Display::fmt(left, f)?;
                fmt::Display::fmt(right, f)
            }
        }
    }
}

impl HuffmanTree {
    /// Returns the pre-order serialization of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordhuff::frequency::count_frequencies;
    /// use wordhuff::huffman::HuffmanTree;
    ///
    /// let tree = HuffmanTree::build(&count_frequencies("x y y")).unwrap();
    /// assert_eq!(tree.serialize(), "I 3 L x 1 # # L y 2 # # ");
    /// ```
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Parses a stream produced by [`HuffmanTree::serialize`].
    ///
    /// Tokens may be separated by any run of word separators. The frequency
    /// written for an internal node must match the sum of its children, and
    /// internal nodes may be nested at most [`MAX_DEPTH`] times.
    pub fn deserialize(data: &str) -> Result<Self, HuffmanError> {
        let mut stream = tokens(data);
        let tree = parse_node(&mut stream, 0)?;

        match stream.next() {
            Some(extra) => Err(malformed(format!("unexpected trailing token `{extra}`"))),
            None => Ok(tree),
        }
    }
}

fn malformed(msg: String) -> HuffmanError {
    HuffmanError::MalformedTree(msg)
}

fn next_token<'a, I>(tokens: &mut I, what: &str) -> Result<&'a str, HuffmanError>
where
    I: Iterator<Item = &'a str>,
{
    tokens
        .next()
        .ok_or_else(|| malformed(format!("stream ended while reading {what}")))
}

fn parse_freq(token: &str) -> Result<u64, HuffmanError> {
    token
        .parse()
        .map_err(|_| malformed(format!("invalid frequency `{token}`")))
}

fn parse_node<'a, I>(tokens: &mut I, depth: usize) -> Result<HuffmanTree, HuffmanError>
where
    I: Iterator<Item = &'a str>,
{
    match next_token(tokens, "a node marker")? {
        LEAF_MARKER => {
            let word = next_token(tokens, "a leaf word")?;
            let freq = parse_freq(next_token(tokens, "a leaf frequency")?)?;
            for _ in 0..2 {
                let child = next_token(tokens, "a leaf child")?;
                if child != NULL_MARKER {
                    return Err(malformed(format!(
                        "leaf `{word}` has a child starting with `{child}`"
                    )));
                }
            }
            Ok(HuffmanTree::leaf(word, freq))
        }
        INTERNAL_MARKER => {
            if depth >= MAX_DEPTH {
                return Err(malformed(format!(
                    "tree deeper than {MAX_DEPTH} internal levels"
                )));
            }
            let freq = parse_freq(next_token(tokens, "an internal frequency")?)?;
            let left = parse_node(tokens, depth + 1)?;
            let right = parse_node(tokens, depth + 1)?;
            match left.freq().checked_add(right.freq()) {
                Some(sum) if sum == freq => HuffmanTree::internal_node(left, right),
                Some(sum) => Err(malformed(format!(
                    "internal node declares frequency {freq} but its children sum to {sum}"
                ))),
                None => Err(malformed(String::from("frequency overflow"))),
            }
        }
        NULL_MARKER => Err(malformed(String::from(
            "null marker found where a node is required",
        ))),
        other => Err(malformed(format!("unknown marker `{other}`"))),
    }
}
