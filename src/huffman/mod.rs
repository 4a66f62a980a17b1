//! Huffman tree over words and the code table derived from it.
//!
//! The tree is built with the classic greedy algorithm: every distinct word
//! becomes a leaf in a min-priority queue, the two lightest nodes are merged
//! until a single root is left. Ties between equal frequencies are broken by
//! a sequence number: leaves are numbered in lexicographic order of their
//! words and every merged node gets the next unused number, so among equal
//! frequencies the queue is served first-in first-out. The first node popped
//! in a merge becomes the left child (bit `0`), the second the right one
//! (bit `1`).
//!
//! ## Example
//!
//! ```
//! use wordhuff::frequency::count_frequencies;
//! use wordhuff::huffman::HuffmanTree;
//!
//! let tree = HuffmanTree::build(&count_frequencies("a a a b b c")).unwrap();
//! let codes = tree.codebook();
//!
//! assert_eq!(codes["a"], "0");
//! assert_eq!(codes["c"], "10");
//! assert_eq!(codes["b"], "11");
//! ```

use crate::error::HuffmanError;
use crate::frequency::FreqTable;

use serde::{Deserialize, Serialize};

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

pub mod serialize;

/// Alias for a sorted map containing pairs `word: code`, where `code` is a
/// non-empty string over `{'0', '1'}`.
pub type CodeTable = BTreeMap<String, String>;

/// A strict binary tree: leaves carry a word, internal nodes always have
/// two children. The frequency of an internal node is the sum of the
/// frequencies of the leaves below it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum HuffmanTree {
    Leaf {
        word: String,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<HuffmanTree>,
        right: Box<HuffmanTree>,
    },
}

/// Entry of the priority queue used during construction.
#[derive(Debug)]
struct HeapEntry {
    freq: u64,
    seq: usize,
    tree: HuffmanTree,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.freq
            .cmp(&other.freq)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.freq == other.freq && self.seq == other.seq
    }
}

impl Eq for HeapEntry {}

impl HuffmanTree {
    pub fn leaf(word: impl Into<String>, freq: u64) -> Self {
        HuffmanTree::Leaf {
            word: word.into(),
            freq,
        }
    }

    /// Creates an internal node whose frequency is the sum of its children.
    ///
    /// Returns [`HuffmanError::FrequencyOverflow`] if the sum does not fit
    /// in a `u64`.
    pub fn internal_node(left: HuffmanTree, right: HuffmanTree) -> Result<Self, HuffmanError> {
        let freq = left
            .freq()
            .checked_add(right.freq())
            .ok_or(HuffmanError::FrequencyOverflow)?;

        Ok(HuffmanTree::Internal {
            freq,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Builds a Huffman tree from the given `freq_table`.
    ///
    /// Returns [`HuffmanError::EmptyFrequencyTable`] if the table has no
    /// words. A table with a single word yields a tree made of one leaf.
    pub fn build(freq_table: &FreqTable) -> Result<Self, HuffmanError> {
        // build leaf nodes, seeded in lexicographic order
        let mut q = BinaryHeap::with_capacity(freq_table.len());
        for (seq, (word, &freq)) in freq_table.iter().enumerate() {
            q.push(Reverse(HeapEntry {
                freq,
                seq,
                tree: HuffmanTree::leaf(word.as_str(), freq),
            }));
        }

        let mut next_seq = freq_table.len();
        while let Some(Reverse(left)) = q.pop() {
            let Some(Reverse(right)) = q.pop() else {
                log::debug!(
                    "Huffman tree built: {} leaves, total frequency {}",
                    freq_table.len(),
                    left.freq
                );
                return Ok(left.tree);
            };

            log::trace!(
                "merging #{} (freq {}) with #{} (freq {}) into #{}",
                left.seq,
                left.freq,
                right.seq,
                right.freq,
                next_seq
            );

            let tree = HuffmanTree::internal_node(left.tree, right.tree)?;
            q.push(Reverse(HeapEntry {
                freq: tree.freq(),
                seq: next_seq,
                tree,
            }));
            next_seq += 1;
        }

        Err(HuffmanError::EmptyFrequencyTable)
    }

    /// Returns the frequency of this node.
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanTree::Leaf { freq, .. } | HuffmanTree::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanTree::Leaf { .. })
    }

    /// Returns the pairs `(word, freq)` of the leaves, in pre-order.
    pub fn leaves(&self) -> Vec<(&str, u64)> {
        fn collect<'a>(output: &mut Vec<(&'a str, u64)>, tree: &'a HuffmanTree) {
            match tree {
                HuffmanTree::Leaf { word, freq } => output.push((word.as_str(), *freq)),
                HuffmanTree::Internal { left, right, .. } => {
                    collect(output, left);
                    collect(output, right);
                }
            }
        }

        let mut leaves = Vec::new();
        collect(&mut leaves, self);
        leaves
    }

    /// Returns the number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            HuffmanTree::Leaf { .. } => 0,
            HuffmanTree::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Returns the code table of the tree.
    ///
    /// Going left appends `0`, going right appends `1`. The only leaf of a
    /// single-leaf tree gets the code `"0"`.
    pub fn codebook(&self) -> CodeTable {
        fn collect(output: &mut CodeTable, tree: &HuffmanTree, path: &mut String) {
            match tree {
                HuffmanTree::Leaf { word, .. } => {
                    let code = if path.is_empty() {
                        String::from("0")
                    } else {
                        path.clone()
                    };
                    output.insert(word.clone(), code);
                }
                HuffmanTree::Internal { left, right, .. } => {
                    path.push('0');
                    collect(output, left, path);
                    path.pop();

                    path.push('1');
                    collect(output, right, path);
                    path.pop();
                }
            }
        }

        let mut codebook = CodeTable::new();
        collect(&mut codebook, self, &mut String::new());
        codebook
    }

    /// Returns the number of bits needed to encode the text the tree was
    /// built from, i.e., the sum of `freq * code length` over the leaves.
    ///
    /// Saturates at `u64::MAX`.
    pub fn encoded_len(&self) -> u64 {
        fn weigh(tree: &HuffmanTree, depth: u64) -> u64 {
            match tree {
                HuffmanTree::Leaf { freq, .. } => freq.saturating_mul(depth.max(1)),
                HuffmanTree::Internal { left, right, .. } => {
                    weigh(left, depth + 1).saturating_add(weigh(right, depth + 1))
                }
            }
        }

        weigh(self, 0)
    }
}

#[cfg(test)]
mod tests;
