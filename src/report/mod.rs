//! Splitting of an input document into blocks and formatting of the
//! textual report produced for each block.
//!
//! Blocks are separated by empty lines. Each block is encoded on its own
//! with [`encode_block`](crate::encode_block) and its tree, code table and
//! compressed bits are written in three labeled sections.

use crate::compress::CompressPolicy;
use crate::error::HuffmanError;
use crate::frequency::is_separator;
use crate::{encode_block, EncodedBlock};

use std::io::Write;

/// Sample document used when no input exists yet.
pub const DEFAULT_INPUT: &str = "\
O computador executa instrucoes em alta velocidade e processa dados com precisao.

A memoria armazena informacoes que sao acessadas rapidamente pela CPU.

Os sistemas operacionais controlam os recursos e coordenam as tarefas do processador.
";

const RULE: &str = "===========================================";

/// Summary of a report run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReportStats {
    pub blocks_encoded: usize,
    pub blocks_empty: usize,
    /// Size of the encoded blocks as 8-bit text.
    pub input_bits: u64,
    /// Total length of the compressed bit-strings.
    pub output_bits: u64,
}

impl ReportStats {
    /// Returns `output_bits / input_bits`, or `None` if nothing was encoded.
    pub fn compression_ratio(&self) -> Option<f64> {
        if self.input_bits == 0 {
            return None;
        }
        Some(self.output_bits as f64 / self.input_bits as f64)
    }
}

/// Splits `input` into trimmed blocks.
///
/// Lines of a block are joined with a single space. A block ends at an
/// empty line; consecutive empty lines do not produce empty blocks, but a
/// block made only of blank characters is kept as an empty string.
///
/// # Examples
///
/// ```
/// use wordhuff::report::split_blocks;
///
/// let blocks = split_blocks("first line\nsecond line\n\n\nthird\n");
/// assert_eq!(blocks, vec!["first line second line", "third"]);
/// ```
pub fn split_blocks(input: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = String::new();

    for line in input.lines() {
        if line.is_empty() || line == "\r" {
            if !current.is_empty() {
                blocks.push(current.trim_matches(is_separator).to_owned());
                current.clear();
            }
        } else {
            current.push_str(line);
            current.push(' ');
        }
    }

    if !current.is_empty() {
        blocks.push(current.trim_matches(is_separator).to_owned());
    }

    blocks
}

/// Encodes every block and writes the report to `out`.
///
/// Blocks are numbered from 1. Empty blocks are reported as such and no
/// tree is built for them.
pub fn write_report<W: Write>(
    out: &mut W,
    blocks: &[String],
    policy: CompressPolicy,
) -> Result<ReportStats, HuffmanError> {
    let mut stats = ReportStats::default();

    writeln!(out, "--- INICIO PROCESSAMENTO DOS TEXTOS ---\n")?;

    for (i, block) in blocks.iter().enumerate() {
        let index = i + 1;
        match encode_block(block, policy)? {
            None => {
                log::info!("text {index}: empty");
                writeln!(out, "--- FIM TEXTO {index} (VAZIO) ---")?;
                stats.blocks_empty += 1;
            }
            Some(encoded) => {
                log::info!(
                    "text {index}: {} distinct words, {} bits",
                    encoded.codes.len(),
                    encoded.compressed.len()
                );
                write_block(out, index, &encoded)?;
                stats.blocks_encoded += 1;
                stats.input_bits += 8 * encoded.text.len() as u64;
                stats.output_bits += encoded.compressed.len() as u64;
            }
        }
    }

    Ok(stats)
}

fn write_block<W: Write>(
    out: &mut W,
    index: usize,
    encoded: &EncodedBlock,
) -> std::io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "PROCESSO DO TEXTO {index}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "TEXTO ORIGINAL: {}\n", encoded.text)?;

    writeln!(out, "A) ESTRUTURA DA ARVORE DE HUFFMAN (Serializacao Pre-ordem):")?;
    writeln!(out, "{}\n", encoded.tree)?;

    writeln!(out, "B) CONJUNTO DOS CODIGOS GERADOS:")?;
    for (word, code) in &encoded.codes {
        writeln!(out, "  '{word}' : {code}")?;
    }
    writeln!(out)?;

    writeln!(out, "C) TEXTO COMPRIMIDO (Binario - A ser decodificado):")?;
    writeln!(out, "{}\n", encoded.compressed)?;

    writeln!(out, "--- FIM PROCESSO TEXTO {index} ---\n")
}
