use thiserror::Error;

use crate::huffman::Symbol;

pub type Result<T> = std::result::Result<T, HuffmanError>;

/// Errors emitted while building a Huffman tree or reading its input.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// The frequency table has no entries, so there is nothing to build a tree from.
    #[error("frequency table is empty")]
    EmptyInput,

    /// A symbol was supplied with a frequency of zero.
    #[error("symbol {0:?} has a frequency of zero")]
    ZeroFrequency(Symbol),

    /// Summing subtree frequencies overflowed `u64`.
    #[error("total frequency overflows u64")]
    FrequencyOverflow,

    /// The input text could not be read.
    #[error("could not read input: {0}")]
    Io(#[from] std::io::Error),
}
