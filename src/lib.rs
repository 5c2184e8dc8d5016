//! Huffman code construction.
//!
//! A frequency table goes in, a Huffman tree and a symbol-to-code table come
//! out:
//!
//! ```
//! use huffman_codes::{build_code_table, build_huffman_tree, count_symbols};
//!
//! let freqs = count_symbols("hello world");
//! let tree = build_huffman_tree(&freqs)?;
//! let codes = build_code_table(&tree);
//!
//! assert_eq!(tree.freq(), 11);
//! assert_eq!(codes.len(), 8);
//! # Ok::<(), huffman_codes::HuffmanError>(())
//! ```

pub mod error;
pub mod freq;
pub mod huffman;
pub mod report;

pub use error::{HuffmanError, Result};
pub use freq::{count_symbols, entropy_from_freq};
pub use huffman::{
    CodeTable, FreqTable, HuffmanTree, Node, Symbol, build_code_table, build_huffman_tree,
};
pub use report::{CodeReport, Row, SortOrder};
