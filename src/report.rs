//! Tabular view of a code table: one `symbol / frequency / code` row per leaf.

use std::fmt;

use clap::ValueEnum;

use crate::huffman::{CodeTable, HuffmanTree, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub symbol: Symbol,
    pub freq: u64,
    pub code: String,
}

/// Order in which [`CodeReport`] rows are listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Leaves left to right, the order a depth-first walk reaches them.
    #[default]
    Traversal,
    /// Most frequent first.
    Freq,
    /// By code point.
    Symbol,
}

#[derive(Debug, Clone)]
pub struct CodeReport {
    rows: Vec<Row>,
}

impl CodeReport {
    /// Pairs every leaf of `tree` with its code from `codes`.
    ///
    /// Leaves missing from `codes` are skipped; a table built from the same
    /// tree always covers every leaf.
    pub fn new(tree: &HuffmanTree, codes: &CodeTable) -> Self {
        let rows = tree
            .leaves()
            .into_iter()
            .filter_map(|(symbol, freq)| {
                codes.get(&symbol).map(|code| Row {
                    symbol,
                    freq,
                    code: code.clone(),
                })
            })
            .collect();
        CodeReport { rows }
    }

    pub fn sorted(mut self, order: SortOrder) -> Self {
        match order {
            SortOrder::Traversal => {}
            SortOrder::Freq => self
                .rows
                .sort_by(|a, b| b.freq.cmp(&a.freq).then(a.code.cmp(&b.code))),
            SortOrder::Symbol => self.rows.sort_by_key(|row| row.symbol),
        }
        self
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn total_freq(&self) -> u64 {
        self.rows.iter().map(|row| row.freq).sum()
    }

    /// Bits needed to encode the whole input, `sum(freq * code length)`.
    ///
    /// Counted in `u128`: the total frequency fits in a `u64`, but weighting
    /// it by code lengths may not.
    pub fn encoded_bits(&self) -> u128 {
        self.rows
            .iter()
            .map(|row| u128::from(row.freq) * row.code.len() as u128)
            .sum()
    }

    /// Frequency-weighted code length in bits per symbol.
    pub fn average_code_len(&self) -> f64 {
        match self.total_freq() {
            0 => 0.0,
            total => self.encoded_bits() as f64 / total as f64,
        }
    }
}

fn display_symbol(symbol: Symbol) -> String {
    match symbol {
        ' ' => String::from("' '"),
        c => c.escape_debug().to_string(),
    }
}

impl fmt::Display for CodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Symbol\tFreq\tCode")?;
        for row in &self.rows {
            writeln!(
                f,
                "{}\t{}\t{}",
                display_symbol(row.symbol),
                row.freq,
                row.code
            )?;
        }
        Ok(())
    }
}
