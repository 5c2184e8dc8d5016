use log::debug;

use crate::huffman::FreqTable;

/// Counts how often each `char` occurs in `text`.
pub fn count_symbols(text: &str) -> FreqTable {
    let mut freq = FreqTable::new();
    for c in text.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    debug!(
        "Counted {} symbols, {} distinct",
        text.chars().count(),
        freq.len()
    );
    freq
}

/// Shannon entropy of the distribution in bits per symbol. Lower bound for the
/// average Huffman code length.
pub fn entropy_from_freq(freq: &FreqTable) -> f64 {
    let total: u64 = freq.values().sum();
    if total == 0 {
        return 0.0;
    }
    let total_f = total as f64;

    let entropy: f64 = freq
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total_f;
            -p * p.log2()
        })
        .sum();

    debug!(
        "Calculated entropy: {:.4} bits/symbol (Total samples: {})",
        entropy, total
    );
    entropy
}
