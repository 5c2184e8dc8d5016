use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};

use crate::error::{HuffmanError, Result};

pub type Symbol = char;
pub type CodeTable = HashMap<Symbol, String>;
pub type FreqTable = HashMap<Symbol, u64>;

#[derive(Debug, Eq, PartialEq)]
pub enum Node {
    Leaf {
        symbol: Symbol,
        freq: u64,
    },
    Internal {
        freq: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(*symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    pub fn internal_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => {
                1 + left.internal_count() + right.internal_count()
            }
        }
    }

    /// Leaves as `(symbol, freq)` pairs, left to right.
    pub fn leaves(&self) -> Vec<(Symbol, u64)> {
        let mut out = Vec::with_capacity(self.leaf_count());
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<(Symbol, u64)>) {
        match self {
            Node::Leaf { symbol, freq } => out.push((*symbol, *freq)),
            Node::Internal { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }
}

pub type HuffmanTree = Node;

/// Min-heap entry. `BinaryHeap` is a max-heap, so the ordering is reversed;
/// equal frequencies pop in the order they were pushed.
struct HeapNode {
    freq: u64,
    seq: usize,
    node: Box<Node>,
}

impl Ord for HeapNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .freq
            .cmp(&self.freq)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapNode {}

/// Builds a Huffman tree by repeatedly merging the two lightest subtrees.
///
/// The first node popped becomes the left child, the second the right. Input
/// entries are sorted by `(freq, symbol)` before they enter the heap, so the
/// resulting tree does not depend on the hash map's iteration order.
///
/// # Errors
///
/// [`HuffmanError::EmptyInput`] for an empty table,
/// [`HuffmanError::ZeroFrequency`] if any symbol has a count of zero and
/// [`HuffmanError::FrequencyOverflow`] if the total does not fit in a `u64`.
pub fn build_huffman_tree(frequencies: &FreqTable) -> Result<HuffmanTree> {
    debug!(
        "Building Huffman Tree from {} unique symbols",
        frequencies.len()
    );

    if frequencies.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }

    let mut freq_vec: Vec<(Symbol, u64)> = frequencies.iter().map(|(&s, &f)| (s, f)).collect();
    freq_vec.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));

    if let Some(&(symbol, _)) = freq_vec.iter().find(|(_, freq)| *freq == 0) {
        return Err(HuffmanError::ZeroFrequency(symbol));
    }

    let mut heap = BinaryHeap::with_capacity(freq_vec.len());
    let mut seq = 0usize;

    for (symbol, freq) in freq_vec {
        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Leaf { symbol, freq }),
        });
        seq += 1;
    }
    debug!("Initial heap size: {}", heap.len());

    loop {
        let left = heap.pop().ok_or(HuffmanError::EmptyInput)?;
        let Some(right) = heap.pop() else {
            debug!("Tree construction complete, root weight {}", left.freq);
            return Ok(*left.node);
        };

        let freq = left
            .freq
            .checked_add(right.freq)
            .ok_or(HuffmanError::FrequencyOverflow)?;
        trace!(
            "Merging weights {} + {} -> {}",
            left.freq, right.freq, freq
        );

        heap.push(HeapNode {
            freq,
            seq,
            node: Box::new(Node::Internal {
                freq,
                left: left.node,
                right: right.node,
            }),
        });
        seq += 1;
    }
}

/// Derives each symbol's code from its path in the tree, `'0'` for a left
/// edge and `'1'` for a right edge.
///
/// A tree made of a single leaf has no edges; its symbol is given the
/// one-bit code `"0"` so every symbol costs at least one bit.
pub fn build_code_table(tree: &HuffmanTree) -> CodeTable {
    let mut table = CodeTable::with_capacity(tree.leaf_count());

    if let Some(symbol) = tree.symbol() {
        trace!("Single-symbol tree, assigning {:?} the code '0'", symbol);
        table.insert(symbol, String::from("0"));
        return table;
    }

    let mut prefix = String::new();
    assign_codes(tree, &mut prefix, &mut table);
    debug!("Code table built with {} entries", table.len());
    table
}

fn assign_codes(node: &Node, prefix: &mut String, table: &mut CodeTable) {
    match node {
        Node::Leaf { symbol, .. } => {
            trace!("Assigning code to {:?} : '{}'", symbol, prefix);
            table.insert(*symbol, prefix.clone());
        }
        Node::Internal { left, right, .. } => {
            prefix.push('0');
            assign_codes(left, prefix, table);
            prefix.pop();

            prefix.push('1');
            assign_codes(right, prefix, table);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(char, u64)]) -> FreqTable {
        pairs.iter().copied().collect()
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_cross_threads() {
        assert_send_sync::<Node>();
        assert_send_sync::<FreqTable>();
        assert_send_sync::<CodeTable>();
        assert_send_sync::<HuffmanError>();
    }

    fn assert_weights_sum(node: &Node) {
        if let Node::Internal { freq, left, right } = node {
            assert_eq!(*freq, left.freq() + right.freq());
            assert_weights_sum(left);
            assert_weights_sum(right);
        }
    }

    #[test]
    fn empty_table_is_rejected() {
        let err = build_huffman_tree(&FreqTable::new()).unwrap_err();
        assert!(matches!(err, HuffmanError::EmptyInput));
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let err = build_huffman_tree(&table(&[('a', 3), ('b', 0)])).unwrap_err();
        assert!(matches!(err, HuffmanError::ZeroFrequency('b')));
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let err = build_huffman_tree(&table(&[('a', u64::MAX), ('b', 1)])).unwrap_err();
        assert!(matches!(err, HuffmanError::FrequencyOverflow));
    }

    #[test]
    fn single_symbol_is_a_lone_leaf() {
        let tree = build_huffman_tree(&table(&[('a', 5)])).unwrap();
        assert_eq!(tree, Node::Leaf { symbol: 'a', freq: 5 });

        let codes = build_code_table(&tree);
        assert_eq!(codes.len(), 1);
        assert_eq!(codes[&'a'], "0");
    }

    #[test]
    fn two_symbols_lighter_goes_left() {
        let tree = build_huffman_tree(&table(&[('x', 7), ('y', 2)])).unwrap();
        match &tree {
            Node::Internal { freq, left, right } => {
                assert_eq!(*freq, 9);
                assert_eq!(left.symbol(), Some('y'));
                assert_eq!(right.symbol(), Some('x'));
            }
            Node::Leaf { .. } => panic!("expected an internal root"),
        }

        let codes = build_code_table(&tree);
        assert_eq!(codes[&'y'], "0");
        assert_eq!(codes[&'x'], "1");
    }

    #[test]
    fn equal_weights_pop_in_push_order() {
        // a, b, c all weigh 1: (a, b) merge first, then c joins the merged pair.
        let tree = build_huffman_tree(&table(&[('c', 1), ('a', 1), ('b', 1)])).unwrap();
        let codes = build_code_table(&tree);
        assert_eq!(codes[&'c'], "0");
        assert_eq!(codes[&'a'], "10");
        assert_eq!(codes[&'b'], "11");
    }

    #[test]
    fn tree_shape_and_weights() {
        let freqs = table(&[('a', 45), ('b', 13), ('c', 12), ('d', 16), ('e', 9), ('f', 5)]);
        let tree = build_huffman_tree(&freqs).unwrap();

        assert_eq!(tree.freq(), 100);
        assert_eq!(tree.leaf_count(), 6);
        assert_eq!(tree.internal_count(), 5);
        assert_weights_sum(&tree);

        let codes = build_code_table(&tree);
        let lengths: HashMap<char, usize> = codes.iter().map(|(&s, c)| (s, c.len())).collect();
        assert_eq!(lengths[&'a'], 1);
        assert_eq!(lengths[&'b'], 3);
        assert_eq!(lengths[&'c'], 3);
        assert_eq!(lengths[&'d'], 3);
        assert_eq!(lengths[&'e'], 4);
        assert_eq!(lengths[&'f'], 4);
    }

    #[test]
    fn sibling_prefixes_do_not_leak() {
        let freqs = table(&[('a', 1), ('b', 1), ('c', 2), ('d', 4)]);
        let tree = build_huffman_tree(&freqs).unwrap();
        let codes = build_code_table(&tree);

        // a=1 b=1 -> (2); c=2, (2) -> (4); d=4, (4) -> root
        assert_eq!(codes[&'d'], "0");
        assert_eq!(codes[&'c'], "10");
        assert_eq!(codes[&'a'], "110");
        assert_eq!(codes[&'b'], "111");
    }

    #[test]
    fn leaves_are_listed_left_to_right() {
        let tree = build_huffman_tree(&table(&[('x', 7), ('y', 2), ('z', 1)])).unwrap();
        assert_eq!(tree.leaves(), vec![('z', 1), ('y', 2), ('x', 7)]);
        assert!(!tree.is_leaf());
    }
}
