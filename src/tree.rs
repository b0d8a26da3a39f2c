//! Huffman tree: leaves carry symbols, internal nodes carry the summed
//! weight of exactly two children.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use crate::error::{CodecError, Result};
use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode<S> {
    Leaf {
        symbol: S,
        weight: usize,
    },
    Internal {
        weight: usize,
        left: Box<HuffNode<S>>,
        right: Box<HuffNode<S>>,
    },
}

impl<S> HuffNode<S> {
    pub fn leaf(symbol: S, weight: usize) -> Self {
        HuffNode::Leaf { symbol, weight }
    }

    /// Joins two subtrees under a new parent; `left` is the first one removed from the queue.
    pub fn merge(left: Self, right: Self) -> Self {
        HuffNode::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            HuffNode::Leaf { symbol, .. } => Some(symbol),
            HuffNode::Internal { .. } => None,
        }
    }

    pub fn children(&self) -> Option<(&HuffNode<S>, &HuffNode<S>)> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    /// Child reached by `bit` (false = left, true = right).
    pub fn child(&self, bit: bool) -> Option<&HuffNode<S>> {
        self.children()
            .map(|(left, right)| if bit { right } else { left })
    }

    /// Number of levels below and including this node; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 1,
            HuffNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Queue entry. `BinaryHeap` is a max-heap, so the ordering is reversed:
/// lighter nodes first, and among equal weights the one pushed earlier.
struct QueuedNode<S> {
    seq: usize,
    node: HuffNode<S>,
}

impl<S> Ord for QueuedNode<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .weight()
            .cmp(&self.node.weight())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<S> PartialOrd for QueuedNode<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> PartialEq for QueuedNode<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for QueuedNode<S> {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffNode<S>,
}

impl<S: Ord + Hash + Clone> HuffmanTree<S> {
    /// Builds the tree by repeatedly merging the two lightest nodes.
    /// Returns `None` when no symbol was counted.
    pub fn from_frequencies(frequencies: &FrequencyTable<S>) -> Option<Self> {
        let mut nodes: BinaryHeap<QueuedNode<S>> = frequencies
            .sorted_by_count()
            .into_iter()
            .enumerate()
            .map(|(seq, (symbol, weight))| QueuedNode { seq, node: HuffNode::leaf(symbol, weight) })
            .collect();
        let mut seq = nodes.len();

        while nodes.len() > 1 {
            let left = nodes.pop()?.node;
            let right = nodes.pop()?.node;
            log::trace!("merging weights {} and {}", left.weight(), right.weight());
            nodes.push(QueuedNode { seq, node: HuffNode::merge(left, right) });
            seq += 1;
        }

        let root = nodes.pop()?.node;
        log::debug!(
            "built Huffman tree: {} leaves, depth {}, weight {}",
            root.leaf_count(),
            root.depth(),
            root.weight()
        );
        Some(HuffmanTree { root })
    }

    /// Walks `bits` from the root, emitting a symbol at every leaf.
    ///
    /// A tree that is a single leaf reads every '0' as one occurrence of its symbol.
    pub fn decode(&self, bits: &str) -> Result<Vec<S>> {
        let mut decoded = Vec::new();
        let mut current = &self.root;
        let mut code_start = 0;
        let mut consumed = 0;

        for (position, ch) in bits.chars().enumerate() {
            let bit = match ch {
                '0' => false,
                '1' => true,
                found => return Err(CodecError::InvalidBit { found, position }),
            };
            consumed = position + 1;

            if let HuffNode::Leaf { symbol, .. } = &self.root {
                if bit {
                    return Err(CodecError::UnmappedPath { position });
                }
                decoded.push(symbol.clone());
                code_start = consumed;
                continue;
            }

            current = current
                .child(bit)
                .ok_or(CodecError::UnmappedPath { position })?;
            if let Some(symbol) = current.symbol() {
                decoded.push(symbol.clone());
                current = &self.root;
                code_start = consumed;
            }
        }

        if code_start < consumed {
            return Err(CodecError::IncompleteCode { position: code_start });
        }
        Ok(decoded)
    }
}

impl<S> HuffmanTree<S> {
    pub fn root(&self) -> &HuffNode<S> {
        &self.root
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Total weight, equal to the number of encoded symbols.
    pub fn weight(&self) -> usize {
        self.root.weight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(text: &str) -> HuffmanTree<char> {
        let frequencies: FrequencyTable<char> = text.chars().collect();
        HuffmanTree::from_frequencies(&frequencies).unwrap()
    }

    #[test]
    fn empty_table_has_no_tree() {
        assert!(HuffmanTree::<char>::from_frequencies(&FrequencyTable::new()).is_none());
    }

    #[test]
    fn single_symbol_is_the_root() {
        let tree = tree_of("aaaa");
        assert_eq!(tree.root(), &HuffNode::leaf('a', 4));
        assert!(tree.root().is_leaf());
        assert_eq!(tree.depth(), 1);
        assert_eq!(tree.decode("0000").unwrap(), vec!['a'; 4]);
        assert!(matches!(tree.decode("01"), Err(CodecError::UnmappedPath { position: 1 })));
    }

    #[test]
    fn first_removed_becomes_left_child() {
        // a:1 and b:2 -> a is lighter, so it goes left.
        let tree = tree_of("abb");
        let (left, right) = tree.root().children().unwrap();
        assert_eq!(left, &HuffNode::leaf('a', 1));
        assert_eq!(right, &HuffNode::leaf('b', 2));
        assert_eq!(tree.weight(), 3);
    }

    #[test]
    fn every_internal_node_has_two_children_and_summed_weight() {
        fn check(node: &HuffNode<char>) {
            if let Some((left, right)) = node.children() {
                assert_eq!(node.weight(), left.weight() + right.weight());
                check(left);
                check(right);
            }
        }
        let tree = tree_of("the quick brown fox jumps over the lazy dog");
        check(tree.root());
        assert_eq!(tree.weight(), 43);
        assert_eq!(tree.leaf_count(), 27);
    }

    #[test]
    fn ties_are_deterministic() {
        let text = "abcdefgh";
        assert_eq!(tree_of(text), tree_of(text));
        // eight equal weights make a complete tree
        assert_eq!(tree_of(text).depth(), 4);
    }

    #[test]
    fn rejects_malformed_bits() {
        let tree = tree_of("abb");
        assert!(matches!(tree.decode("0x1"), Err(CodecError::InvalidBit { found: 'x', position: 1 })));
        assert_eq!(tree.decode("011").unwrap(), vec!['a', 'b', 'b']);
        let deeper = tree_of("abcc");
        // c = "0", a = "10", b = "11"
        assert!(matches!(deeper.decode("01"), Err(CodecError::IncompleteCode { position: 1 })));
    }
}
