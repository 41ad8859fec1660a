use log::{debug, trace};

use crate::tools::freq_count::FrequencyTable;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Byte value given to the synthesized partner leaf when only one symbol is present.
pub const DUMMY_SYMBOL: u8 = 0;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData {
    Kids(Box<Node>, Box<Node>),
    Leaf(u8),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node {
    pub weight: u64,
    /// Creation sequence number. Breaks ties between equal weights.
    pub order: u32,
    pub node_data: NodeData,
}

impl Node {
    /// Create a new node
    pub fn new(weight: u64, order: u32, node_data: NodeData) -> Node {
        Node {
            weight,
            order,
            node_data,
        }
    }
}

impl Ord for Node {
    /// Sort Nodes by decreasing weight and decreasing creation order, so a max-heap pops the
    /// lightest, oldest node first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.order.cmp(&self.order))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single prefix code. The code is the low `len` bits of `bits`, most significant bit first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Code {
    pub len: u8,
    pub bits: u64,
}

/// Code for every byte value. Bytes absent from the histogram have `len == 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Code; 256],
}

impl CodeTable {
    pub fn new() -> Self {
        Self {
            codes: [Code::default(); 256],
        }
    }

    pub fn get(&self, byte: u8) -> Code {
        self.codes[byte as usize]
    }

    /// Iterate over (byte, code) for every byte that has a code.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter(|(_, c)| c.len > 0)
            .map(|(b, c)| (b as u8, *c))
    }
}

impl Default for CodeTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Huffman tree rebuilt from a frequency table. Never serialized: encoder and decoder both rebuild
/// it from the same table, so construction must be fully deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<Node>,
}

impl HuffmanTree {
    /// Build the tree. Leaves are created in ascending byte order; each merge takes the two nodes
    /// with the lowest (weight, order) key, first one on the left.
    pub fn from_freqs(freqs: &FrequencyTable) -> Self {
        let mut order = 0_u32;
        let mut next_order = || {
            order += 1;
            order - 1
        };

        let mut heap = freqs
            .iter()
            .enumerate()
            .filter(|&(_, &f)| f > 0)
            .map(|(b, &f)| Node::new(f as u64, next_order(), NodeData::Leaf(b as u8)))
            .collect::<BinaryHeap<Node>>();

        let root = match heap.len() {
            0 => None,
            1 => {
                // One symbol only. Pair it with a zero weight dummy so it gets a 1 bit code.
                let only = heap.pop().map(Box::new);
                only.map(|leaf| {
                    let dummy = Node::new(0, next_order(), NodeData::Leaf(DUMMY_SYMBOL));
                    Node::new(
                        leaf.weight,
                        next_order(),
                        NodeData::Kids(leaf, Box::new(dummy)),
                    )
                })
            }
            _ => {
                while heap.len() > 1 {
                    if let (Some(left), Some(right)) = (heap.pop(), heap.pop()) {
                        trace!(
                            "merge {}#{} + {}#{}",
                            left.weight,
                            left.order,
                            right.weight,
                            right.order
                        );
                        heap.push(Node::new(
                            left.weight + right.weight,
                            next_order(),
                            NodeData::Kids(Box::new(left), Box::new(right)),
                        ));
                    }
                }
                heap.pop()
            }
        };
        debug!(
            "Huffman tree built, root weight {}",
            root.as_ref().map_or(0, |r| r.weight)
        );

        Self { root }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Derive the code table by walking the tree: 0 on the left edge, 1 on the right edge.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        if let Some(root) = &self.root {
            return_leaves(root, Code::default(), &mut table);
        }
        table
    }
}

/// Recursively walk the tree, recording the path to every weighted leaf.
fn return_leaves(node: &Node, code: Code, table: &mut CodeTable) {
    match &node.node_data {
        NodeData::Kids(left_child, right_child) => {
            let left = Code {
                len: code.len + 1,
                bits: code.bits << 1,
            };
            let right = Code {
                len: code.len + 1,
                bits: (code.bits << 1) | 1,
            };
            return_leaves(left_child, left, table);
            return_leaves(right_child, right, table);
        }
        // The zero weight dummy must not claim a code (its byte may be the real symbol's).
        NodeData::Leaf(sym) if node.weight > 0 => {
            table.codes[*sym as usize] = code;
        }
        NodeData::Leaf(_) => {}
    };
}
