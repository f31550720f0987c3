//! Arena-backed dictionary trie shared by the LZ78 and LZW codecs.
//!
//! Every phrase in the dictionary is a path from the root to some node. Nodes
//! live in a pre-sized arena and are addressed by [`NodeId`]; node `0` is the
//! root and carries no symbol. Each node keeps a back-link to its parent so a
//! decoder can rebuild a phrase from its id alone.
//!
//! The capacity (root included) is fixed at construction. Once the arena is
//! full, [`DictionaryTrie::insert`] becomes a no-op returning `None` while
//! lookups keep working against the frozen trie. Encoders and decoders make
//! the same insert-or-skip decision, so a full dictionary never breaks a
//! round trip.

use crate::Symbol;
use crate::alphabet::Alphabet;
use crate::error::{LzError, Result};
use std::collections::HashMap;
use std::fmt;

/// Index of a node in a [`DictionaryTrie`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node (empty phrase).
    pub const ROOT: Self = Self(0);

    /// Wrap a raw node index.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw index value.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Index into the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the root node.
    pub const fn is_root(self) -> bool {
        self.0 == 0
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-root dictionary entry.
#[derive(Debug, Clone, Copy)]
struct DictionaryNode {
    /// Parent node (the phrase minus its last symbol).
    parent: NodeId,
    /// Symbol on the edge from `parent` to this node.
    symbol: Symbol,
    /// First symbol of the phrase.
    first: Symbol,
    /// Phrase length.
    depth: u32,
}

/// Prefix tree with parent back-links and bounded capacity.
#[derive(Debug, Clone)]
pub struct DictionaryTrie {
    /// Arena of nodes; slot 0 is the root.
    nodes: Vec<DictionaryNode>,
    /// Child edges: (parent, symbol) -> child.
    children: HashMap<(NodeId, Symbol), NodeId>,
    /// Maximum number of nodes, root included.
    capacity: usize,
}

impl DictionaryTrie {
    /// Create an empty trie holding at most `capacity` nodes (root included).
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(LzError::invalid_config(
                "dictionary capacity must include the root",
            ));
        }
        if capacity > u32::MAX as usize {
            return Err(LzError::invalid_config(format!(
                "dictionary capacity {capacity} exceeds {}",
                u32::MAX
            )));
        }

        let reserve = capacity.min(1 << 16);
        let mut nodes = Vec::with_capacity(reserve);
        nodes.push(DictionaryNode {
            parent: NodeId::ROOT,
            symbol: 0,
            first: 0,
            depth: 0,
        });

        Ok(Self {
            nodes,
            children: HashMap::with_capacity(reserve),
            capacity,
        })
    }

    /// Create a trie pre-seeded with one child of the root per alphabet symbol.
    ///
    /// Symbol `s` ends up at node `s + 1`. Fails if the capacity cannot hold
    /// the root plus every seed.
    pub fn seeded(capacity: usize, alphabet: Alphabet) -> Result<Self> {
        let needed = usize::from(alphabet.size()) + 1;
        if capacity < needed {
            return Err(LzError::invalid_config(format!(
                "dictionary capacity {capacity} cannot hold root plus {} seeds",
                alphabet.size()
            )));
        }

        let mut trie = Self::new(capacity)?;
        for symbol in alphabet.symbols() {
            trie.insert(NodeId::ROOT, symbol);
        }
        Ok(trie)
    }

    /// Follow the edge labelled `symbol` out of `node`.
    #[inline]
    pub fn lookup(&self, node: NodeId, symbol: Symbol) -> Option<NodeId> {
        self.children.get(&(node, symbol)).copied()
    }

    /// Add a child of `parent` labelled `symbol`.
    ///
    /// Returns `None` without touching the trie when it is full.
    pub fn insert(&mut self, parent: NodeId, symbol: Symbol) -> Option<NodeId> {
        if self.is_full() {
            return None;
        }
        let parent_node = *self.nodes.get(parent.index())?;

        let id = self.next_id();
        let first = if parent.is_root() {
            symbol
        } else {
            parent_node.first
        };
        self.nodes.push(DictionaryNode {
            parent,
            symbol,
            first,
            depth: parent_node.depth + 1,
        });
        self.children.insert((parent, symbol), id);
        Some(id)
    }

    /// Whether `node` has been created.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.nodes.len()
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root is always present.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Maximum number of nodes, root included.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether further inserts will be skipped.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.nodes.len() >= self.capacity
    }

    /// Id the next successful insert will receive.
    #[inline]
    pub fn next_id(&self) -> NodeId {
        // len <= capacity <= u32::MAX
        NodeId(self.nodes.len() as u32)
    }

    /// Length of the phrase ending at `node`.
    pub fn depth(&self, node: NodeId) -> Result<usize> {
        Ok(self.node(node)?.depth as usize)
    }

    /// First symbol of the phrase ending at `node` (not defined for the root).
    pub fn first_symbol(&self, node: NodeId) -> Result<Symbol> {
        if node.is_root() {
            return Err(self.invalid(node));
        }
        Ok(self.node(node)?.first)
    }

    /// The phrase ending at `node`, ordered from the root down.
    pub fn path_to_root(&self, node: NodeId) -> Result<Vec<Symbol>> {
        let mut phrase = Vec::with_capacity(self.depth(node)?);
        self.append_phrase(node, &mut phrase)?;
        Ok(phrase)
    }

    /// Append the phrase ending at `node` to `out`; returns the phrase length.
    ///
    /// Walks parent links (which yields the phrase backwards) and reverses
    /// the appended tail in place.
    pub fn append_phrase(&self, node: NodeId, out: &mut Vec<Symbol>) -> Result<usize> {
        let start = out.len();
        out.reserve(self.depth(node)?);

        let mut current = node;
        while !current.is_root() {
            let entry = self.nodes[current.index()];
            out.push(entry.symbol);
            current = entry.parent;
        }
        out[start..].reverse();
        Ok(out.len() - start)
    }

    fn node(&self, node: NodeId) -> Result<&DictionaryNode> {
        self.nodes.get(node.index()).ok_or_else(|| self.invalid(node))
    }

    fn invalid(&self, node: NodeId) -> LzError {
        LzError::invalid_code(node.get(), self.next_id().get())
    }
}
