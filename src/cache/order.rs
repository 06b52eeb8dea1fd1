//! Order Index Module
//!
//! Tracks insertion order for FIFO and LIFO eviction.

use std::collections::HashMap;
use std::hash::Hash;

type NodeIndex = usize;

const NULL_INDEX: NodeIndex = usize::MAX;

/// A key plus links to its neighbours in insertion order.
#[derive(Debug, Clone)]
struct OrderNode<K> {
    key: K,
    prev: NodeIndex,
    next: NodeIndex,
}

// == Order Index ==
/// Doubly linked list of keys backed by an arena, paired with a key to node map.
///
/// - Front = earliest insertion position
/// - Back = most recent insertion position
///
/// Every operation is O(1). Freed nodes are recycled through a free list.
#[derive(Debug, Clone)]
pub struct OrderIndex<K> {
    /// Node arena
    arena: Vec<OrderNode<K>>,
    /// Indices of recycled nodes
    free_list: Vec<NodeIndex>,
    /// Key to node index
    nodes: HashMap<K, NodeIndex>,
    head: NodeIndex,
    tail: NodeIndex,
}

impl<K> Default for OrderIndex<K> {
    fn default() -> Self {
        Self {
            arena: Vec::new(),
            free_list: Vec::new(),
            nodes: HashMap::new(),
            head: NULL_INDEX,
            tail: NULL_INDEX,
        }
    }
}

impl<K: Hash + Eq + Clone> OrderIndex<K> {
    // == Constructor ==
    /// Creates a new empty order index.
    pub fn new() -> Self {
        Self::default()
    }

    // == Push Back ==
    /// Appends a key at the most recent position.
    ///
    /// If the key is already tracked it is moved there instead, so a key is
    /// never present twice.
    pub fn push_back(&mut self, key: K) {
        if let Some(&idx) = self.nodes.get(&key) {
            self.move_idx_to_back(idx);
            return;
        }

        let idx = self.alloc_node(OrderNode {
            key: key.clone(),
            prev: NULL_INDEX,
            next: NULL_INDEX,
        });
        self.nodes.insert(key, idx);
        self.link_back(idx);
    }

    // == Move To Back ==
    /// Moves a tracked key to the most recent position.
    ///
    /// Returns false if the key is not tracked.
    pub fn move_to_back(&mut self, key: &K) -> bool {
        match self.nodes.get(key) {
            Some(&idx) => {
                self.move_idx_to_back(idx);
                true
            }
            None => false,
        }
    }

    // == Pop Front ==
    /// Removes and returns the earliest key.
    pub fn pop_front(&mut self) -> Option<K> {
        if self.head == NULL_INDEX {
            return None;
        }
        Some(self.release(self.head))
    }

    // == Pop Back ==
    /// Removes and returns the most recent key.
    pub fn pop_back(&mut self) -> Option<K> {
        if self.tail == NULL_INDEX {
            return None;
        }
        Some(self.release(self.tail))
    }

    // == Remove ==
    /// Removes a key from anywhere in the order. Returns false if untracked.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.nodes.get(key) {
            Some(&idx) => {
                self.release(idx);
                true
            }
            None => false,
        }
    }

    /// Returns the earliest key without removing it.
    pub fn peek_front(&self) -> Option<&K> {
        (self.head != NULL_INDEX).then(|| &self.arena[self.head].key)
    }

    /// Returns the most recent key without removing it.
    pub fn peek_back(&self) -> Option<&K> {
        (self.tail != NULL_INDEX).then(|| &self.arena[self.tail].key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // == Iter ==
    /// Iterates keys from front (earliest) to back (most recent).
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            arena: &self.arena,
            cursor: self.head,
        }
    }

    // == Internal: Node Management ==
    fn alloc_node(&mut self, node: OrderNode<K>) -> NodeIndex {
        if let Some(idx) = self.free_list.pop() {
            self.arena[idx] = node;
            idx
        } else {
            let idx = self.arena.len();
            self.arena.push(node);
            idx
        }
    }

    /// Unlinks a node, frees its slot and returns its key.
    fn release(&mut self, idx: NodeIndex) -> K {
        self.unlink(idx);
        let key = self.arena[idx].key.clone();
        self.nodes.remove(&key);
        self.free_list.push(idx);
        key
    }

    // == Internal: Linked List Operations ==
    fn unlink(&mut self, idx: NodeIndex) {
        let prev = self.arena[idx].prev;
        let next = self.arena[idx].next;

        if prev != NULL_INDEX {
            self.arena[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NULL_INDEX {
            self.arena[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.arena[idx].prev = NULL_INDEX;
        self.arena[idx].next = NULL_INDEX;
    }

    fn link_back(&mut self, idx: NodeIndex) {
        self.arena[idx].prev = self.tail;
        self.arena[idx].next = NULL_INDEX;

        if self.tail != NULL_INDEX {
            self.arena[self.tail].next = idx;
        }
        self.tail = idx;

        if self.head == NULL_INDEX {
            self.head = idx;
        }
    }

    fn move_idx_to_back(&mut self, idx: NodeIndex) {
        if self.tail == idx {
            return;
        }
        self.unlink(idx);
        self.link_back(idx);
    }
}

// == Iterator ==
/// Front-to-back iterator over an [`OrderIndex`].
pub struct Iter<'a, K> {
    arena: &'a [OrderNode<K>],
    cursor: NodeIndex,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == NULL_INDEX {
            return None;
        }
        let node = &self.arena[self.cursor];
        self.cursor = node.next;
        Some(&node.key)
    }
}
