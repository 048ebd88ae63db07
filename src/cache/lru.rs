//! LRU Tracker Module
//!
//! Implements the recency sequence used for LRU eviction.

use std::collections::HashMap;
use std::hash::Hash;

/// Null link in the node arena.
const NIL: usize = usize::MAX;

// == Node ==
/// Slot in the node arena. `key` is `None` while the slot sits on the free list.
#[derive(Debug)]
struct Node<K> {
    key: Option<K>,
    prev: usize,
    next: usize,
}

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys live in an index-linked list inside a `Vec` arena:
/// - Front (head) = Most recently used
/// - Back (tail) = Least recently used
///
/// A side index maps each key to its arena slot, so touching a key is O(1)
/// instead of a scan over the whole order.
#[derive(Debug)]
pub struct LruTracker<K> {
    /// Arena of list nodes
    nodes: Vec<Node<K>>,
    /// Key -> arena slot
    index: HashMap<K, usize>,
    /// Most recently used slot
    head: usize,
    /// Least recently used slot
    tail: usize,
    /// Head of the free-slot list
    free: usize,
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            head: NIL,
            tail: NIL,
            free: NIL,
        }
    }
}

impl<K: Eq + Hash + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tracker with room for `capacity` keys before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    // == Touch ==
    /// Marks a key as recently used (moves to front).
    ///
    /// If key exists, it is unlinked and relinked at the front.
    /// If key is new, it is added to the front.
    pub fn touch(&mut self, key: &K) {
        if let Some(&idx) = self.index.get(key) {
            self.move_to_front(idx);
            return;
        }

        let idx = self.alloc(key.clone());
        self.index.insert(key.clone(), idx);
        self.attach_front(idx);
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        if self.tail == NIL {
            return None;
        }

        let idx = self.tail;
        self.detach(idx);
        let key = self.nodes[idx].key.take()?;
        self.release(idx);
        self.index.remove(&key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.nodes.get(self.tail).and_then(|node| node.key.as_ref())
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    // == Iter ==
    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    // == List Plumbing ==
    fn move_to_front(&mut self, idx: usize) {
        if self.head == idx {
            return;
        }
        self.detach(idx);
        self.attach_front(idx);
    }

    fn detach(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn attach_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;

        if self.head == NIL {
            self.tail = idx;
        } else {
            self.nodes[self.head].prev = idx;
        }
        self.head = idx;
    }

    fn alloc(&mut self, key: K) -> usize {
        let node = Node {
            key: Some(key),
            prev: NIL,
            next: NIL,
        };

        if self.free == NIL {
            self.nodes.push(node);
            self.nodes.len() - 1
        } else {
            let idx = self.free;
            self.free = self.nodes[idx].next;
            self.nodes[idx] = node;
            idx
        }
    }

    fn release(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.free;
        self.free = idx;
    }
}

// == Iterator ==
/// Front-to-back iterator over tracked keys.
pub struct Iter<'a, K> {
    nodes: &'a [Node<K>],
    cursor: usize,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor)?;
        self.cursor = node.next;
        node.key.as_ref()
    }
}
