//! Persistent hash array mapped trie backing [`DisjointSet`](super::DisjointSet).
//!
//! A 32-way branching trie where successive 5-bit slices of a key's hash pick
//! the child at each level. Branch nodes store a bitmap of occupied slots
//! and a compressed child array, so an insert copies one small array per
//! level on the path to the key and shares everything else.
//!
//! The trie supports only what a forest needs: lookup, insert-or-replace,
//! length and iteration. Entries are never removed.

use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use smallvec::SmallVec;

use super::ReferenceCounter;

// =============================================================================
// Constants
// =============================================================================

/// Bits of the hash consumed per level (2^5 = 32 slots).
const BITS_PER_LEVEL: usize = 5;

/// Bit mask for extracting the slot index within a node.
const MASK: u64 = (1 << BITS_PER_LEVEL) - 1;

// =============================================================================
// Hash computation
// =============================================================================

#[cfg(feature = "fxhash")]
type ElementHasher = rustc_hash::FxHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type ElementHasher = ahash::AHasher;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type ElementHasher = std::collections::hash_map::DefaultHasher;

/// Hashes a key with the compile-time selected hasher.
///
/// Every hasher is built from fixed keys, so all versions of a trie agree on
/// where a key lives.
#[inline]
fn compute_hash<K: Hash + ?Sized>(key: &K) -> u64 {
    BuildHasherDefault::<ElementHasher>::default().hash_one(key)
}

/// Extracts the slot index at a given depth from a hash.
///
/// Depths past the last bits of the hash all map to slot 0.
#[inline]
const fn hash_index(hash: u64, depth: usize) -> usize {
    let shift = depth * BITS_PER_LEVEL;
    if shift >= u64::BITS as usize {
        return 0;
    }
    ((hash >> shift) & MASK) as usize
}

/// Position of `bit` within the compressed child array.
#[inline]
const fn compressed_position(bitmap: u32, bit: u32) -> usize {
    (bitmap & (bit - 1)).count_ones() as usize
}

// =============================================================================
// Node Definition
// =============================================================================

#[derive(Clone)]
enum Node<K, V> {
    /// Bitmap-indexed branch.
    Branch {
        bitmap: u32,
        children: ReferenceCounter<[Child<K, V>]>,
    },
    /// Keys whose full hashes are equal.
    Collision {
        hash: u64,
        entries: ReferenceCounter<[(K, V)]>,
    },
}

#[derive(Clone)]
enum Child<K, V> {
    Entry { hash: u64, key: K, value: V },
    Node(ReferenceCounter<Node<K, V>>),
}

impl<K, V> Node<K, V> {
    fn empty() -> Self {
        Self::Branch {
            bitmap: 0,
            children: ReferenceCounter::from(Vec::new()),
        }
    }
}

// =============================================================================
// HashTrie Definition
// =============================================================================

/// A persistent map from `K` to `V`.
#[derive(Clone)]
pub(crate) struct HashTrie<K, V> {
    root: Node<K, V>,
    length: usize,
}

impl<K, V> HashTrie<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            root: Node::empty(),
            length: 0,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.length
    }

    pub(crate) fn iter(&self) -> HashTrieIterator<'_, K, V> {
        let mut iterator = HashTrieIterator {
            branches: SmallVec::new(),
            collision: Default::default(),
        };
        iterator.descend(&self.root);
        iterator
    }
}

impl<K: Clone + Hash + Eq, V: Clone> HashTrie<K, V> {
    /// Returns the value stored for `key`.
    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        let hash = compute_hash(key);
        let mut node = &self.root;
        let mut depth = 0;

        loop {
            match node {
                Node::Branch { bitmap, children } => {
                    let bit = 1u32 << hash_index(hash, depth);
                    if bitmap & bit == 0 {
                        return None;
                    }
                    match &children[compressed_position(*bitmap, bit)] {
                        Child::Entry {
                            hash: entry_hash,
                            key: entry_key,
                            value,
                        } => {
                            return (*entry_hash == hash && entry_key == key).then_some(value);
                        }
                        Child::Node(subnode) => {
                            node = &**subnode;
                            depth += 1;
                        }
                    }
                }
                Node::Collision {
                    hash: collision_hash,
                    entries,
                } => {
                    if *collision_hash != hash {
                        return None;
                    }
                    return entries
                        .iter()
                        .find(|(entry_key, _)| entry_key == key)
                        .map(|(_, value)| value);
                }
            }
        }
    }

    /// Returns a new trie mapping `key` to `value`.
    ///
    /// An existing entry for `key` is replaced.
    #[must_use]
    pub(crate) fn insert(&self, key: K, value: V) -> Self {
        let hash = compute_hash(&key);
        let (root, added) = Self::insert_into_node(&self.root, hash, key, value, 0);
        Self {
            root,
            length: if added { self.length + 1 } else { self.length },
        }
    }

    /// Returns the rebuilt node and whether a new key was added.
    fn insert_into_node(
        node: &Node<K, V>,
        hash: u64,
        key: K,
        value: V,
        depth: usize,
    ) -> (Node<K, V>, bool) {
        match node {
            Node::Branch { bitmap, children } => {
                Self::insert_into_branch(*bitmap, children, hash, key, value, depth)
            }
            Node::Collision {
                hash: collision_hash,
                entries,
            } if *collision_hash == hash => {
                let mut entries = entries.to_vec();
                let added = match entries.iter().position(|(entry_key, _)| *entry_key == key) {
                    Some(index) => {
                        entries[index].1 = value;
                        false
                    }
                    None => {
                        entries.push((key, value));
                        true
                    }
                };
                (
                    Node::Collision {
                        hash,
                        entries: ReferenceCounter::from(entries),
                    },
                    added,
                )
            }
            Node::Collision {
                hash: collision_hash,
                ..
            } => {
                // Push the collision one level down behind a branch and retry.
                let branch = Node::Branch {
                    bitmap: 1u32 << hash_index(*collision_hash, depth),
                    children: ReferenceCounter::from(vec![Child::Node(ReferenceCounter::new(
                        node.clone(),
                    ))]),
                };
                Self::insert_into_node(&branch, hash, key, value, depth)
            }
        }
    }

    fn insert_into_branch(
        bitmap: u32,
        children: &ReferenceCounter<[Child<K, V>]>,
        hash: u64,
        key: K,
        value: V,
        depth: usize,
    ) -> (Node<K, V>, bool) {
        let bit = 1u32 << hash_index(hash, depth);
        let position = compressed_position(bitmap, bit);
        let mut new_children = children.to_vec();

        let added = if bitmap & bit == 0 {
            new_children.insert(position, Child::Entry { hash, key, value });
            true
        } else {
            let (child, added) = match &children[position] {
                Child::Entry {
                    hash: entry_hash,
                    key: entry_key,
                    ..
                } if *entry_hash == hash && *entry_key == key => {
                    (Child::Entry { hash, key, value }, false)
                }
                Child::Entry {
                    hash: entry_hash,
                    key: entry_key,
                    value: entry_value,
                } => {
                    let existing = (*entry_hash, entry_key.clone(), entry_value.clone());
                    let split = Self::split(existing, (hash, key, value), depth + 1);
                    (Child::Node(ReferenceCounter::new(split)), true)
                }
                Child::Node(subnode) => {
                    let (subnode, added) =
                        Self::insert_into_node(subnode, hash, key, value, depth + 1);
                    (Child::Node(ReferenceCounter::new(subnode)), added)
                }
            };
            new_children[position] = child;
            added
        };

        (
            Node::Branch {
                bitmap: bitmap | bit,
                children: ReferenceCounter::from(new_children),
            },
            added,
        )
    }

    /// Builds the node holding two distinct keys that met in one slot.
    ///
    /// Distinct hashes always diverge within the 13 levels a 64-bit hash
    /// spans; equal hashes become a collision node.
    fn split(existing: (u64, K, V), incoming: (u64, K, V), depth: usize) -> Node<K, V> {
        if existing.0 == incoming.0 {
            return Node::Collision {
                hash: existing.0,
                entries: ReferenceCounter::from(vec![
                    (existing.1, existing.2),
                    (incoming.1, incoming.2),
                ]),
            };
        }

        let existing_index = hash_index(existing.0, depth);
        let incoming_index = hash_index(incoming.0, depth);

        if existing_index == incoming_index {
            let subnode = Self::split(existing, incoming, depth + 1);
            return Node::Branch {
                bitmap: 1u32 << existing_index,
                children: ReferenceCounter::from(vec![Child::Node(ReferenceCounter::new(subnode))]),
            };
        }

        let to_child = |(hash, key, value): (u64, K, V)| Child::Entry { hash, key, value };
        let children = if existing_index < incoming_index {
            vec![to_child(existing), to_child(incoming)]
        } else {
            vec![to_child(incoming), to_child(existing)]
        };
        Node::Branch {
            bitmap: (1u32 << existing_index) | (1u32 << incoming_index),
            children: ReferenceCounter::from(children),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// Iterator over the entries of a [`HashTrie`], in trie order.
pub(crate) struct HashTrieIterator<'a, K, V> {
    branches: SmallVec<[std::slice::Iter<'a, Child<K, V>>; 8]>,
    collision: std::slice::Iter<'a, (K, V)>,
}

impl<'a, K, V> HashTrieIterator<'a, K, V> {
    fn descend(&mut self, node: &'a Node<K, V>) {
        match node {
            Node::Branch { children, .. } => self.branches.push(children.iter()),
            Node::Collision { entries, .. } => self.collision = entries.iter(),
        }
    }
}

impl<'a, K, V> Iterator for HashTrieIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.collision.next() {
                return Some((key, value));
            }
            match self.branches.last_mut()?.next() {
                None => {
                    self.branches.pop();
                }
                Some(Child::Entry { key, value, .. }) => return Some((key, value)),
                Some(Child::Node(node)) => self.descend(node),
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
