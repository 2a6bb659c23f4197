// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Arena node shapes: inner nodes (optional prefix + sorted labeled children)
//! and leaf buckets (unsorted residual-suffix tuples awaiting a split).
//!
//! There is no Postgres buffer manager here, so nodes live in a plain `Vec`
//! arena owned by [`crate::trie::index::TrieIndex`] rather than on disk
//! pages; the shapes themselves are grounded on the tuple layouts `kmer_choose`
//! and `kmer_picksplit` build in `kmer_spgist.c`.

use super::label::Label;

/// Index into a [`crate::trie::index::TrieIndex`] arena.
pub(crate) type NodeId = usize;

/// A leaf-bucket entry: the bytes not yet accounted for by any ancestor
/// prefix or label, paired with the value stored at that k-mer.
///
/// Grounded on the `leafDatum` SPGiST builds in `kmer_choose`'s `MatchNode`
/// branch (the reconstructed value minus the matched prefix).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeafEntry<V> {
    pub suffix: Vec<u8>,
    pub value: V,
}

/// An inner node: an optional common prefix consumed on the way in, and an
/// ordered, label-unique list of children.
///
/// Grounded on the node-prefix/label-array tuple `kmer_picksplit` builds for
/// `out->nodeLabels` in `kmer_spgist.c`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct InnerNode {
    pub prefix: Vec<u8>,
    pub children: Vec<(Label, NodeId)>,
}

impl InnerNode {
    /// Finds the child for `label`, if any. Children are kept sorted by
    /// label, so this is a binary search (see [`super::prefix::search_label`]).
    pub fn find_child(&self, label: Label) -> Option<NodeId> {
        let labels: Vec<Label> = self.children.iter().map(|(l, _)| *l).collect();
        super::prefix::search_label(&labels, label)
            .ok()
            .map(|i| self.children[i].1)
    }

    /// Inserts a new `(label, child)` pair, keeping `children` sorted.
    /// Panics (an invariant violation, not caller error) if the label is
    /// already present — callers must check [`InnerNode::find_child`] first.
    pub fn insert_child(&mut self, label: Label, child: NodeId) {
        let labels: Vec<Label> = self.children.iter().map(|(l, _)| *l).collect();
        match super::prefix::search_label(&labels, label) {
            Ok(_) => unreachable!("label already present in inner node"),
            Err(at) => self.children.insert(at, (label, child)),
        }
    }
}

/// Number of leaf entries a bucket tolerates before [`super::callbacks::picksplit`]
/// must convert it into an inner node.
///
/// There is no fixed SPGiST page size to fill in this in-memory design, so a
/// small constant plays the same role a page-capacity check does in
/// `kmer_spgist.c` — grounded on the B-tree node-order budgeting convention
/// this crate's ambient stack otherwise follows.
pub(crate) const LEAF_CAPACITY: usize = 4;

/// A bucket of leaf entries sharing one parent edge, pending a split once it
/// outgrows [`LEAF_CAPACITY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LeafBucket<V> {
    pub entries: Vec<LeafEntry<V>>,
}

impl<V> Default for LeafBucket<V> {
    // Hand-written rather than derived: `#[derive(Default)]` on a generic
    // struct adds a `V: Default` bound even though `Vec<LeafEntry<V>>`'s own
    // `Default` needs none, which would force every `TrieIndex<V>` to carry
    // that bound just to construct an empty root bucket.
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<V> LeafBucket<V> {
    pub fn is_full(&self) -> bool {
        self.entries.len() >= LEAF_CAPACITY
    }
}

/// An arena slot: either an inner node or a leaf bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node<V> {
    Inner(InnerNode),
    Leaf(LeafBucket<V>),
}

impl<V> Node<V> {
    pub fn as_inner(&self) -> Option<&InnerNode> {
        match self {
            Node::Inner(n) => Some(n),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_inner_mut(&mut self) -> Option<&mut InnerNode> {
        match self {
            Node::Inner(n) => Some(n),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafBucket<V>> {
        match self {
            Node::Leaf(n) => Some(n),
            Node::Inner(_) => None,
        }
    }

    pub fn as_leaf_mut(&mut self) -> Option<&mut LeafBucket<V>> {
        match self {
            Node::Leaf(n) => Some(n),
            Node::Inner(_) => None,
        }
    }
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
