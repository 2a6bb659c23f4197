// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! `TrieIndex`: the in-memory arena that drives insertion and scans through
//! the [`super::callbacks`] operations.
//!
//! There is no Postgres buffer manager or WAL here, so the "host" that would
//! normally call into an SPGiST opclass is this module: it owns a flat
//! `Vec` arena of [`Node`]s and walks it the way the executor walks index
//! pages, but the split/prune decisions themselves all live in
//! `callbacks.rs`. Grounded structurally on the teacher's `BPlusTree` in
//! `btree/tree.rs`, which plays the same "owns the arena, drives the
//! algorithm" role for its own node shapes.

use tracing::{debug, trace};

use super::callbacks::{choose, inner_consistent, leaf_consistent, picksplit, ChooseAction};
use super::config::TrieConfig;
use super::label::Label;
use super::node::{InnerNode, LeafBucket, LeafEntry, Node, NodeId};
use super::strategy::ScanKey;
use crate::kmer::Kmer;

const ROOT: NodeId = 0;

/// A radix-trie multiset index mapping [`Kmer`] keys to `V` values.
///
/// Duplicate keys are permitted — inserting the same k-mer twice keeps both
/// values, matching §3's multiset invariant rather than silently overwriting.
///
/// ## Example
/// ```
/// use kmertrie::kmer::Kmer;
/// use kmertrie::trie::{ScanKey, TrieIndex};
///
/// let mut index = TrieIndex::new();
/// index.insert(Kmer::new("acgt").unwrap(), 1usize);
/// index.insert(Kmer::new("acgg").unwrap(), 2usize);
///
/// let hits = index.scan(&[ScanKey::prefix(Kmer::new("ac").unwrap())]);
/// assert_eq!(hits.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TrieIndex<V> {
    config: TrieConfig,
    nodes: Vec<Node<V>>,
    len: usize,
}

impl<V> Default for TrieIndex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> TrieIndex<V> {
    /// Builds an empty index with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Builds an empty index with an explicit configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            config,
            nodes: vec![Node::Leaf(LeafBucket::default())],
            len: 0,
        }
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Number of entries stored, counting duplicate keys separately.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `value` under `kmer`, descending via [`choose`] and splitting
    /// leaf buckets or inner-node prefixes on the way as needed.
    pub fn insert(&mut self, kmer: Kmer, value: V) {
        trace!(kmer = %kmer, "inserting");
        let bytes = kmer.as_bytes().to_vec();
        self.insert_at(ROOT, &bytes, value);
        self.len += 1;
    }

    fn insert_at(&mut self, node_id: NodeId, remaining: &[u8], value: V) {
        let action = match &self.nodes[node_id] {
            Node::Leaf(_) => None,
            Node::Inner(inner) => Some(choose(remaining, inner)),
        };

        match action {
            None => {
                let bucket = self.nodes[node_id]
                    .as_leaf_mut()
                    .expect("leaf node checked above");
                bucket.entries.push(LeafEntry {
                    suffix: remaining.to_vec(),
                    value,
                });
                if bucket.is_full() {
                    debug!(node_id, "leaf bucket full, splitting");
                    self.split_leaf(node_id);
                }
            }
            Some(ChooseAction::MatchNode { child, remaining }) => {
                self.insert_at(child, &remaining, value);
            }
            Some(ChooseAction::AddNode { label, remaining }) => {
                let new_id = self.nodes.len();
                self.nodes.push(Node::Leaf(LeafBucket {
                    entries: vec![LeafEntry {
                        suffix: remaining,
                        value,
                    }],
                }));
                self.nodes[node_id]
                    .as_inner_mut()
                    .expect("inner node checked above")
                    .insert_child(label, new_id);
            }
            Some(ChooseAction::SplitTuple { common_len }) => {
                self.split_inner_prefix(node_id, common_len);
                self.insert_at(node_id, remaining, value);
            }
        }
    }

    fn split_leaf(&mut self, node_id: NodeId) {
        let bucket = match std::mem::replace(&mut self.nodes[node_id], Node::Inner(InnerNode::default()))
        {
            Node::Leaf(bucket) => bucket,
            Node::Inner(_) => unreachable!("split_leaf called on an inner node"),
        };
        let out = picksplit(bucket.entries, self.config.max_prefix_len());
        let mut children = Vec::with_capacity(out.groups.len());
        for (label, entries) in out.groups {
            let child_id = self.nodes.len();
            self.nodes.push(Node::Leaf(LeafBucket { entries }));
            children.push((label, child_id));
        }
        self.nodes[node_id] = Node::Inner(InnerNode {
            prefix: out.prefix,
            children,
        });
    }

    fn split_inner_prefix(&mut self, node_id: NodeId, common_len: usize) {
        let old = match &self.nodes[node_id] {
            Node::Inner(inner) => inner.clone(),
            Node::Leaf(_) => unreachable!("split_inner_prefix called on a leaf"),
        };
        let branch_byte = old.prefix[common_len];
        let demoted = InnerNode {
            prefix: old.prefix[common_len + 1..].to_vec(),
            children: old.children,
        };
        let demoted_id = self.nodes.len();
        self.nodes.push(Node::Inner(demoted));
        self.nodes[node_id] = Node::Inner(InnerNode {
            prefix: old.prefix[..common_len].to_vec(),
            children: vec![(Label::Byte(branch_byte), demoted_id)],
        });
    }

    /// Runs a scan, returning every stored `(Kmer, value)` pair that
    /// satisfies all of `keys` (ANDed together). An empty `keys` slice
    /// matches everything, satisfying the "total coverage" property: a
    /// scan with no constraints visits every stored entry.
    pub fn scan(&self, keys: &[ScanKey]) -> Vec<(Kmer, V)>
    where
        V: Clone,
    {
        let mut results = Vec::new();
        self.scan_node(ROOT, &[], keys, &mut results);
        results
    }

    fn scan_node(&self, node_id: NodeId, reconstructed: &[u8], keys: &[ScanKey], out: &mut Vec<(Kmer, V)>)
    where
        V: Clone,
    {
        match &self.nodes[node_id] {
            Node::Leaf(bucket) => {
                for found in leaf_consistent(&bucket.entries, reconstructed, keys) {
                    out.push((Kmer::from_validated_bytes(found.kmer), found.value));
                }
            }
            Node::Inner(inner) => {
                for child in inner_consistent(inner, reconstructed, keys) {
                    self.scan_node(child.child, &child.reconstructed, keys, out);
                }
            }
        }
    }

    /// Convenience: every entry equal to `kmer`.
    pub fn eq(&self, kmer: Kmer) -> Vec<(Kmer, V)>
    where
        V: Clone,
    {
        self.scan(&[ScanKey::eq(kmer)])
    }

    /// Convenience: every entry starting with `prefix`.
    pub fn prefix(&self, prefix: Kmer) -> Vec<(Kmer, V)>
    where
        V: Clone,
    {
        self.scan(&[ScanKey::prefix(prefix)])
    }

    /// Convenience: every entry matching an IUPAC ambiguity pattern.
    pub fn contains(&self, pattern: crate::kmer::QKmer) -> Vec<(Kmer, V)>
    where
        V: Clone,
    {
        self.scan(&[ScanKey::contains(pattern)])
    }

    /// Convenience: every entry in `[low, high]` inclusive.
    pub fn range(&self, low: Kmer, high: Kmer) -> Vec<(Kmer, V)>
    where
        V: Clone,
    {
        self.scan(&[ScanKey::ge(low), ScanKey::le(high)])
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
