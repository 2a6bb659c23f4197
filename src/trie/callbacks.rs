// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! The five operations a Space-Partitioned GiST radix trie opclass supplies:
//! `config`, `choose`, `picksplit`, `inner_consistent`, `leaf_consistent`.
//!
//! These are pure functions over node snapshots; [`super::index::TrieIndex`]
//! is the "host" that owns the arena, calls them, and applies their results —
//! mirroring the split between an SPGiST opclass (these functions) and the
//! Postgres executor that drives it (`kmer_spgist.c`'s registered callbacks,
//! invoked by the index access method).

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::label::Label;
use super::node::{InnerNode, LeafEntry, NodeId};
use super::prefix::common_prefix;
use super::strategy::{ScanArgument, ScanKey, Strategy};
use crate::kmer::iupac_matches;

/// Static opclass configuration.
///
/// Grounded on `kmer_config` in `kmer_spgist.c`. There, `config` also names
/// the prefix/label/leaf Postgres types; here those are the Rust types
/// `Vec<u8>`, [`Label`], and `LeafEntry<V>` themselves; `ConfigOut` carries
/// only the two behavioral flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigOut {
    /// The trie can answer a scan entirely from reconstructed leaf values,
    /// without a recheck pass against the original row.
    pub can_return_data: bool,
    /// Leaf values are bounded (`MAX_KMER_LENGTH`), so there's no need for
    /// the "long values" out-of-line storage path.
    pub long_values_ok: bool,
}

pub fn config() -> ConfigOut {
    ConfigOut {
        can_return_data: true,
        long_values_ok: false,
    }
}

/// Outcome of descending through one inner node during insertion.
///
/// Grounded on the `MatchNode`/`AddNode`/`SplitTuple` actions `kmer_choose`
/// chooses between in `kmer_spgist.c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChooseAction {
    /// A child already exists for the next label; descend into it with
    /// `remaining` as the suffix still to place.
    MatchNode { child: NodeId, remaining: Vec<u8> },
    /// No child exists for the next label yet; the caller must allocate a
    /// new leaf bucket under `label` holding `remaining`.
    AddNode { label: Label, remaining: Vec<u8> },
    /// The node's own prefix diverges from the inserted value partway
    /// through; the node's prefix must be split at `common_len` before
    /// insertion can continue.
    SplitTuple { common_len: usize },
}

/// Decides how to extend the path for `remaining` (the bytes of the target
/// k-mer not yet consumed by an ancestor) at `node`.
pub fn choose(remaining: &[u8], node: &InnerNode) -> ChooseAction {
    let common_len = common_prefix(remaining, &node.prefix);
    if common_len < node.prefix.len() {
        return ChooseAction::SplitTuple { common_len };
    }
    let rest = &remaining[common_len..];
    let Some((&b, tail)) = rest.split_first() else {
        // No bytes left to consume at this depth: either a genuine
        // end-of-string branch (`Terminal`) or, if a prior picksplit already
        // collapsed an all-duplicate bucket here, the `Placeholder` branch —
        // both mean "nothing left to distinguish on", so either child is the
        // right home for another identical insertion.
        return match node
            .find_child(Label::Terminal)
            .or_else(|| node.find_child(Label::Placeholder))
        {
            Some(child) => ChooseAction::MatchNode {
                child,
                remaining: Vec::new(),
            },
            None => ChooseAction::AddNode {
                label: Label::Terminal,
                remaining: Vec::new(),
            },
        };
    };
    let label = Label::Byte(b);
    match node.find_child(label) {
        Some(child) => ChooseAction::MatchNode {
            child,
            remaining: tail.to_vec(),
        },
        None => ChooseAction::AddNode {
            label,
            remaining: tail.to_vec(),
        },
    }
}

/// Outcome of splitting an over-full leaf bucket into an inner node.
///
/// `groups` is sorted by label and ready to become an [`InnerNode`]'s
/// children once the caller allocates arena slots for each group's bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickSplitOut<V> {
    pub prefix: Vec<u8>,
    pub groups: Vec<(Label, Vec<LeafEntry<V>>)>,
}

/// Splits a bucket of leaf entries that share one parent edge into a new
/// prefix plus per-label child groups.
///
/// Grounded on `kmer_picksplit` in `kmer_spgist.c`: it extracts the longest
/// common prefix of all entries, caps it at `max_prefix_len` (§4.4 step 1's
/// page-fit limit — bytes beyond the cap are left in each entry's residual
/// and fall to a subsequent split instead of being absorbed here), then
/// partitions by the next byte. When every entry's suffix is *exactly* that
/// (possibly capped) common prefix (the bucket holds nothing but duplicates
/// of one k-mer), there is no byte left to branch on — `kmer_picksplit`
/// reports this via `out->allTheSame` and a single `-2` node label; this
/// implementation resolves that Open Question by collapsing the bucket into
/// one child under [`Label::Placeholder`] rather than looping a chain of
/// singleton byte-labeled nodes down to the last duplicate's final byte,
/// since every entry is already known to terminate together.
pub fn picksplit<V>(entries: Vec<LeafEntry<V>>, max_prefix_len: usize) -> PickSplitOut<V> {
    debug_assert!(!entries.is_empty());
    let mut prefix = entries[0].suffix.clone();
    for entry in &entries[1..] {
        let len = common_prefix(&prefix, &entry.suffix);
        prefix.truncate(len);
    }
    if prefix.len() > max_prefix_len {
        prefix.truncate(max_prefix_len);
    }

    let all_the_same = entries.iter().all(|e| e.suffix.len() == prefix.len());
    if all_the_same {
        let collapsed = entries
            .into_iter()
            .map(|e| LeafEntry {
                suffix: Vec::new(),
                value: e.value,
            })
            .collect();
        return PickSplitOut {
            prefix,
            groups: vec![(Label::Placeholder, collapsed)],
        };
    }

    let mut groups: BTreeMap<Label, Vec<LeafEntry<V>>> = BTreeMap::new();
    for entry in entries {
        let rest = &entry.suffix[prefix.len()..];
        let (label, residual) = match rest.split_first() {
            None => (Label::Terminal, Vec::new()),
            Some((&b, tail)) => (Label::Byte(b), tail.to_vec()),
        };
        groups
            .entry(label)
            .or_default()
            .push(LeafEntry { suffix: residual, value: entry.value });
    }

    PickSplitOut {
        prefix,
        groups: groups.into_iter().collect(),
    }
}

/// One surviving child from an [`inner_consistent`] call: its label, arena
/// id, and the fully reconstructed path leading to it (ancestor path +
/// this node's prefix + the label's byte, if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InnerConsistentChild {
    pub label: Label,
    pub child: NodeId,
    pub reconstructed: Vec<u8>,
}

/// Determines the ordering of every completion of `trial` relative to
/// `target`, when it can be determined from `trial` alone.
///
/// `Ordering::Equal` means undetermined: `trial` is a strict prefix of
/// `target`, so some completion could still go either way (end here and
/// sort less, or continue and sort anywhere) and the subtree cannot be
/// pruned by this key alone. The reverse case — `target` is a strict prefix
/// of `trial` — is determinate, not undetermined: dictionary order sorts
/// end-of-string before any byte, so `trial` (and every completion of it,
/// which can only grow longer) already sorts strictly after `target`.
fn subtree_order(trial: &[u8], target: &[u8]) -> Ordering {
    let common = common_prefix(trial, target);
    if common == target.len() && trial.len() > target.len() {
        return Ordering::Greater;
    }
    if common == trial.len() {
        return Ordering::Equal;
    }
    trial[common].cmp(&target[common])
}

/// Prunes and reconstructs paths for an inner node's children against a set
/// of scan keys, ANDed together.
///
/// Grounded on `kmer_inner_consistent` in `kmer_spgist.c`: it reconstructs
/// `maxReconstrLen` bytes per child and switches on each scan key's
/// strategy number to decide whether the subtree can be pruned. Comparison
/// strategies prune using the first point of divergence between the
/// reconstructed path and the scan argument (divergence settles the
/// ordering of every possible completion); `Prefix` prunes on a mismatch
/// within the overlapping length; `Contains` prunes on any fixed position
/// whose stored byte the IUPAC pattern cannot match.
pub fn inner_consistent(
    node: &InnerNode,
    reconstructed_prefix: &[u8],
    keys: &[ScanKey],
) -> Vec<InnerConsistentChild> {
    let mut base = reconstructed_prefix.to_vec();
    base.extend_from_slice(&node.prefix);

    node.children
        .iter()
        .filter_map(|&(label, child)| {
            let mut trial = base.clone();
            if let Label::Byte(b) = label {
                trial.push(b);
            }
            if keys.iter().all(|key| child_survives(&trial, key)) {
                Some(InnerConsistentChild {
                    label,
                    child,
                    reconstructed: trial,
                })
            } else {
                None
            }
        })
        .collect()
}

fn child_survives(trial: &[u8], key: &ScanKey) -> bool {
    match (&key.strategy, &key.argument) {
        (Strategy::Lt, ScanArgument::Kmer(target)) => {
            subtree_order(trial, target.as_bytes()) != Ordering::Greater
        }
        (Strategy::Le, ScanArgument::Kmer(target)) => {
            subtree_order(trial, target.as_bytes()) != Ordering::Greater
        }
        (Strategy::Eq, ScanArgument::Kmer(target)) => {
            let target = target.as_bytes();
            target.len() >= trial.len() && subtree_order(trial, target) == Ordering::Equal
        }
        (Strategy::Ge, ScanArgument::Kmer(target)) => {
            subtree_order(trial, target.as_bytes()) != Ordering::Less
        }
        (Strategy::Gt, ScanArgument::Kmer(target)) => {
            subtree_order(trial, target.as_bytes()) != Ordering::Less
        }
        (Strategy::Prefix, ScanArgument::Kmer(target)) => {
            let target = target.as_bytes();
            let common = common_prefix(trial, target);
            common == trial.len().min(target.len())
        }
        (Strategy::Contains, ScanArgument::QKmer(pattern)) => {
            let pattern = pattern.as_bytes();
            pattern.len() >= trial.len()
                && (0..trial.len().min(pattern.len())).all(|i| iupac_matches(pattern[i], trial[i]))
        }
        _ => false,
    }
}

/// A leaf bucket entry accepted by every scan key, with its fully
/// reconstructed k-mer bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafConsistentMatch<V> {
    pub kmer: Vec<u8>,
    pub value: V,
}

/// Tests every entry in a leaf bucket against a set of scan keys, ANDed
/// together, returning the survivors with their full reconstructed k-mer.
///
/// Grounded on `kmer_leaf_consistent` in `kmer_spgist.c`: it builds the full
/// value from `reconstructedValue` plus the leaf datum, sets `recheck =
/// false` (the comparison here is exact, unlike a lossy index), and
/// delegates each strategy to the same scalar operator the non-indexed
/// path would call (`kmer_equals`, `kmer_starts_with`, `kmer_containing`,
/// byte-wise ordering).
pub fn leaf_consistent<V: Clone>(
    entries: &[LeafEntry<V>],
    reconstructed_prefix: &[u8],
    keys: &[ScanKey],
) -> Vec<LeafConsistentMatch<V>> {
    entries
        .iter()
        .filter_map(|entry| {
            let mut full = reconstructed_prefix.to_vec();
            full.extend_from_slice(&entry.suffix);
            let kmer = crate::kmer::Kmer::from_validated_bytes(full.clone());
            if keys.iter().all(|key| key.accepts(&kmer)) {
                Some(LeafConsistentMatch {
                    kmer: full,
                    value: entry.value.clone(),
                })
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "callbacks_test.rs"]
mod callbacks_test;
