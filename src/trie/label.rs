// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Child-edge labels: a real nucleotide byte, or one of the two sentinels.

use std::cmp::Ordering;

/// The label on an edge from an inner node to one of its children.
///
/// Ordered `Placeholder < Terminal < Byte(n)` for every `n`, so that sorted
/// label arrays place the "all the same" bucket first and the end-of-string
/// marker second — matching the dictionary order in which a k-mer shorter
/// than its siblings sorts before them.
///
/// Grounded on the `nodeLabels` convention in `kmer_spgist.c`'s `kmer_choose`
/// and `kmer_picksplit`, which reserve `-1` for "this branch is the terminal
/// node" and `-2` for "every child in this bucket shares a branch byte, split
/// them by the next byte instead" (the `allTheSame` path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// The `-2` sentinel: every leaf in the node shares this label, so the
    /// node must be redivided one byte further along.
    Placeholder,
    /// The `-1` sentinel: the edge to a k-mer that ends exactly at this depth.
    Terminal,
    /// A real nucleotide byte, already lower-cased.
    Byte(u8),
}

impl Label {
    fn rank(self) -> (u8, u8) {
        match self {
            Label::Placeholder => (0, 0),
            Label::Terminal => (1, 0),
            Label::Byte(b) => (2, b),
        }
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;
