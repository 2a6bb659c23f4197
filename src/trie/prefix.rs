// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Common-prefix extraction and sorted-label search, shared by `choose` and
//! `picksplit`.

use super::label::Label;

/// Length of the longest common byte prefix of `a` and `b`.
///
/// Grounded on `commonPrefix` in `kmer_spgist.c`.
pub fn common_prefix(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Looks up `target` in a label array that is kept sorted (per [`Label`]'s
/// `Ord`), returning `Ok(index)` on an exact hit or `Err(insertion_point)`
/// otherwise.
///
/// A single binary search serves both `choose` (does a child with this label
/// already exist?) and `picksplit` (where does a new label belong in the
/// node being built?) — grounded on `searchChar`'s linear scan in
/// `kmer_spgist.c`, generalized to binary search since labels are kept sorted
/// here instead of scanned in insertion order.
pub fn search_label(labels: &[Label], target: Label) -> Result<usize, usize> {
    labels.binary_search(&target)
}

#[cfg(test)]
#[path = "prefix_test.rs"]
mod prefix_test;
