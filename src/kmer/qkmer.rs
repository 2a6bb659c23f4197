// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! `QKmer`: a bounded IUPAC ambiguous-pattern string, the `Contains` scan argument.

use super::alphabet::{validate_iupac, MAX_KMER_LENGTH};
use super::kmer::{byte_matches, Kmer};
use crate::error::{TrieError, TrieResult};
use std::fmt;
use std::str::FromStr;

/// A query k-mer (ambiguous pattern): 1 to 32 bytes over the 15-letter IUPAC
/// alphabet, case-folded to lowercase.
///
/// `QKmer` values are never stored in the trie (§3 invariant 6) — they exist
/// only as scan arguments for the `Contains` strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QKmer(Vec<u8>);

impl QKmer {
    /// Parses, validates, and bounds-checks a query k-mer string.
    pub fn new(input: impl AsRef<[u8]>) -> TrieResult<Self> {
        let bytes = input.as_ref();
        if bytes.is_empty() {
            return Err(TrieError::EmptySequence);
        }
        if bytes.len() > MAX_KMER_LENGTH {
            return Err(TrieError::SequenceTooLong {
                length: bytes.len(),
                max: MAX_KMER_LENGTH,
            });
        }
        Ok(Self(validate_iupac(bytes)?))
    }

    /// Returns the pattern as a lower-case byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of positions in the pattern.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A `QKmer` is never empty by construction; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scalar predicate: does this pattern match `kmer` position-by-position?
    ///
    /// Requires equal length — a pattern can only match k-mers of its own
    /// length, per §4.6's Contains strategy.
    ///
    /// Grounded on `kmer_contains`/`kmer_query` in `kmer_spgist.c`/`kmer.c`.
    pub fn contains(&self, kmer: &Kmer) -> bool {
        if self.0.len() != kmer.len() {
            return false;
        }
        self.0
            .iter()
            .zip(kmer.as_bytes())
            .all(|(&p, &nt)| byte_matches(p, nt))
    }
}

impl fmt::Display for QKmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl FromStr for QKmer {
    type Err = TrieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}

impl TryFrom<&str> for QKmer {
    type Error = TrieError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.as_bytes())
    }
}

#[cfg(test)]
#[path = "qkmer_test.rs"]
mod qkmer_test;
