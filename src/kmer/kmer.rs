// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! `Kmer`: a bounded DNA string, the value type actually stored in the trie.

use super::alphabet::{validate_dna, MAX_KMER_LENGTH};
use super::pattern;
use super::qkmer::QKmer;
use crate::error::{TrieError, TrieResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A DNA k-mer: 1 to 32 bytes over {a,c,g,t}, case-folded to lowercase.
///
/// Ordering is plain byte-lexicographic (Rust's `Vec<u8>`/`[u8]` `Ord` is
/// already "dictionary order with end-of-string < any byte", so `Kmer`
/// derives `Ord` directly from its inner buffer — this is exactly §3's
/// comparison rule).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kmer(Vec<u8>);

impl Kmer {
    /// Parses, validates, and bounds-checks a k-mer string.
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
        Ok(Self(validate_dna(bytes)?))
    }

    /// Builds a `Kmer` from bytes already known to be lower-case DNA of legal
    /// length (e.g. a trie leaf reconstruction, or a `Dna` window). Used only
    /// within the crate where the invariant is established by construction.
    pub(crate) fn from_validated_bytes(bytes: Vec<u8>) -> Self {
        debug_assert!(!bytes.is_empty() && bytes.len() <= MAX_KMER_LENGTH);
        debug_assert!(bytes
            .iter()
            .all(|b| matches!(b, b'a' | b'c' | b'g' | b't')));
        Self(bytes)
    }

    /// Returns the k-mer as a lower-case byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of nucleotides.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A `Kmer` is never empty by construction, but `is_empty` is provided
    /// for API symmetry with `Dna`/`QKmer` and to satisfy the usual Rust
    /// convention that `len() == 0` has an `is_empty()` companion.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scalar predicate: does `self` begin with `prefix`'s bytes?
    ///
    /// Grounded on `kmer_starts_with_helper` in `kmer.c`: a prefix longer
    /// than `self` can never match.
    pub fn starts_with(&self, prefix: &Kmer) -> bool {
        if prefix.0.len() > self.0.len() {
            return false;
        }
        self.0[..prefix.0.len()] == prefix.0[..]
    }

    /// Scalar predicate: does `pattern` (an IUPAC query k-mer) match `self`
    /// position-by-position, given equal length?
    ///
    /// Grounded on `kmer_containing` in `kmer_spgist.c` (the `kmer CONTAINING
    /// qkmer` operator); identical logic to [`QKmer::contains`] with the
    /// operands swapped, as in the original SQL operator pair.
    pub fn matches_pattern(&self, query: &QKmer) -> bool {
        query.contains(self)
    }

    /// Hash for hash-index use (out of scope for the radix trie itself, but
    /// named in §1 as an external collaborator the trie does not implement).
    ///
    /// Grounded on `kmer_hash` in `kmer.c`, which hashes the raw varlena
    /// bytes via Postgres's `hash_any`. This crate has no equivalent host
    /// hash function to match bit-for-bit, so it hashes the same raw bytes
    /// through `std::hash::Hasher` instead — consistent within this crate,
    /// not bit-compatible with any particular Postgres build.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}

impl fmt::Display for Kmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl FromStr for Kmer {
    type Err = TrieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}

impl TryFrom<&str> for Kmer {
    type Error = TrieError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value.as_bytes())
    }
}

/// Re-exported so `QKmer::contains`/`Kmer::matches_pattern` and the trie's
/// inner-loop comparisons share one implementation of the IUPAC table.
pub(crate) fn byte_matches(pattern_byte: u8, nucleotide: u8) -> bool {
    pattern::matches(pattern_byte, nucleotide)
}

#[cfg(test)]
#[path = "kmer_test.rs"]
mod kmer_test;
