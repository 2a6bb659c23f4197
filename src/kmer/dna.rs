// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! `Dna`: an unbounded-length DNA string, and the sliding-window k-mer generator.

use super::alphabet::validate_dna;
use super::kmer::Kmer;
use crate::error::{TrieError, TrieResult};
use std::fmt;
use std::str::FromStr;

/// An owned DNA sequence over {a,c,g,t}, case-folded to lowercase.
///
/// Unlike `Kmer`, a `Dna` value carries no length bound — it represents a
/// whole source sequence that k-mers are drawn from via [`Dna::kmers`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Dna(Vec<u8>);

impl Dna {
    /// Parses and validates a raw DNA string, lower-casing it.
    pub fn new(input: impl AsRef<[u8]>) -> TrieResult<Self> {
        Ok(Self(validate_dna(input.as_ref())?))
    }

    /// Returns the sequence as a lower-case byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Number of nucleotides in the sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the sequence has no nucleotides.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Slides a window of `window` nucleotides across the sequence, yielding
    /// one `Kmer` per starting offset.
    ///
    /// ## Input
    /// - `window`: k-mer length, must be in `1..=MAX_KMER_LENGTH` and no
    ///   longer than the sequence itself.
    ///
    /// ## Output
    /// - `Ok(iterator)` yielding `len() - window + 1` k-mers in sequence order.
    /// - `Err(TrieError::InvalidWindow)` if the window is out of range.
    pub fn kmers(&self, window: usize) -> TrieResult<KmerWindows<'_>> {
        if window == 0 || window > super::alphabet::MAX_KMER_LENGTH || window > self.0.len() {
            return Err(TrieError::InvalidWindow {
                window,
                dna_len: self.0.len(),
            });
        }
        Ok(KmerWindows {
            sequence: &self.0,
            window,
            offset: 0,
        })
    }
}

impl fmt::Display for Dna {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl FromStr for Dna {
    type Err = TrieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}

/// Iterator over the k-mers of a [`Dna`] sequence, in order of increasing offset.
///
/// Grounded on `generate_kmers` in `kmer.c`, a Postgres set-returning function;
/// here it is simply a lazy Rust iterator since there is no SRF protocol.
pub struct KmerWindows<'a> {
    sequence: &'a [u8],
    window: usize,
    offset: usize,
}

impl<'a> Iterator for KmerWindows<'a> {
    type Item = Kmer;

    fn next(&mut self) -> Option<Kmer> {
        if self.offset + self.window > self.sequence.len() {
            return None;
        }
        let bytes = &self.sequence[self.offset..self.offset + self.window];
        self.offset += 1;
        // The window is already known to be within bounds and every byte of
        // `self.sequence` was validated when the Dna was constructed, so
        // this cannot fail.
        Some(Kmer::from_validated_bytes(bytes.to_vec()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.sequence.len() + 1)
            .saturating_sub(self.offset + self.window);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for KmerWindows<'a> {}

#[cfg(test)]
#[path = "dna_test.rs"]
mod dna_test;
