// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Error types for kmertrie operations.
//!
//! Provides structured error handling with detailed context for debugging.

use std::fmt;

/// Standard Result type for all kmertrie operations.
pub type TrieResult<T> = Result<T, TrieError>;

/// Error types for kmertrie operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// Input byte outside the DNA alphabet {a,c,g,t} (case-insensitive).
    InvalidDnaByte { byte: u8, position: usize },

    /// Input byte outside the IUPAC alphabet {a,c,g,t,u,r,y,k,m,s,w,b,d,h,v,n}.
    InvalidIupacByte { byte: u8, position: usize },

    /// A k-mer or query k-mer was empty.
    EmptySequence,

    /// A k-mer or query k-mer exceeded the 32-byte bound.
    SequenceTooLong { length: usize, max: usize },

    /// Sliding-window generator asked for a window larger than the DNA string,
    /// or a window of zero or negative size, or larger than MAX_KMER_LENGTH.
    InvalidWindow { window: usize, dna_len: usize },

    /// A scan was built with a strategy the callbacks do not recognize.
    ///
    /// Corresponds to the "programmer error" fatal condition in the spec: the
    /// scalar parser guarantees well-formed scan keys reach the callbacks, so
    /// this can only happen if a caller constructs a `ScanKey` by hand with a
    /// strategy/argument mismatch (e.g. `Contains` with a `Kmer` argument).
    UnrecognizedStrategy { strategy: &'static str },

    /// An internal invariant was violated (reconstructed length mismatch, a
    /// prefix split producing an empty upper tuple, etc). These are bugs in
    /// the trie, not malformed caller input.
    InvariantViolation { detail: String },
}

impl fmt::Display for TrieError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDnaByte { byte, position } => write!(
                f,
                "invalid DNA byte {:?} at position {} (expected one of a, c, g, t)",
                *byte as char, position
            ),
            Self::InvalidIupacByte { byte, position } => write!(
                f,
                "invalid IUPAC byte {:?} at position {} (expected one of a,c,g,t,u,r,y,k,m,s,w,b,d,h,v,n)",
                *byte as char, position
            ),
            Self::EmptySequence => write!(f, "sequence must contain at least one nucleotide"),
            Self::SequenceTooLong { length, max } => {
                write!(f, "sequence length {} exceeds maximum of {}", length, max)
            }
            Self::InvalidWindow { window, dna_len } => write!(
                f,
                "invalid k-mer window {} for DNA sequence of length {}",
                window, dna_len
            ),
            Self::UnrecognizedStrategy { strategy } => {
                write!(f, "unrecognized scan strategy: {}", strategy)
            }
            Self::InvariantViolation { detail } => {
                write!(f, "trie invariant violation: {}", detail)
            }
        }
    }
}

impl std::error::Error for TrieError {}
