// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! kmertrie - a Space-Partitioned GiST-style radix trie index over DNA k-mers.
//!
//! A bounded-length DNA alphabet (`kmer`), an IUPAC ambiguity pattern type
//! for fuzzy containment queries, and a radix trie (`trie`) that answers
//! equality, ordering, prefix, and pattern-containment scans by pruning
//! subtrees from reconstructed path fragments rather than visiting every
//! stored k-mer.
//!
//! ## Quick Start
//!
//! ```rust
//! use kmertrie::kmer::{Kmer, QKmer};
//! use kmertrie::trie::{ScanKey, TrieIndex};
//!
//! let mut index = TrieIndex::new();
//! index.insert(Kmer::new("acgt").unwrap(), "first");
//! index.insert(Kmer::new("acgg").unwrap(), "second");
//!
//! let prefix_hits = index.prefix(Kmer::new("ac").unwrap());
//! assert_eq!(prefix_hits.len(), 2);
//!
//! let pattern_hits = index.contains(QKmer::new("acgn").unwrap());
//! assert_eq!(pattern_hits.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - **kmer**: the scalar domain types (`Dna`, `Kmer`, `QKmer`), validation,
//!   the IUPAC match table, and the sliding-window k-mer generator.
//! - **trie**: the radix trie itself — node shapes, the five SPGiST-style
//!   operations (`config`/`choose`/`picksplit`/`inner_consistent`/
//!   `leaf_consistent`), scan strategies, and the in-memory arena that
//!   drives them.
//! - **error**: the crate-wide error type and result alias.

pub mod error;
pub mod kmer;
pub mod trie;

pub use error::{TrieError, TrieResult};
pub use kmer::{Dna, Kmer, QKmer};
pub use trie::{ScanKey, TrieIndex};
