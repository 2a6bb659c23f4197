// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! DNA and query-k-mer scalar types.
//!
//! These are the "out of scope for the core" collaborators the trie relies
//! on: parsing/validation, the scalar equality/prefix/pattern-match
//! predicates, the sliding-window k-mer generator, and hashing. They live in
//! one crate alongside the trie because there is no separate host process to
//! supply them, unlike the Postgres extension this design is grounded on.

mod alphabet;
mod dna;
mod kmer;
mod pattern;
mod qkmer;

pub use alphabet::MAX_KMER_LENGTH;
pub use dna::{Dna, KmerWindows};
pub use kmer::Kmer;
pub use pattern::matches as iupac_matches;
pub use qkmer::QKmer;
