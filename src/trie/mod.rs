// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! A Space-Partitioned GiST-style radix trie over DNA k-mers.
//!
//! `config`/`choose`/`picksplit`/`inner_consistent`/`leaf_consistent` in
//! [`callbacks`] are the five operations an SPGiST opclass supplies;
//! [`index::TrieIndex`] is the in-memory arena that plays the role the
//! Postgres executor plays in `kmer_spgist.c`, driving insertion and scans
//! through them.

pub mod callbacks;
mod config;
mod index;
mod label;
mod node;
mod prefix;
mod strategy;

pub use config::TrieConfig;
pub use index::TrieIndex;
pub use label::Label;
pub use strategy::{ScanArgument, ScanKey, Strategy};

#[cfg(test)]
#[path = "property_test.rs"]
mod property_test;
