// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn default_matches_max_kmer_length() {
    assert_eq!(TrieConfig::default().max_prefix_len(), MAX_KMER_LENGTH);
}

#[test]
fn rejects_zero() {
    assert!(TrieConfig::new(0).is_err());
}

#[test]
fn rejects_beyond_max_kmer_length() {
    assert!(TrieConfig::new(MAX_KMER_LENGTH + 1).is_err());
}

#[test]
fn accepts_in_range_value() {
    assert!(TrieConfig::new(MAX_KMER_LENGTH).is_ok());
    assert!(TrieConfig::new(1).is_ok());
}
