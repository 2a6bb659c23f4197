// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use super::*;
use crate::error::TrieError;

#[test]
fn kmers_slides_window_in_order() {
    let dna = Dna::new("acgtac").unwrap();
    let kmers: Vec<String> = dna.kmers(4).unwrap().map(|k| k.to_string()).collect();
    assert_eq!(kmers, vec!["acgt", "cgta", "gtac"]);
}

#[test]
fn kmers_window_equal_to_length_yields_one() {
    let dna = Dna::new("acgt").unwrap();
    let kmers: Vec<String> = dna.kmers(4).unwrap().map(|k| k.to_string()).collect();
    assert_eq!(kmers, vec!["acgt"]);
}

#[test]
fn kmers_rejects_window_longer_than_sequence() {
    let dna = Dna::new("ac").unwrap();
    match dna.kmers(4) {
        Err(TrieError::InvalidWindow { window, dna_len }) => {
            assert_eq!(window, 4);
            assert_eq!(dna_len, 2);
        }
        other => panic!("expected InvalidWindow, got {:?}", other),
    }
}

#[test]
fn kmers_rejects_zero_window() {
    let dna = Dna::new("acgt").unwrap();
    assert!(dna.kmers(0).is_err());
}

#[test]
fn exact_size_hint_matches_count() {
    let dna = Dna::new("acgtacgt").unwrap();
    let iter = dna.kmers(3).unwrap();
    assert_eq!(iter.len(), 6);
    assert_eq!(iter.count(), 6);
}
