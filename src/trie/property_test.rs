// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use proptest::prelude::*;

use super::TrieIndex;
use crate::kmer::{Kmer, QKmer};

proptest! {
    #[test]
    fn round_trip_every_inserted_kmer_is_found_by_eq(
        kmers in prop::collection::vec("[acgt]{1,8}", 1..30)
    ) {
        let mut index = TrieIndex::new();
        for (i, s) in kmers.iter().enumerate() {
            index.insert(Kmer::new(s.as_str()).unwrap(), i);
        }
        for (i, s) in kmers.iter().enumerate() {
            let hits = index.eq(Kmer::new(s.as_str()).unwrap());
            prop_assert!(hits.iter().any(|(_, v)| *v == i));
        }
    }

    #[test]
    fn total_coverage_a_full_scan_visits_every_entry(
        kmers in prop::collection::vec("[acgt]{1,6}", 0..40)
    ) {
        let mut index = TrieIndex::new();
        for (i, s) in kmers.iter().enumerate() {
            index.insert(Kmer::new(s.as_str()).unwrap(), i);
        }
        let all = index.scan(&[]);
        prop_assert_eq!(all.len(), kmers.len());
    }

    #[test]
    fn order_consistent_scan_matches_byte_lexicographic_sort(
        kmers in prop::collection::vec("[acgt]{1,6}", 1..40)
    ) {
        let mut index = TrieIndex::new();
        for (i, s) in kmers.iter().enumerate() {
            index.insert(Kmer::new(s.as_str()).unwrap(), i);
        }
        let mut all = index.scan(&[]);
        all.sort_by(|a, b| a.0.cmp(&b.0));
        let got: Vec<String> = all.into_iter().map(|(k, _)| k.to_string()).collect();

        let mut expected = kmers.clone();
        expected.sort();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prefix_scan_is_sound_and_complete(
        kmers in prop::collection::vec("[acgt]{2,6}", 1..30),
        prefix_src in "[acgt]{1,2}"
    ) {
        let mut index = TrieIndex::new();
        for (i, s) in kmers.iter().enumerate() {
            index.insert(Kmer::new(s.as_str()).unwrap(), i);
        }
        let prefix = Kmer::new(prefix_src.as_str()).unwrap();
        let hits = index.prefix(prefix.clone());

        let expected_count = kmers
            .iter()
            .filter(|s| s.as_bytes().starts_with(prefix.as_bytes()))
            .count();
        prop_assert_eq!(hits.len(), expected_count);
        for (kmer, _) in &hits {
            prop_assert!(kmer.starts_with(&prefix));
        }
    }

    #[test]
    fn contains_scan_agrees_with_the_scalar_predicate(
        kmers in prop::collection::vec("[acgt]{4}", 1..30),
        pattern_src in "[acgtrykmswbdhvn]{4}"
    ) {
        let mut index = TrieIndex::new();
        for (i, s) in kmers.iter().enumerate() {
            index.insert(Kmer::new(s.as_str()).unwrap(), i);
        }
        let pattern = QKmer::new(pattern_src.as_str()).unwrap();
        let hits = index.contains(pattern.clone());

        let mut expected: Vec<usize> = kmers
            .iter()
            .enumerate()
            .filter(|(_, s)| Kmer::new(s.as_str()).unwrap().matches_pattern(&pattern))
            .map(|(i, _)| i)
            .collect();
        let mut got: Vec<usize> = hits.iter().map(|(_, v)| *v).collect();
        got.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn scanning_twice_reconstructs_the_same_multiset(
        kmers in prop::collection::vec("[acgt]{1,6}", 0..30)
    ) {
        let mut index = TrieIndex::new();
        for (i, s) in kmers.iter().enumerate() {
            index.insert(Kmer::new(s.as_str()).unwrap(), i);
        }
        let mut first = index.scan(&[]);
        let mut second = index.scan(&[]);
        first.sort_by(|a, b| a.1.cmp(&b.1));
        second.sort_by(|a, b| a.1.cmp(&b.1));
        prop_assert_eq!(first, second);
    }
}
