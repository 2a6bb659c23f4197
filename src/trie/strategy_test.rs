// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use super::*;

fn k(s: &str) -> Kmer {
    Kmer::new(s).unwrap()
}

fn q(s: &str) -> QKmer {
    QKmer::new(s).unwrap()
}

#[test]
fn contains_rejects_kmer_argument() {
    let err = ScanKey::new(Strategy::Contains, ScanArgument::Kmer(k("acgt"))).unwrap_err();
    assert_eq!(err, TrieError::UnrecognizedStrategy { strategy: "contains" });
}

#[test]
fn eq_rejects_qkmer_argument() {
    let err = ScanKey::new(Strategy::Eq, ScanArgument::QKmer(q("acgn"))).unwrap_err();
    assert_eq!(err, TrieError::UnrecognizedStrategy { strategy: "eq" });
}

#[test]
fn ordering_strategies_accept_as_expected() {
    assert!(ScanKey::lt(k("act")).accepts(&k("aca")));
    assert!(!ScanKey::lt(k("act")).accepts(&k("act")));
    assert!(ScanKey::le(k("act")).accepts(&k("act")));
    assert!(ScanKey::eq(k("act")).accepts(&k("act")));
    assert!(!ScanKey::eq(k("act")).accepts(&k("aca")));
    assert!(ScanKey::ge(k("act")).accepts(&k("act")));
    assert!(ScanKey::gt(k("act")).accepts(&k("acta")));
    assert!(!ScanKey::gt(k("act")).accepts(&k("act")));
}

#[test]
fn prefix_strategy_delegates_to_starts_with() {
    assert!(ScanKey::prefix(k("ac")).accepts(&k("acgt")));
    assert!(!ScanKey::prefix(k("ac")).accepts(&k("tacg")));
}

#[test]
fn contains_strategy_delegates_to_pattern_match() {
    assert!(ScanKey::contains(q("acgn")).accepts(&k("acgt")));
    assert!(ScanKey::contains(q("acgn")).accepts(&k("acga")));
    assert!(!ScanKey::contains(q("acgn")).accepts(&k("accc")));
}
