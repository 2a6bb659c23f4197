// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use super::matches;

#[test]
fn exact_match() {
    assert!(matches(b'a', b'a'));
    assert!(!matches(b'a', b'c'));
}

#[test]
fn n_matches_everything() {
    for nt in [b'a', b'c', b'g', b't'] {
        assert!(matches(b'n', nt));
    }
}

#[test]
fn degeneracy_classes() {
    assert!(matches(b'r', b'a') && matches(b'r', b'g'));
    assert!(!matches(b'r', b'c') && !matches(b'r', b't'));

    assert!(matches(b'y', b'c') && matches(b'y', b't'));
    assert!(!matches(b'y', b'a') && !matches(b'y', b'g'));

    assert!(matches(b'k', b'g') && matches(b'k', b't'));
    assert!(matches(b'm', b'a') && matches(b'm', b'c'));
    assert!(matches(b's', b'g') && matches(b's', b'c'));
    assert!(matches(b'w', b'a') && matches(b'w', b't'));

    assert!(matches(b'b', b'c') && matches(b'b', b'g') && matches(b'b', b't'));
    assert!(!matches(b'b', b'a'));

    assert!(matches(b'd', b'a') && matches(b'd', b'g') && matches(b'd', b't'));
    assert!(!matches(b'd', b'c'));

    assert!(matches(b'h', b'a') && matches(b'h', b'c') && matches(b'h', b't'));
    assert!(!matches(b'h', b'g'));

    assert!(matches(b'v', b'a') && matches(b'v', b'c') && matches(b'v', b'g'));
    assert!(!matches(b'v', b't'));
}

#[test]
fn u_never_matches_stored_dna() {
    // Open question in the design notes: `u` has no degeneracy case, so it
    // only matches the literal byte `u`, which never appears in a stored
    // k-mer (the DNA alphabet has no `u`).
    for nt in [b'a', b'c', b'g', b't'] {
        assert!(!matches(b'u', nt));
    }
}

#[test]
fn unrecognized_pattern_byte_is_false() {
    assert!(!matches(b'z', b'a'));
    assert!(!matches(b'1', b'a'));
}
