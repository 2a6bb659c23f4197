// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn common_prefix_of_identical_slices_is_full_length() {
    assert_eq!(common_prefix(b"acgt", b"acgt"), 4);
}

#[test]
fn common_prefix_stops_at_first_divergence() {
    assert_eq!(common_prefix(b"acgt", b"acta"), 2);
}

#[test]
fn common_prefix_of_disjoint_slices_is_zero() {
    assert_eq!(common_prefix(b"aaaa", b"tttt"), 0);
}

#[test]
fn common_prefix_is_bounded_by_shorter_slice() {
    assert_eq!(common_prefix(b"ac", b"acgt"), 2);
    assert_eq!(common_prefix(b"acgt", b"ac"), 2);
}

#[test]
fn search_label_finds_exact_hit() {
    let labels = vec![Label::Terminal, Label::Byte(b'a'), Label::Byte(b'g')];
    assert_eq!(search_label(&labels, Label::Byte(b'a')), Ok(1));
}

#[test]
fn search_label_reports_insertion_point_on_miss() {
    let labels = vec![Label::Terminal, Label::Byte(b'a'), Label::Byte(b'g')];
    assert_eq!(search_label(&labels, Label::Byte(b'c')), Err(2));
    assert_eq!(search_label(&labels, Label::Placeholder), Err(0));
    assert_eq!(search_label(&labels, Label::Byte(b't')), Err(3));
}
