// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn placeholder_sorts_before_terminal() {
    assert!(Label::Placeholder < Label::Terminal);
}

#[test]
fn terminal_sorts_before_any_byte() {
    assert!(Label::Terminal < Label::Byte(0));
    assert!(Label::Terminal < Label::Byte(b'a'));
}

#[test]
fn bytes_sort_by_value() {
    assert!(Label::Byte(b'a') < Label::Byte(b'c'));
    assert!(Label::Byte(b'c') < Label::Byte(b'g'));
    assert!(Label::Byte(b'g') < Label::Byte(b't'));
}

#[test]
fn sorting_a_mixed_vec_places_sentinels_first() {
    let mut labels = vec![
        Label::Byte(b't'),
        Label::Terminal,
        Label::Byte(b'a'),
        Label::Placeholder,
    ];
    labels.sort();
    assert_eq!(
        labels,
        vec![
            Label::Placeholder,
            Label::Terminal,
            Label::Byte(b'a'),
            Label::Byte(b't'),
        ]
    );
}
