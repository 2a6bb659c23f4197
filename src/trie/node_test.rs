// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn insert_child_keeps_children_sorted() {
    let mut node = InnerNode::default();
    node.insert_child(Label::Byte(b't'), 3);
    node.insert_child(Label::Terminal, 1);
    node.insert_child(Label::Byte(b'a'), 2);
    let labels: Vec<Label> = node.children.iter().map(|(l, _)| *l).collect();
    assert_eq!(
        labels,
        vec![Label::Terminal, Label::Byte(b'a'), Label::Byte(b't')]
    );
}

#[test]
fn find_child_locates_existing_label() {
    let mut node = InnerNode::default();
    node.insert_child(Label::Byte(b'c'), 7);
    assert_eq!(node.find_child(Label::Byte(b'c')), Some(7));
    assert_eq!(node.find_child(Label::Byte(b'g')), None);
}

#[test]
fn leaf_bucket_reports_full_at_capacity() {
    let mut bucket: LeafBucket<u32> = LeafBucket::default();
    for i in 0..LEAF_CAPACITY {
        assert!(!bucket.is_full());
        bucket.entries.push(LeafEntry {
            suffix: vec![b'a'],
            value: i as u32,
        });
    }
    assert!(bucket.is_full());
}
