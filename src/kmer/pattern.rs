// Copyright 2025 kmertrie contributors. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! IUPAC ambiguity-code match table.
//!
//! Shared verbatim between the scalar `QKmer::contains`/`Kmer::matches_pattern`
//! predicates and the trie's `inner_consistent`/`leaf_consistent` callbacks, so
//! that index answers and scalar-predicate answers are bit-for-bit identical.

/// Returns true iff IUPAC `pattern` matches DNA `nucleotide`.
///
/// `pattern == nucleotide` and `pattern == b'n'` always match. Otherwise the
/// IUPAC degeneracy classes apply. Any byte outside the IUPAC alphabet (and
/// therefore any unrecognized pattern) returns false rather than panicking,
/// since the scalar parser is responsible for rejecting such bytes before
/// they reach this table.
///
/// Note: `u` (uracil) is accepted by the query k-mer parser but has no case
/// here beyond the `pattern == nucleotide` check, so `matches(b'u', x)` is
/// true only for `x == b'u'` — which never holds for a stored DNA byte. A
/// query containing `u` therefore never matches anything in the trie. This
/// is deliberate, not a bug: see the open question in the design notes.
pub fn matches(pattern: u8, nucleotide: u8) -> bool {
    if pattern == nucleotide || pattern == b'n' {
        return true;
    }

    match pattern {
        b'r' => nucleotide == b'a' || nucleotide == b'g', // puRine
        b'y' => nucleotide == b'c' || nucleotide == b't', // pYrimidine
        b'k' => nucleotide == b'g' || nucleotide == b't', // Keto
        b'm' => nucleotide == b'a' || nucleotide == b'c', // aMino
        b's' => nucleotide == b'g' || nucleotide == b'c', // Strong
        b'w' => nucleotide == b'a' || nucleotide == b't', // Weak
        b'b' => nucleotide == b'c' || nucleotide == b'g' || nucleotide == b't', // not A
        b'd' => nucleotide == b'a' || nucleotide == b'g' || nucleotide == b't', // not C
        b'h' => nucleotide == b'a' || nucleotide == b'c' || nucleotide == b't', // not G
        b'v' => nucleotide == b'a' || nucleotide == b'c' || nucleotide == b'g', // not T
        _ => false,
    }
}

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;
